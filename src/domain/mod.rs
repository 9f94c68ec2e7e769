//! Domain logic - pure business rules independent of git operations

pub mod bump;
pub mod tag;
pub mod version;

pub use bump::{BumpFlags, BumpRequest, VersionBump};
pub use tag::{Tag, TagPattern};
pub use version::{BuildIdentifier, Version};
