//! Analysis engine for determining version bumps from commit text and flags

pub mod directive_scanner;
pub mod resolver;
pub mod version_analyzer;

pub use directive_scanner::{scan_directives, scan_metadata};
pub use resolver::{resolve_from_directives, resolve_from_flags};
pub use version_analyzer::{analyze_log, analyze_repository, CommitAnalysis};
