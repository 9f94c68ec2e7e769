//! Git operations abstraction layer
//!
//! The bump engine only needs two text blobs from version control (the most
//! recent tag name and the commit messages since that tag), plus tag creation
//! and pushing for `--push`. The [Repository] trait captures exactly that.
//!
//! - [repository::Git2Repository]: a real implementation using the `git2` crate
//! - [mock::MockRepository]: an in-memory implementation for testing
//!
//! ```rust
//! # use semver_bump::git::Repository;
//! # fn example<R: Repository>(repo: &R) -> Result<(), Box<dyn std::error::Error>> {
//! let tag = repo.latest_tag()?;
//! let log = repo.commit_messages_since(&tag)?;
//! # Ok(())
//! # }
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Version-control operations used by git mode
///
/// Every method is called at most once per invocation, sequentially. Errors are
/// returned as-is and abort the run; implementations must not retry.
pub trait Repository {
    /// Name of the most recent tag reachable from HEAD
    /// (`git describe --tags --abbrev=0`)
    fn latest_tag(&self) -> Result<String>;

    /// Messages of every commit reachable from HEAD but not from `tag`,
    /// newest first, each followed by a newline (`git log --format=%B <tag>..HEAD`)
    fn commit_messages_since(&self, tag: &str) -> Result<String>;

    /// Fetch all tags from `remote`, overwriting local tags of the same name
    fn fetch_tags(&self, remote: &str) -> Result<()>;

    /// Create a lightweight tag named `name` at HEAD
    fn create_tag(&self, name: &str) -> Result<()>;

    /// Push `refs/tags/<name>` to `remote`
    fn push_tag(&self, remote: &str, name: &str) -> Result<()>;
}
