use crate::error::{Result, SemverBumpError};
use crate::git::Repository;
use std::cell::RefCell;

/// Mock repository for testing without actual git operations
///
/// Tags are ordered by insertion; the last one added is the latest. Commits
/// added with [`MockRepository::add_commit`] are the ones reported since that
/// latest tag.
#[derive(Default)]
pub struct MockRepository {
    tags: Vec<String>,
    commits: Vec<String>,
    fail_push: bool,
    fetched: RefCell<Vec<String>>,
    created_tags: RefCell<Vec<String>>,
    pushed_tags: RefCell<Vec<(String, String)>>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tag; it becomes the latest
    pub fn add_tag(&mut self, name: impl Into<String>) {
        self.tags.push(name.into());
    }

    /// Add a commit message after the latest tag
    pub fn add_commit(&mut self, message: impl Into<String>) {
        self.commits.push(message.into());
    }

    /// Make every subsequent push fail
    pub fn fail_push(&mut self) {
        self.fail_push = true;
    }

    /// Remotes passed to `fetch_tags`
    pub fn fetched(&self) -> Vec<String> {
        self.fetched.borrow().clone()
    }

    /// Tags created through the trait, in order
    pub fn created_tags(&self) -> Vec<String> {
        self.created_tags.borrow().clone()
    }

    /// `(remote, tag)` pairs pushed through the trait, in order
    pub fn pushed_tags(&self) -> Vec<(String, String)> {
        self.pushed_tags.borrow().clone()
    }
}

impl Repository for MockRepository {
    fn latest_tag(&self) -> Result<String> {
        self.tags
            .last()
            .cloned()
            .ok_or_else(|| SemverBumpError::tag("Cannot find latest tag: no tags"))
    }

    fn commit_messages_since(&self, tag: &str) -> Result<String> {
        if !self.tags.iter().any(|t| t == tag) {
            return Err(SemverBumpError::tag(format!("Cannot resolve tag '{}'", tag)));
        }

        Ok(self
            .commits
            .iter()
            .rev()
            .map(|message| format!("{}\n", message))
            .collect())
    }

    fn fetch_tags(&self, remote: &str) -> Result<()> {
        self.fetched.borrow_mut().push(remote.to_string());
        Ok(())
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        let exists = self.tags.iter().any(|t| t == name)
            || self.created_tags.borrow().iter().any(|t| t == name);
        if exists {
            return Err(SemverBumpError::tag(format!("Tag '{}' already exists", name)));
        }
        self.created_tags.borrow_mut().push(name.to_string());
        Ok(())
    }

    fn push_tag(&self, remote: &str, name: &str) -> Result<()> {
        if self.fail_push {
            return Err(SemverBumpError::remote("Push failed: mock push failure"));
        }
        self.pushed_tags
            .borrow_mut()
            .push((remote.to_string(), name.to_string()));
        Ok(())
    }
}
