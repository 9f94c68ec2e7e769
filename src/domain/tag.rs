use crate::domain::Version;
use crate::error::Result;

/// Represents a git tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
}

impl Tag {
    /// Create a new tag from a string
    pub fn new(name: impl Into<String>) -> Self {
        Tag { name: name.into() }
    }

    /// Extract the version text from the tag, removing `prefix` and then a
    /// leading `v` or `V` (e.g. "release-v1.2.3" with prefix "release-" -> "1.2.3")
    pub fn version_part(&self, prefix: &str) -> &str {
        let name = self.name.trim();
        let unprefixed = name.strip_prefix(prefix).unwrap_or(name);
        unprefixed
            .strip_prefix('v')
            .or_else(|| unprefixed.strip_prefix('V'))
            .unwrap_or(unprefixed)
    }

    /// Parse the version carried by this tag
    pub fn version(&self, prefix: &str) -> Result<Version> {
        self.version_part(prefix).parse()
    }
}

/// Tag naming pattern: a fixed prefix followed by the rendered version
#[derive(Debug, Clone, Default)]
pub struct TagPattern {
    pub prefix: String,
}

impl TagPattern {
    pub fn new(prefix: impl Into<String>) -> Self {
        TagPattern {
            prefix: prefix.into(),
        }
    }

    /// Format a version according to pattern
    /// Example: prefix="v", version=1.2.3 -> "v1.2.3"
    pub fn format(&self, version: &Version) -> String {
        format!("{}{}", self.prefix, version)
    }
}
