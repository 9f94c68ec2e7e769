use crate::error::{Result, SemverBumpError};
use semver::Prerelease;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// A single build-metadata identifier (`[0-9A-Za-z-]+`)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BuildIdentifier(String);

impl BuildIdentifier {
    /// Validate a build identifier, returning `None` if it is empty or contains
    /// characters outside `[0-9A-Za-z-]`.
    pub fn new(identifier: &str) -> Option<Self> {
        let valid = !identifier.is_empty()
            && identifier
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-');

        valid.then(|| BuildIdentifier(identifier.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BuildIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Semantic version with pre-release and build metadata
///
/// Equality is structural (build metadata included). Use [`Version::compare`]
/// for semver precedence, which ignores build metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub pre: Prerelease,
    pub build: Vec<BuildIdentifier>,
}

impl Version {
    /// Create a release version with no pre-release or build metadata
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
            pre: Prerelease::EMPTY,
            build: Vec::new(),
        }
    }

    /// Parse `major.minor.patch[-prerelease][+build]`
    ///
    /// # Errors
    /// Returns [`SemverBumpError::InvalidFormat`] if `text` does not follow the
    /// semantic version grammar.
    pub fn parse(text: &str) -> Result<Self> {
        let parsed = semver::Version::parse(text)
            .map_err(|e| SemverBumpError::invalid_format(text, e.to_string()))?;

        let build = if parsed.build.is_empty() {
            Vec::new()
        } else {
            parsed
                .build
                .as_str()
                .split('.')
                .map(|segment| {
                    BuildIdentifier::new(segment).ok_or_else(|| {
                        SemverBumpError::invalid_format(
                            text,
                            format!("invalid build identifier '{}'", segment),
                        )
                    })
                })
                .collect::<Result<Vec<_>>>()?
        };

        Ok(Version {
            major: parsed.major,
            minor: parsed.minor,
            patch: parsed.patch,
            pre: parsed.pre,
            build,
        })
    }

    /// Compare by semver precedence: major, minor, patch, then pre-release.
    /// Build metadata never affects the result.
    pub fn compare(&self, other: &Version) -> Ordering {
        (self.major, self.minor, self.patch)
            .cmp(&(other.major, other.minor, other.patch))
            .then_with(|| self.pre.cmp(&other.pre))
    }

    /// Dot-joined build metadata, empty when there is none
    pub fn build_metadata(&self) -> String {
        self.build
            .iter()
            .map(BuildIdentifier::as_str)
            .collect::<Vec<_>>()
            .join(".")
    }
}

impl FromStr for Version {
    type Err = SemverBumpError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if !self.pre.is_empty() {
            write!(f, "-{}", self.pre)?;
        }
        if !self.build.is_empty() {
            write!(f, "+{}", self.build_metadata())?;
        }
        Ok(())
    }
}
