use std::fmt;

/// Version bump type decision
///
/// Variants are declared in precedence order so that `Ord` gives
/// `Patch < Minor < Major`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum VersionBump {
    Patch,
    Minor,
    Major,
}

impl VersionBump {
    /// Map a directive keyword (`major`, `minor`, `patch`) to its bump type
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "major" => Some(VersionBump::Major),
            "minor" => Some(VersionBump::Minor),
            "patch" => Some(VersionBump::Patch),
            _ => None,
        }
    }
}

impl fmt::Display for VersionBump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VersionBump::Major => write!(f, "major"),
            VersionBump::Minor => write!(f, "minor"),
            VersionBump::Patch => write!(f, "patch"),
        }
    }
}

/// Explicitly requested bump flags, before conflict resolution
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BumpFlags {
    pub major: bool,
    pub minor: bool,
    pub patch: bool,
}

/// The resolved intent for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpRequest {
    pub bump: VersionBump,
    /// Dot-separated identifiers replacing the build metadata
    pub metadata: Option<String>,
}

impl BumpRequest {
    pub fn new(bump: VersionBump, metadata: Option<String>) -> Self {
        BumpRequest { bump, metadata }
    }
}
