use crate::domain::{BuildIdentifier, BumpRequest, Version, VersionBump};
use crate::error::{Result, SemverBumpError};
use tracing::debug;

/// Bumps a version in place according to the specified bump type.
///
/// Increments the appropriate version component and resets lower components to 0:
/// - **Major**: major += 1, minor = 0, patch = 0
/// - **Minor**: minor += 1, patch = 0
/// - **Patch**: patch += 1
///
/// When `metadata` is non-empty it replaces the build metadata entirely. Each
/// dot-separated segment must match `[0-9A-Za-z-]+`. The pre-release is left
/// untouched.
///
/// # Errors
/// - [`SemverBumpError::InvalidMetadata`] carrying the whole `metadata` string
///   if any segment is invalid. The numeric bump has already been applied at
///   that point, so callers must treat the version as unusable.
/// - [`SemverBumpError::VersionOverflow`] if a component cannot be incremented.
///
/// # Example
/// ```
/// # use semver_bump::bumper::apply;
/// # use semver_bump::domain::{Version, VersionBump};
/// let mut v = Version::parse("1.2.3+6.4").unwrap();
/// apply(&mut v, VersionBump::Patch, Some("7.3")).unwrap();
/// assert_eq!(v.to_string(), "1.2.4+7.3");
/// ```
pub fn apply(version: &mut Version, bump: VersionBump, metadata: Option<&str>) -> Result<()> {
    match bump {
        VersionBump::Major => {
            version.major = increment("major", version.major)?;
            version.minor = 0;
            version.patch = 0;
        }
        VersionBump::Minor => {
            version.minor = increment("minor", version.minor)?;
            version.patch = 0;
        }
        VersionBump::Patch => {
            version.patch = increment("patch", version.patch)?;
        }
    }

    if let Some(metadata) = metadata.filter(|m| !m.is_empty()) {
        version.build = parse_metadata(metadata)?;
    }

    debug!(%bump, %version, "applied bump");
    Ok(())
}

/// Apply a resolved [`BumpRequest`]
pub fn apply_request(version: &mut Version, request: &BumpRequest) -> Result<()> {
    apply(version, request.bump, request.metadata.as_deref())
}

fn increment(component: &'static str, value: u64) -> Result<u64> {
    value
        .checked_add(1)
        .ok_or(SemverBumpError::VersionOverflow { component, value })
}

fn parse_metadata(metadata: &str) -> Result<Vec<BuildIdentifier>> {
    metadata
        .split('.')
        .map(|segment| {
            BuildIdentifier::new(segment)
                .ok_or_else(|| SemverBumpError::InvalidMetadata(metadata.to_string()))
        })
        .collect()
}
