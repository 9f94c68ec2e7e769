//! Resolution of a single effective bump from directives or explicit flags.

use crate::domain::{BumpFlags, VersionBump};
use crate::error::{Result, SemverBumpError};

/// Pick the strongest directive, defaulting to [`VersionBump::Patch`].
///
/// How many times each directive appears, and in what order, does not matter.
pub fn resolve_from_directives(directives: &[VersionBump]) -> VersionBump {
    directives
        .iter()
        .copied()
        .max()
        .unwrap_or(VersionBump::Patch)
}

/// Resolve explicitly requested flags.
///
/// # Errors
/// Returns [`SemverBumpError::ConflictingFlags`] when more than one flag is set.
pub fn resolve_from_flags(flags: BumpFlags) -> Result<VersionBump> {
    let requested: Vec<VersionBump> = [
        (flags.major, VersionBump::Major),
        (flags.minor, VersionBump::Minor),
        (flags.patch, VersionBump::Patch),
    ]
    .into_iter()
    .filter_map(|(set, bump)| set.then_some(bump))
    .collect();

    match requested.as_slice() {
        [] => Ok(VersionBump::Patch),
        [bump] => Ok(*bump),
        _ => Err(SemverBumpError::ConflictingFlags),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::VersionBump::*;

    fn flags(major: bool, minor: bool, patch: bool) -> BumpFlags {
        BumpFlags {
            major,
            minor,
            patch,
        }
    }

    #[test]
    fn test_resolve_from_directives_empty_defaults_to_patch() {
        assert_eq!(resolve_from_directives(&[]), Patch);
    }

    #[test]
    fn test_resolve_from_directives_highest_wins() {
        let cases: Vec<(Vec<VersionBump>, VersionBump)> = vec![
            (vec![Major], Major),
            (vec![Minor], Minor),
            (vec![Patch], Patch),
            (vec![Patch, Minor], Minor),
            (vec![Patch, Major], Major),
            (vec![Minor, Major], Major),
            (vec![Major, Minor, Patch], Major),
            (vec![Patch, Minor, Major, Major, Minor, Major], Major),
            (vec![Patch, Patch, Patch, Minor], Minor),
        ];

        for (directives, expected) in cases {
            assert_eq!(
                resolve_from_directives(&directives),
                expected,
                "directives: {:?}",
                directives
            );
        }
    }

    #[test]
    fn test_resolve_from_flags_single_or_none() {
        assert_eq!(resolve_from_flags(flags(false, false, false)).unwrap(), Patch);
        assert_eq!(resolve_from_flags(flags(true, false, false)).unwrap(), Major);
        assert_eq!(resolve_from_flags(flags(false, true, false)).unwrap(), Minor);
        assert_eq!(resolve_from_flags(flags(false, false, true)).unwrap(), Patch);
    }

    #[test]
    fn test_resolve_from_flags_conflicts_exactly_when_two_or_more_set() {
        for bits in 0u8..8 {
            let f = flags(bits & 4 != 0, bits & 2 != 0, bits & 1 != 0);
            let result = resolve_from_flags(f);
            if bits.count_ones() >= 2 {
                assert!(
                    matches!(result, Err(SemverBumpError::ConflictingFlags)),
                    "expected conflict for {:?}",
                    f
                );
            } else {
                assert!(result.is_ok(), "unexpected conflict for {:?}", f);
            }
        }
    }
}
