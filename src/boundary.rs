use std::fmt;

/// Non-fatal conditions met while deriving a version in git mode.
/// These are reported to the user but never abort the run.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// No commits between the latest tag and HEAD
    NoNewCommits { latest_tag: String },
    /// Commits exist but none carries a bump directive; patch is used
    NoDirectiveFound { latest_tag: String },
    /// `+meta=` in the commits took precedence over `--meta`
    MetadataFromCommits { flag: String, commits: String },
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::NoNewCommits { latest_tag } => {
                write!(f, "No new commits since tag '{}'", latest_tag)
            }
            BoundaryWarning::NoDirectiveFound { latest_tag } => {
                write!(
                    f,
                    "No +major, +minor or +patch found in commits since '{}', defaulting to patch",
                    latest_tag
                )
            }
            BoundaryWarning::MetadataFromCommits { flag, commits } => {
                write!(
                    f,
                    "Using metadata '{}' from commit messages instead of --meta '{}'",
                    commits, flag
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_new_commits_display() {
        let warning = BoundaryWarning::NoNewCommits {
            latest_tag: "v1.0.0".to_string(),
        };
        assert_eq!(warning.to_string(), "No new commits since tag 'v1.0.0'");
    }

    #[test]
    fn test_no_directive_found_mentions_patch() {
        let msg = BoundaryWarning::NoDirectiveFound {
            latest_tag: "1.3.4".to_string(),
        }
        .to_string();
        assert!(msg.contains("'1.3.4'"));
        assert!(msg.contains("defaulting to patch"));
    }

    #[test]
    fn test_metadata_from_commits_display() {
        let msg = BoundaryWarning::MetadataFromCommits {
            flag: "1.0".to_string(),
            commits: "7.3".to_string(),
        }
        .to_string();
        assert!(msg.contains("'7.3'"));
        assert!(msg.contains("--meta '1.0'"));
    }
}
