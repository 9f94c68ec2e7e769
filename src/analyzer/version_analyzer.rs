use crate::analyzer::directive_scanner::{scan_directives, scan_metadata};
use crate::analyzer::resolver::resolve_from_directives;
use crate::domain::{BumpRequest, VersionBump};
use crate::error::Result;
use crate::git::Repository;
use tracing::debug;

/// Directives found in a block of commit messages
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommitAnalysis {
    /// Bump directives in order of occurrence
    pub directives: Vec<VersionBump>,
    /// First `+meta=` value, if any
    pub metadata: Option<String>,
}

impl CommitAnalysis {
    /// The effective bump: strongest directive, or patch when none was found
    pub fn bump(&self) -> VersionBump {
        resolve_from_directives(&self.directives)
    }

    /// True when the text carried no bump directive at all
    pub fn is_defaulted(&self) -> bool {
        self.directives.is_empty()
    }

    /// Build the request, falling back to `fallback_metadata` when the commits
    /// carry no `+meta=` marker
    pub fn into_request(self, fallback_metadata: Option<String>) -> BumpRequest {
        let bump = self.bump();
        BumpRequest::new(bump, self.metadata.or(fallback_metadata))
    }
}

/// Scan a commit log for directives
pub fn analyze_log(log: &str) -> CommitAnalysis {
    let analysis = CommitAnalysis {
        directives: scan_directives(log),
        metadata: scan_metadata(log),
    };
    debug!(
        directives = ?analysis.directives,
        metadata = ?analysis.metadata,
        "scanned commit log"
    );
    analysis
}

/// Scan every commit message since `tag` in `repo`
pub fn analyze_repository<R: Repository>(repo: &R, tag: &str) -> Result<CommitAnalysis> {
    let log = repo.commit_messages_since(tag)?;
    Ok(analyze_log(&log))
}
