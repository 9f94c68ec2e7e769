//! Main workflow orchestration logic
//!
//! Keeps CLI argument parsing out of the bump logic: `main` builds a
//! [`WorkflowArgs`] once and hands it to [`run_explicit`] or [`run_git`].

use tracing::{debug, info};

use crate::analyzer::{analyze_log, resolve_from_flags};
use crate::boundary::BoundaryWarning;
use crate::bumper;
use crate::config::GitConfig;
use crate::domain::{BumpFlags, BumpRequest, Tag, TagPattern, Version};
use crate::error::Result;
use crate::git::Repository;

/// Where the base version and bump type come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionSource {
    /// A version given on the command line, bumped per the flags
    Explicit { version: String, flags: BumpFlags },
    /// The latest git tag, bumped per the directives in the commits since it
    Git { push: bool },
}

/// Arguments for one invocation, decoupled from clap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkflowArgs {
    pub source: VersionSource,
    /// `--meta`; in git mode a `+meta=` in the commits takes precedence
    pub meta: Option<String>,
}

/// Result of git mode
#[derive(Debug, Clone, PartialEq)]
pub struct GitOutcome {
    /// The tag the base version was read from
    pub latest_tag: String,
    pub base: Version,
    pub request: BumpRequest,
    pub version: Version,
    pub warnings: Vec<BoundaryWarning>,
}

/// Bump an explicitly given version.
///
/// # Errors
/// `InvalidFormat` for a bad version, `ConflictingFlags` when more than one
/// bump flag is set, `InvalidMetadata` for bad `meta`.
pub fn run_explicit(version: &str, flags: BumpFlags, meta: Option<&str>) -> Result<Version> {
    let mut parsed = Version::parse(version)?;
    let bump = resolve_from_flags(flags)?;
    debug!(%bump, base = %parsed, "resolved explicit bump");

    bumper::apply(&mut parsed, bump, meta)?;
    Ok(parsed)
}

/// Derive the next version from the latest tag and the commits since it.
///
/// Collaborator calls run in order (optional tag fetch, tag lookup, log
/// retrieval); the first failure aborts the run.
pub fn run_git<R: Repository>(
    repo: &R,
    config: &GitConfig,
    meta: Option<&str>,
) -> Result<GitOutcome> {
    if config.fetch_tags {
        repo.fetch_tags(&config.remote)?;
    }

    let latest_tag = repo.latest_tag()?;
    let log = repo.commit_messages_since(&latest_tag)?;
    let analysis = analyze_log(&log);

    let mut warnings = Vec::new();
    if log.trim().is_empty() {
        warnings.push(BoundaryWarning::NoNewCommits {
            latest_tag: latest_tag.clone(),
        });
    } else if analysis.is_defaulted() {
        warnings.push(BoundaryWarning::NoDirectiveFound {
            latest_tag: latest_tag.clone(),
        });
    }
    if let (Some(flag), Some(commits)) = (meta, analysis.metadata.as_deref()) {
        if flag != commits {
            warnings.push(BoundaryWarning::MetadataFromCommits {
                flag: flag.to_string(),
                commits: commits.to_string(),
            });
        }
    }

    let request = analysis.into_request(meta.map(str::to_string));
    let base = Tag::new(latest_tag.as_str()).version(&config.tag_prefix)?;

    let mut version = base.clone();
    bumper::apply_request(&mut version, &request)?;
    info!(%latest_tag, bump = %request.bump, %version, "computed next version");

    Ok(GitOutcome {
        latest_tag,
        base,
        request,
        version,
        warnings,
    })
}

/// Create a tag for `version` at HEAD and push it to the configured remote.
///
/// A tag that was created stays in place if the push fails.
pub fn publish_tag<R: Repository>(
    repo: &R,
    config: &GitConfig,
    version: &Version,
) -> Result<String> {
    let name = TagPattern::new(config.tag_prefix.as_str()).format(version);
    repo.create_tag(&name)?;
    repo.push_tag(&config.remote, &name)?;
    Ok(name)
}
