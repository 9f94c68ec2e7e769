use crate::error::{Result, SemverBumpError};
use git2::{
    Cred, CredentialType, DescribeFormatOptions, DescribeOptions, FetchOptions, PushOptions,
    RemoteCallbacks, Repository as Git2Repo, Sort,
};
use std::path::Path;
use tracing::{debug, info};

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Git2Repo::discover(path)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }
}

/// Remote callbacks with SSH key, SSH agent and default credential lookup,
/// and rejection reporting for pushed references.
fn remote_callbacks<'a>() -> RemoteCallbacks<'a> {
    let mut callbacks = RemoteCallbacks::new();

    callbacks.credentials(|_url, username_from_url, allowed_types| {
        let username = username_from_url.unwrap_or("git");

        if allowed_types.contains(CredentialType::SSH_KEY) {
            if let Some(home) = dirs::home_dir() {
                for key in ["id_ed25519", "id_rsa", "id_ecdsa"] {
                    let path = home.join(".ssh").join(key);
                    if path.exists() {
                        if let Ok(cred) = Cred::ssh_key(username, None, &path, None) {
                            return Ok(cred);
                        }
                    }
                }
            }

            if let Ok(cred) = Cred::ssh_key_from_agent(username) {
                return Ok(cred);
            }
        }

        Cred::default()
    });

    callbacks.push_update_reference(|refname, status| match status {
        Some(message) => Err(git2::Error::from_str(&format!(
            "'{}' was rejected: {}",
            refname, message
        ))),
        None => Ok(()),
    });

    callbacks
}

impl super::Repository for Git2Repository {
    fn latest_tag(&self) -> Result<String> {
        let mut describe_options = DescribeOptions::new();
        describe_options.describe_tags();

        let description = self
            .repo
            .describe(&describe_options)
            .map_err(|e| SemverBumpError::tag(format!("Cannot find latest tag: {}", e)))?;

        let mut format_options = DescribeFormatOptions::new();
        format_options.abbreviated_size(0);

        let tag = description.format(Some(&format_options))?;
        debug!(%tag, "found latest tag");

        Ok(tag.trim().to_string())
    }

    fn commit_messages_since(&self, tag: &str) -> Result<String> {
        let tag_commit = self
            .repo
            .revparse_single(&format!("refs/tags/{}", tag))
            .and_then(|object| object.peel_to_commit())
            .map_err(|e| SemverBumpError::tag(format!("Cannot resolve tag '{}': {}", tag, e)))?;

        let mut revwalk = self.repo.revwalk()?;
        revwalk.set_sorting(Sort::TOPOLOGICAL | Sort::TIME)?;
        revwalk.push_head()?;
        revwalk.hide(tag_commit.id())?;

        let mut log = String::new();
        let mut count = 0usize;

        for oid_result in revwalk {
            let commit = self.repo.find_commit(oid_result?)?;
            log.push_str(commit.message().unwrap_or_default());
            log.push('\n');
            count += 1;
        }

        debug!(%tag, commits = count, "collected commit messages");
        Ok(log)
    }

    fn fetch_tags(&self, remote: &str) -> Result<()> {
        let mut remote_handle = self
            .repo
            .find_remote(remote)
            .map_err(|e| SemverBumpError::remote(format!("Cannot find remote: {}", e)))?;

        let mut fetch_options = FetchOptions::new();
        fetch_options.remote_callbacks(remote_callbacks());

        remote_handle
            .fetch(&["+refs/tags/*:refs/tags/*"], Some(&mut fetch_options), None)
            .map_err(|e| {
                SemverBumpError::remote(format!("Fetching tags from '{}' failed: {}", remote, e))
            })?;

        info!(%remote, "fetched tags");
        Ok(())
    }

    fn create_tag(&self, name: &str) -> Result<()> {
        let head = self
            .repo
            .head()
            .and_then(|reference| reference.peel_to_commit())
            .map_err(|e| SemverBumpError::tag(format!("Cannot resolve HEAD: {}", e)))?;

        self.repo
            .tag_lightweight(name, head.as_object(), false)
            .map_err(|e| SemverBumpError::tag(format!("Cannot create tag '{}': {}", name, e)))?;

        info!(tag = %name, commit = %head.id(), "created tag");
        Ok(())
    }

    fn push_tag(&self, remote: &str, name: &str) -> Result<()> {
        let mut remote_handle = self
            .repo
            .find_remote(remote)
            .map_err(|e| SemverBumpError::remote(format!("Cannot find remote: {}", e)))?;

        let mut push_options = PushOptions::new();
        push_options.remote_callbacks(remote_callbacks());

        let refspec = format!("refs/tags/{}:refs/tags/{}", name, name);
        remote_handle
            .push(&[refspec.as_str()], Some(&mut push_options))
            .map_err(|e| SemverBumpError::remote(format!("Push failed: {}", e)))?;

        info!(tag = %name, %remote, "pushed tag");
        Ok(())
    }
}
