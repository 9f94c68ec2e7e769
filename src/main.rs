use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};

use semver_bump::cli::{publish_tag, run_explicit, run_git, VersionSource, WorkflowArgs};
use semver_bump::config;
use semver_bump::domain::{BumpFlags, TagPattern};
use semver_bump::git::Git2Repository;
use semver_bump::{logging, ui, SemverBumpError};

const LONG_ABOUT: &str = "\
Bumps up the semver, given a current semver and a type to update.

Examples:
  semver-bump 0.1.2 --minor                    prints 0.2.0
  semver-bump 0.1.2                            prints 0.1.3 (patch is the default)
  semver-bump 0.1.2+old --meta new             prints 0.1.3+new

With --git the current version is the latest tag reachable from HEAD, and the
bump type is taken from the commit messages since that tag: \"+major\", \"+minor\"
and \"+patch\" anywhere in a message request that bump, and when several are
found the highest one wins (major > minor > patch). \"+meta=<metadata>\" in a
message replaces the build metadata.

For example, if the latest tag is 1.3.4+6.8 and a commit since then contains
\"+minor\" and \"+meta=7.3\", `semver-bump --git` prints 1.4.0+7.3 and
`semver-bump --git --push` also creates that tag and pushes it.";

#[derive(Parser, Debug)]
#[command(
    name = "semver-bump",
    version,
    about = "Bumps up the semver accordingly",
    long_about = LONG_ABOUT
)]
struct Args {
    #[arg(
        value_name = "VERSION",
        required_unless_present = "git",
        conflicts_with = "git",
        help = "Current semantic version to bump"
    )]
    current: Option<String>,

    #[arg(long, conflicts_with = "git", help = "Bump major version")]
    major: bool,

    #[arg(long, conflicts_with = "git", help = "Bump minor version")]
    minor: bool,

    #[arg(long, conflicts_with = "git", help = "Bump patch version")]
    patch: bool,

    #[arg(long, help = "Metadata to be attached to the semantic version")]
    meta: Option<String>,

    #[arg(long, help = "Use git to get the current version and bump type")]
    git: bool,

    #[arg(long, requires = "git", help = "Push new semver as a tag to the repo")]
    push: bool,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(short, long, action = ArgAction::Count, help = "Increase log output (-v, -vv)")]
    verbose: u8,
}

impl Args {
    fn workflow_args(&self) -> WorkflowArgs {
        let source = match &self.current {
            Some(current) if !self.git => VersionSource::Explicit {
                version: current.clone(),
                flags: BumpFlags {
                    major: self.major,
                    minor: self.minor,
                    patch: self.patch,
                },
            },
            _ => VersionSource::Git { push: self.push },
        };

        WorkflowArgs {
            source,
            meta: self.meta.clone(),
        }
    }
}

fn main() {
    let args = Args::parse();
    logging::setup(args.verbose);

    if let Err(e) = run(&args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let workflow = args.workflow_args();

    match &workflow.source {
        VersionSource::Explicit { version, flags } => {
            let next = run_explicit(version, *flags, workflow.meta.as_deref())?;
            println!("{}", next);
        }
        VersionSource::Git { push } => {
            let config =
                config::load_config(args.config.as_deref()).context("Error loading config")?;
            let repo = Git2Repository::open(".").context("Not in a git repository")?;
            let outcome = run_git(&repo, &config.git, workflow.meta.as_deref())?;

            if args.verbose > 0 {
                for warning in &outcome.warnings {
                    ui::display_boundary_warning(warning);
                }
                ui::display_status(&format!(
                    "{} -> {} ({} bump)",
                    outcome.latest_tag, outcome.version, outcome.request.bump
                ));
            }

            println!("{}", outcome.version);

            if *push {
                match publish_tag(&repo, &config.git, &outcome.version) {
                    Ok(tag) => {
                        if args.verbose > 0 {
                            ui::display_success(&format!(
                                "Pushed tag {} to {}",
                                tag, config.git.remote
                            ));
                        }
                    }
                    Err(e) => {
                        if let SemverBumpError::Remote(_) = e {
                            let tag = TagPattern::new(config.git.tag_prefix.as_str())
                                .format(&outcome.version);
                            ui::display_manual_push_instruction(&tag, &config.git.remote);
                        }
                        return Err(e.into());
                    }
                }
            }
        }
    }

    Ok(())
}
