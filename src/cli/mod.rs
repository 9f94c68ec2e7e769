pub mod orchestration;

pub use orchestration::{
    publish_tag, run_explicit, run_git, GitOutcome, VersionSource, WorkflowArgs,
};
