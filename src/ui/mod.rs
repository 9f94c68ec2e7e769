//! User interface module - terminal output for the CLI.

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_boundary_warning, display_error, display_manual_push_instruction, display_status,
    display_success, format_boundary_warning, format_error,
};
