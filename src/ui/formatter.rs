//! Pure formatting functions for UI output.
//!
//! Everything here writes to stderr: stdout is reserved for the computed
//! version so the tool can be used in `$(...)` substitutions.

use console::style;

use crate::boundary::BoundaryWarning;

/// Format an error message with a red prefix.
pub fn format_error(message: &str) -> String {
    format!("{} {}", style("ERROR:").red().bold(), message)
}

/// Format a warning with a yellow prefix.
pub fn format_boundary_warning(warning: &BoundaryWarning) -> String {
    format!("{} {}", style("⚠ WARNING:").yellow(), warning)
}

/// Print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{}", format_error(message));
}

/// Print a success message with green checkmark.
pub fn display_success(message: &str) {
    eprintln!("{} {}", style("✓").green(), message);
}

/// Print a status message with yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{}", format_boundary_warning(warning));
}

/// Display the manual push command for a tag that was created but not pushed.
pub fn display_manual_push_instruction(tag: &str, remote: &str) {
    eprintln!(
        "{} To push this tag later, run:\n  {}",
        style("→").yellow(),
        style(format!("git push {} {}", remote, tag)).cyan()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_contains_message() {
        let formatted = format_error("[bad!data] is not a valid metadata format!");
        assert!(formatted.contains("ERROR:"));
        assert!(formatted.contains("[bad!data]"));
    }

    #[test]
    fn test_format_boundary_warning() {
        let warning = BoundaryWarning::NoNewCommits {
            latest_tag: "v1.0.0".to_string(),
        };
        let formatted = format_boundary_warning(&warning);
        assert!(formatted.contains("WARNING:"));
        assert!(formatted.contains("No new commits since tag 'v1.0.0'"));
    }

    #[test]
    fn test_display_functions_do_not_panic() {
        display_error("test error");
        display_success("test success");
        display_status("test status");
        display_manual_push_instruction("1.0.1", "origin");
    }
}
