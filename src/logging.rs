//! Tracing subscriber setup for the CLI.

use tracing::metadata::Level;
use tracing_subscriber::filter::EnvFilter;

/// Map the `-v` count to a default log level
pub fn level_for_verbosity(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    }
}

/// Install a stderr `fmt` subscriber.
///
/// `RUST_LOG` takes precedence over `verbose` when it is set and valid.
pub fn setup(verbose: u8) {
    let level = level_for_verbosity(verbose);
    let default_directive = format!(
        "warn,semver_bump={}",
        level.to_string().to_ascii_lowercase()
    );

    let env_filter = match std::env::var("RUST_LOG") {
        Ok(directive) => match EnvFilter::try_new(&directive) {
            Ok(filter) => filter,
            Err(err) => {
                eprintln!("invalid log filter: {err}");
                eprintln!("falling back to default logging");
                EnvFilter::new(&default_directive)
            }
        },
        Err(_) => EnvFilter::new(&default_directive),
    };

    // A subscriber may already be installed (e.g. by a test harness).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for_verbosity(0), Level::WARN);
        assert_eq!(level_for_verbosity(1), Level::INFO);
        assert_eq!(level_for_verbosity(2), Level::DEBUG);
        assert_eq!(level_for_verbosity(9), Level::DEBUG);
    }
}
