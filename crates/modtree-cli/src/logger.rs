//! Logging setup for the CLI.
//!
//! Log lines go to stderr so stdout carries nothing but the JSON result.
//!
//! The level is chosen in this order:
//! 1. `--verbose`: debug for modtree crates
//! 2. `--quiet`: errors only
//! 3. `RUST_LOG`
//! 4. info for modtree crates

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber. Call once, before anything logs.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    init_logger_with_filter(default_filter(verbose, quiet), no_color);
}

/// Install the global subscriber with an explicit filter.
pub fn init_logger_with_filter(filter: EnvFilter, no_color: bool) {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    // A subscriber may already be installed (tests, embedding).
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

fn default_filter(verbose: bool, quiet: bool) -> EnvFilter {
    if verbose {
        EnvFilter::new("modtree_graph=debug,modtree_cli=debug")
    } else if quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("modtree_graph=info,modtree_cli=info"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbose_filter_enables_debug() {
        let filter = default_filter(true, false);
        assert!(filter.to_string().contains("modtree_graph=debug"));
    }

    #[test]
    fn test_quiet_filter_is_errors_only() {
        assert_eq!(default_filter(false, true).to_string(), "error");
    }
}
