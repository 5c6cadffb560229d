//! ログ初期化
//!
//! RUST_LOG があればそれに従い、なければ --verbose で debug、通常は warn。

use std::sync::OnceLock;
use tracing_subscriber::EnvFilter;

pub use tracing::{debug, error, info, warn};

static LOGGER_INIT: OnceLock<()> = OnceLock::new();

pub fn default_level(verbose: bool) -> &'static str {
    if verbose {
        "pop_maker=debug,pop_maker_common=debug"
    } else {
        "warn"
    }
}

pub fn setup_logging(verbose: bool) {
    LOGGER_INIT.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(true)
            .try_init()
            .ok();

        debug!("Logging initialized (verbose: {})", verbose);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_level() {
        assert_eq!(default_level(false), "warn");
        assert!(default_level(true).contains("pop_maker=debug"));
    }

    #[test]
    fn test_setup_logging_twice() {
        setup_logging(true);
        setup_logging(false);
        info!("logging test entry");
    }
}
