//! Logger setup
//!
//! `env_logger` backend for the `log` facade. The level follows the
//! verbosity flags; `RUST_LOG` still takes precedence when set.

use log::LevelFilter;

/// Pick the default level for the given verbosity flags
pub fn level_for(verbose: bool, quiet: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Error
    } else {
        LevelFilter::Info
    }
}

/// Install the global logger
pub fn init_logging(verbose: bool, quiet: bool) -> Result<(), log::SetLoggerError> {
    env_logger::Builder::new()
        .filter_level(level_for(verbose, quiet))
        .parse_default_env()
        .format_timestamp(None)
        .format_target(false)
        .try_init()
}
