use colored::control::set_override;
use env_logger::Builder;
use log::LevelFilter;

/// Log level for the given verbosity.
pub fn level_filter(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Initializes the stderr logger. Also disables colors globally when requested.
pub fn init_logging(verbose: bool, no_color: bool) {
    if no_color {
        set_override(false);
    }

    Builder::new()
        .filter_level(level_filter(verbose))
        .format_timestamp(None)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    // Logger can only be initialized once per process, so only the level
    // selection is tested here.

    #[test]
    fn level_filter_verbose_returns_debug() {
        assert_eq!(level_filter(true), LevelFilter::Debug);
    }

    #[test]
    fn level_filter_non_verbose_returns_info() {
        assert_eq!(level_filter(false), LevelFilter::Info);
    }
}
