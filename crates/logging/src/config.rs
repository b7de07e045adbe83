//! crates/logging/src/config.rs
//! Verbosity configuration derived from repeated `-v` flags.

use tracing::level_filters::LevelFilter;

/// Highest verbose level with a distinct meaning; larger counts are clamped.
pub const MAX_VERBOSE_LEVEL: u8 = 3;

/// How much diagnostic output a run produces.
///
/// | Level | Output                                  |
/// |-------|-----------------------------------------|
/// | 0     | nothing                                 |
/// | 1     | why an input line was rejected          |
/// | 2     | captured line and parse details         |
/// | 3     | everything, including parser internals  |
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct VerbosityConfig {
    level: u8,
}

impl VerbosityConfig {
    /// Creates a configuration from a verbose level, clamped to
    /// [`MAX_VERBOSE_LEVEL`].
    #[must_use]
    pub const fn from_verbose_level(level: u8) -> Self {
        let level = if level > MAX_VERBOSE_LEVEL {
            MAX_VERBOSE_LEVEL
        } else {
            level
        };
        Self { level }
    }

    /// The clamped verbose level.
    #[must_use]
    pub const fn verbose_level(self) -> u8 {
        self.level
    }

    /// Returns `true` when no diagnostics should be emitted.
    #[must_use]
    pub const fn is_silent(self) -> bool {
        self.level == 0
    }

    /// Maximum tracing level enabled by this configuration.
    #[must_use]
    pub const fn level_filter(self) -> LevelFilter {
        match self.level {
            0 => LevelFilter::OFF,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_silent() {
        let config = VerbosityConfig::default();
        assert!(config.is_silent());
        assert_eq!(config.level_filter(), LevelFilter::OFF);
    }

    #[test]
    fn levels_map_progressively() {
        assert_eq!(
            VerbosityConfig::from_verbose_level(1).level_filter(),
            LevelFilter::INFO
        );
        assert_eq!(
            VerbosityConfig::from_verbose_level(2).level_filter(),
            LevelFilter::DEBUG
        );
        assert_eq!(
            VerbosityConfig::from_verbose_level(3).level_filter(),
            LevelFilter::TRACE
        );
    }

    #[test]
    fn excess_levels_are_clamped() {
        let config = VerbosityConfig::from_verbose_level(u8::MAX);
        assert_eq!(config.verbose_level(), MAX_VERBOSE_LEVEL);
        assert_eq!(config.level_filter(), LevelFilter::TRACE);
    }
}
