use std::sync::Once;

/// Environment variable checked before `RUST_LOG`.
pub const LOG_ENV: &str = "RYM_BAR_LOG";

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "rym_bar_engine=trace,rym_bar_ui=debug").
///
/// `default_level` applies only when neither `env_filter` nor the
/// environment provide a filter.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub default_level: log::LevelFilter,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: log::LevelFilter::Warn,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Maps a `-v` count to a default level: 0 → warn, 1 → info, 2 → debug, 3+ → trace.
    pub fn from_verbosity(verbose: u8) -> Self {
        let default_level = match verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };
        Self { default_level, ..Self::default() }
    }

    /// Resolves the filter string that will be handed to `env_logger`.
    ///
    /// Precedence: explicit filter, `RYM_BAR_LOG`, `RUST_LOG`, default level.
    pub fn resolve_filter(&self, env: impl Fn(&str) -> Option<String>) -> String {
        self.env_filter
            .clone()
            .or_else(|| env(LOG_ENV))
            .or_else(|| env("RUST_LOG"))
            .unwrap_or_else(|| self.default_level.to_string().to_lowercase())
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Subsequent calls are ignored. Logs go to stderr so stdout stays clean for
/// generated CSS.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = config.resolve_filter(|key| std::env::var(key).ok());

        env_logger::Builder::new()
            .parse_filters(&filter)
            .write_style(config.write_style)
            .target(env_logger::Target::Stderr)
            .init();

        log::debug!("logging initialized (filter: {filter})");
    });
}
