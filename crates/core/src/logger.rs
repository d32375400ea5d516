use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    fmt::{
        format::{Format, Writer},
        time::FormatTime,
    },
    EnvFilter,
};

/// Formats timestamps as "DD Month - HH:MM:SS.microseconds" in local time.
struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, writer: &mut Writer<'_>) -> std::fmt::Result {
        let now = chrono::Local::now();
        write!(writer, "{} - {}", now.format("%d %B"), now.format("%H:%M:%S%.6f"))
    }
}

/// Sets up the global logger with the specified log level.
///
/// Directives in `RUST_LOG` are honoured on top of `log_level`. Events show
/// their level and message but not their target.
///
/// If a global logger is already set, this function silently does nothing.
pub fn setup_logger(log_level: LevelFilter) {
    let filter = EnvFilter::from_default_env().add_directive(log_level.into());

    let format = Format::default().with_timer(LocalTimer).with_level(true).with_target(false);

    let subscriber =
        tracing_subscriber::fmt().with_env_filter(filter).event_format(format).finish();

    // already installed by the host application
    let _ = tracing::subscriber::set_global_default(subscriber);
}

/// Sets up the global logger with INFO level.
pub fn setup_info_logger() {
    setup_logger(LevelFilter::INFO);
}
