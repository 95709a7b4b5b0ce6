use log::LevelFilter;

/// Trace log level
/// NOTE: Organized by priority level
#[repr(i32)]
#[derive(Debug, Default, Copy, Clone, Hash, PartialEq, Eq)]
pub enum TraceLogLevel {
    /// Display all logs
    All = 0,
    /// Trace logging, intended for internal use only
    Trace = 1,
    /// Debug logging, used for internal debugging
    Debug = 2,
    /// Info logging, used for program execution info
    #[default]
    Info = 3,
    /// Warning logging, used on recoverable failures
    Warning = 4,
    /// Error logging, used on unrecoverable failures
    Error = 5,
    /// Fatal logging, reported through the error channel
    Fatal = 6,
    /// Disable logging
    None = 7,
}

impl From<TraceLogLevel> for LevelFilter {
    fn from(level: TraceLogLevel) -> Self {
        match level {
            TraceLogLevel::All | TraceLogLevel::Trace => LevelFilter::Trace,
            TraceLogLevel::Debug => LevelFilter::Debug,
            TraceLogLevel::Info => LevelFilter::Info,
            TraceLogLevel::Warning => LevelFilter::Warn,
            TraceLogLevel::Error | TraceLogLevel::Fatal => LevelFilter::Error,
            TraceLogLevel::None => LevelFilter::Off,
        }
    }
}

/// Installs the process-wide logger writing to stderr.
///
/// The threshold comes from `level` only; `RUST_LOG` is not consulted.
/// Calling it a second time keeps the first logger.
pub fn init(level: TraceLogLevel) {
    let result = env_logger::Builder::new()
        .filter_level(level.into())
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .try_init();
    if result.is_err() {
        log::debug!("logger already initialized");
    }
}
