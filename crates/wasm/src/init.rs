use tracing::Level;
use tracing_subscriber::{
    layer::SubscriberExt as _, util::SubscriberInitExt as _, EnvFilter,
};
use tracing_web::MakeWebConsoleWriter;
use wasm_bindgen::prelude::*;

/// Verbosity of log output in the browser console.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    Info,
    /// Warn level.
    Warn,
    /// Error level.
    Error,
}

impl From<LogLevel> for Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Trace => Level::TRACE,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Info => Level::INFO,
            LogLevel::Warn => Level::WARN,
            LogLevel::Error => Level::ERROR,
        }
    }
}

/// Install the panic hook and the console log subscriber.
///
/// Safe to call more than once; only the first call installs
/// a subscriber.
#[wasm_bindgen]
pub fn init(log_level: Option<LogLevel>) {
    console_error_panic_hook::set_once();

    let level: Level = log_level.unwrap_or(LogLevel::Info).into();
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let fmt = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new());

    if tracing_subscriber::registry()
        .with(filter)
        .with(fmt)
        .try_init()
        .is_err()
    {
        tracing::debug!("init::subscriber_already_installed");
    }
}
