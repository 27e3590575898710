//! Log output for the `reelscout` binary.
//!
//! Two sinks per run: stderr at the level the user picked, and a trace-level
//! file that is truncated on every start. Stdout stays free for `--json`.

use std::fs::{File, create_dir_all};
use std::path::{Path, PathBuf};

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

/// Name of the per-run log inside the logs directory.
pub const LOG_FILE_NAME: &str = "reelscout-last-run.log";

/// Directory used when no logs directory is given.
pub const DEFAULT_LOGS_DIR: &str = "logs";

/// Where one run's logs go.
#[derive(Debug, Clone)]
pub struct LogSetup {
    /// Threshold for stderr output, unless `RUST_LOG` is set
    pub console_level: Level,
    /// Directory holding [`LOG_FILE_NAME`]
    pub logs_dir: PathBuf,
}

impl LogSetup {
    pub fn new(console_level: Level, logs_dir: Option<&Path>) -> Self {
        Self {
            console_level,
            logs_dir: logs_dir
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_LOGS_DIR)),
        }
    }

    pub fn log_file(&self) -> PathBuf {
        self.logs_dir.join(LOG_FILE_NAME)
    }

    fn console_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.console_level.as_str()))
    }

    /// Installs the global subscriber and returns the log file path.
    ///
    /// # Errors
    ///
    /// - `Box<dyn std::error::Error>` - The logs directory or file cannot be
    ///   created, or a global subscriber is already installed
    pub fn install(&self) -> Result<PathBuf, Box<dyn std::error::Error>> {
        create_dir_all(&self.logs_dir)?;
        let path = self.log_file();
        let file = File::create(&path)?;

        let console = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .without_time()
            .with_filter(self.console_filter());

        let full = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_filter(EnvFilter::new("trace"));

        tracing_subscriber::registry()
            .with(console)
            .with(full)
            .try_init()?;

        tracing::debug!(
            console = %self.console_level,
            file = %path.display(),
            "Logging ready"
        );
        Ok(path)
    }
}

/// Installs stderr and file logging for this process.
///
/// # Errors
///
/// - `Box<dyn std::error::Error>` - See [`LogSetup::install`]
pub fn init_tracing(
    console_level: Level,
    logs_dir: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    LogSetup::new(console_level, logs_dir).install().map(|_| ())
}

/// `--log-level` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CliLogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl CliLogLevel {
    /// Converts CLI log level to tracing Level enum.
    ///
    /// # Examples
    /// ```
    /// use reelscout_core::tracing_setup::CliLogLevel;
    ///
    /// let level = CliLogLevel::Info.as_tracing_level();
    /// assert_eq!(level, tracing::Level::INFO);
    /// ```
    pub fn as_tracing_level(self) -> Level {
        match self {
            CliLogLevel::Error => Level::ERROR,
            CliLogLevel::Warn => Level::WARN,
            CliLogLevel::Info => Level::INFO,
            CliLogLevel::Debug => Level::DEBUG,
            CliLogLevel::Trace => Level::TRACE,
        }
    }
}

impl std::fmt::Display for CliLogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.as_tracing_level().as_str().to_ascii_lowercase())
    }
}
