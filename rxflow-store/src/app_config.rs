use rxflow_core::Day;
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct SessionConfig {
    /// Simulated day the console starts on
    #[serde(default)]
    pub start_day: Day,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReportConfig {
    #[serde(default = "default_report_dir")]
    pub directory: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { directory: default_report_dir() }
    }
}

/// Largest accepted `session.start_day`; leaves room to advance for a lifetime of sessions.
pub const MAX_START_DAY: Day = 1_000_000;

fn default_report_dir() -> PathBuf { PathBuf::from(".") }

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    #[serde(default = "default_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: default_filter() }
    }
}

fn default_filter() -> String { "rxflow=info".into() }

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());
        Self::load_from("config", &run_mode)
    }

    /// Layered load: `<dir>/default`, `<dir>/<run_mode>`, `<dir>/local`, then
    /// `RXFLOW__*` environment variables. Every file is optional.
    pub fn load_from(dir: &str, run_mode: &str) -> Result<Self, config::ConfigError> {
        let s = config::Config::builder()
            .add_source(config::File::with_name(&format!("{}/default", dir)).required(false))
            .add_source(config::File::with_name(&format!("{}/{}", dir, run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name(&format!("{}/local", dir)).required(false))
            // Eg.. `RXFLOW__REPORT__DIRECTORY=/tmp/reports`
            .add_source(config::Environment::with_prefix("RXFLOW").separator("__"))
            .build()?;

        let config: Self = s.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        let start = self.session.start_day;
        if !(0..=MAX_START_DAY).contains(&start) {
            return Err(config::ConfigError::Message(format!(
                "session.start_day must be between 0 and {}, got {}",
                MAX_START_DAY, start
            )));
        }
        Ok(())
    }
}
