use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use engine_logging::{LogDestination, DEFAULT_LOG_FILE};
use log::LevelFilter;
use recruiter_engine::{BackendSettings, DEFAULT_BACKEND_URL};
use url::Url;

#[derive(Parser, Debug)]
#[command(
    name = "recruiter",
    about = "Recruiter assistant: analyze profiles, chat about candidates, draft submissions"
)]
pub struct Args {
    /// Base address of the assistant backend
    #[arg(long, default_value = DEFAULT_BACKEND_URL)]
    pub backend_url: String,

    /// Abort backend requests after this many seconds (unset = wait indefinitely)
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Where log output goes
    #[arg(long, value_enum, default_value_t = LogTarget::File)]
    pub log: LogTarget,

    /// Log file used by `--log file` and `--log both`
    #[arg(long, default_value = DEFAULT_LOG_FILE)]
    pub log_file: PathBuf,

    /// Minimum level written to the log
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogTarget {
    File,
    Terminal,
    Both,
    Off,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl Args {
    pub fn backend_settings(&self) -> Result<BackendSettings> {
        let base_url = Url::parse(self.backend_url.trim())
            .with_context(|| format!("invalid backend URL `{}`", self.backend_url))?;
        anyhow::ensure!(
            matches!(base_url.scheme(), "http" | "https"),
            "backend URL must use http or https, got `{}`",
            base_url.scheme()
        );
        let timeout = self.timeout_secs.map(Duration::from_secs);
        Ok(BackendSettings {
            connect_timeout: timeout,
            request_timeout: timeout,
            ..BackendSettings::new(base_url)
        })
    }

    pub fn log_destination(&self) -> LogDestination {
        match self.log {
            LogTarget::File => LogDestination::File(self.log_file.clone()),
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::Both => LogDestination::Both(self.log_file.clone()),
            LogTarget::Off => LogDestination::Off,
        }
    }

    pub fn level_filter(&self) -> LevelFilter {
        match self.log_level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_talk_to_local_backend_without_timeout() {
        let args = Args::parse_from(["recruiter"]);
        let settings = args.backend_settings().unwrap();
        assert_eq!(settings.base_url.as_str(), "http://127.0.0.1:5000/");
        assert_eq!(settings.request_timeout, None);
        assert_eq!(
            args.log_destination(),
            LogDestination::File(PathBuf::from(DEFAULT_LOG_FILE))
        );
        assert_eq!(args.level_filter(), LevelFilter::Info);
    }

    #[test]
    fn timeout_and_logging_are_configurable() {
        let args = Args::parse_from([
            "recruiter",
            "--backend-url",
            "https://assistant.internal:8443/api",
            "--timeout-secs",
            "30",
            "--log",
            "terminal",
            "--log-level",
            "debug",
        ]);
        let settings = args.backend_settings().unwrap();
        assert_eq!(settings.request_timeout, Some(Duration::from_secs(30)));
        assert_eq!(
            settings.endpoint_url("chat").unwrap().as_str(),
            "https://assistant.internal:8443/api/chat"
        );
        assert_eq!(args.log_destination(), LogDestination::Terminal);
        assert_eq!(args.level_filter(), LevelFilter::Debug);
    }

    #[test]
    fn non_http_backend_is_rejected() {
        let args = Args::parse_from(["recruiter", "--backend-url", "ftp://example.com"]);
        assert!(args.backend_settings().is_err());
        let args = Args::parse_from(["recruiter", "--backend-url", "not a url"]);
        let err = args.backend_settings().unwrap_err();
        assert!(format!("{err:#}").contains("invalid backend URL"));
    }
}
