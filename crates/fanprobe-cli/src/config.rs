use anyhow::bail;
use clap::{Parser, ValueEnum};
use fanprobe::DEFAULT_MAX_WORKERS;
use std::path::PathBuf;

/// Runtime configuration for the `fanprobe` binary.
///
/// All values are parsed from CLI arguments or environment variables (a
/// `.env` file in the working directory is loaded first).
#[derive(Parser, Debug, Clone)]
#[command(
    name = "fanprobe",
    version,
    about = "Probe every endpoint in a file with a bounded pool of concurrent workers"
)]
pub struct CliArgs {
    /// Path to the endpoints file, one endpoint per line.
    ///
    /// Blank lines are probed as empty endpoints.
    ///
    /// Environment variable: `ENDPOINTS_FILE`
    #[arg(short, long, env = "ENDPOINTS_FILE")]
    pub file: PathBuf,

    /// Maximum number of concurrent workers.
    ///
    /// Endpoints are split into contiguous partitions of `ceil(N / workers)`
    /// endpoints each, so fewer workers are started when the file is short.
    ///
    /// Environment variable: `NUM_WORKERS`
    #[arg(short = 'w', long, env = "NUM_WORKERS", default_value_t = DEFAULT_MAX_WORKERS)]
    pub num_workers: usize,

    /// Log output format (logs are written to stderr).
    ///
    /// Environment variable: `LOG_FORMAT`
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

#[derive(Debug, Clone)]
pub struct ProbeConfig {
    pub file: PathBuf,
    pub num_workers: usize,
    pub log_format: LogFormat,
}

impl TryFrom<CliArgs> for ProbeConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if args.num_workers == 0 {
            bail!("NUM_WORKERS must be greater than 0");
        }

        Ok(Self {
            file: args.file,
            num_workers: args.num_workers,
            log_format: args.log_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliArgs, clap::Error> {
        CliArgs::try_parse_from(std::iter::once("fanprobe").chain(args.iter().copied()))
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        CliArgs::command().debug_assert();
    }

    #[test]
    fn defaults_to_twenty_workers() {
        let args = parse(&["--file", "endpoints.txt", "--log-format", "compact"]).unwrap();
        let config = ProbeConfig::try_from(args).unwrap();

        assert_eq!(config.file, PathBuf::from("endpoints.txt"));
        assert_eq!(config.log_format, LogFormat::Compact);
        // NUM_WORKERS may be set in the environment running the tests.
        if std::env::var_os("NUM_WORKERS").is_none() {
            assert_eq!(config.num_workers, 20);
        }
    }

    #[test]
    fn zero_workers_is_rejected() {
        let args = parse(&["-f", "endpoints.txt", "-w", "0"]).unwrap();
        let err = ProbeConfig::try_from(args).unwrap_err();

        assert_eq!(err.to_string(), "NUM_WORKERS must be greater than 0");
    }

    #[test]
    fn log_format_accepts_json() {
        let args = parse(&["-f", "endpoints.txt", "--log-format", "json"]).unwrap();

        assert_eq!(args.log_format, LogFormat::Json);
    }
}
