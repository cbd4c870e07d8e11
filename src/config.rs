//! Configuration and CLI argument handling

use clap::Parser;

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "pomodoro-timer")]
#[command(about = "A Pomodoro countdown timer with an HTTP control surface")]
#[command(version)]
pub struct Config {
    /// Port to bind the server to
    #[arg(short, long, default_value = "20525")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Countdown duration in minutes
    #[arg(short, long, default_value = "25", value_parser = clap::value_parser!(u64).range(1..=99))]
    pub timer: u64,

    /// Do not ring the terminal bell when a countdown finishes
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "info" }
    }

    /// Configured countdown length in seconds
    pub fn duration_seconds(&self) -> u64 {
        self.timer * 60
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::try_parse_from(["pomodoro-timer"]).unwrap();
        assert_eq!(config.address(), "127.0.0.1:20525");
        assert_eq!(config.duration_seconds(), 1500);
        assert_eq!(config.log_level(), "info");
        assert!(!config.quiet);
    }

    #[test]
    fn overrides() {
        let config = Config::try_parse_from([
            "pomodoro-timer", "-p", "8080", "--host", "0.0.0.0", "-t", "50", "-q", "-v",
        ])
        .unwrap();
        assert_eq!(config.address(), "0.0.0.0:8080");
        assert_eq!(config.duration_seconds(), 3000);
        assert_eq!(config.log_level(), "debug");
        assert!(config.quiet);
    }

    #[test]
    fn rejects_out_of_range_duration() {
        assert!(Config::try_parse_from(["pomodoro-timer", "-t", "0"]).is_err());
        assert!(Config::try_parse_from(["pomodoro-timer", "-t", "100"]).is_err());
    }
}
