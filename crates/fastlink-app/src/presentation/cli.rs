use clap::{Parser, Subcommand};

/// Daily Fastlink check-in worker
#[derive(Debug, Parser)]
#[command(name = "fastlink-checkin", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Run the daily timer and the on-demand HTTP trigger (default)
    Serve,

    /// Run the check-in once and print the report
    Run {
        /// Send the notification even when no relay is configured
        #[arg(long)]
        bark: bool,
    },

    /// Send a test notification through the configured relay
    TestNotify,
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Serve)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_serve() {
        let cli = Cli::parse_from(["fastlink-checkin"]);
        assert_eq!(cli.command(), Command::Serve);
    }

    #[test]
    fn test_run_with_bark() {
        let cli = Cli::parse_from(["fastlink-checkin", "run", "--bark"]);
        assert_eq!(cli.command(), Command::Run { bark: true });

        let cli = Cli::parse_from(["fastlink-checkin", "run"]);
        assert_eq!(cli.command(), Command::Run { bark: false });
    }

    #[test]
    fn test_test_notify() {
        let cli = Cli::parse_from(["fastlink-checkin", "test-notify"]);
        assert_eq!(cli.command(), Command::TestNotify);
    }

    #[test]
    fn test_unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["fastlink-checkin", "checkout"]).is_err());
    }
}
