//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for pluggable
#[derive(Parser, Debug)]
#[command(name = "pluggable")]
#[command(author, version, about = "Interchangeable report formats, notification channels and text transforms")]
#[command(long_about = r#"
pluggable picks report formatters, notification channels and case transforms
by name at run time. Every variant is looked up in a registry, so an unknown
name fails immediately with the list of known ones.

Configuration files are loaded from (in priority order):
1. PLUGGABLE_* environment variables (e.g. PLUGGABLE_REPORT__FORMAT=csv)
2. --config <path>     Explicit config file
3. ./pluggable.toml    Project-level config
4. ~/.config/pluggable/config.toml   Global config

Example:
  pluggable report --format csv sales.json
  pluggable notify --channel email --channel sms --to user@example.com "Hi there"
  pluggable case title "hello wide world"
  pluggable calc "10 + 5" "20 / 4"
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render records as a report
    Report {
        /// Input records (.json array of objects or .csv with a header row).
        /// Uses a small built-in sales sample when omitted.
        input: Option<PathBuf>,

        /// Formatter key (default from [report] format)
        #[arg(short, long, value_name = "FORMAT")]
        format: Option<String>,

        /// Write to <output_dir>/<NAME>.<extension> instead of stdout
        #[arg(short, long, value_name = "NAME")]
        out: Option<String>,
    },

    /// List registered report formats, notification channels and case styles
    Formats,

    /// Send a message through one or more channels
    Notify {
        /// Message body
        message: String,

        /// Recipient address or phone number
        #[arg(long)]
        to: String,

        #[arg(short, long, default_value = "")]
        subject: String,

        /// Channel key, repeatable (default from [notifications] channels)
        #[arg(short, long = "channel", value_name = "CHANNEL")]
        channels: Vec<String>,
    },

    /// Process an order and send its confirmation
    Order {
        order_id: u64,

        /// Customer email or phone number
        #[arg(long)]
        contact: String,

        /// Channel key, repeatable (default from [notifications] channels)
        #[arg(short, long = "channel", value_name = "CHANNEL")]
        channels: Vec<String>,
    },

    /// Change the case of text (upper, lower, title)
    Case {
        /// Case style key
        style: String,

        /// Text to convert; each argument is converted separately
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// Print a greeting
    Greet {
        #[arg(default_value = "")]
        name: String,

        #[arg(long, default_value = "day")]
        time_of_day: String,
    },

    /// Reverse text
    Reverse { text: String },

    /// Shorten text to a maximum number of characters
    Truncate {
        text: String,

        #[arg(short, long, default_value_t = 50)]
        max: usize,

        #[arg(long, default_value = "...")]
        suffix: String,
    },

    /// Evaluate "a <op> b" expressions and show the history
    Calc {
        #[arg(required = true)]
        expressions: Vec<String>,
    },

    /// Run deposits and withdrawals against a new account
    Account {
        #[arg(long)]
        owner: String,

        /// Opening balance, e.g. 100.00
        #[arg(long, default_value = "0")]
        initial: String,

        /// Operations such as deposit:50 or withdraw:20:Groceries
        operations: Vec<String>,
    },

    /// Validate and charge a card payment (simulated gateway)
    Pay {
        /// Amount, e.g. 99.95
        amount: String,

        /// 16-digit account number (dashes and spaces allowed)
        #[arg(long)]
        account: String,

        #[arg(long)]
        cvv: String,

        /// Make the first N gateway attempts fail transiently
        #[arg(long, default_value_t = 0)]
        fail_times: u32,

        /// Print the receipt as JSON
        #[arg(long)]
        json: bool,
    },

    /// Register a user and send the welcome message
    Register {
        email: String,

        #[arg(long)]
        password: String,

        #[arg(long)]
        name: String,

        /// Channel key, repeatable (default from [notifications] channels)
        #[arg(short, long = "channel", value_name = "CHANNEL")]
        channels: Vec<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_report() {
        let cli = Cli::parse_from(["pluggable", "-vv", "report", "--format", "csv", "sales.json"]);
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Some(Command::Report { input, format, out }) => {
                assert_eq!(input, Some(PathBuf::from("sales.json")));
                assert_eq!(format.as_deref(), Some("csv"));
                assert!(out.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_repeated_channels() {
        let cli = Cli::parse_from([
            "pluggable", "notify", "--to", "user@example.com", "-c", "email", "-c", "sms", "Hello",
        ]);
        match cli.command {
            Some(Command::Notify { channels, message, .. }) => {
                assert_eq!(channels, vec!["email", "sms"]);
                assert_eq!(message, "Hello");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["pluggable", "formats", "--no-color", "--no-config"]);
        assert!(cli.no_color);
        assert!(cli.no_config);
        assert!(matches!(cli.command, Some(Command::Formats)));
    }
}
