//! CLI entrypoint for pluggable
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod handlers;

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use pluggable_infrastructure::{ConfigLoader, FileConfig};
use pluggable_presentation::{Cli, Command, ConsoleFormatter};
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // RUST_LOG wins over -v when set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", ConsoleFormatter::error(&format!("{:#}", e)));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    if cli.show_config {
        let sources = ConfigLoader::sources(cli.config.as_ref());
        print!(
            "{}",
            ConsoleFormatter::config_sources(
                sources
                    .iter()
                    .map(|s| (s.label, s.location.as_str(), s.found))
            )
        );
        return Ok(());
    }

    let config = load_config(&cli)?;
    ConsoleFormatter::set_color(config.output.color && !cli.no_color);

    let Some(command) = cli.command else {
        bail!("No command given. Run `pluggable --help` for usage.");
    };

    info!("Starting pluggable");
    match command {
        Command::Report { input, format, out } => handlers::report(&config, input, format, out),
        Command::Formats => handlers::formats(),
        Command::Notify {
            message,
            to,
            subject,
            channels,
        } => handlers::notify(&config, &to, &subject, &message, channels),
        Command::Order {
            order_id,
            contact,
            channels,
        } => handlers::order(&config, order_id, &contact, channels),
        Command::Case { style, text } => handlers::case(&style, &text),
        Command::Greet { name, time_of_day } => handlers::greet(&name, &time_of_day),
        Command::Reverse { text } => handlers::reverse(&text),
        Command::Truncate { text, max, suffix } => handlers::truncate(&text, max, &suffix),
        Command::Calc { expressions } => handlers::calc(&expressions),
        Command::Account {
            owner,
            initial,
            operations,
        } => handlers::account(&owner, &initial, &operations),
        Command::Pay {
            amount,
            account,
            cvv,
            fail_times,
            json,
        } => handlers::pay(&config, &amount, &account, &cvv, fail_times, json),
        Command::Register {
            email,
            password,
            name,
            channels,
        } => handlers::register(&config, &email, &password, &name, channels),
    }
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    config.validate().context("Invalid configuration")?;
    debug!(
        format = %config.report.format,
        channels = ?config.notifications.channels,
        "Configuration loaded"
    );
    Ok(config)
}
