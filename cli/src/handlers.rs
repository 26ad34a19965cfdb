//! Subcommand handlers
//!
//! Each handler builds its adapters, injects them into a use case and prints
//! the result.

use anyhow::{Context, Result, bail};
use pluggable_application::{
    CalculatorWithHistoryUseCase, ConvertCaseUseCase, GenerateReportUseCase, Notifier,
    ProcessOrderUseCase, ProcessPaymentUseCase, RegisterUserUseCase, UserReportUseCase,
};
use pluggable_application::use_cases::register_user::WELCOME_SUBJECT;
use pluggable_domain::{
    BankAccount, Money, Record, TransactionKind, builtin_case_transforms, builtin_formatters,
    greet_user, reverse_string, truncate_text,
};
use pluggable_infrastructure::{
    FileConfig, InMemoryUserRepository, ReportFileWriter, SimulatedPaymentGateway,
    build_notifier, builtin_notifiers, includes_dry_run, load_records,
};
use pluggable_presentation::{AccountOp, ConsoleFormatter};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::warn;

fn sample_records() -> Vec<Record> {
    vec![
        Record::new().with("name", "Product A").with("value", 100),
        Record::new().with("name", "Product B").with("value", 200),
    ]
}

fn print_block(text: &str) {
    if text.ends_with('\n') {
        print!("{}", text);
    } else {
        println!("{}", text);
    }
}

/// Channels from the command line, or the configured ones
fn resolve_channels(config: &FileConfig, channels: Vec<String>) -> Vec<String> {
    if channels.is_empty() {
        config.notifications.channels.clone()
    } else {
        channels
    }
}

fn notifier_for(channels: &[String]) -> Result<Arc<dyn Notifier>> {
    Ok(build_notifier(&builtin_notifiers(), channels)?)
}

fn report_dry_run(channels: &[String], recipient: &str, subject: &str) {
    if includes_dry_run(channels) {
        print!("{}", ConsoleFormatter::dry_run(recipient, subject));
    }
}

pub fn report(
    config: &FileConfig,
    input: Option<PathBuf>,
    format: Option<String>,
    out: Option<String>,
) -> Result<()> {
    let records = match &input {
        Some(path) => load_records(path)
            .with_context(|| format!("Failed to load records from {}", path.display()))?,
        None => sample_records(),
    };

    let key = format.unwrap_or_else(|| config.report.format.clone());
    let formatter = builtin_formatters().resolve(&key)?;
    let use_case = GenerateReportUseCase::new(Arc::clone(&formatter));
    let rendered = use_case.generate(&records)?;

    match out {
        Some(stem) => {
            let writer = ReportFileWriter::new(&config.report.output_dir);
            let path = writer.write(&stem, formatter.as_ref(), &rendered)?;
            println!("Report written to {}", path.display());
        }
        None => print_block(&rendered),
    }
    Ok(())
}

pub fn formats() -> Result<()> {
    let formatters = builtin_formatters();
    let notifiers = builtin_notifiers();
    let transforms = builtin_case_transforms();

    let families: [(&str, Vec<String>); 3] = [
        (formatters.family(), formatters.keys().map(str::to_string).collect()),
        (notifiers.family(), notifiers.keys().map(str::to_string).collect()),
        (transforms.family(), transforms.keys().map(str::to_string).collect()),
    ];
    print!("{}", ConsoleFormatter::formats(&families));
    Ok(())
}

pub fn notify(
    config: &FileConfig,
    to: &str,
    subject: &str,
    message: &str,
    channels: Vec<String>,
) -> Result<()> {
    let channels = resolve_channels(config, channels);
    let notifier = notifier_for(&channels)?;
    notifier.send(to, subject, message)?;
    report_dry_run(&channels, to, subject);
    Ok(())
}

pub fn order(config: &FileConfig, order_id: u64, contact: &str, channels: Vec<String>) -> Result<()> {
    let channels = resolve_channels(config, channels);
    let use_case = ProcessOrderUseCase::new(notifier_for(&channels)?);
    let confirmation = use_case.process_order(order_id, contact)?;
    report_dry_run(&channels, &confirmation.recipient, &confirmation.subject);
    print!("{}", ConsoleFormatter::order_confirmation(&confirmation));
    Ok(())
}

pub fn case(style: &str, text: &[String]) -> Result<()> {
    let use_case = ConvertCaseUseCase::new(builtin_case_transforms().resolve(style)?);
    for line in use_case.convert_lines(text.iter().map(String::as_str)) {
        println!("{}", line);
    }
    Ok(())
}

pub fn greet(name: &str, time_of_day: &str) -> Result<()> {
    println!("{}", greet_user(name, time_of_day));
    Ok(())
}

pub fn reverse(text: &str) -> Result<()> {
    println!("{}", reverse_string(text));
    Ok(())
}

pub fn truncate(text: &str, max: usize, suffix: &str) -> Result<()> {
    println!("{}", truncate_text(text, max, suffix));
    Ok(())
}

pub fn calc(expressions: &[String]) -> Result<()> {
    let mut use_case = CalculatorWithHistoryUseCase::default();
    let mut failed = 0;

    for expression in expressions {
        match use_case.calculate(expression) {
            Ok(record) => println!("{} = {}", record.expression, record.result),
            Err(e) => {
                warn!(expression = %expression, error = %e, "Calculation failed");
                eprintln!("{}", ConsoleFormatter::error(&format!("{}: {}", expression, e)));
                failed += 1;
            }
        }
    }

    let history = use_case.history();
    if !history.is_empty() {
        print!("{}", ConsoleFormatter::calculation_history(&history));
    }

    if failed > 0 {
        bail!("{} of {} expressions failed", failed, expressions.len());
    }
    Ok(())
}

pub fn account(owner: &str, initial: &str, operations: &[String]) -> Result<()> {
    let initial: Money = initial
        .parse()
        .with_context(|| format!("Invalid initial balance '{}'", initial))?;
    let mut account = BankAccount::new(owner, initial)?;

    for raw in operations {
        let op: AccountOp = raw.parse()?;
        let result = match op.kind {
            TransactionKind::Deposit => account.deposit(op.amount, &op.description),
            TransactionKind::Withdrawal => account.withdraw(op.amount, &op.description),
        };
        result.with_context(|| format!("Operation '{}' failed", raw))?;
    }

    print!("{}", ConsoleFormatter::statement(&account));
    Ok(())
}

pub fn pay(
    config: &FileConfig,
    amount: &str,
    account: &str,
    cvv: &str,
    fail_times: u32,
    json: bool,
) -> Result<()> {
    let params = config.payment.to_params()?;
    let gateway = SimulatedPaymentGateway::new().with_transient_failures(fail_times);
    let mut use_case = ProcessPaymentUseCase::with_params(Arc::new(gateway), params);

    let receipt = use_case.process_payment(amount, account, cvv)?;

    if json {
        println!("{}", ConsoleFormatter::receipt_json(&receipt));
    } else {
        print!("{}", ConsoleFormatter::receipt(&receipt));
    }
    Ok(())
}

pub fn register(
    config: &FileConfig,
    email: &str,
    password: &str,
    name: &str,
    channels: Vec<String>,
) -> Result<()> {
    let channels = resolve_channels(config, channels);
    let repository = Arc::new(InMemoryUserRepository::new());
    let use_case = RegisterUserUseCase::new(repository.clone(), notifier_for(&channels)?);

    let user = use_case.register(email, password, name)?;
    report_dry_run(&channels, user.email.as_str(), WELCOME_SUBJECT);
    print!("{}", ConsoleFormatter::registered(&user));
    print!("{}", UserReportUseCase::new(repository).summary()?);
    Ok(())
}
