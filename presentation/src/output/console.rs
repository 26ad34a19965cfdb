//! Console output for command results

use colored::Colorize;
use pluggable_application::{CalculationRecord, OrderConfirmation};
use pluggable_domain::{BankAccount, PaymentReceipt, User};

/// Formats command results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Turn colors off for the rest of the process
    ///
    /// Enabling leaves `colored`'s own terminal detection in charge.
    pub fn set_color(enabled: bool) {
        if !enabled {
            colored::control::set_override(false);
        }
    }

    /// Registered keys per strategy family
    pub fn formats(families: &[(&str, Vec<String>)]) -> String {
        let mut output = Self::header("Available variants");
        for (family, keys) in families {
            output.push_str(&format!("{} {}\n", format!("{}:", family).cyan().bold(), keys.join(", ")));
        }
        output
    }

    /// Config source listing for `--show-config`
    pub fn config_sources<'a>(sources: impl IntoIterator<Item = (&'a str, &'a str, bool)>) -> String {
        let mut output = String::from("Configuration sources (in priority order):\n");
        for (label, location, found) in sources {
            let marker = if found {
                "[FOUND]".green().to_string()
            } else {
                "[     ]".dimmed().to_string()
            };
            output.push_str(&format!("  {} {:<9} {}\n", marker, format!("{}:", label), location));
        }
        output
    }

    pub fn order_confirmation(confirmation: &OrderConfirmation) -> String {
        format!(
            "{} {} (notified {})\n",
            "Order confirmed:".green().bold(),
            confirmation.subject,
            confirmation.recipient
        )
    }

    /// Notice for sends that were recorded in memory only
    pub fn dry_run(recipient: &str, subject: &str) -> String {
        format!(
            "{} message to {} ({}) was recorded, not delivered\n",
            "Dry run:".yellow().bold(),
            recipient,
            if subject.is_empty() { "no subject" } else { subject }
        )
    }

    pub fn calculation_history(history: &[CalculationRecord]) -> String {
        let mut output = Self::header("History");
        for (index, record) in history.iter().enumerate() {
            output.push_str(&format!(
                "{:>3}. {} = {}  {}\n",
                index + 1,
                record.expression,
                record.result,
                record.timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string().dimmed()
            ));
        }
        output
    }

    pub fn statement(account: &BankAccount) -> String {
        let mut output = Self::header(&account.to_string());
        for line in account.statement() {
            output.push_str(&line);
            output.push('\n');
        }
        output
    }

    pub fn receipt(receipt: &PaymentReceipt) -> String {
        format!(
            "{} {}\n  Amount:  ${}\n  Account: {}\n  Status:  {}\n",
            "Payment".green().bold(),
            receipt.transaction_id(),
            receipt.amount(),
            receipt.masked_account(),
            receipt.status()
        )
    }

    /// Receipt as pretty JSON
    pub fn receipt_json(receipt: &PaymentReceipt) -> String {
        serde_json::to_string_pretty(receipt).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn registered(user: &User) -> String {
        format!(
            "{} {} <{}> (id {})\n",
            "Registered".green().bold(),
            user.name,
            user.email,
            user.id
        )
    }

    pub fn error(message: &str) -> String {
        format!("{} {}", "Error:".red().bold(), message)
    }

    fn header(title: &str) -> String {
        format!("{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }
}
