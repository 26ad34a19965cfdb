//! Account operations given on the command line

use pluggable_domain::{Money, MoneyParseError, TransactionKind};
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountOpError {
    #[error("Unknown account operation '{0}' (expected deposit or withdraw)")]
    UnknownKind(String),

    #[error("Missing amount in '{0}' (expected e.g. deposit:50)")]
    MissingAmount(String),

    #[error("Invalid amount in '{input}': {source}")]
    InvalidAmount {
        input: String,
        #[source]
        source: MoneyParseError,
    },
}

/// `deposit:AMOUNT[:DESCRIPTION]` or `withdraw:AMOUNT[:DESCRIPTION]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountOp {
    pub kind: TransactionKind,
    pub amount: Money,
    pub description: String,
}

impl FromStr for AccountOp {
    type Err = AccountOpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ':');
        let kind = match parts.next().map(|k| k.trim().to_lowercase()).as_deref() {
            Some("deposit") => TransactionKind::Deposit,
            Some("withdraw") | Some("withdrawal") => TransactionKind::Withdrawal,
            _ => return Err(AccountOpError::UnknownKind(s.to_string())),
        };
        let amount = parts
            .next()
            .filter(|a| !a.trim().is_empty())
            .ok_or_else(|| AccountOpError::MissingAmount(s.to_string()))?
            .parse()
            .map_err(|source| AccountOpError::InvalidAmount {
                input: s.to_string(),
                source,
            })?;
        let description = parts
            .next()
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| kind.to_string());

        Ok(Self {
            kind,
            amount,
            description,
        })
    }
}
