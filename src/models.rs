use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ResumoError;

/// Whether a transaction adds to or takes from the balance.
///
/// The store's JSON shape predates this crate and tags records with
/// "positive"/"negative", so the serde names keep that wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    #[serde(rename = "positive")]
    Income,
    #[serde(rename = "negative")]
    Expense,
}

impl TransactionKind {
    pub fn toggled(self) -> Self {
        match self {
            TransactionKind::Income => TransactionKind::Expense,
            TransactionKind::Expense => TransactionKind::Income,
        }
    }

    /// Label used in headers and empty-state messages.
    pub fn label(self) -> &'static str {
        match self {
            TransactionKind::Income => "Entradas",
            TransactionKind::Expense => "Saídas",
        }
    }
}

impl FromStr for TransactionKind {
    type Err = ResumoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(TransactionKind::Income),
            "expense" => Ok(TransactionKind::Expense),
            other => Err(ResumoError::UnknownKind(other.to_string())),
        }
    }
}

/// A stored transaction. Immutable once written; owned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionRecord {
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub name: String,
    /// Decimal-as-string, as the store keeps it.
    pub amount: String,
    /// Key into the category catalog.
    pub category: String,
    /// Calendar date, YYYY-MM-DD.
    pub date: String,
}

impl TransactionRecord {
    /// Numeric amount; unparseable or non-finite strings count as zero.
    pub fn amount_value(&self) -> f64 {
        self.amount
            .parse()
            .ok()
            .filter(|v: &f64| v.is_finite())
            .unwrap_or(0.0)
    }

    /// Parsed date, if the stored string is a valid calendar date.
    /// Timestamps with a time component are accepted by their date part.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        let day = self.date.get(..10).unwrap_or(&self.date);
        NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
    }
}

/// Per-category aggregate for one (kind, month) selection. Recomputed on
/// every filter change and discarded on the next one.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySummary {
    pub key: &'static str,
    pub name: &'static str,
    pub color: &'static str,
    pub total: f64,
    pub total_formatted: String,
    pub percent: String,
}
