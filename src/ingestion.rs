use crate::error::{RecurrenceError, Result};
use crate::schema::{Currency, RecurringFrequency, TransactionRecord, TransactionType};
use chrono::NaiveDate;
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A transaction row as it arrives from the storage backend or a bank-sync
/// feed: identical to [`TransactionRecord`] except the date is still a raw
/// string.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct RawTransactionRow {
    pub id: String,

    #[schemars(description = "Calendar date string in YYYY-MM-DD format")]
    pub date: String,

    pub amount: f64,

    #[serde(rename = "type")]
    pub transaction_type: TransactionType,

    #[serde(default)]
    pub currency: Option<Currency>,

    pub category: String,

    #[serde(default)]
    pub is_recurring: bool,

    #[serde(default)]
    pub recurring_frequency: Option<RecurringFrequency>,
}

impl RawTransactionRow {
    pub fn generate_json_schema() -> schemars::schema::RootSchema {
        schemars::schema_for!(RawTransactionRow)
    }

    pub fn schema_as_json() -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&Self::generate_json_schema())
    }
}

/// Strict date parsing for callers that want a hard failure on bad input.
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| RecurrenceError::InvalidDate(raw.to_string()))
}

/// Converts raw rows into records, skipping any row whose date does not
/// parse. A malformed date is an upstream data-quality problem; it is logged
/// here rather than failing the whole batch.
pub fn records_from_rows(rows: &[RawTransactionRow]) -> Vec<TransactionRecord> {
    rows.iter()
        .filter_map(|row| match parse_date(&row.date) {
            Ok(date) => Some(TransactionRecord {
                id: row.id.clone(),
                date,
                amount: row.amount,
                transaction_type: row.transaction_type,
                currency: row.currency,
                category: row.category.clone(),
                is_recurring: row.is_recurring,
                recurring_frequency: row.recurring_frequency,
            }),
            Err(e) => {
                warn!("Skipping transaction '{}': {}", row.id, e);
                None
            }
        })
        .collect()
}
