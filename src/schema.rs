use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    #[schemars(description = "Money coming in: salary, dividends, refunds")]
    Income,

    #[schemars(description = "Money going out: purchases, bills, fees")]
    Expense,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    #[schemars(description = "Canadian dollars (the reporting currency)")]
    Cad,

    #[schemars(description = "US dollars, converted to CAD at a caller-supplied rate during aggregation")]
    Usd,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum RecurringFrequency {
    #[schemars(
        description = "Regenerates every month on the same day-of-month, clamped to the last valid day of shorter months"
    )]
    Monthly,

    /// Any frequency the engine does not expand. Records carrying it are
    /// passed through unmodified, the same as non-recurring records.
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct TransactionRecord {
    #[schemars(description = "Opaque unique identifier, stable per stored record")]
    pub id: String,

    #[schemars(
        description = "Calendar date in YYYY-MM-DD format. Naive local date with no time-of-day semantics; never UTC-shifted."
    )]
    pub date: NaiveDate,

    #[schemars(
        description = "Non-negative monetary magnitude. The sign is carried by 'type', never by this number."
    )]
    pub amount: f64,

    #[serde(rename = "type")]
    #[schemars(description = "Whether this transaction is income or an expense")]
    pub transaction_type: TransactionType,

    #[serde(default)]
    #[schemars(description = "Denomination of 'amount'. Omitted means CAD at the aggregation layer.")]
    pub currency: Option<Currency>,

    #[schemars(description = "Free-form category label (e.g. 'Groceries', 'Rent')")]
    pub category: String,

    #[serde(default)]
    #[schemars(description = "True if this record regenerates on a schedule")]
    pub is_recurring: bool,

    #[serde(default)]
    #[schemars(
        description = "How often a recurring record regenerates. Only 'monthly' is expanded; any other value (or none) is treated as non-recurring."
    )]
    pub recurring_frequency: Option<RecurringFrequency>,
}

impl TransactionRecord {
    /// True when the expansion engine should project this record: the
    /// recurring flag is set AND the frequency is explicitly monthly.
    pub fn expands_monthly(&self) -> bool {
        self.is_recurring && self.recurring_frequency == Some(RecurringFrequency::Monthly)
    }
}

/// A transaction as it appears after recurrence expansion: either the
/// original record passed through, or a synthetic monthly occurrence of it.
///
/// The wire field names (`_isProjected`, `_originalId`) match what the
/// dashboard and tool-calling consumers already expect.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
pub struct ExpandedInstance {
    #[serde(flatten)]
    pub record: TransactionRecord,

    #[serde(rename = "_isProjected")]
    #[schemars(
        description = "True for every synthetic occurrence; false only for the instance whose date equals the original record's date"
    )]
    pub is_projected: bool,

    #[serde(rename = "_originalId")]
    #[schemars(description = "Id of the source record, preserved across all projected copies")]
    pub original_id: String,
}

impl ExpandedInstance {
    /// Wraps a record untouched, as expansion does for everything it does
    /// not project.
    pub fn passthrough(record: TransactionRecord) -> Self {
        let original_id = record.id.clone();
        Self {
            record,
            is_projected: false,
            original_id,
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.record.date
    }
}
