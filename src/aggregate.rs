use crate::schema::{Currency, ExpandedInstance, TransactionType};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Converts a transaction amount to CAD. CAD (or an omitted currency) is an
/// identity conversion; USD is multiplied by the caller-supplied rate.
pub fn to_cad(amount: f64, currency: Option<Currency>, usd_to_cad: f64) -> f64 {
    match currency {
        Some(Currency::Usd) => amount * usd_to_cad,
        Some(Currency::Cad) | None => amount,
    }
}

/// Two-decimal currency rounding used by every JSON summary endpoint.
pub fn round_currency(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// One-decimal rounding for values already expressed in percent.
pub fn round_percent(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Converts a 0..1 ratio to a percentage with one decimal place.
pub fn ratio_to_percent(ratio: f64) -> f64 {
    (ratio * 1000.0).round() / 10.0
}

/// Income/expense totals for one filtered set of instances, in CAD.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CashFlowSummary {
    #[schemars(description = "Sum of income amounts in CAD, rounded to cents")]
    pub income: f64,

    #[schemars(description = "Sum of expense amounts in CAD, rounded to cents")]
    pub expenses: f64,

    #[schemars(description = "Income minus expenses in CAD, rounded to cents")]
    pub net: f64,
}

/// One category's share of the period's expenses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CategoryTotal {
    pub category: String,

    #[schemars(description = "Total spent in this category in CAD, rounded to cents")]
    pub total: f64,

    #[schemars(description = "Share of all expenses in the period, as a one-decimal percentage")]
    pub share: f64,
}

pub fn cash_flow_summary(instances: &[ExpandedInstance], usd_to_cad: f64) -> CashFlowSummary {
    let mut income = 0.0;
    let mut expenses = 0.0;

    for instance in instances {
        let record = &instance.record;
        let amount = to_cad(record.amount, record.currency, usd_to_cad);
        match record.transaction_type {
            TransactionType::Income => income += amount,
            TransactionType::Expense => expenses += amount,
        }
    }

    CashFlowSummary {
        income: round_currency(income),
        expenses: round_currency(expenses),
        net: round_currency(income - expenses),
    }
}

/// Groups expense instances by category, largest total first. Each entry
/// carries its share of the overall expense total as a percentage.
pub fn expenses_by_category(instances: &[ExpandedInstance], usd_to_cad: f64) -> Vec<CategoryTotal> {
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    let mut overall = 0.0;

    for instance in instances {
        let record = &instance.record;
        if record.transaction_type != TransactionType::Expense {
            continue;
        }
        let amount = to_cad(record.amount, record.currency, usd_to_cad);
        *totals.entry(record.category.as_str()).or_insert(0.0) += amount;
        overall += amount;
    }

    let mut breakdown: Vec<CategoryTotal> = totals
        .into_iter()
        .map(|(category, total)| CategoryTotal {
            category: category.to_string(),
            total: round_currency(total),
            share: if overall == 0.0 {
                0.0
            } else {
                ratio_to_percent(total / overall)
            },
        })
        .collect();

    // BTreeMap iteration gives alphabetical order, which becomes the
    // tie-break after sorting by size.
    breakdown.sort_by(|a, b| b.total.total_cmp(&a.total));
    breakdown
}
