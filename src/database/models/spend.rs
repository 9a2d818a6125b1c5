use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

/// One outgoing transaction as returned by the all-spend query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpendRow {
    pub date: NaiveDate,
    pub amount: Decimal,
    pub category: String,
    pub description: Option<String>,
}

/// Total outgoing spend for one calendar day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyTotal {
    pub date: NaiveDate,
    pub total: Decimal,
}

/// Total outgoing spend for one calendar week, keyed by its Monday.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyTotal {
    pub week_start: NaiveDate,
    pub total: Decimal,
}

/// Total outgoing spend for one category within a period.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub total: Decimal,
}
