//! Renderer-agnostic chart descriptions.
//!
//! The backend produces these and the front end just renders them. Builders
//! are pure: query rows in, [`Figure`] out. Empty input always yields
//! [`Figure::Empty`], which callers must check before rendering.

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::database::models::{CategoryTotal, DailyTotal, SpendRow, WeeklyTotal};

/// How scatter points are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScatterMode {
    Markers,
    LinesMarkers,
}

/// One chart, tagged by kind so renderers can match exhaustively.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Figure {
    Scatter {
        x: Vec<NaiveDate>,
        y: Vec<f64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        text: Option<Vec<String>>,
        mode: ScatterMode,
        name: String,
        title: String,
    },
    /// Horizontal bar chart: totals along x, category labels along y.
    Bar {
        x: Vec<f64>,
        y: Vec<String>,
        name: String,
        title: String,
    },
    Histogram {
        x: Vec<f64>,
        name: String,
        title: String,
    },
    /// No data to draw. Rendered as an explicit empty state.
    Empty,
}

fn amount_f64(d: &Decimal) -> f64 {
    d.to_f64().unwrap_or(0.0)
}

/// Every transaction as a marker, with its description as hover text.
pub fn spend_markers(rows: &[SpendRow], name: &str, title: &str) -> Figure {
    if rows.is_empty() {
        return Figure::Empty;
    }
    Figure::Scatter {
        x: rows.iter().map(|r| r.date).collect(),
        y: rows.iter().map(|r| amount_f64(&r.amount)).collect(),
        text: Some(
            rows.iter()
                .map(|r| r.description.clone().unwrap_or_default())
                .collect(),
        ),
        mode: ScatterMode::Markers,
        name: name.to_string(),
        title: title.to_string(),
    }
}

/// Daily totals as a connected time series.
pub fn daily_series(rows: &[DailyTotal], name: &str, title: &str) -> Figure {
    if rows.is_empty() {
        return Figure::Empty;
    }
    Figure::Scatter {
        x: rows.iter().map(|r| r.date).collect(),
        y: rows.iter().map(|r| amount_f64(&r.total)).collect(),
        text: None,
        mode: ScatterMode::LinesMarkers,
        name: name.to_string(),
        title: title.to_string(),
    }
}

/// Weekly totals as a connected time series keyed by week start.
pub fn weekly_series(rows: &[WeeklyTotal], name: &str, title: &str) -> Figure {
    if rows.is_empty() {
        return Figure::Empty;
    }
    Figure::Scatter {
        x: rows.iter().map(|r| r.week_start).collect(),
        y: rows.iter().map(|r| amount_f64(&r.total)).collect(),
        text: None,
        mode: ScatterMode::LinesMarkers,
        name: name.to_string(),
        title: title.to_string(),
    }
}

/// Category totals as a horizontal bar chart.
pub fn category_bar(rows: &[CategoryTotal], name: &str, title: &str) -> Figure {
    if rows.is_empty() {
        return Figure::Empty;
    }
    Figure::Bar {
        x: rows.iter().map(|r| amount_f64(&r.total)).collect(),
        y: rows.iter().map(|r| r.category.clone()).collect(),
        name: name.to_string(),
        title: title.to_string(),
    }
}

/// Distribution of weekly totals.
pub fn weekly_histogram(rows: &[WeeklyTotal], name: &str, title: &str) -> Figure {
    if rows.is_empty() {
        return Figure::Empty;
    }
    Figure::Histogram {
        x: rows.iter().map(|r| amount_f64(&r.total)).collect(),
        name: name.to_string(),
        title: title.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn weekly_rows() -> Vec<WeeklyTotal> {
        vec![
            WeeklyTotal { week_start: date("2023-01-02"), total: dec!(10) },
            WeeklyTotal { week_start: date("2023-01-09"), total: dec!(20) },
        ]
    }

    #[test]
    fn empty_input_yields_the_empty_sentinel() {
        assert_eq!(spend_markers(&[], "All", "All Transactions"), Figure::Empty);
        assert_eq!(daily_series(&[], "All", "Daily Spend"), Figure::Empty);
        assert_eq!(weekly_series(&[], "Weekly", "Weekly Spend"), Figure::Empty);
        assert_eq!(category_bar(&[], "All", "Spend by category"), Figure::Empty);
        assert_eq!(weekly_histogram(&[], "All", "Histogram"), Figure::Empty);
    }

    #[test]
    fn weekly_series_has_parallel_axes() {
        let fig = weekly_series(&weekly_rows(), "Weekly", "Total Weekly Spend");
        match fig {
            Figure::Scatter { x, y, text, mode, .. } => {
                assert_eq!(x.len(), y.len());
                assert_eq!(x, vec![date("2023-01-02"), date("2023-01-09")]);
                assert_eq!(y, vec![10.0, 20.0]);
                assert_eq!(text, None);
                assert_eq!(mode, ScatterMode::LinesMarkers);
            }
            other => panic!("expected a scatter figure, got {other:?}"),
        }
    }

    #[test]
    fn spend_markers_carry_descriptions_as_text() {
        let rows = vec![
            SpendRow {
                date: date("2023-01-02"),
                amount: dec!(10),
                category: "Groceries".into(),
                description: Some("Supermarket".into()),
            },
            SpendRow {
                date: date("2023-01-03"),
                amount: dec!(3),
                category: "Lunch".into(),
                description: None,
            },
        ];
        match spend_markers(&rows, "All", "All Transactions") {
            Figure::Scatter { x, y, text, mode, .. } => {
                assert_eq!(x.len(), 2);
                assert_eq!(y, vec![10.0, 3.0]);
                assert_eq!(text, Some(vec!["Supermarket".to_string(), String::new()]));
                assert_eq!(mode, ScatterMode::Markers);
            }
            other => panic!("expected a scatter figure, got {other:?}"),
        }
    }

    #[test]
    fn category_bar_keeps_row_order() {
        let rows = vec![
            CategoryTotal { category: "Lunch".into(), total: dec!(120) },
            CategoryTotal { category: "Rent".into(), total: dec!(425) },
        ];
        match category_bar(&rows, "All", "Spend by category") {
            Figure::Bar { x, y, .. } => {
                assert_eq!(x, vec![120.0, 425.0]);
                assert_eq!(y, vec!["Lunch".to_string(), "Rent".to_string()]);
            }
            other => panic!("expected a bar figure, got {other:?}"),
        }
    }

    #[test]
    fn figures_serialize_with_a_kind_tag() {
        let fig = weekly_histogram(&weekly_rows(), "Groceries", "Category Spend Histogram");
        let json = serde_json::to_value(&fig).unwrap();
        assert_eq!(json["kind"], "histogram");
        assert_eq!(json["x"], serde_json::json!([10.0, 20.0]));

        let empty = serde_json::to_value(&Figure::Empty).unwrap();
        assert_eq!(empty["kind"], "empty");
    }
}
