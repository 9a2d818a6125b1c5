use serde::Serialize;

use crate::error::{DashboardError, DashboardResult};

/// A (label, value) pair for a selection control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

impl SelectOption {
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into();
        let value = label.clone();
        Self { label, value }
    }
}

/// Which months have transaction data, per year.
///
/// Years are ordered descending and each year's months are ordered
/// descending with no duplicates. Looking up a year with no data is an
/// explicit error, never an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MonthYearOptions {
    years: Vec<(i32, Vec<u32>)>,
}

impl MonthYearOptions {
    /// Builds the mapping from (year, month) pairs already sorted
    /// descending by year then month.
    pub fn from_sorted_pairs(pairs: impl IntoIterator<Item = (i32, u32)>) -> Self {
        let mut years: Vec<(i32, Vec<u32>)> = Vec::new();
        for (year, month) in pairs {
            match years.last_mut() {
                Some((y, months)) if *y == year => {
                    if !months.contains(&month) {
                        months.push(month);
                    }
                }
                _ => years.push((year, vec![month])),
            }
        }
        Self { years }
    }

    /// The years with data, descending.
    pub fn years(&self) -> Vec<i32> {
        self.years.iter().map(|(y, _)| *y).collect()
    }

    /// The months with data in `year`, descending.
    pub fn months_for(&self, year: i32) -> DashboardResult<&[u32]> {
        self.years
            .iter()
            .find(|(y, _)| *y == year)
            .map(|(_, months)| months.as_slice())
            .ok_or(DashboardError::YearNotAvailable(year))
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }
}
