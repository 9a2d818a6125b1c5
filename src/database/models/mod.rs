pub mod options;
pub mod spend;

pub use options::{MonthYearOptions, SelectOption};
pub use spend::{CategoryTotal, DailyTotal, SpendRow, WeeklyTotal};
