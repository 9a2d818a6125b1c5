use rust_decimal::Decimal;
use sqlx::sqlite::SqliteRow;
use sqlx::{Pool, Row, Sqlite};
use std::str::FromStr;

use crate::database::models::{CategoryTotal, DailyTotal, MonthYearOptions, SelectOption, SpendRow, WeeklyTotal};

/*
Read-only aggregation queries over the transactions table. Every query is
scoped to outgoing transactions (direction = 'out'); category and
time-window filters only narrow further. All parameters are bound, never
interpolated.
*/

// Week truncation: the Monday of the week containing the date.
const WEEK_START: &str = "DATE(transacted_on, '-6 days', 'weekday 1')";

fn decimal_column(row: &SqliteRow, column: &str) -> Result<Decimal, sqlx::Error> {
    let text: String = row.try_get(column)?;
    Decimal::from_str(&text)
        .map_err(|e| sqlx::Error::Decode(format!("Invalid Decimal format for {column}: {e}").into()))
}

/// Total outgoing spend per day, ordered by date.
pub async fn total_spend_by_day(pool: &Pool<Sqlite>) -> Result<Vec<DailyTotal>, sqlx::Error> {
    sqlx::query(
        r#"
        SELECT
            transacted_on               AS date,
            CAST(SUM(amount) AS TEXT)   AS total
        FROM transactions
        WHERE direction = 'out'
        GROUP BY transacted_on
        ORDER BY transacted_on
        "#,
    )
    .fetch_all(pool)
    .await?
    .into_iter()
    .map(|row| {
        Ok(DailyTotal {
            date: row.try_get("date")?,
            total: decimal_column(&row, "total")?,
        })
    })
    .collect()
}

/// Every outgoing transaction, ordered by date.
pub async fn all_spend(pool: &Pool<Sqlite>) -> Result<Vec<SpendRow>, sqlx::Error> {
    sqlx::query(
        r#"
        SELECT
            transacted_on AS date,
            amount,
            category,
            description
        FROM transactions
        WHERE direction = 'out'
        ORDER BY transacted_on
        "#,
    )
    .fetch_all(pool)
    .await?
    .into_iter()
    .map(|row| {
        Ok(SpendRow {
            date: row.try_get("date")?,
            amount: decimal_column(&row, "amount")?,
            category: row.try_get("category")?,
            description: row.try_get("description")?,
        })
    })
    .collect()
}

/// Total outgoing spend per week, optionally narrowed to one category.
/// Each branch builds and returns its own result.
pub async fn weekly_spend(
    pool: &Pool<Sqlite>,
    category: Option<&str>,
) -> Result<Vec<WeeklyTotal>, sqlx::Error> {
    let rows = if let Some(category) = category {
        sqlx::query(&format!(
            r#"
            SELECT
                {WEEK_START}              AS week_start,
                CAST(SUM(amount) AS TEXT) AS total
            FROM transactions
            WHERE direction = 'out' AND category = ?
            GROUP BY week_start
            ORDER BY week_start
            "#,
        ))
        .bind(category)
        .fetch_all(pool)
        .await?
    } else {
        sqlx::query(&format!(
            r#"
            SELECT
                {WEEK_START}              AS week_start,
                CAST(SUM(amount) AS TEXT) AS total
            FROM transactions
            WHERE direction = 'out'
            GROUP BY week_start
            ORDER BY week_start
            "#,
        ))
        .fetch_all(pool)
        .await?
    };

    rows.into_iter()
        .map(|row| {
            Ok(WeeklyTotal {
                week_start: row.try_get("week_start")?,
                total: decimal_column(&row, "total")?,
            })
        })
        .collect()
}

/// Weekly outgoing totals for a single category.
pub async fn weekly_totals_for_category(
    pool: &Pool<Sqlite>,
    category: &str,
) -> Result<Vec<WeeklyTotal>, sqlx::Error> {
    weekly_spend(pool, Some(category)).await
}

/// Outgoing spend per category for one year and month, smallest total
/// first. Categories whose signed amounts cancel out to zero are omitted.
pub async fn spend_by_category(
    pool: &Pool<Sqlite>,
    year: i32,
    month: u32,
) -> Result<Vec<CategoryTotal>, sqlx::Error> {
    sqlx::query(
        r#"
        SELECT
            category,
            CAST(SUM(amount) AS TEXT) AS total
        FROM transactions
        WHERE direction = 'out'
          AND CAST(STRFTIME('%Y', transacted_on) AS INTEGER) = ?
          AND CAST(STRFTIME('%m', transacted_on) AS INTEGER) = ?
        GROUP BY category
        HAVING SUM(amount) <> 0
        ORDER BY SUM(amount) ASC
        "#,
    )
    .bind(year)
    .bind(month as i64)
    .fetch_all(pool)
    .await?
    .into_iter()
    .map(|row| {
        Ok(CategoryTotal {
            category: row.try_get("category")?,
            total: decimal_column(&row, "total")?,
        })
    })
    .collect()
}

/// Distinct years with outgoing transactions, descending.
pub async fn available_years(pool: &Pool<Sqlite>) -> Result<Vec<i32>, sqlx::Error> {
    sqlx::query(
        r#"
        SELECT DISTINCT CAST(STRFTIME('%Y', transacted_on) AS INTEGER) AS year
        FROM transactions
        WHERE direction = 'out'
        ORDER BY year DESC
        "#,
    )
    .fetch_all(pool)
    .await?
    .into_iter()
    .map(|row| Ok(row.try_get::<i64, _>("year")? as i32))
    .collect()
}

/// Distinct months with outgoing transactions, descending.
pub async fn available_months(pool: &Pool<Sqlite>) -> Result<Vec<u32>, sqlx::Error> {
    sqlx::query(
        r#"
        SELECT DISTINCT CAST(STRFTIME('%m', transacted_on) AS INTEGER) AS month
        FROM transactions
        WHERE direction = 'out'
        ORDER BY month DESC
        "#,
    )
    .fetch_all(pool)
    .await?
    .into_iter()
    .map(|row| Ok(row.try_get::<i64, _>("month")? as u32))
    .collect()
}

/// Which months have outgoing transactions, grouped by year; years and
/// months both descending.
pub async fn month_year_options(pool: &Pool<Sqlite>) -> Result<MonthYearOptions, sqlx::Error> {
    let pairs = sqlx::query(
        r#"
        SELECT DISTINCT
            CAST(STRFTIME('%Y', transacted_on) AS INTEGER) AS year,
            CAST(STRFTIME('%m', transacted_on) AS INTEGER) AS month
        FROM transactions
        WHERE direction = 'out'
        ORDER BY year DESC, month DESC
        "#,
    )
    .fetch_all(pool)
    .await?
    .into_iter()
    .map(|row| {
        Ok((
            row.try_get::<i64, _>("year")? as i32,
            row.try_get::<i64, _>("month")? as u32,
        ))
    })
    .collect::<Result<Vec<(i32, u32)>, sqlx::Error>>()?;

    Ok(MonthYearOptions::from_sorted_pairs(pairs))
}

/// Category labels from the budgets reference table, for selection UIs.
pub async fn category_options(pool: &Pool<Sqlite>) -> Result<Vec<SelectOption>, sqlx::Error> {
    sqlx::query(
        r#"
        SELECT DISTINCT category
        FROM budgets
        ORDER BY category
        "#,
    )
    .fetch_all(pool)
    .await?
    .into_iter()
    .map(|row| Ok(SelectOption::new(row.try_get::<String, _>("category")?)))
    .collect()
}
