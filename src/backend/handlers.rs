// src/backend/handlers.rs
//
// The interaction controller: each user event (category changed, year
// changed, year+month changed, bar clicked) maps to exactly one
// recomputation path. Paths are stateless and idempotent; re-triggering
// with the same inputs recomputes from scratch.

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use sqlx::{Pool, Sqlite};
use tracing::debug;

use crate::backend::AppState;
use crate::charts::{self, Figure};
use crate::database::db::queries;
use crate::database::models::SelectOption;
use crate::error::DashboardResult;

#[derive(Debug, Deserialize)]
pub struct CategoryParams {
    pub category: String,
}

#[derive(Debug, Deserialize)]
pub struct WeeklyParams {
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PeriodParams {
    pub year: i32,
    pub month: u32,
}

#[derive(Debug, Deserialize)]
pub struct MonthParams {
    pub year: Option<i32>,
}

// ============= Recomputation paths =============
//
// Plain functions over the pool so they can be exercised without HTTP
// plumbing; the axum handlers below are thin wrappers.

/// Page load: total spend per day.
pub async fn daily_total_path(pool: &Pool<Sqlite>) -> DashboardResult<Figure> {
    let rows = queries::total_spend_by_day(pool).await?;
    Ok(charts::daily_series(&rows, "All", "Total Daily Spend"))
}

/// Page load: every outgoing transaction.
pub async fn all_spend_path(pool: &Pool<Sqlite>) -> DashboardResult<Figure> {
    let rows = queries::all_spend(pool).await?;
    Ok(charts::spend_markers(&rows, "All", "All Transactions"))
}

/// Weekly spend, optionally narrowed to a category.
pub async fn weekly_spend_path(
    pool: &Pool<Sqlite>,
    category: Option<&str>,
) -> DashboardResult<Figure> {
    let rows = queries::weekly_spend(pool, category).await?;
    let name = category.unwrap_or("All");
    Ok(charts::weekly_series(&rows, name, "Total Weekly Spend"))
}

/// Category changed: weekly time series for the selected category.
pub async fn category_selected_path(
    pool: &Pool<Sqlite>,
    category: &str,
) -> DashboardResult<Figure> {
    let rows = queries::weekly_totals_for_category(pool, category).await?;
    Ok(charts::weekly_series(
        &rows,
        category,
        &format!("Weekly {category} Spend"),
    ))
}

/// Year changed: the month options valid for that year. A year with no
/// data is a lookup error, not an empty list.
pub async fn year_selected_path(pool: &Pool<Sqlite>, year: i32) -> DashboardResult<Vec<u32>> {
    let options = queries::month_year_options(pool).await?;
    Ok(options.months_for(year)?.to_vec())
}

/// Year and month both selected: spend per category for that period.
pub async fn period_selected_path(
    pool: &Pool<Sqlite>,
    year: i32,
    month: u32,
) -> DashboardResult<Figure> {
    let rows = queries::spend_by_category(pool, year, month).await?;
    Ok(charts::category_bar(&rows, "All", "Spend by category"))
}

/// Bar clicked: histogram of weekly totals for the clicked category.
pub async fn bar_clicked_path(pool: &Pool<Sqlite>, category: &str) -> DashboardResult<Figure> {
    let rows = queries::weekly_totals_for_category(pool, category).await?;
    Ok(charts::weekly_histogram(
        &rows,
        category,
        "Category Spend Histogram",
    ))
}

// ============= HTTP handlers =============

pub async fn daily_figure(State(state): State<AppState>) -> DashboardResult<Json<Figure>> {
    Ok(Json(daily_total_path(&state.db).await?))
}

pub async fn transactions_figure(State(state): State<AppState>) -> DashboardResult<Json<Figure>> {
    Ok(Json(all_spend_path(&state.db).await?))
}

pub async fn weekly_figure(
    State(state): State<AppState>,
    Query(params): Query<WeeklyParams>,
) -> DashboardResult<Json<Figure>> {
    debug!(category = ?params.category, "weekly figure requested");
    Ok(Json(weekly_spend_path(&state.db, params.category.as_deref()).await?))
}

pub async fn category_weekly_figure(
    State(state): State<AppState>,
    Query(params): Query<CategoryParams>,
) -> DashboardResult<Json<Figure>> {
    Ok(Json(category_selected_path(&state.db, &params.category).await?))
}

pub async fn category_breakdown(
    State(state): State<AppState>,
    Query(params): Query<PeriodParams>,
) -> DashboardResult<Json<Figure>> {
    debug!(year = params.year, month = params.month, "category breakdown requested");
    Ok(Json(period_selected_path(&state.db, params.year, params.month).await?))
}

pub async fn category_histogram(
    State(state): State<AppState>,
    Query(params): Query<CategoryParams>,
) -> DashboardResult<Json<Figure>> {
    Ok(Json(bar_clicked_path(&state.db, &params.category).await?))
}

pub async fn category_option_list(
    State(state): State<AppState>,
) -> DashboardResult<Json<Vec<SelectOption>>> {
    Ok(Json(queries::category_options(&state.db).await?))
}

pub async fn year_option_list(State(state): State<AppState>) -> DashboardResult<Json<Vec<i32>>> {
    Ok(Json(queries::available_years(&state.db).await?))
}

pub async fn month_option_list(
    State(state): State<AppState>,
    Query(params): Query<MonthParams>,
) -> DashboardResult<Json<Vec<u32>>> {
    let months = match params.year {
        Some(year) => year_selected_path(&state.db, year).await?,
        None => queries::available_months(&state.db).await?,
    };
    Ok(Json(months))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DashboardError;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn test_pool() -> Pool<Sqlite> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        sqlx::migrate!("./migrations").run(&pool).await.unwrap();
        pool
    }

    async fn insert_tx(pool: &Pool<Sqlite>, date: &str, amount: &str, category: &str) {
        sqlx::query(
            r#"
            INSERT INTO transactions (transacted_on, amount, direction, category, description)
            VALUES (?, ?, 'out', ?, NULL)
            "#,
        )
        .bind(date)
        .bind(amount)
        .bind(category)
        .execute(pool)
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn category_selected_builds_a_time_series() {
        let pool = test_pool().await;
        insert_tx(&pool, "2023-01-02", "10", "Groceries").await;
        insert_tx(&pool, "2023-01-09", "20", "Groceries").await;
        insert_tx(&pool, "2023-02-01", "5", "Rent").await;

        let fig = category_selected_path(&pool, "Groceries").await.unwrap();
        match fig {
            Figure::Scatter { x, y, title, .. } => {
                assert_eq!(x.len(), 2);
                assert_eq!(y, vec![10.0, 20.0]);
                assert_eq!(title, "Weekly Groceries Spend");
            }
            other => panic!("expected a scatter figure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn bar_clicked_builds_a_histogram() {
        let pool = test_pool().await;
        insert_tx(&pool, "2023-01-02", "10", "Groceries").await;
        insert_tx(&pool, "2023-01-09", "20", "Groceries").await;

        let fig = bar_clicked_path(&pool, "Groceries").await.unwrap();
        match fig {
            Figure::Histogram { x, name, .. } => {
                assert_eq!(x, vec![10.0, 20.0]);
                assert_eq!(name, "Groceries");
            }
            other => panic!("expected a histogram figure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn period_selected_builds_a_bar_chart() {
        let pool = test_pool().await;
        insert_tx(&pool, "2023-01-05", "425", "Rent").await;
        insert_tx(&pool, "2023-01-12", "120", "Lunch").await;

        let fig = period_selected_path(&pool, 2023, 1).await.unwrap();
        match fig {
            Figure::Bar { x, y, .. } => {
                assert_eq!(x, vec![120.0, 425.0]);
                assert_eq!(y, vec!["Lunch".to_string(), "Rent".to_string()]);
            }
            other => panic!("expected a bar figure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn year_selected_rejects_years_without_data() {
        let pool = test_pool().await;
        insert_tx(&pool, "2023-01-02", "10", "Groceries").await;

        assert_eq!(year_selected_path(&pool, 2023).await.unwrap(), vec![1]);
        let err = year_selected_path(&pool, 2022).await.unwrap_err();
        assert!(matches!(err, DashboardError::YearNotAvailable(2022)));
    }

    #[tokio::test]
    async fn empty_results_surface_as_the_empty_figure() {
        let pool = test_pool().await;
        assert_eq!(daily_total_path(&pool).await.unwrap(), Figure::Empty);
        assert_eq!(all_spend_path(&pool).await.unwrap(), Figure::Empty);
        assert_eq!(weekly_spend_path(&pool, None).await.unwrap(), Figure::Empty);
        assert_eq!(
            category_selected_path(&pool, "Groceries").await.unwrap(),
            Figure::Empty
        );
        assert_eq!(period_selected_path(&pool, 2023, 1).await.unwrap(), Figure::Empty);
    }

    #[tokio::test]
    async fn paths_are_idempotent() {
        let pool = test_pool().await;
        insert_tx(&pool, "2023-01-02", "10", "Groceries").await;

        let first = category_selected_path(&pool, "Groceries").await.unwrap();
        let second = category_selected_path(&pool, "Groceries").await.unwrap();
        assert_eq!(first, second);
    }
}
