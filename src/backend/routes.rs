use axum::{routing::get, Router};

use crate::backend::{handlers, AppState};

pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/api/figures/daily", get(handlers::daily_figure))
        .route("/api/figures/transactions", get(handlers::transactions_figure))
        .route("/api/figures/weekly", get(handlers::weekly_figure))
        .route("/api/figures/category-weekly", get(handlers::category_weekly_figure))
        .route("/api/figures/category-breakdown", get(handlers::category_breakdown))
        .route("/api/figures/category-histogram", get(handlers::category_histogram))
        .route("/api/options/categories", get(handlers::category_option_list))
        .route("/api/options/years", get(handlers::year_option_list))
        .route("/api/options/months", get(handlers::month_option_list))
}
