use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Errors surfaced by the dashboard's query and lookup paths.
///
/// An empty result set is not an error; chart builders render it as
/// [`Figure::Empty`](crate::charts::Figure::Empty).
#[derive(Debug, Error)]
pub enum DashboardError {
    /// A query against the transaction store failed.
    #[error("query failed: {0}")]
    Query(#[from] sqlx::Error),

    /// A year was requested that has no transactions, so no month options
    /// exist for it. Signaled explicitly rather than coerced to an empty
    /// list.
    #[error("no transactions recorded for year {0}")]
    YearNotAvailable(i32),
}

pub type DashboardResult<T> = Result<T, DashboardError>;

impl IntoResponse for DashboardError {
    fn into_response(self) -> Response {
        let status = match &self {
            DashboardError::Query(_) => StatusCode::INTERNAL_SERVER_ERROR,
            DashboardError::YearNotAvailable(_) => StatusCode::NOT_FOUND,
        };
        tracing::warn!(error = %self, "request failed");
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
