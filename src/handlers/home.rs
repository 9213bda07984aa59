//! Input form page

use axum::response::Html;

/// Serve the employee-record form. The page is static; prediction
/// results are fetched from `/predict` by the embedded script.
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../templates/index.html"))
}
