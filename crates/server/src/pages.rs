//! Static HTML pages, embedded at compile time.

use axum::response::Html;

const LANDING: &str = include_str!("../assets/index.html");
const DASHBOARD: &str = include_str!("../assets/dashboard.html");

pub async fn landing() -> Html<&'static str> {
    Html(LANDING)
}

pub async fn dashboard() -> Html<&'static str> {
    Html(DASHBOARD)
}
