//! Single-page UI and its static assets

use axum::{
    http::header,
    response::{Html, IntoResponse},
};

const INDEX_HTML: &str = include_str!("../../assets/index.html");
const APP_JS: &str = include_str!("../../assets/app.js");
const MARKER_SVG: &str = include_str!("../../assets/marker.svg");

/// The roulette page
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

pub async fn app_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        APP_JS,
    )
}

/// Default result marker (60×60, pin tip at the bottom centre)
pub async fn marker_svg() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "image/svg+xml")], MARKER_SVG)
}
