use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use axum::{routing::get, Router};

use crate::state::AppState;

/// The browser-side RUM tracker, compiled into the binary.
const TRACKER_JS: &str = include_str!("../../assets/rum-tracker.js");

/// GET /tracker.js -- serve the RUM tracker script.
///
/// Sites embed it with a plain `<script src>` pointing at the collector;
/// the script derives its flush endpoint from its own `src` origin.
async fn tracker() -> impl IntoResponse {
    (
        [(CONTENT_TYPE, "application/javascript; charset=utf-8")],
        TRACKER_JS,
    )
}

pub fn router() -> Router<AppState> {
    Router::new().route("/tracker.js", get(tracker))
}
