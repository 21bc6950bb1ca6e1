//! Static page views.
//!
//! The face-app pages carry no server-side state; each handler serves an
//! embedded HTML document.

use axum::response::Html;

/// Serve the base layout page
pub async fn handle_base() -> Html<&'static str> {
    Html(include_str!("../../static/base.html"))
}

/// Serve the index page
pub async fn handle_index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

/// Serve the face app landing page
pub async fn handle_faceapp() -> Html<&'static str> {
    Html(include_str!("../../static/faceapp.html"))
}
