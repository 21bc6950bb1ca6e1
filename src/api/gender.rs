use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderName},
    response::{Html, IntoResponse, Response},
};

use crate::error::ApiError;
use crate::server::AppState;

/// Serve the gender app upload form
pub async fn handle_gender_form() -> Html<&'static str> {
    Html(include_str!("../../static/gender.html"))
}

/// Accept an image for the gender app and return its grayscale preview
///
/// The endpoint runs the inspection pipeline only: decode the body, reduce
/// to grayscale, answer with the PNG. Classification happens elsewhere.
#[utoipa::path(
    post,
    path = "/faceapp/gender",
    request_body(
        content = Vec<u8>,
        description = "Encoded image (JPEG or PNG)",
        content_type = "application/octet-stream"
    ),
    responses(
        (status = 200, description = "Grayscale preview PNG", content_type = "image/png"),
        (status = 400, description = "Empty request body"),
        (status = 413, description = "Body exceeds the configured upload limit"),
        (status = 422, description = "Body is not a decodable image"),
    ),
    tag = "FaceApp"
)]
pub async fn handle_gender(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, ApiError> {
    if body.is_empty() {
        return Err(ApiError::EmptyBody);
    }

    let max = state.config.max_upload_bytes;
    if body.len() > max {
        return Err(ApiError::BodyTooLarge {
            size: body.len(),
            max,
        });
    }

    tracing::info!(bytes = body.len(), "Gender app upload received");

    let preview = state.inspector.grayscale_preview(&body)?;

    Ok((
        [
            (header::CONTENT_TYPE, "image/png".to_string()),
            (header::CONTENT_LENGTH, preview.png.len().to_string()),
            (
                HeaderName::from_static("x-image-width"),
                preview.width.to_string(),
            ),
            (
                HeaderName::from_static("x-image-height"),
                preview.height.to_string(),
            ),
        ],
        preview.png,
    )
        .into_response())
}
