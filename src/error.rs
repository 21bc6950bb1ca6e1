use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use img_inspect::{InspectError, LoadError, RenderError, ShapeError};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Empty request body")]
    EmptyBody,

    #[error("Request body too large: {size} bytes (max {max})")]
    BodyTooLarge { size: usize, max: usize },

    #[error("Image not found: {0}")]
    NotFound(String),

    #[error("Undecodable image: {0}")]
    UndecodableImage(String),

    #[error("Invalid image shape: {0}")]
    InvalidShape(#[from] ShapeError),

    #[error("Rendering error: {0}")]
    Render(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<LoadError> for ApiError {
    fn from(e: LoadError) -> Self {
        match e {
            LoadError::FileNotFound { .. } => ApiError::NotFound(e.to_string()),
            LoadError::Decode { .. } | LoadError::DecodeBytes { .. } => {
                ApiError::UndecodableImage(e.to_string())
            }
        }
    }
}

impl From<RenderError> for ApiError {
    fn from(e: RenderError) -> Self {
        ApiError::Render(e.to_string())
    }
}

impl From<InspectError> for ApiError {
    fn from(e: InspectError) -> Self {
        match e {
            InspectError::Load(e) => e.into(),
            InspectError::Shape(e) => e.into(),
            InspectError::Render(e) => e.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::EmptyBody => StatusCode::BAD_REQUEST,
            ApiError::BodyTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::UndecodableImage(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InvalidShape(_) => StatusCode::BAD_REQUEST,
            ApiError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "status": status.as_u16(),
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_empty_body() {
        let error = ApiError::EmptyBody;
        assert_eq!(error.to_string(), "Empty request body");
    }

    #[test]
    fn test_api_error_body_too_large() {
        let error = ApiError::BodyTooLarge {
            size: 100_000,
            max: 90_000,
        };
        assert_eq!(
            error.to_string(),
            "Request body too large: 100000 bytes (max 90000)"
        );
    }

    #[test]
    fn test_load_error_maps_by_class() {
        let not_found = LoadError::FileNotFound {
            path: "/no/such/file.jpg".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(matches!(ApiError::from(not_found), ApiError::NotFound(_)));
    }

    #[test]
    fn test_shape_error_maps_to_invalid_shape() {
        let shape = ShapeError::ChannelCount {
            expected: 3,
            actual: 1,
        };
        let api_error: ApiError = shape.into();
        assert!(matches!(api_error, ApiError::InvalidShape(_)));
    }

    #[test]
    fn test_api_error_into_response_status_codes() {
        let response = ApiError::EmptyBody.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::BodyTooLarge { size: 2, max: 1 }.into_response();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

        let response = ApiError::NotFound("x".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let response = ApiError::UndecodableImage("x".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let response = ApiError::InvalidShape(ShapeError::ChannelCount {
            expected: 3,
            actual: 4,
        })
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let response = ApiError::Render("x".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = ApiError::Internal("x".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
