use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::render::render_error_page;

#[derive(Debug)]
pub enum HttpError {
    BadGateway(String),
    ServiceUnavailable(String),
}

impl From<inventory_application::AppError> for HttpError {
    fn from(value: inventory_application::AppError) -> Self {
        match value {
            inventory_application::AppError::NotReady(msg) => HttpError::ServiceUnavailable(msg),
            err @ inventory_application::AppError::Upstream(_) => {
                HttpError::BadGateway(err.to_string())
            }
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            HttpError::BadGateway(msg) => (StatusCode::BAD_GATEWAY, msg),
            HttpError::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
        };
        (status, Html(render_error_page(&message))).into_response()
    }
}
