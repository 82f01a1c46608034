use warp::http::StatusCode;
use warp::reply::Response;
use warp::Reply;

use crate::domain::errors::DomainError;

const INTERNAL_ERROR_BODY: &str = "internal server error";

pub fn status_for(err: &DomainError) -> StatusCode {
    match err {
        err if err.is_validation() => StatusCode::BAD_REQUEST,
        DomainError::VideoNotFound => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Single translation point from use-case errors to HTTP responses
pub fn error_response(err: &DomainError) -> Response {
    let status = status_for(err);
    let body = if status == StatusCode::INTERNAL_SERVER_ERROR {
        tracing::error!(error = %err, "Request failed");
        INTERNAL_ERROR_BODY.to_string()
    } else {
        err.to_string()
    };

    warp::reply::with_status(body, status).into_response()
}
