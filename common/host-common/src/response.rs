//! Plain-text response helpers
//!
//! Every host route answers with `Content-Type: text/plain` and nothing
//! else, so handlers build their replies through these functions.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

/// Create a plain-text response with the given status
///
/// # Example
///
/// ```rust,ignore
/// use axum::http::StatusCode;
/// use host_common::text_response;
///
/// let response = text_response(StatusCode::NOT_FOUND, "404 - Not Found");
/// ```
pub fn text_response(status: StatusCode, body: impl Into<String>) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "text/plain")],
        body.into(),
    )
        .into_response()
}

/// Create a `200 OK` plain-text response
pub fn text_ok(body: impl Into<String>) -> Response {
    text_response(StatusCode::OK, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_response_status_and_content_type() {
        let response = text_response(StatusCode::NOT_FOUND, "missing");
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "text/plain"
        );
    }

    #[test]
    fn test_text_ok() {
        let response = text_ok("hello");
        assert_eq!(response.status(), StatusCode::OK);
    }
}
