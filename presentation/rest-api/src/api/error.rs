use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Error body. `message` is a code-style key for client-side i18n.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

/// Maps a domain error to its HTTP status and body.
pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
