//! Error pages.

use tokio::io::AsyncWrite;

use crate::http::request::Version;
use crate::http::response::{Response, ResponseBuilder, StatusCode};
use crate::http::writer::ResponseWriter;

/// Every failure a single connection can report to its peer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpError {
    BadRequest,
    Forbidden,
    NotFound,
    InternalServerError,
    NotImplemented,
}

impl HttpError {
    pub fn status(&self) -> StatusCode {
        match self {
            HttpError::BadRequest => StatusCode::BadRequest,
            HttpError::Forbidden => StatusCode::Forbidden,
            HttpError::NotFound => StatusCode::NotFound,
            HttpError::InternalServerError => StatusCode::InternalServerError,
            HttpError::NotImplemented => StatusCode::NotImplemented,
        }
    }

    /// One-sentence explanation shown on the error page.
    pub fn description(&self) -> &'static str {
        match self {
            HttpError::BadRequest => "The syntax of the request is bad.",
            HttpError::Forbidden => "You don't have permission to read the file.",
            HttpError::NotFound => "The resource that you requested does not exist.",
            HttpError::InternalServerError => "Unexpected error in handling the connection.",
            HttpError::NotImplemented => "The method has not been implemented yet.",
        }
    }
}

/// Builds the complete error response for `err`.
///
/// Error pages always go out as `HTTP/1.1`: the request line may not have
/// been readable far enough to know what the client speaks.
pub fn error_response(err: HttpError) -> Response {
    let status = err.status();
    let body = format!(
        "<html><head><title>Error</title></head><body>\r\n\
         <h2>Error: {} {}</h2>\r\n\
         <p>{}</p>\r\n\
         </body></html>\r\n",
        status.as_u16(),
        status.reason_phrase(),
        err.description()
    );

    ResponseBuilder::new(Version::Http11, status)
        .header("Content-Type", "text/html")
        .body(body.into_bytes())
        .build()
}

/// Writes the error page for `err` to `out`.
///
/// Failures are swallowed: the peer may already be gone and there is no
/// one left to tell.
pub async fn send_error<W>(out: &mut W, err: HttpError)
where
    W: AsyncWrite + Unpin,
{
    let mut writer = ResponseWriter::new(&error_response(err));
    if let Err(e) = writer.write_to_stream(out).await {
        tracing::debug!(status = err.status().as_u16(), "could not send error page: {}", e);
    }
}
