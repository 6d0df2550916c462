use crate::http::request::Version;

/// Status codes the server can answer with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 400 Bad Request
    BadRequest,
    /// 403 Forbidden
    Forbidden,
    /// 404 Not Found
    NotFound,
    /// 500 Internal Server Error
    InternalServerError,
    /// 501 Not Implemented
    NotImplemented,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// ```
    /// # use fileserve::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotImplemented.as_u16(), 501);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
            StatusCode::Forbidden => 403,
            StatusCode::NotFound => 404,
            StatusCode::InternalServerError => 500,
            StatusCode::NotImplemented => 501,
        }
    }

    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::Forbidden => "Forbidden",
            StatusCode::NotFound => "Not Found",
            StatusCode::InternalServerError => "Internal Server Error",
            StatusCode::NotImplemented => "Not Implemented",
        }
    }
}

/// A response whose body is fully in memory: error pages and listings.
///
/// File downloads write a [`ResponseHead`] and stream the body separately.
#[derive(Debug)]
pub struct Response {
    pub head: ResponseHead,
    pub body: Vec<u8>,
}

/// Status line and headers, in the order they go on the wire.
#[derive(Debug, Clone)]
pub struct ResponseHead {
    pub version: Version,
    pub status: StatusCode,
    pub headers: Vec<(String, String)>,
}

impl ResponseHead {
    /// A head that already carries `Connection: close`; every response on
    /// this server does.
    pub fn new(version: Version, status: StatusCode) -> Self {
        Self {
            version,
            status,
            headers: vec![("Connection".to_string(), "close".to_string())],
        }
    }

    /// Looks up a header, ignoring ASCII case in the name.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// Adds a header, replacing any existing header of the same name in
    /// place.
    pub fn set_header(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self
            .headers
            .iter_mut()
            .find(|(k, _)| k.eq_ignore_ascii_case(&key))
        {
            Some(slot) => slot.1 = value,
            None => self.headers.push((key, value)),
        }
    }

    /// Status line plus headers plus the blank separator line.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = format!(
            "{} {} {}\r\n",
            self.version.as_str(),
            self.status.as_u16(),
            self.status.reason_phrase()
        )
        .into_bytes();

        for (k, v) in &self.headers {
            buf.extend_from_slice(k.as_bytes());
            buf.extend_from_slice(b": ");
            buf.extend_from_slice(v.as_bytes());
            buf.extend_from_slice(b"\r\n");
        }
        buf.extend_from_slice(b"\r\n");
        buf
    }
}

/// Builder for in-memory responses.
///
/// ```ignore
/// let response = ResponseBuilder::new(Version::Http11, StatusCode::Ok)
///     .header("Content-Type", "text/html")
///     .body(html.into_bytes())
///     .build();
/// ```
pub struct ResponseBuilder {
    head: ResponseHead,
    body: Vec<u8>,
}

impl ResponseBuilder {
    pub fn new(version: Version, status: StatusCode) -> Self {
        Self {
            head: ResponseHead::new(version, status),
            body: Vec::new(),
        }
    }

    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.head.set_header(key, value);
        self
    }

    pub fn body(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    /// Builds the response, adding `Content-Length` from the body unless
    /// one was set explicitly.
    pub fn build(mut self) -> Response {
        if self.head.header("Content-Length").is_none() {
            self.head
                .set_header("Content-Length", self.body.len().to_string());
        }

        Response {
            head: self.head,
            body: self.body,
        }
    }
}

impl Response {
    /// A 200 HTML page.
    pub fn html(version: Version, body: impl Into<String>) -> Self {
        ResponseBuilder::new(version, StatusCode::Ok)
            .header("Content-Type", "text/html")
            .body(body.into().into_bytes())
            .build()
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = self.head.to_bytes();
        buf.extend_from_slice(&self.body);
        buf
    }
}

/// Head for a file download: content type and exact length, body follows.
pub fn file_head(version: Version, mime_type: &str, len: u64) -> ResponseHead {
    let mut head = ResponseHead::new(version, StatusCode::Ok);
    head.set_header("Content-Type", mime_type);
    head.set_header("Content-Length", len.to_string());
    head
}
