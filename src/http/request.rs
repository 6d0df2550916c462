/// HTTP request methods.
///
/// Only `GET` is served. The others are recognised so they can be named in
/// logs; anything unknown is kept verbatim in `Extension`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    GET,
    POST,
    PUT,
    DELETE,
    HEAD,
    OPTIONS,
    PATCH,
    Extension(String),
}

/// The two protocol versions the server will answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Version {
    Http10,
    Http11,
}

/// The request line of a single request: `METHOD SP TARGET SP VERSION`.
///
/// Headers and body are never read, so they are not represented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    /// The raw target path as sent by the client, e.g. `/docs/index.html`.
    pub path: String,
    pub version: Version,
}

impl Method {
    /// Parses a method token, ignoring ASCII case.
    ///
    /// ```
    /// # use fileserve::http::request::Method;
    /// assert_eq!(Method::from_token("get"), Method::GET);
    /// assert_eq!(Method::from_token("BREW"), Method::Extension("BREW".into()));
    /// ```
    pub fn from_token(s: &str) -> Self {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Method::GET,
            "POST" => Method::POST,
            "PUT" => Method::PUT,
            "DELETE" => Method::DELETE,
            "HEAD" => Method::HEAD,
            "OPTIONS" => Method::OPTIONS,
            "PATCH" => Method::PATCH,
            _ => Method::Extension(s.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::DELETE => "DELETE",
            Method::HEAD => "HEAD",
            Method::OPTIONS => "OPTIONS",
            Method::PATCH => "PATCH",
            Method::Extension(s) => s,
        }
    }
}

impl Version {
    /// Parses `HTTP/1.0` or `HTTP/1.1`, ignoring ASCII case.
    pub fn from_token(s: &str) -> Option<Self> {
        if s.eq_ignore_ascii_case("HTTP/1.0") {
            Some(Version::Http10)
        } else if s.eq_ignore_ascii_case("HTTP/1.1") {
            Some(Version::Http11)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Version::Http10 => "HTTP/1.0",
            Version::Http11 => "HTTP/1.1",
        }
    }
}
