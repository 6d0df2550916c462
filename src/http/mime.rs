//! Content types by file extension.

/// Advertised for files with no or an unrecognised extension. Not a
/// registered type; browsers treat it as something to save to disk.
pub const UNKNOWN: &str = "x-application/x-unknown";

/// Returns the content type for `file_name`, matching its extension
/// case-insensitively.
///
/// ```
/// # use fileserve::http::mime::mime_type;
/// assert_eq!(mime_type("index.HTML"), "text/html");
/// assert_eq!(mime_type("README"), "x-application/x-unknown");
/// ```
pub fn mime_type(file_name: &str) -> &'static str {
    let Some((_, ext)) = file_name.rsplit_once('.') else {
        return UNKNOWN;
    };

    match ext.to_ascii_lowercase().as_str() {
        "txt" => "text/plain",
        "html" | "htm" => "text/html",
        "css" => "text/css",
        "js" => "text/javascript",
        "java" => "text/x-java",
        "jpeg" | "jpg" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "ico" => "image/x-icon",
        "class" => "application/java-vm",
        "jar" => "application/java-archive",
        "zip" => "application/zip",
        "xml" => "application/xml",
        "xhtml" => "application/xhtml+xml",
        _ => UNKNOWN,
    }
}
