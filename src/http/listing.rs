//! HTML directory listings.

use std::borrow::Cow;

use chrono::{DateTime, Local};

use crate::fs::FileEntry;

const KB: u64 = 1024;
const MB: u64 = 1024 * 1024;

/// Renders the listing page for the directory requested as `display_path`.
///
/// Rows follow the order of `entries`. A `../` row is added unless the
/// directory is the served root. Links are percent-encoded; visible names
/// are HTML-escaped.
pub fn render(display_path: &str, entries: &[FileEntry], is_root: bool) -> String {
    let mut html = String::new();
    let shown = urlencoding::decode(display_path).unwrap_or(Cow::Borrowed(display_path));

    html.push_str("<html><head><title>Directory Listing</title></head><body>\r\n");
    html.push_str(&format!(
        "<h1>Directory Listing</h1><h3>{}</h3>\r\n",
        escape(&shown)
    ));
    html.push_str(
        "<table><tr><th>Filename</th><th>Size</th><th>Last-Modified</th></tr>\r\n",
    );

    if !is_root {
        html.push_str("<tr><td><a href=\"../\">../</a></td><td></td><td></td></tr>\r\n");
    }

    for entry in entries {
        let name = escape(&entry.name);
        let href = urlencoding::encode(&entry.name);
        let (link, size) = if entry.is_dir {
            (format!("{href}/"), "-".to_string())
        } else {
            (href.into_owned(), format_size(entry.size))
        };

        html.push_str(&format!(
            "<tr><td><a href=\"{link}\">{name}</a></td>\
             <td align=\"right\">{size}</td><td>{}</td></tr>\r\n",
            format_modified(entry)
        ));
    }

    html.push_str("</table><hr></body></html>\r\n");
    html
}

/// Human-readable size: whole bytes and kilobytes, megabytes to two places.
///
/// ```
/// # use fileserve::http::listing::format_size;
/// assert_eq!(format_size(512), "512 B");
/// assert_eq!(format_size(2048), "2 KB");
/// assert_eq!(format_size(3 * 1024 * 1024 / 2), "1.50 MB");
/// ```
pub fn format_size(bytes: u64) -> String {
    if bytes < KB {
        format!("{bytes} B")
    } else if bytes < MB {
        format!("{} KB", bytes / KB)
    } else {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    }
}

fn format_modified(entry: &FileEntry) -> String {
    let modified: DateTime<Local> = entry.modified.into();
    modified.format("%Y-%m-%d %H:%M").to_string()
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
