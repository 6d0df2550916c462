#![allow(dead_code)]

use std::fs;

use fileserve::config::Config;

/// A served root with `a.txt` (`hello`) and an empty `sub/`.
pub fn site() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), b"hello").unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    dir
}

pub fn config_for(dir: &tempfile::TempDir) -> Config {
    Config::new("127.0.0.1", 50505, dir.path()).unwrap()
}

/// A response split into status line, headers and raw body bytes.
#[derive(Debug)]
pub struct RawResponse {
    pub status_line: String,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn parse(raw: &[u8]) -> Self {
        let end = raw
            .windows(4)
            .position(|w| w == b"\r\n\r\n")
            .expect("response has no header terminator");
        let head = std::str::from_utf8(&raw[..end]).unwrap();
        let mut lines = head.split("\r\n");
        let status_line = lines.next().unwrap().to_string();
        let headers = lines
            .map(|line| {
                let (k, v) = line.split_once(':').unwrap();
                (k.trim().to_string(), v.trim().to_string())
            })
            .collect();

        Self {
            status_line,
            headers,
            body: raw[end + 4..].to_vec(),
        }
    }

    pub fn status(&self) -> u16 {
        self.status_line
            .split_whitespace()
            .nth(1)
            .unwrap()
            .parse()
            .unwrap()
    }

    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}
