use std::io::{self, ErrorKind};
use std::path::{Component, Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use tokio::fs::{self, File};

use crate::http::mime::mime_type;

/// Snapshot of one directory child, taken while building a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String,
    pub is_dir: bool,
    pub size: u64,
    pub modified: SystemTime,
}

/// What a request target turned out to be on disk.
#[derive(Debug)]
pub enum ResolvedTarget {
    Directory {
        path: PathBuf,
        /// In the order the filesystem enumerated them; not sorted.
        entries: Vec<FileEntry>,
        is_root: bool,
    },
    RegularFile {
        path: PathBuf,
        file: File,
        size: u64,
        mime_type: &'static str,
    },
    Missing,
    Unreadable,
}

/// Joins a request target onto `root`.
///
/// Each `/`-separated segment is percent-decoded before it is used. Returns
/// the filesystem path and whether it is the root itself, or `None` when
/// the target climbs above the root with `..` or a segment does not decode
/// to a single path component.
pub fn join_target(root: &Path, target: &str) -> Option<(PathBuf, bool)> {
    let mut parts: Vec<String> = Vec::new();

    for segment in target.split('/') {
        let segment = urlencoding::decode(segment).ok()?;
        match &*segment {
            "" | "." => {}
            ".." => {
                parts.pop()?;
            }
            s => {
                // A segment must stay a single normal path component.
                let mut components = Path::new(s).components();
                match (components.next(), components.next()) {
                    (Some(Component::Normal(_)), None) if !s.contains(['\0', '/']) => {
                        parts.push(s.to_string())
                    }
                    _ => return None,
                }
            }
        }
    }

    let mut path = root.to_path_buf();
    path.extend(&parts);
    Some((path, parts.is_empty()))
}

/// Looks `target` up under `root`.
///
/// Missing paths and permission problems are classified; any other I/O
/// failure is returned as an error.
pub async fn resolve(root: &Path, target: &str) -> io::Result<ResolvedTarget> {
    let Some((path, is_root)) = join_target(root, target) else {
        return Ok(ResolvedTarget::Missing);
    };

    let meta = match fs::metadata(&path).await {
        Ok(meta) => meta,
        Err(e) => return classify_error(e),
    };

    if meta.is_dir() {
        return match read_entries(&path).await {
            Ok(entries) => Ok(ResolvedTarget::Directory {
                path,
                entries,
                is_root,
            }),
            Err(e) => classify_error(e),
        };
    }

    // Sockets, FIFOs and devices are not served.
    if !meta.is_file() {
        return Ok(ResolvedTarget::Unreadable);
    }

    let file = match File::open(&path).await {
        Ok(file) => file,
        Err(e) => return classify_error(e),
    };

    let size = file.metadata().await?.len();
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    Ok(ResolvedTarget::RegularFile {
        mime_type: mime_type(&name),
        path,
        file,
        size,
    })
}

/// Maps a lookup failure onto a target where it has one.
///
/// A target that vanished or runs through a file is `Missing`. Permission
/// failures, including an untraversable parent directory, are `Unreadable`.
/// Everything else stays an error.
pub fn classify_error(e: io::Error) -> io::Result<ResolvedTarget> {
    match e.kind() {
        ErrorKind::NotFound | ErrorKind::NotADirectory => Ok(ResolvedTarget::Missing),
        ErrorKind::PermissionDenied => Ok(ResolvedTarget::Unreadable),
        _ => Err(e),
    }
}

async fn read_entries(dir: &Path) -> io::Result<Vec<FileEntry>> {
    let mut read_dir = fs::read_dir(dir).await?;
    let mut entries = Vec::new();

    while let Some(entry) = read_dir.next_entry().await? {
        // Follow symlinks, but still list a dangling one as itself.
        let meta = match fs::metadata(entry.path()).await {
            Ok(meta) => meta,
            Err(_) => match entry.metadata().await {
                Ok(meta) => meta,
                Err(e) => {
                    tracing::debug!(entry = ?entry.path(), "skipping unlistable entry: {}", e);
                    continue;
                }
            },
        };

        entries.push(FileEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            is_dir: meta.is_dir(),
            size: meta.len(),
            modified: meta.modified().unwrap_or(UNIX_EPOCH),
        });
    }

    Ok(entries)
}
