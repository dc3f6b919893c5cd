// src/infrastructure/repositories/export_file.rs
//! Bookmark store in shell `export` syntax.
//!
//! Every bookmark is one line `export DIR_<NAME>="<PATH>"`, so the file can be
//! sourced by a shell to get `$DIR_<NAME>` variables. Other lines are ignored.
use crate::domain::bookmark::{Bookmark, Bookmarks};
use crate::domain::error::DomainResult;
use crate::domain::repositories::repository::BookmarkRepository;
use std::borrow::Cow;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, instrument, trace};

pub const EXPORT_PREFIX: &str = "export DIR_";

/// Parses one store line, `None` for lines that are not bookmark exports.
///
/// Works on raw bytes: paths are kept byte for byte, names are decoded lossily.
pub fn parse_line(line: &[u8]) -> Option<Bookmark> {
    let rest = line.strip_prefix(EXPORT_PREFIX.as_bytes())?;
    let eq = rest.iter().position(|&b| b == b'=')?;
    let (name, value) = (&rest[..eq], &rest[eq + 1..]);
    Some(Bookmark {
        name: String::from_utf8_lossy(name).into_owned(),
        path: path_from_bytes(trim_quotes(value)),
    })
}

fn trim_quotes(mut value: &[u8]) -> &[u8] {
    while let [b'"', rest @ ..] = value {
        value = rest;
    }
    while let [rest @ .., b'"'] = value {
        value = rest;
    }
    value
}

#[cfg(unix)]
fn path_from_bytes(bytes: &[u8]) -> PathBuf {
    use std::os::unix::ffi::OsStrExt;
    PathBuf::from(std::ffi::OsStr::from_bytes(bytes))
}

#[cfg(not(unix))]
fn path_from_bytes(bytes: &[u8]) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(bytes).into_owned())
}

#[cfg(unix)]
fn path_to_bytes(path: &Path) -> Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;
    Cow::Borrowed(path.as_os_str().as_bytes())
}

#[cfg(not(unix))]
fn path_to_bytes(path: &Path) -> Cow<'_, [u8]> {
    match path.to_string_lossy() {
        Cow::Borrowed(s) => Cow::Borrowed(s.as_bytes()),
        Cow::Owned(s) => Cow::Owned(s.into_bytes()),
    }
}

/// Paths are quoted naively: an embedded `"` is written as is.
pub fn format_line(bookmark: &Bookmark) -> Vec<u8> {
    let mut line = Vec::with_capacity(EXPORT_PREFIX.len() + bookmark.name.len() + 3);
    line.extend_from_slice(EXPORT_PREFIX.as_bytes());
    line.extend_from_slice(bookmark.name.as_bytes());
    line.extend_from_slice(b"=\"");
    line.extend_from_slice(&path_to_bytes(&bookmark.path));
    line.push(b'"');
    line
}

/// Later lines win when a name occurs more than once.
pub fn parse(content: &[u8]) -> Bookmarks {
    content
        .split(|&b| b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
        .filter_map(parse_line)
        .collect()
}

pub fn render(bookmarks: &Bookmarks) -> Vec<u8> {
    let mut content = Vec::new();
    for bookmark in bookmarks {
        content.extend_from_slice(&format_line(bookmark));
        content.push(b'\n');
    }
    content
}

#[derive(Debug, Clone)]
pub struct ExportFileStore {
    path: PathBuf,
}

impl ExportFileStore {
    /// Wraps an existing store file without touching the filesystem.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Opens the store at `path`, creating an empty file (and missing parent
    /// directories) if there is none yet.
    #[instrument(level = "debug", skip_all, fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> DomainResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            if let Some(parent) = non_empty_parent(path) {
                fs::create_dir_all(parent)?;
            }
            OpenOptions::new().create(true).append(true).open(path)?;
            debug!("Created empty bookmark store");
        }
        Ok(Self::new(path))
    }
}

fn non_empty_parent(path: &Path) -> Option<&Path> {
    path.parent().filter(|p| !p.as_os_str().is_empty())
}

/// The file a write replaces. Symlinks are resolved so the link itself stays in place.
fn write_target(path: &Path) -> io::Result<PathBuf> {
    match fs::canonicalize(path) {
        Ok(resolved) => Ok(resolved),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(path.to_path_buf()),
        Err(e) => Err(e),
    }
}

impl BookmarkRepository for ExportFileStore {
    #[instrument(level = "debug", skip(self))]
    fn read(&self) -> DomainResult<Bookmarks> {
        let bytes = fs::read(&self.path)?;
        let bookmarks = parse(&bytes);
        trace!("Read {} bookmarks from {:?}", bookmarks.len(), self.path);
        Ok(bookmarks)
    }

    /// Writes into a temporary sibling of the (symlink resolved) store file which then
    /// replaces it, so a crash mid-write leaves the previous content intact.
    /// Permissions of the existing file are carried over.
    #[instrument(level = "debug", skip(self, bookmarks), fields(count = bookmarks.len()))]
    fn write(&self, bookmarks: &Bookmarks) -> DomainResult<()> {
        let target = write_target(&self.path)?;
        let dir = non_empty_parent(&target).unwrap_or_else(|| Path::new("."));
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(&render(bookmarks))?;
        tmp.flush()?;
        if let Ok(meta) = fs::metadata(&target) {
            tmp.as_file().set_permissions(meta.permissions())?;
        }
        tmp.persist(&target).map_err(|e| e.error)?;
        debug!("Wrote {} bookmarks to {:?}", bookmarks.len(), target);
        Ok(())
    }

    fn location(&self) -> &Path {
        &self.path
    }
}
