//! Capability-based helpers for reading the touring input files.
//!
//! Every helper resolves the parent directory with ambient authority and then
//! performs the actual IO through the `cap-std` directory handle, so callers
//! only ever touch the named file.
#![forbid(unsafe_code)]

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};
use std::io;

/// What a path refers to on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file.
    File,
    /// A directory.
    Directory,
    /// Anything else, such as a socket or device.
    Other,
}

/// Split `path` into an ambient handle on its parent directory and the file
/// name within it.
///
/// # Errors
/// Fails when `path` has no file name or the parent directory cannot be
/// opened.
pub fn open_parent(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, &str)> {
    let name = path
        .file_name()
        .ok_or_else(|| io::Error::other(format!("{path} does not name a file")))?;
    let parent = match path.parent() {
        Some(dir) if !dir.as_str().is_empty() => dir,
        _ => Utf8Path::new("."),
    };
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, name))
}

/// Read a UTF-8 text file in full.
///
/// # Errors
/// Propagates IO failures, including invalid UTF-8 content.
pub fn read_utf8_file(path: &Utf8Path) -> io::Result<String> {
    let (dir, name) = open_parent(path)?;
    dir.read_to_string(name)
}

/// Classify the entry at `path`.
///
/// # Errors
/// Returns the underlying IO error, e.g. `NotFound` for a missing entry.
pub fn entry_kind(path: &Utf8Path) -> io::Result<EntryKind> {
    let (dir, name) = open_parent(path)?;
    let meta = dir.metadata(name)?;
    Ok(if meta.is_file() {
        EntryKind::File
    } else if meta.is_dir() {
        EntryKind::Directory
    } else {
        EntryKind::Other
    })
}
