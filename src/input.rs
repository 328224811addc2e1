//! Input collection: a single capture file, or every capture under a
//! directory.
//!
//! Directory mode exists for sessions recorded in multiple parts; every
//! capture aligns against the same event log using its own creation time.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

fn is_wav(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("wav"))
        .unwrap_or(false)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|s| s.to_str())
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

/// Expand the input path into the list of captures to split, sorted for a
/// stable processing order. A file path is returned as-is.
pub fn collect_wavs(path: &Path) -> Vec<PathBuf> {
    if path.is_file() {
        return vec![path.to_path_buf()];
    }

    let mut files: Vec<PathBuf> = Vec::new();
    for entry in WalkDir::new(path)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e.path()))
        .filter_map(Result::ok)
    {
        let p = entry.path();
        if p.is_file() && is_wav(p) {
            files.push(p.to_path_buf());
        }
    }
    files.sort();
    files
}
