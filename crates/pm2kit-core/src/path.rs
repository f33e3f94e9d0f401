//! Working directory normalization
//!
//! Paths are compared after a purely lexical normalization: made absolute
//! against a base directory, `.` and `..` resolved, separators unified to `/`,
//! trailing separators dropped and the whole string lower-cased. The
//! filesystem is never consulted, so a directory that no longer exists still
//! normalizes and symlinks are not followed.

use std::path::Path;

/// Normalize `path`, resolving relative paths against `base`.
///
/// A missing or empty path normalizes to the empty string.
pub fn normalize_path(path: Option<&str>, base: &Path) -> String {
    let Some(path) = path.filter(|p| !p.is_empty()) else {
        return String::new();
    };

    let unified = path.replace('\\', "/");
    let absolute = if split_root(&unified).is_some() {
        unified
    } else {
        let base = base.to_string_lossy().replace('\\', "/");
        format!("{}/{}", base, unified)
    };

    let (root, rest) = split_root(&absolute).unwrap_or((String::new(), absolute.as_str()));

    let mut segments: Vec<&str> = Vec::new();
    for segment in rest.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop();
            }
            other => segments.push(other),
        }
    }

    let mut normalized = root;
    normalized.push_str(&segments.join("/"));
    normalized.to_lowercase()
}

/// Normalize the directory the caller is running from.
pub fn normalize_current_dir(current_dir: &Path) -> String {
    normalize_path(Some(&current_dir.to_string_lossy()), current_dir)
}

/// Split an already `/`-separated path into its root and the remainder.
fn split_root(path: &str) -> Option<(String, &str)> {
    let bytes = path.as_bytes();
    if bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':' {
        return Some((format!("{}/", &path[..2]), &path[2..]));
    }
    if let Some(rest) = path.strip_prefix("//") {
        return Some(("//".to_string(), rest));
    }
    path.strip_prefix('/').map(|rest| ("/".to_string(), rest))
}
