//! # Input Resolution
//!
//! Expands the caller's raw tokens into a deduplicated, sorted set of
//! candidate files. A token may be a literal path, a comma-joined list,
//! a glob pattern (recursive `**` supported), or a directory.
//!
//! Callers arrive with shell-unexpanded globs (when quoted) as often as
//! pre-expanded paths, so resolution behaves the same either way:
//!
//! - Tokens containing glob metacharacters are expanded; every matching
//!   file is added, and matching directories are walked. A pattern that
//!   matches nothing contributes nothing — "no matches" is not an error,
//!   and an all-empty result is what triggers the orchestrator's
//!   syntax-check fallback.
//! - Directory tokens are walked recursively; only files with a
//!   recognized structured-data extension are kept, so a `README.md`
//!   sitting next to the configs is silently ignored.
//! - Anything else is kept verbatim as a literal path. Existence and
//!   format are the loader's business; an explicitly named file is never
//!   filtered here, whatever its extension.
//!
//! The result is a `BTreeSet`, so duplicates collapse and processing
//! order is deterministic regardless of token order.

use std::collections::BTreeSet;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Extensions recognized when filtering directory walks and glob matches.
const STRUCTURED_EXTENSIONS: &[&str] = &["json", "yaml", "yml"];

/// Whether `path` has one of the recognized structured-data extensions.
pub fn has_structured_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| STRUCTURED_EXTENSIONS.contains(&ext))
}

/// Expand `tokens` into the set of candidate files.
///
/// # Errors
///
/// Fails only on filesystem access errors (unreadable directory during
/// a walk or glob expansion). Nonexistent literal paths and unmatched
/// patterns are not errors.
pub fn resolve<S: AsRef<str>>(tokens: &[S]) -> io::Result<BTreeSet<PathBuf>> {
    let mut files = BTreeSet::new();
    for token in tokens {
        for part in token.as_ref().split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            resolve_token(part, &mut files)?;
        }
    }
    Ok(files)
}

fn resolve_token(token: &str, files: &mut BTreeSet<PathBuf>) -> io::Result<()> {
    if is_glob_pattern(token) {
        return expand_glob(token, files);
    }

    let path = Path::new(token);
    if path.is_dir() {
        walk_directory(path, files)
    } else {
        // Literal path, added verbatim; the loader validates existence
        // and format.
        files.insert(path.to_path_buf());
        Ok(())
    }
}

/// Whether the token contains glob metacharacters.
///
/// Plain paths go through the directory/literal branches; only tokens
/// the shell would have expanded (had they not been quoted) are treated
/// as patterns.
fn is_glob_pattern(token: &str) -> bool {
    token.contains(['*', '?', '['])
}

fn expand_glob(pattern: &str, files: &mut BTreeSet<PathBuf>) -> io::Result<()> {
    let paths = match glob::glob(pattern) {
        Ok(paths) => paths,
        // An unparsable pattern is treated as a literal path, same as a
        // token with no metacharacters.
        Err(_) => {
            files.insert(PathBuf::from(pattern));
            return Ok(());
        }
    };

    for entry in paths {
        let path = entry.map_err(|e| e.into_error())?;
        if path.is_dir() {
            walk_directory(&path, files)?;
        } else {
            files.insert(path);
        }
    }
    Ok(())
}

fn walk_directory(dir: &Path, files: &mut BTreeSet<PathBuf>) -> io::Result<()> {
    for entry in WalkDir::new(dir) {
        let entry = entry.map_err(|e| {
            e.into_io_error()
                .unwrap_or_else(|| io::Error::other("filesystem loop during directory walk"))
        })?;
        if entry.file_type().is_file() && has_structured_extension(entry.path()) {
            files.insert(entry.into_path());
        }
    }
    Ok(())
}
