// tailplot - core/select.rs
//
// File selection: resolve the input glob pattern to candidate files ordered
// by modification time, newest first.
//
// Reads only file *metadata*, never file *contents* -- content I/O belongs to
// core::reader. An empty match list is a valid result, not an error; the
// caller reports it as "no input files" and terminates cleanly.

use crate::core::model::CandidateFile;
use crate::util::error::FileSystemError;
use chrono::{DateTime, Utc};

/// Resolve `pattern` to the list of matching files, sorted by modification
/// time descending (newest first). Ties keep their glob iteration order.
///
/// # Fatal errors
/// Returns `Err` if the pattern cannot be compiled, if a matched path cannot
/// be examined mid-iteration, or if stat-ing a matched file fails. Partial
/// results are never returned.
pub fn select_files(pattern: &str) -> Result<Vec<CandidateFile>, FileSystemError> {
    let matches = glob::glob(pattern).map_err(|source| FileSystemError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })?;

    let mut files: Vec<CandidateFile> = Vec::new();
    for entry in matches {
        let path = entry.map_err(|source| FileSystemError::Glob { source })?;

        let metadata = std::fs::metadata(&path).map_err(|source| FileSystemError::Stat {
            path: path.clone(),
            source,
        })?;

        // A pattern like /var/log/speed* can also match directories; only
        // regular files carry data rows.
        if !metadata.is_file() {
            tracing::debug!(path = %path.display(), "Skipping non-file glob match");
            continue;
        }

        let modified = metadata
            .modified()
            .map_err(|source| FileSystemError::Stat {
                path: path.clone(),
                source,
            })?;

        files.push(CandidateFile {
            path,
            modified: DateTime::<Utc>::from(modified),
        });
    }

    // Newest first. sort_by is stable, so equal mtimes keep iteration order.
    files.sort_by(|a, b| b.modified.cmp(&a.modified));

    tracing::debug!(pattern, matched = files.len(), "File selection complete");

    Ok(files)
}

// =============================================================================
// Tests
// =============================================================================
