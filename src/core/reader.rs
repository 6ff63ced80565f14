// tailplot - core/reader.rs
//
// Bounded multi-file tail read.
//
// Files arrive newest first (core::select order). Each file contributes its
// *last* K lines, where K is what remains of the line budget; a file's own
// lines stay in original top-to-bottom order. Because the final sequence must
// be oldest-first overall, every newly visited (older) file's chunk is
// prepended in front of the accumulator:
//
//     merged = chunk(file_i) ++ merged_so_far
//
// One file is opened, fully read, and closed at a time; any read failure is
// fatal to the whole run (no partial chart). Once the budget is satisfied,
// remaining files are not opened at all.

use crate::core::model::CandidateFile;
use crate::util::constants::FIELD_DELIMITER;
use crate::util::error::FileSystemError;
use std::path::Path;

/// Collect the most recent `budget` data rows across `files` (newest first),
/// returned oldest-first, each line split on the comma delimiter.
///
/// `budget == 0` means unbounded: every line of every file.
///
/// # Progress reporting
/// `on_file` is called once per file actually read, receiving the path and
/// the number of lines taken from it. The callback should be cheap (e.g.
/// print a line); it is called on the caller's thread.
pub fn read_recent_rows<F>(
    files: &[CandidateFile],
    budget: usize,
    mut on_file: F,
) -> Result<Vec<Vec<String>>, FileSystemError>
where
    F: FnMut(&Path, usize),
{
    let mut merged: Vec<Vec<String>> = Vec::new();

    for file in files {
        // Budget satisfied: stop before opening the next (older) file.
        if budget > 0 && merged.len() >= budget {
            break;
        }

        let content =
            std::fs::read_to_string(&file.path).map_err(|source| FileSystemError::Read {
                path: file.path.clone(),
                source,
            })?;

        let lines: Vec<&str> = content.lines().collect();
        let take = if budget == 0 {
            lines.len()
        } else {
            lines.len().min(budget - merged.len())
        };
        let start = lines.len() - take;

        tracing::debug!(
            file = %file.path.display(),
            available = lines.len(),
            take,
            collected = merged.len(),
            "Tail read"
        );
        on_file(&file.path, take);

        // Prepend this (older) file's chunk in front of everything collected
        // from newer files.
        let mut chunk: Vec<Vec<String>> = lines[start..].iter().map(|l| split_fields(l)).collect();
        chunk.append(&mut merged);
        merged = chunk;
    }

    Ok(merged)
}

/// Split a raw line on the fixed delimiter. No quoting or escaping; an empty
/// line yields a single empty field, exactly as the source data would.
fn split_fields(line: &str) -> Vec<String> {
    line.split(FIELD_DELIMITER).map(str::to_string).collect()
}

// =============================================================================
// Tests
// =============================================================================
