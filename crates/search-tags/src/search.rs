//! Walk files and report lines matched by a class matcher.

use std::fs;
use std::path::{Path, PathBuf};

use eyre::Result;
use search_tags_patterns::ClassMatcher;
use walkdir::WalkDir;

/// A single matching line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Hit {
    pub path: PathBuf,
    /// One-based line number.
    pub line: usize,
    pub text: String,
}

/// Collect matching lines from a single file's contents.
pub(crate) fn search_text(matcher: &ClassMatcher, path: &Path, contents: &str) -> Vec<Hit> {
    contents
        .lines()
        .enumerate()
        .filter(|(_, line)| matcher.is_match(line))
        .map(|(index, line)| Hit {
            path: path.to_path_buf(),
            line: index + 1,
            text: line.to_owned(),
        })
        .collect()
}

/// Recursively search `roots`, handing each hit to `on_hit` in path order.
///
/// Unreadable entries and files that are not valid UTF-8 are skipped.
/// Returns the number of hits reported.
pub(crate) fn search_paths<F>(
    matcher: &ClassMatcher,
    roots: &[PathBuf],
    mut on_hit: F,
) -> Result<usize>
where
    F: FnMut(&Hit) -> Result<()>,
{
    let mut count = 0usize;
    for root in roots {
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    tracing::warn!(
                        root = %root.display(),
                        error = %err,
                        "skipping unreadable entry"
                    );
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            let contents = match fs::read_to_string(path) {
                Ok(contents) => contents,
                Err(err) => {
                    tracing::debug!(path = %path.display(), error = %err, "skipping file");
                    continue;
                }
            };
            for hit in search_text(matcher, path, &contents) {
                on_hit(&hit)?;
                count += 1;
            }
        }
    }
    tracing::info!(hits = count, "search finished");
    Ok(count)
}
