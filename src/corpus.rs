// Corpus path expansion for the command line.
//
// Corpus arguments may name files or directories. Directories are walked
// recursively and contribute every regular file beneath them.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Expand corpus arguments into a flat list of document paths.
///
/// Files are kept in the order given. Each directory expands in place to
/// its files in sorted order, so the same tree always yields the same list.
pub fn expand_paths<P: AsRef<Path>>(inputs: &[P]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for input in inputs {
        let input = input.as_ref();
        if !input.is_dir() {
            paths.push(input.to_path_buf());
            continue;
        }

        for entry in WalkDir::new(input).sort_by_file_name() {
            let entry = entry.map_err(|e| {
                let path = e.path().unwrap_or(input).to_path_buf();
                Error::io(path, e.into())
            })?;
            if entry.file_type().is_file() {
                paths.push(entry.into_path());
            }
        }
    }

    Ok(paths)
}
