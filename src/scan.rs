use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use walkdir::WalkDir;

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    if extensions.is_empty() {
        return true;
    }
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| extensions.iter().any(|e| e.trim_start_matches('.') == ext))
}

/// Collect the files to scan for class usages, sorted by path.
///
/// `paths` are relative to `root`. A path naming a file is always included; a
/// directory is walked recursively and filtered by `extensions`.
pub fn collect_files(
    root: &Path,
    paths: &[PathBuf],
    extensions: &[String],
) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        let full = root.join(path);
        if full.is_file() {
            files.push(full);
            continue;
        }
        if !full.is_dir() {
            bail!("Content path does not exist: {}", full.display());
        }

        for entry in WalkDir::new(&full) {
            let entry =
                entry.with_context(|| format!("Failed to walk content path {}", full.display()))?;
            if entry.file_type().is_file() && has_extension(entry.path(), extensions) {
                files.push(entry.into_path());
            }
        }
    }

    files.sort();
    files.dedup();
    Ok(files)
}

/// Read every content file; invalid UTF-8 is replaced rather than rejected.
pub fn collect_sources(
    root: &Path,
    paths: &[PathBuf],
    extensions: &[String],
) -> Result<Vec<(PathBuf, String)>> {
    collect_files(root, paths, extensions)?
        .into_iter()
        .map(|path| {
            let bytes = std::fs::read(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let text = String::from_utf8_lossy(&bytes).into_owned();
            Ok((path, text))
        })
        .collect()
}
