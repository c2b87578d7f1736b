//! Input resolution and reading

use anyhow::{Context, Result};
use glob::glob;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolve glob patterns to a sorted, de-duplicated list of files
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let paths = glob(pattern).with_context(|| format!("Invalid glob pattern: {pattern}"))?;
        for entry in paths {
            let path = entry.with_context(|| format!("Error resolving pattern: {pattern}"))?;
            if path.is_file() {
                files.push(path);
            }
        }
    }

    if files.is_empty() {
        anyhow::bail!("No files found matching the provided patterns");
    }

    files.sort();
    files.dedup();
    Ok(files)
}

/// Read a file as UTF-8 text
pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn resolves_and_sorts_matching_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.txt"), "b").unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();
        fs::write(dir.path().join("skip.md"), "m").unwrap();

        let pattern = format!("{}/*.txt", dir.path().display());
        let files = resolve_patterns(&[pattern]).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("a.txt"));
        assert!(files[1].ends_with("b.txt"));
    }

    #[test]
    fn duplicate_patterns_are_deduplicated() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "a").unwrap();

        let pattern = format!("{}/*.txt", dir.path().display());
        let files = resolve_patterns(&[pattern.clone(), pattern]).unwrap();
        assert_eq!(files.len(), 1);
    }

    #[test]
    fn no_match_is_an_error() {
        let dir = TempDir::new().unwrap();
        let pattern = format!("{}/*.nope", dir.path().display());
        assert!(resolve_patterns(&[pattern]).is_err());
    }

    #[test]
    fn invalid_pattern_is_an_error() {
        assert!(resolve_patterns(&["[".to_string()]).is_err());
    }

    #[test]
    fn read_text_reports_path_on_failure() {
        let err = read_text(Path::new("/nonexistent/blob.txt")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/blob.txt"));
    }

    #[test]
    fn read_text_handles_utf8() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("ja.txt");
        fs::write(&path, "日本は島国です。").unwrap();
        assert_eq!(read_text(&path).unwrap(), "日本は島国です。");
    }
}
