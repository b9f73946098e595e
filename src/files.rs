//! File-list resolution and lint input reads.

use crate::error::FatalError;
use glob::Pattern;
use std::fs;
use std::path::{Path, PathBuf};

/// Expand `patterns` relative to `root` into an ordered file list.
///
/// Order is pattern order, then glob-expansion order. `exclude` patterns act
/// as glob-ignore filters and directory entries are skipped. Files matched
/// by more than one pattern are kept once per match.
pub fn resolve_files(root: &Path, patterns: &[String], exclude: &[String]) -> Vec<PathBuf> {
    let ignores: Vec<Pattern> = exclude
        .iter()
        .filter_map(|p| Pattern::new(p).ok())
        .collect();
    let mut out = Vec::new();
    for pat in patterns {
        let abs_glob = root.join(pat);
        let pattern = abs_glob.to_string_lossy().to_string();
        for entry in glob::glob(&pattern).expect("bad glob pattern").flatten() {
            if entry.is_dir() {
                continue;
            }
            if is_ignored(root, &entry, &ignores) {
                continue;
            }
            out.push(entry);
        }
    }
    out
}

fn is_ignored(root: &Path, path: &Path, ignores: &[Pattern]) -> bool {
    if ignores.is_empty() {
        return false;
    }
    // Ignore patterns are written relative to the root
    let rel = pathdiff::diff_paths(path, root);
    let candidate = rel.as_deref().unwrap_or(path);
    ignores
        .iter()
        .any(|p| p.matches_path(candidate) || p.matches_path(path))
}

/// Read a file for linting, stripping a leading byte-order mark so the
/// first character handed to the engine is actual source.
pub fn read_lint_input(path: &Path) -> Result<String, FatalError> {
    let text = fs::read_to_string(path).map_err(|source| FatalError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(match text.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn touch(root: &Path, rel: &str) {
        let p = root.join(rel);
        fs::create_dir_all(p.parent().unwrap()).unwrap();
        fs::write(&p, "export {};\n").unwrap();
    }

    #[test]
    fn test_exclude_removes_matching_files() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        touch(root, "a/x.ts");
        touch(root, "a/y.ts");
        touch(root, "b/z.ts");

        let files = resolve_files(
            root,
            &["**/*.ts".to_string()],
            &["b/*.ts".to_string()],
        );
        let rel: Vec<_> = files
            .iter()
            .map(|f| pathdiff::diff_paths(f, root).unwrap())
            .collect();
        assert_eq!(rel, vec![PathBuf::from("a/x.ts"), PathBuf::from("a/y.ts")]);
    }

    #[test]
    fn test_directories_are_skipped() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        touch(root, "a/x.ts");
        fs::create_dir_all(root.join("a/sub.ts")).unwrap();

        let files = resolve_files(root, &["a/*".to_string()], &[]);
        assert_eq!(files, vec![root.join("a/x.ts")]);
    }

    #[test]
    fn test_overlapping_patterns_are_not_deduplicated() {
        let dir = tempdir().unwrap();
        let root = dir.path();
        touch(root, "a/x.ts");

        let files = resolve_files(root, &["a/*.ts".to_string(), "a/x.ts".to_string()], &[]);
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_bom_is_stripped_from_lint_input() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bom.ts");
        fs::write(&path, "\u{feff}let x = 1;\n").unwrap();
        let text = read_lint_input(&path).unwrap();
        assert!(text.starts_with("let x"));
    }

    #[test]
    fn test_plain_file_passes_through_unchanged() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("plain.ts");
        fs::write(&path, "let x = 1;\n").unwrap();
        assert_eq!(read_lint_input(&path).unwrap(), "let x = 1;\n");
    }

    #[test]
    fn test_unreadable_file_is_fatal_and_names_the_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.ts");
        let err = read_lint_input(&path).unwrap_err();
        assert!(err.to_string().contains("missing.ts"));
    }
}
