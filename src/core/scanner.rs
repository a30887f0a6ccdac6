//! Discovery of markdown documents in a directory tree

use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::error::{IoOp, Result, SessionError};

/// Suffixes, lowercase, that mark a file as a markdown document
pub const MARKDOWN_SUFFIXES: &[&str] = &[".md", ".markdown"];

/// Check if a file name ends with a markdown suffix, ignoring case.
///
/// Only a trailing match counts, so `notes.md.txt` is rejected while a bare
/// `.md` is accepted.
pub fn is_markdown_file(name: &str) -> bool {
    let lower = name.to_lowercase();
    MARKDOWN_SUFFIXES.iter().any(|suffix| lower.ends_with(suffix))
}

fn is_markdown_path(path: &Path) -> bool {
    path.file_name()
        .map(|name| is_markdown_file(&name.to_string_lossy()))
        .unwrap_or(false)
}

/// Recursively collect every markdown file under `root`.
///
/// Entries are visited in file-name order within each directory, so the
/// result is stable for a given layout. Any traversal failure aborts the scan.
pub fn scan(root: &Path) -> Result<Vec<PathBuf>> {
    let metadata =
        std::fs::metadata(root).map_err(|e| SessionError::io(IoOp::Scan, root, e))?;
    if !metadata.is_dir() {
        return Err(SessionError::io(
            IoOp::Scan,
            root,
            io::Error::new(io::ErrorKind::InvalidInput, "not a directory"),
        ));
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|e| {
            let path = e.path().unwrap_or(root).to_path_buf();
            SessionError::io(IoOp::Scan, path, io::Error::from(e))
        })?;

        if !entry.file_type().is_dir() && is_markdown_path(entry.path()) {
            files.push(entry.into_path());
        }
    }

    tracing::debug!("Found {} markdown files in {}", files.len(), root.display());
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "content").unwrap();
    }

    #[test]
    fn test_is_markdown_file() {
        let cases = [
            ("test.md", true),
            ("test.MD", true),
            ("test.Md", true),
            ("test.markdown", true),
            ("test.MARKDOWN", true),
            ("test.txt", false),
            ("test", false),
            ("", false),
            ("test.md.txt", false),
            (".md", true),
            ("/path/to/file.md", true),
        ];
        for (name, expected) in cases {
            assert_eq!(is_markdown_file(name), expected, "name: {name:?}");
        }
    }

    #[test]
    fn test_scan_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(scan(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_scan_filters_by_suffix() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["test1.md", "test2.MD", "test3.markdown", "test4.txt", "notes.md.txt"] {
            touch(&dir.path().join(name));
        }

        let files = scan(dir.path()).unwrap();
        assert_eq!(
            files,
            vec![
                dir.path().join("test1.md"),
                dir.path().join("test2.MD"),
                dir.path().join("test3.markdown"),
            ]
        );
    }

    #[test]
    fn test_scan_recurses_into_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        touch(&dir.path().join("a.md"));
        touch(&dir.path().join("b.txt"));
        touch(&dir.path().join("sub").join("c.MARKDOWN"));
        touch(&dir.path().join("sub").join("deeper").join(".md"));

        let files = scan(dir.path()).unwrap();
        assert_eq!(
            files,
            vec![
                dir.path().join("a.md"),
                dir.path().join("sub").join("c.MARKDOWN"),
                dir.path().join("sub").join("deeper").join(".md"),
            ]
        );
    }

    #[test]
    fn test_scan_skips_directories_named_like_documents() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("archive.md")).unwrap();
        touch(&dir.path().join("archive.md").join("inner.md"));

        let files = scan(dir.path()).unwrap();
        assert_eq!(files, vec![dir.path().join("archive.md").join("inner.md")]);
    }

    #[test]
    fn test_scan_nonexistent_directory() {
        let err = scan(Path::new("/nonexistent/directory/path")).unwrap_err();
        assert_eq!(err.io_kind(), Some(io::ErrorKind::NotFound));
    }

    #[test]
    fn test_scan_rejects_file_root() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.md");
        touch(&file);

        let err = scan(&file).unwrap_err();
        assert!(matches!(err, SessionError::Io { op: IoOp::Scan, .. }));
    }
}
