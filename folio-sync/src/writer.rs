//! Atomic output writer.
//!
//! ## `write_output` protocol
//!
//! 1. Normalise line endings to LF.
//! 2. Compare with the current file → skip if identical.
//! 3. Write to `<path>.folio.tmp`.
//! 4. Rename to final path (atomic on POSIX).

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{io_err, SyncError};

/// Outcome of an individual file write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written (content changed or did not previously exist).
    Written { path: PathBuf },
    /// File was skipped: rendered content matches what is on disk.
    Unchanged { path: PathBuf },
    /// `--dry-run` mode: the file *would* have been written.
    WouldWrite { path: PathBuf },
}

impl WriteResult {
    pub fn path(&self) -> &Path {
        match self {
            WriteResult::Written { path }
            | WriteResult::Unchanged { path }
            | WriteResult::WouldWrite { path } => path,
        }
    }

    pub fn is_change(&self) -> bool {
        !matches!(self, WriteResult::Unchanged { .. })
    }
}

/// Atomically write `content` to `path` unless it is already there.
pub fn write_output(path: &Path, content: &str, dry_run: bool) -> Result<WriteResult, SyncError> {
    let tmp = PathBuf::from(format!("{}.folio.tmp", path.display()));
    write_output_with_tmp(path, content, dry_run, &tmp)
}

fn write_output_with_tmp(
    path: &Path,
    content: &str,
    dry_run: bool,
    tmp: &Path,
) -> Result<WriteResult, SyncError> {
    let content = normalize_line_endings(content);

    if read_existing(path)?.as_deref() == Some(content.as_str()) {
        tracing::debug!("unchanged: {}", path.display());
        return Ok(WriteResult::Unchanged {
            path: path.to_path_buf(),
        });
    }

    if dry_run {
        tracing::info!("[dry-run] would write: {}", path.display());
        return Ok(WriteResult::WouldWrite {
            path: path.to_path_buf(),
        });
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
    }
    if let Some(tmp_parent) = tmp.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(tmp_parent).map_err(|e| io_err(tmp_parent, e))?;
    }
    std::fs::write(tmp, &content).map_err(|e| io_err(tmp, e))?;

    if let Err(e) = std::fs::rename(tmp, path) {
        let _ = std::fs::remove_file(tmp);
        return Err(io_err(path, e));
    }

    tracing::info!("wrote: {}", path.display());
    Ok(WriteResult::Written {
        path: path.to_path_buf(),
    })
}

/// Current file content with normalised line endings, or `None` if absent.
pub(crate) fn read_existing(path: &Path) -> Result<Option<String>, SyncError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(normalize_line_endings(&content))),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
        Err(err) => Err(io_err(path, err)),
    }
}

pub(crate) fn normalize_line_endings(content: &str) -> String {
    content.replace("\r\n", "\n")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn first_write_returns_written() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("index.html");
        let result = write_output(&path, "hello", false).unwrap();
        assert!(matches!(result, WriteResult::Written { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn second_write_same_content_returns_unchanged() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("index.html");
        write_output(&path, "same content", false).unwrap();
        let result = write_output(&path, "same content", false).unwrap();
        assert!(matches!(result, WriteResult::Unchanged { .. }));
        assert!(!result.is_change());
    }

    #[test]
    fn changed_content_returns_written() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("index.html");
        write_output(&path, "v1", false).unwrap();
        let result = write_output(&path, "v2", false).unwrap();
        assert!(matches!(result, WriteResult::Written { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), "v2");
    }

    #[test]
    fn dry_run_does_not_write_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nope.html");
        let result = write_output(&path, "content", true).unwrap();
        assert!(matches!(result, WriteResult::WouldWrite { .. }));
        assert!(!path.exists(), "dry-run must not create files");
    }

    #[test]
    fn dry_run_reports_unchanged_when_identical() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("index.html");
        fs::write(&path, "same").unwrap();
        let result = write_output(&path, "same", true).unwrap();
        assert_eq!(result, WriteResult::Unchanged { path });
    }

    #[test]
    fn tmp_file_removed_after_write() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("clean.html");
        write_output(&path, "data", false).unwrap();
        let tmp_path = PathBuf::from(format!("{}.folio.tmp", path.display()));
        assert!(!tmp_path.exists(), ".folio.tmp must be cleaned up");
    }

    #[test]
    fn creates_parent_directories() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("dist").join("cv").join("index.html");
        write_output(&path, "content", false).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn crlf_and_lf_content_compare_equal() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("normalize.md");

        let first = write_output(&path, "line1\r\nline2\r\n", false).unwrap();
        assert!(matches!(first, WriteResult::Written { .. }));

        let second = write_output(&path, "line1\nline2\n", false).unwrap();
        assert!(matches!(second, WriteResult::Unchanged { .. }));

        assert_eq!(fs::read_to_string(&path).unwrap(), "line1\nline2\n");
    }

    #[test]
    #[cfg(unix)]
    fn rename_failure_leaves_original_and_cleans_tmp() {
        use std::os::unix::fs::PermissionsExt;

        let root = TempDir::new().unwrap();
        let readonly_dir = root.path().join("readonly");
        fs::create_dir_all(&readonly_dir).unwrap();

        let path = readonly_dir.join("index.html");
        fs::write(&path, "original").unwrap();

        let mut perms = fs::metadata(&readonly_dir).unwrap().permissions();
        perms.set_mode(0o555);
        fs::set_permissions(&readonly_dir, perms).unwrap();

        let tmp_dir = TempDir::new().unwrap();
        let tmp_path = tmp_dir.path().join("index.html.folio.tmp");

        let err = write_output_with_tmp(&path, "new content", false, &tmp_path);

        let mut perms = fs::metadata(&readonly_dir).unwrap().permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&readonly_dir, perms).unwrap();

        // Root ignores directory permissions; only assert when the rename failed.
        if err.is_err() {
            assert_eq!(fs::read_to_string(&path).unwrap(), "original");
            assert!(!tmp_path.exists(), ".folio.tmp should be cleaned up");
        }
    }
}
