//! On-disk lifecycle of an uploaded document.
//!
//! Each upload is written to `<upload_dir>/<stamp>-<file name>` and removed again
//! before its request finishes. `TempUpload` deletes the file on drop, so every
//! exit path after the write cleans up, including errors and panics.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use tokio::io::AsyncWriteExt;
use tracing::{debug, warn};

const FALLBACK_FILE_NAME: &str = "upload";

static LAST_STAMP: AtomicU64 = AtomicU64::new(0);

/// Millisecond clock value, strictly increasing across the process. Two uploads
/// in the same millisecond get consecutive stamps.
pub fn next_upload_stamp() -> u64 {
    let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
    let mut last = LAST_STAMP.load(Ordering::Relaxed);
    loop {
        let candidate = now.max(last + 1);
        match LAST_STAMP.compare_exchange_weak(last, candidate, Ordering::AcqRel, Ordering::Relaxed)
        {
            Ok(_) => return candidate,
            Err(actual) => last = actual,
        }
    }
}

/// Reduces a client-supplied file name to a safe final path component.
pub fn sanitize_file_name(original: &str) -> String {
    let base = original
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default();

    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    let trimmed = cleaned.trim_start_matches('.');
    if trimmed.is_empty() {
        FALLBACK_FILE_NAME.to_string()
    } else {
        trimmed.to_string()
    }
}

/// A document persisted for the duration of one request.
#[derive(Debug)]
pub struct TempUpload {
    path: PathBuf,
    removed: bool,
}

impl TempUpload {
    /// Writes `bytes` to a fresh file in `dir`. Never overwrites an existing file.
    pub async fn persist(dir: &Path, original_name: &str, bytes: &[u8]) -> io::Result<Self> {
        let file_name = format!("{}-{}", next_upload_stamp(), sanitize_file_name(original_name));
        let path = dir.join(file_name);

        let mut file = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await?;

        // From here on a failed write still removes the partial file.
        let upload = TempUpload {
            path,
            removed: false,
        };
        file.write_all(bytes).await?;
        file.flush().await?;
        debug!("Stored upload at {}", upload.path().display());

        Ok(upload)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn read(&self) -> io::Result<Vec<u8>> {
        tokio::fs::read(&self.path).await
    }

    /// Deletes the file. On failure the drop guard retries once more.
    pub async fn remove(mut self) -> io::Result<()> {
        let result = tokio::fs::remove_file(&self.path).await;
        self.removed = result.is_ok();
        result
    }
}

impl Drop for TempUpload {
    fn drop(&mut self) {
        if self.removed {
            return;
        }
        match std::fs::remove_file(&self.path) {
            Ok(()) => debug!("Removed upload {}", self.path.display()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => warn!("Failed to remove upload {}: {e}", self.path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn dir_is_empty(dir: &Path) -> bool {
        std::fs::read_dir(dir).unwrap().next().is_none()
    }

    #[test]
    fn test_stamps_strictly_increase() {
        let stamps: Vec<u64> = (0..1000).map(|_| next_upload_stamp()).collect();
        assert!(stamps.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_sanitize_strips_directories() {
        assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_file_name("C:\\Users\\jane\\cv.pdf"), "cv.pdf");
    }

    #[test]
    fn test_sanitize_replaces_unsafe_characters() {
        assert_eq!(sanitize_file_name("my resume (final).pdf"), "my_resume__final_.pdf");
    }

    #[test]
    fn test_sanitize_falls_back_for_empty_names() {
        assert_eq!(sanitize_file_name(""), "upload");
        assert_eq!(sanitize_file_name(".."), "upload");
        assert_eq!(sanitize_file_name("dir/"), "upload");
    }

    #[tokio::test]
    async fn test_persist_read_and_remove() {
        let dir = TempDir::new().unwrap();
        let upload = TempUpload::persist(dir.path(), "resume.pdf", b"%PDF-1.4")
            .await
            .unwrap();

        let name = upload.path().file_name().unwrap().to_str().unwrap().to_string();
        assert!(name.ends_with("-resume.pdf"));
        assert_eq!(upload.read().await.unwrap(), b"%PDF-1.4");

        upload.remove().await.unwrap();
        assert!(dir_is_empty(dir.path()));
    }

    #[tokio::test]
    async fn test_drop_removes_file() {
        let dir = TempDir::new().unwrap();
        {
            let _upload = TempUpload::persist(dir.path(), "resume.txt", b"hello")
                .await
                .unwrap();
            assert!(!dir_is_empty(dir.path()));
        }
        assert!(dir_is_empty(dir.path()));
    }

    #[tokio::test]
    async fn test_same_name_uploads_do_not_collide() {
        let dir = TempDir::new().unwrap();
        let first = TempUpload::persist(dir.path(), "cv.pdf", b"one").await.unwrap();
        let second = TempUpload::persist(dir.path(), "cv.pdf", b"two").await.unwrap();

        assert_ne!(first.path(), second.path());
        assert_eq!(first.read().await.unwrap(), b"one");
        assert_eq!(second.read().await.unwrap(), b"two");
    }

    #[tokio::test]
    async fn test_persist_into_missing_directory_fails() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope");
        assert!(TempUpload::persist(&missing, "cv.pdf", b"x").await.is_err());
    }
}
