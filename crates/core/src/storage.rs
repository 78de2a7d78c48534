//! Disk-backed photo store.
//!
//! Photos are written under a configured root directory using the object key
//! `{case_id}/{phase}/{timestamp_ms}_{filename}` and exposed through public
//! URLs under `{public_base}/uploads/{key}`. The API layer serves the root
//! directory statically, so anyone with the link can read the file.

use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;

use crate::error::CoreError;
use crate::phase::Phase;
use crate::types::{DbId, Timestamp};

/// Result of a successful photo write.
#[derive(Debug, Clone)]
pub struct StoredPhoto {
    /// Object key relative to the store root.
    pub key: String,
    /// Public URL for the stored file.
    pub url: String,
}

/// Writes photo files to disk and hands out their public URLs.
#[derive(Debug, Clone)]
pub struct PhotoStore {
    root: PathBuf,
    public_base: String,
}

impl PhotoStore {
    /// Create a store rooted at `root`, with URLs prefixed by
    /// `{public_base}/uploads/`.
    pub fn new(root: impl Into<PathBuf>, public_base: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_base: public_base.into().trim_end_matches('/').to_string(),
        }
    }

    /// Directory files are written under.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Build the object key for an upload.
    ///
    /// The timestamp differentiates same-named files within a batch; two
    /// writes of the same filename in the same millisecond collide on key,
    /// which [`PhotoStore::save`] surfaces as a conflict rather than
    /// renaming silently.
    pub fn object_key(case_id: DbId, phase: Phase, uploaded_at: Timestamp, filename: &str) -> String {
        format!(
            "{case_id}/{phase}/{}_{}",
            uploaded_at.timestamp_millis(),
            sanitize_filename(filename),
        )
    }

    /// Public URL for an object key.
    pub fn public_url(&self, key: &str) -> String {
        format!("{}/uploads/{key}", self.public_base)
    }

    /// Write `data` under the key for (`case_id`, `phase`, `uploaded_at`,
    /// `filename`) and return the key and public URL.
    ///
    /// The write is create-new: an existing file at the same key fails with
    /// [`CoreError::Conflict`].
    pub async fn save(
        &self,
        case_id: DbId,
        phase: Phase,
        uploaded_at: Timestamp,
        filename: &str,
        data: &[u8],
    ) -> Result<StoredPhoto, CoreError> {
        let key = Self::object_key(case_id, phase, uploaded_at, filename);
        let path = self.root.join(&key);

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| CoreError::Internal(format!("Failed to create {parent:?}: {e}")))?;
        }

        let mut file = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::AlreadyExists => {
                    CoreError::Conflict(format!("Photo object already exists: {key}"))
                }
                _ => CoreError::Internal(format!("Failed to open {path:?}: {e}")),
            })?;

        file.write_all(data)
            .await
            .map_err(|e| CoreError::Internal(format!("Failed to write {path:?}: {e}")))?;
        file.flush()
            .await
            .map_err(|e| CoreError::Internal(format!("Failed to flush {path:?}: {e}")))?;

        let url = self.public_url(&key);
        Ok(StoredPhoto { key, url })
    }
}

/// Reduce a client-supplied filename to a safe base name.
///
/// Strips any path components, replaces whitespace with underscores, and
/// drops characters outside `[A-Za-z0-9._-]`. Falls back to "foto" when
/// nothing survives.
fn sanitize_filename(filename: &str) -> String {
    let base = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename);
    let cleaned: String = base
        .chars()
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect();
    let trimmed = cleaned.trim_matches('.');
    if trimmed.is_empty() {
        "foto".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(millis: i64) -> Timestamp {
        chrono::Utc.timestamp_millis_opt(millis).unwrap()
    }

    #[test]
    fn object_key_layout() {
        let key = PhotoStore::object_key(7, Phase::Salida, ts(1_700_000_000_123), "front.jpg");
        assert_eq!(key, "7/salida/1700000000123_front.jpg");
    }

    #[test]
    fn sanitize_strips_paths_and_odd_characters() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_filename("mi foto (1).jpg"), "mi_foto_1.jpg");
        assert_eq!(sanitize_filename("C:\\fotos\\a.png"), "a.png");
        assert_eq!(sanitize_filename("???"), "foto");
    }

    #[test]
    fn public_url_joins_base_and_key() {
        let store = PhotoStore::new("/tmp/fotos", "http://localhost:3000/");
        assert_eq!(
            store.public_url("7/salida/1_a.jpg"),
            "http://localhost:3000/uploads/7/salida/1_a.jpg"
        );
    }

    #[tokio::test]
    async fn save_writes_file_and_rejects_same_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = PhotoStore::new(dir.path(), "http://localhost:3000");
        let at = ts(42);

        let stored = store
            .save(1, Phase::Entrada, at, "rear.jpg", b"bytes")
            .await
            .unwrap();
        assert_eq!(stored.key, "1/entrada/42_rear.jpg");
        assert_eq!(
            tokio::fs::read(dir.path().join(&stored.key)).await.unwrap(),
            b"bytes"
        );

        // Same millisecond + same filename collides on key.
        let err = store
            .save(1, Phase::Entrada, at, "rear.jpg", b"other")
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Conflict(_)));
    }

    #[tokio::test]
    async fn distinct_timestamps_give_distinct_keys() {
        let dir = tempfile::tempdir().unwrap();
        let store = PhotoStore::new(dir.path(), "http://localhost:3000");

        let a = store.save(2, Phase::Salida, ts(1), "x.jpg", b"a").await.unwrap();
        let b = store.save(2, Phase::Salida, ts(2), "x.jpg", b"b").await.unwrap();
        assert_ne!(a.key, b.key);
        assert_ne!(a.url, b.url);
    }
}
