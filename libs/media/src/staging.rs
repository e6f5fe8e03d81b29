use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

/// A multipart file part buffered to local disk, awaiting upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedFile {
    /// Location of the buffered bytes on local disk
    pub path: PathBuf,
    /// Original client-supplied file name
    pub file_name: String,
}

/// Buffers inbound file parts into a staging directory.
///
/// Each staged file gets a UUID-prefixed name so concurrent requests never
/// collide. Staged files are removed by [`crate::discard_staged`] after the
/// owning record has been persisted.
#[derive(Clone, Debug)]
pub struct Staging {
    dir: PathBuf,
}

impl Staging {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write one file part to the staging directory.
    ///
    /// Creates the directory on first use.
    pub async fn stage(&self, file_name: &str, bytes: &[u8]) -> io::Result<StagedFile> {
        tokio::fs::create_dir_all(&self.dir).await?;

        let safe_name = sanitize_file_name(file_name);
        let path = self.dir.join(format!("{}_{}", Uuid::new_v4(), safe_name));

        tokio::fs::write(&path, bytes).await?;
        debug!(path = %path.display(), size_bytes = bytes.len(), "Staged upload");

        Ok(StagedFile {
            path,
            file_name: file_name.to_string(),
        })
    }
}

/// Restrict a client-supplied file name to a safe character set.
fn sanitize_file_name(name: &str) -> String {
    let sanitized: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if sanitized.is_empty() {
        "upload".to_string()
    } else {
        sanitized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_stage_writes_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let staging = Staging::new(dir.path());

        let staged = staging.stage("shirt.png", b"png-bytes").await.unwrap();

        assert_eq!(staged.file_name, "shirt.png");
        assert_eq!(tokio::fs::read(&staged.path).await.unwrap(), b"png-bytes");
    }

    #[tokio::test]
    async fn test_stage_produces_unique_paths() {
        let dir = tempfile::tempdir().unwrap();
        let staging = Staging::new(dir.path());

        let a = staging.stage("a.png", b"1").await.unwrap();
        let b = staging.stage("a.png", b"2").await.unwrap();

        assert_ne!(a.path, b.path);
    }

    #[tokio::test]
    async fn test_stage_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let staging = Staging::new(dir.path().join("nested/staging"));

        let staged = staging.stage("a.png", b"1").await.unwrap();
        assert!(staged.path.exists());
    }

    #[test]
    fn test_sanitize_file_name() {
        assert_eq!(sanitize_file_name("shirt.png"), "shirt.png");
        assert_eq!(sanitize_file_name("../../etc/passwd"), ".._.._etc_passwd");
        assert_eq!(sanitize_file_name(""), "upload");
    }
}
