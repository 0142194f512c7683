use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use techtrackr_application::IdentityReferenceStore;
use techtrackr_core::{AppError, AppResult, RecordId};
use tracing::debug;

/// Identity reference store backed by a single text file.
#[derive(Debug, Clone)]
pub struct FileIdentityReferenceStore {
    path: PathBuf,
}

impl FileIdentityReferenceStore {
    /// Creates a store that keeps the identity id at `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the backing file path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, operation: &str, error: &std::io::Error) -> AppError {
        AppError::Internal(format!(
            "failed to {operation} identity reference at '{}': {error}",
            self.path.display()
        ))
    }
}

#[async_trait]
impl IdentityReferenceStore for FileIdentityReferenceStore {
    async fn load(&self) -> AppResult<Option<RecordId>> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => {
                let id = contents.trim();
                Ok((!id.is_empty()).then(|| RecordId::new(id)))
            }
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(self.io_error("read", &error)),
        }
    }

    async fn save(&self, id: &RecordId) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|error| self.io_error("prepare directory for", &error))?;
        }

        tokio::fs::write(&self.path, id.as_str())
            .await
            .map_err(|error| self.io_error("write", &error))?;
        debug!(path = %self.path.display(), "identity reference saved");

        Ok(())
    }

    async fn clear(&self) -> AppResult<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
            Err(error) => Err(self.io_error("remove", &error)),
        }
    }
}

#[cfg(test)]
mod tests {
    use techtrackr_application::IdentityReferenceStore;
    use techtrackr_core::RecordId;

    use super::FileIdentityReferenceStore;

    #[tokio::test]
    async fn missing_file_means_no_reference() {
        let dir = tempfile::tempdir().unwrap_or_else(|_| unreachable!());
        let store = FileIdentityReferenceStore::new(dir.path().join("session"));

        assert!(matches!(store.load().await, Ok(None)));
        assert!(store.clear().await.is_ok());
    }

    #[tokio::test]
    async fn saved_reference_survives_a_new_store() {
        let dir = tempfile::tempdir().unwrap_or_else(|_| unreachable!());
        let path = dir.path().join("nested").join("session");

        let store = FileIdentityReferenceStore::new(&path);
        assert!(store.save(&RecordId::new("42")).await.is_ok());

        let reopened = FileIdentityReferenceStore::new(&path);
        assert_eq!(reopened.load().await.unwrap_or_default(), Some(RecordId::new("42")));
    }

    #[tokio::test]
    async fn clear_forgets_reference() {
        let dir = tempfile::tempdir().unwrap_or_else(|_| unreachable!());
        let store = FileIdentityReferenceStore::new(dir.path().join("session"));
        assert!(store.save(&RecordId::new("42")).await.is_ok());

        assert!(store.clear().await.is_ok());

        assert!(matches!(store.load().await, Ok(None)));
        assert!(!store.path().exists());
    }

    #[tokio::test]
    async fn blank_file_means_no_reference() {
        let dir = tempfile::tempdir().unwrap_or_else(|_| unreachable!());
        let path = dir.path().join("session");
        assert!(tokio::fs::write(&path, "  \n").await.is_ok());

        let store = FileIdentityReferenceStore::new(path);

        assert!(matches!(store.load().await, Ok(None)));
    }
}
