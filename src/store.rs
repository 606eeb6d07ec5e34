use std::path::{Path, PathBuf};

use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid drawing id: {0}")]
    InvalidId(String),
    #[error("Drawing not found: {0}")]
    NotFound(String),
}

/// A persisted drawing: the submitted series text keyed by its identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawingRecord {
    pub id: String,
    pub data: String,
}

/// File-backed store for submitted drawings.
///
/// Records are plain text files named `{uuid}.csv` under a flat directory.
/// Rendered images are never persisted, so the namespace holds drawing
/// data only. Records are immutable once written.
pub struct DrawingStore {
    base_path: PathBuf,
}

impl DrawingStore {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Result<Self, std::io::Error> {
        let base_path = base_path.as_ref().to_path_buf();
        std::fs::create_dir_all(&base_path)?;
        Ok(Self { base_path })
    }

    fn record_path(&self, id: &Uuid) -> PathBuf {
        self.base_path.join(format!("{id}.csv"))
    }

    /// Persist a submitted payload under a freshly generated identifier.
    ///
    /// The payload's first and last characters (the enclosing brackets of
    /// the serialized array) are stripped and a trailing newline is
    /// appended before writing.
    pub async fn create(&self, payload: &str) -> Result<String, StoreError> {
        let id = Uuid::new_v4();
        let body = format!("{}\n", strip_outer(payload));
        tokio::fs::write(self.record_path(&id), body).await?;
        Ok(id.to_string())
    }

    /// Read back the stored contents for an identifier.
    pub async fn get(&self, id: &str) -> Result<String, StoreError> {
        let uuid =
            Uuid::parse_str(id).map_err(|_| StoreError::InvalidId(id.to_string()))?;
        match tokio::fs::read_to_string(self.record_path(&uuid)).await {
            Ok(data) => Ok(data),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StoreError::NotFound(id.to_string()))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// List every persisted record, sorted by identifier.
    ///
    /// Sorting makes the listing deterministic rather than dependent on
    /// directory-walk order. Files that are not `{uuid}.csv` are ignored.
    pub async fn list(&self) -> Result<Vec<DrawingRecord>, StoreError> {
        let mut records = Vec::new();
        let mut entries = tokio::fs::read_dir(&self.base_path).await?;

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("csv") {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if Uuid::parse_str(stem).is_err() {
                continue;
            }
            let data = tokio::fs::read_to_string(&path).await?;
            records.push(DrawingRecord {
                id: stem.to_string(),
                data,
            });
        }

        records.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(records)
    }
}

/// Drop the first and last character of a string.
///
/// Mirrors the submission format: the client sends `[a,b,c,...]` and only
/// the inner text is stored. Inputs shorter than two characters become
/// empty.
fn strip_outer(s: &str) -> &str {
    let mut chars = s.char_indices();
    let Some((_, first)) = chars.next() else {
        return "";
    };
    let start = first.len_utf8();
    match chars.last() {
        Some((end, _)) if end >= start => &s[start..end],
        _ => "",
    }
}
