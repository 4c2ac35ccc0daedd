use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Arc;

/// String key-value storage. The subscriber list lives behind this seam so
/// the backing store can be swapped without touching the signup flow.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Stores each key as a file under a root directory.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(key)
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)?;
        fs::write(self.path_for(key), value)?;
        Ok(())
    }
}

/// The persisted list of accepted subscriber emails, a JSON array of unique
/// strings under a fixed key.
#[derive(Clone)]
pub struct SubscriberStore {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl SubscriberStore {
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    /// Reads the current list. A missing, unreadable or corrupt record is
    /// treated as an empty list.
    #[tracing::instrument(name = "Load subscriber list", skip(self))]
    pub fn load(&self) -> Vec<String> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to read the subscriber record: {:?}", e);
                return Vec::new();
            }
        };
        match serde_json::from_str(&raw) {
            Ok(subscribers) => subscribers,
            Err(e) => {
                tracing::warn!("Corrupt subscriber record, starting over from an empty list: {}", e);
                Vec::new()
            }
        }
    }

    /// Appends `email` unless it is already present (exact string match) and
    /// writes the whole list back.
    #[tracing::instrument(name = "Persist subscriber", skip(self))]
    pub fn persist(&self, email: &str) -> Result<(), StorageError> {
        let mut subscribers = self.load();
        if !subscribers.iter().any(|existing| existing == email) {
            subscribers.push(email.to_owned());
            let encoded = serde_json::to_string(&subscribers)?;
            self.store.set(&self.key, &encoded)?;
        }
        Ok(())
    }
}

#[derive(thiserror::Error)]
pub enum StorageError {
    #[error("failed to access the backing store")]
    Io(#[from] std::io::Error),
    #[error("failed to encode the subscriber list")]
    Json(#[from] serde_json::Error),
}

impl std::fmt::Debug for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
