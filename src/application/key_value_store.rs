// Key/value store port for durable local storage
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O failed for key '{key}'")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("storage quota exceeded writing {bytes} bytes (limit {limit})")]
    QuotaExceeded { bytes: usize, limit: usize },

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// String get/set contract of the host's local storage.
pub trait KeyValueStore: Send + Sync {
    /// `Ok(None)` when the key has never been written.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
