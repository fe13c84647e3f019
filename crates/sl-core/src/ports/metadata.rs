use super::HostError;

/// String data attached to the open file.
pub trait FileMetadataPort: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), HostError>;
}
