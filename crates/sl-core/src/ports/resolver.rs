//! Style resolver port
//!
//! Turns a suggestion's reference into a style or variable that can be bound
//! in the open file. Remote keys require an import, which may fail if the
//! source library was unpublished.

use async_trait::async_trait;

use super::HostError;
use crate::ids::{LocalId, RemoteKey};

#[async_trait]
pub trait StyleResolverPort: Send + Sync {
    /// Confirms a local style still exists.
    async fn style_by_id(&self, id: &LocalId) -> Result<Option<LocalId>, HostError>;

    async fn variable_by_id(&self, id: &LocalId) -> Result<Option<LocalId>, HostError>;

    /// Imports a published style and returns its id in this file.
    async fn import_style_by_key(&self, key: &RemoteKey) -> Result<LocalId, HostError>;

    async fn import_variable_by_key(&self, key: &RemoteKey) -> Result<LocalId, HostError>;
}
