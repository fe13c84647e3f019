//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases and the host. Adapters for
//! tests and local runs live in `sl-infra`; the plugin host provides the rest.

mod catalog;
mod clock;
mod errors;
mod metadata;
mod resolver;
mod selection;
mod storage;
mod ui;

pub use catalog::StyleCatalogPort;
pub use clock::ClockPort;
pub use errors::{HostError, StorageError};
pub use metadata::FileMetadataPort;
pub use resolver::StyleResolverPort;
pub use selection::{SelectionPort, StyleBinding};
pub use storage::ClientStoragePort;
pub use ui::{Notification, NotifierPort, PluginLifecyclePort, SuggestionResultsPort};
