mod snapshot;

pub use snapshot::{CatalogSnapshot, SnapshotCatalog};
