mod memory;

pub use memory::{InMemorySelection, SelectedNode};
