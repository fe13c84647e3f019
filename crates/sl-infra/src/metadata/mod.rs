mod memory;

pub use memory::InMemoryFileMetadata;
