pub mod file_storage;
pub mod memory;

pub use file_storage::FileStorageAdapter;
pub use memory::MemoryStorageAdapter;
