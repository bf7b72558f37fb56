pub mod file;
pub mod in_memory;

pub use file::FileLocalStore;
pub use in_memory::InMemoryLocalStore;
