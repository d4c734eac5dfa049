// Embedding table and the plain-text vectors loader.

pub mod loader;
pub mod table;

pub use loader::{load_vectors, load_vectors_with_progress, read_vectors};
pub use table::EmbeddingTable;
