//! VEXPORT - Embedding Matrix Export Toolkit
//!
//! Reconstructs a dense f32 embedding matrix and its parallel text sequence
//! from a SQLite record store written by an upstream indexing application.

pub mod codec;
pub mod error;
pub mod loader;
pub mod models;
pub mod paths;
pub mod similarity;

pub use codec::{blob_to_vector, vector_to_blob};
pub use error::{ExportError, Result};
pub use loader::{EmbeddingExport, VectorStore};
pub use models::{fetch_catalog, ModelCatalog, ModelInfo};
pub use paths::{find_default_store, DEFAULT_CANDIDATES};
pub use similarity::{cosine_similarity, dot_product, nearest_rows};
