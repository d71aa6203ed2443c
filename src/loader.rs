//! Vector Matrix Loader
//!
//! Streams the `embeddings` table of a record store and reassembles the
//! persisted blobs into a dense f32 matrix with a parallel text sequence.

use ndarray::Array2;
use rusqlite::{Connection, OpenFlags};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::codec::blob_to_vector;
use crate::error::{ExportError, Result};

/// A fully materialized export.
///
/// `texts` and the matrix rows are parallel-indexed: text *i* is the source
/// chunk whose embedding sits in row *i*.
#[derive(Debug, Clone)]
pub struct EmbeddingExport {
    /// Source text of each record, in retrieval order.
    pub texts: Vec<String>,
    /// One decoded embedding per row.
    pub matrix: Array2<f32>,
}

impl EmbeddingExport {
    /// Number of exported rows.
    pub fn len(&self) -> usize {
        self.texts.len()
    }

    /// True when the store held no records.
    pub fn is_empty(&self) -> bool {
        self.texts.is_empty()
    }

    /// Embedding dimension (0 for an empty export).
    pub fn dim(&self) -> usize {
        self.matrix.ncols()
    }
}

/// Read-only handle on a record store.
///
/// The connection is released when the handle is dropped, on every exit
/// path.
#[derive(Debug)]
pub struct VectorStore {
    conn: Connection,
}

impl VectorStore {
    /// Open the store at `path` read-only.
    ///
    /// A missing path is a precondition failure: it is reported before any
    /// connection attempt, so opening never creates a file as a side effect.
    pub fn open_read_only(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ExportError::MissingStore(PathBuf::from(path)));
        }

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        Ok(Self { conn })
    }

    /// Number of records in the store.
    pub fn count(&self) -> Result<usize> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM embeddings", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Load every record and stack the decoded vectors into a matrix.
    ///
    /// One synchronous pass in the store's natural retrieval order, with no
    /// re-sorting. The first row fixes the embedding dimension; any later
    /// row that decodes to a different length aborts the whole export.
    /// Either every row makes it into the result or none do.
    ///
    /// An empty table yields an empty text sequence and a (0, 0) matrix,
    /// which is a valid, non-error outcome.
    pub fn export(&self) -> Result<EmbeddingExport> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, text_chunk, vector_blob FROM embeddings")?;
        let rows = stmt.query_map([], |row| {
            let id: i64 = row.get(0)?;
            let text: String = row.get(1)?;
            let blob: Vec<u8> = row.get(2)?;
            Ok((id, text, blob))
        })?;

        let mut texts = Vec::new();
        let mut flat = Vec::new();
        let mut dim: Option<usize> = None;

        for row in rows {
            let (id, text, blob) = row?;
            let vector = blob_to_vector(id, &blob)?;

            match dim {
                None => dim = Some(vector.len()),
                Some(expected) if vector.len() != expected => {
                    return Err(ExportError::ShapeMismatch {
                        row_id: id,
                        expected,
                        actual: vector.len(),
                    });
                }
                Some(_) => {}
            }

            texts.push(text);
            flat.extend_from_slice(&vector);
        }

        let dim = dim.unwrap_or(0);
        let row_count = texts.len();
        // Per-row length was validated above, so the flat buffer is exactly
        // row_count * dim long.
        let matrix = Array2::from_shape_vec((row_count, dim), flat)
            .expect("per-row vector lengths validated during decode");

        info!("loaded {} chunks, matrix shape ({}, {})", row_count, row_count, dim);
        Ok(EmbeddingExport { texts, matrix })
    }

    /// Dump `id,text` rows to a CSV file with basic quote escaping.
    pub fn export_to_csv(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = File::create(path)?;
        let mut out = BufWriter::new(file);
        writeln!(out, "ID,Text Chunk")?;

        let mut stmt = self
            .conn
            .prepare("SELECT id, text_chunk FROM embeddings")?;
        let rows = stmt.query_map([], |row| {
            Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?))
        })?;

        for row in rows {
            let (id, text) = row?;
            writeln!(out, "{},\"{}\"", id, text.replace('"', "\"\""))?;
        }

        out.flush()?;
        Ok(())
    }
}
