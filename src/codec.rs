//! Payload Codec
//!
//! Conversion between f32 embedding vectors and the raw byte blobs persisted
//! in the record store (4 bytes per element, little-endian IEEE-754).

use crate::error::{ExportError, Result};

/// Encode a vector as a packed little-endian f32 blob.
pub fn vector_to_blob(vec: &[f32]) -> Vec<u8> {
    let mut blob = Vec::with_capacity(vec.len() * 4);
    for &value in vec {
        blob.extend_from_slice(&value.to_le_bytes());
    }
    blob
}

/// Decode a packed f32 blob back into a fresh vector.
///
/// The blob length must be a multiple of 4; anything else means the stored
/// payload is truncated or corrupt. `row_id` identifies the offending record
/// in the returned error.
pub fn blob_to_vector(row_id: i64, blob: &[u8]) -> Result<Vec<f32>> {
    if blob.len() % 4 != 0 {
        return Err(ExportError::PayloadDecode {
            row_id,
            len: blob.len(),
        });
    }

    let mut vec = Vec::with_capacity(blob.len() / 4);
    for chunk in blob.chunks_exact(4) {
        vec.push(f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]));
    }
    Ok(vec)
}
