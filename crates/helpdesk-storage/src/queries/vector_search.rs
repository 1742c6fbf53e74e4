//! Cosine nearest-neighbour search over stored ticket embeddings.
//!
//! Brute-force scan computed in Rust: every labelled, embedded ticket is
//! scored against the query and the best `limit` above the threshold kept.

use rusqlite::{params, Connection};
use tracing::debug;

use helpdesk_core::errors::{HelpdeskError, HelpdeskResult};
use helpdesk_core::models::NeighborMatch;
use helpdesk_core::traits::{StoreCapability, TicketAttribute};

use super::schema_ops;
use crate::to_storage_err;

/// Labelled neighbours with cosine similarity strictly above `threshold`,
/// most similar first (ascending cosine distance), at most `limit`.
pub fn nearest_neighbors(
    conn: &Connection,
    query_embedding: &[f32],
    threshold: f64,
    limit: usize,
) -> HelpdeskResult<Vec<NeighborMatch>> {
    schema_ops::require_capability(conn, StoreCapability::VectorSearch)?;
    schema_ops::require_attribute(conn, TicketAttribute::Embedding)?;

    // Zero-norm queries have no direction; nothing can be similar to them.
    let query_norm_sq: f64 = query_embedding
        .iter()
        .map(|x| (*x as f64) * (*x as f64))
        .sum();
    if query_norm_sq == 0.0 || limit == 0 {
        return Ok(vec![]);
    }
    let query_len = query_embedding.len();

    let mut stmt = conn
        .prepare(
            "SELECT id, assigned_group, embedding
             FROM historical_tickets
             WHERE embedding IS NOT NULL AND assigned_group IS NOT NULL
             ORDER BY id",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map([], |row| {
            let id: String = row.get(0)?;
            let group: String = row.get(1)?;
            let blob: Vec<u8> = row.get(2)?;
            Ok((id, group, blob))
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    let mut scored: Vec<NeighborMatch> = Vec::new();
    for row in rows {
        let (id, group, blob) = row.map_err(|e| to_storage_err(e.to_string()))?;
        // Skip dimension mismatches without deserializing the full vector.
        if blob.len() != query_len * 4 {
            debug!(
                ticket_id = %id,
                stored_bytes = blob.len(),
                "skipping embedding with mismatched dimensions"
            );
            continue;
        }
        let stored = bytes_to_f32_vec(&blob);
        let similarity = cosine_similarity(query_embedding, &stored);
        if similarity > threshold {
            scored.push(NeighborMatch { group, similarity });
        }
    }

    // Stable: equal similarities keep ticket-id order.
    scored.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored.truncate(limit);
    Ok(scored)
}

/// Write an embedding onto a ticket.
pub fn store_embedding(
    conn: &Connection,
    ticket_id: &str,
    embedding: &[f32],
) -> HelpdeskResult<()> {
    schema_ops::require_attribute(conn, TicketAttribute::Embedding)?;
    let updated = conn
        .execute(
            "UPDATE historical_tickets SET embedding = ?1 WHERE id = ?2",
            params![f32_vec_to_bytes(embedding), ticket_id],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    if updated == 0 {
        return Err(HelpdeskError::TicketNotFound {
            id: ticket_id.to_string(),
        });
    }
    Ok(())
}

/// Convert f32 slice to bytes (little-endian).
pub(crate) fn f32_vec_to_bytes(v: &[f32]) -> Vec<u8> {
    v.iter().flat_map(|f| f.to_le_bytes()).collect()
}

/// Convert bytes back to f32 vec. Trailing partial chunks are ignored.
pub(crate) fn bytes_to_f32_vec(bytes: &[u8]) -> Vec<f32> {
    bytes
        .chunks_exact(4)
        .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect()
}

/// Cosine similarity between two vectors.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    let dot: f64 = a
        .iter()
        .zip(b.iter())
        .map(|(x, y)| (*x as f64) * (*y as f64))
        .sum();
    let norm_a: f64 = a
        .iter()
        .map(|x| (*x as f64) * (*x as f64))
        .sum::<f64>()
        .sqrt();
    let norm_b: f64 = b
        .iter()
        .map(|x| (*x as f64) * (*x as f64))
        .sum::<f64>()
        .sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}
