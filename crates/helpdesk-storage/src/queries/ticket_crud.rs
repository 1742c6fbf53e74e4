//! Ticket import, lookup, and counting.

use rusqlite::{params, Connection, OptionalExtension};

use helpdesk_core::errors::HelpdeskResult;
use helpdesk_core::models::HistoricalTicket;
use helpdesk_core::traits::TicketAttribute;

use super::schema_ops;
use super::vector_search::{bytes_to_f32_vec, f32_vec_to_bytes};
use crate::to_storage_err;

/// Total number of stored tickets.
pub fn count_tickets(conn: &Connection) -> HelpdeskResult<usize> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM historical_tickets", [], |row| {
            row.get(0)
        })
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(count as usize)
}

/// Number of tickets with a non-null value for the attribute.
pub fn count_with_attribute(
    conn: &Connection,
    attribute: TicketAttribute,
) -> HelpdeskResult<usize> {
    schema_ops::require_attribute(conn, attribute)?;
    let sql = match attribute {
        TicketAttribute::Embedding => {
            "SELECT COUNT(*) FROM historical_tickets WHERE embedding IS NOT NULL"
        }
    };
    let count: i64 = conn
        .query_row(sql, [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(count as usize)
}

/// Number of tickets that can answer a similarity search: a group label
/// and an embedding are both present.
pub fn count_usable(conn: &Connection) -> HelpdeskResult<usize> {
    schema_ops::require_attribute(conn, TicketAttribute::Embedding)?;
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM historical_tickets
             WHERE embedding IS NOT NULL AND assigned_group IS NOT NULL",
            [],
            |row| row.get(0),
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(count as usize)
}

/// Upsert tickets row by row. Callers wrap this in a write transaction.
/// Embeddings carried by the tickets are written too, which requires the
/// embedding attribute to exist.
pub fn upsert_tickets(conn: &Connection, tickets: &[HistoricalTicket]) -> HelpdeskResult<usize> {
    if tickets.iter().any(|t| t.embedding.is_some()) {
        schema_ops::require_attribute(conn, TicketAttribute::Embedding)?;
    }
    for ticket in tickets {
        upsert_one(conn, ticket)?;
    }
    Ok(tickets.len())
}

fn upsert_one(conn: &Connection, ticket: &HistoricalTicket) -> HelpdeskResult<()> {
    conn.execute(
        "INSERT INTO historical_tickets (id, subject, description, assigned_group)
         VALUES (?1, ?2, ?3, ?4)
         ON CONFLICT(id) DO UPDATE SET
            subject = excluded.subject,
            description = excluded.description,
            assigned_group = excluded.assigned_group",
        params![
            ticket.id,
            ticket.subject,
            ticket.description,
            ticket.assigned_group
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    if let Some(ref embedding) = ticket.embedding {
        conn.execute(
            "UPDATE historical_tickets SET embedding = ?1 WHERE id = ?2",
            params![f32_vec_to_bytes(embedding), ticket.id],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    }
    Ok(())
}

/// Fetch one ticket, including its embedding when the attribute exists.
pub fn get_ticket(conn: &Connection, id: &str) -> HelpdeskResult<Option<HistoricalTicket>> {
    if schema_ops::has_attribute(conn, TicketAttribute::Embedding)? {
        conn.query_row(
            "SELECT id, subject, description, assigned_group, embedding
             FROM historical_tickets WHERE id = ?1",
            params![id],
            |row| {
                let blob: Option<Vec<u8>> = row.get(4)?;
                Ok(HistoricalTicket {
                    id: row.get(0)?,
                    subject: row.get(1)?,
                    description: row.get(2)?,
                    assigned_group: row.get(3)?,
                    embedding: blob.map(|b| bytes_to_f32_vec(&b)),
                })
            },
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))
    } else {
        conn.query_row(
            "SELECT id, subject, description, assigned_group
             FROM historical_tickets WHERE id = ?1",
            params![id],
            |row| {
                Ok(HistoricalTicket {
                    id: row.get(0)?,
                    subject: row.get(1)?,
                    description: row.get(2)?,
                    assigned_group: row.get(3)?,
                    embedding: None,
                })
            },
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))
    }
}

/// Tickets still lacking an embedding, oldest first.
pub fn missing_embedding(
    conn: &Connection,
    limit: usize,
) -> HelpdeskResult<Vec<HistoricalTicket>> {
    schema_ops::require_attribute(conn, TicketAttribute::Embedding)?;
    let mut stmt = conn
        .prepare(
            "SELECT id, subject, description, assigned_group
             FROM historical_tickets
             WHERE embedding IS NULL
             ORDER BY created_at, id
             LIMIT ?1",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;

    let rows = stmt
        .query_map(params![limit as i64], |row| {
            Ok(HistoricalTicket {
                id: row.get(0)?,
                subject: row.get(1)?,
                description: row.get(2)?,
                assigned_group: row.get(3)?,
                embedding: None,
            })
        })
        .map_err(|e| to_storage_err(e.to_string()))?;

    rows.collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))
}
