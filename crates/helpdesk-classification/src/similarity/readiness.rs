//! Store readiness check, one-shot repair, and re-check.
//!
//! Each gap (missing capability, missing attribute) is repaired at most once
//! per call. Both repairs are "create if absent" on the store side, so
//! concurrent callers racing on them is harmless.

use helpdesk_core::errors::{HelpdeskError, HelpdeskResult};
use helpdesk_core::traits::{ITicketStore, StoreCapability, TicketAttribute};
use helpdesk_observability::events;

/// First unmet requirement for similarity search, in check order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreReadiness {
    /// No historical tickets at all.
    EmptyHistory,
    /// The vector-search capability is not enabled.
    MissingCapability,
    /// Tickets have no embedding attribute.
    MissingAttribute,
    /// The attribute exists but no ticket carries an embedding.
    NoEmbeddings,
    /// Embedded tickets exist but none of them carries a group label.
    NoLabelledHistory,
    Ready,
}

fn unavailable(context: &str, e: HelpdeskError) -> HelpdeskError {
    HelpdeskError::StoreUnavailable {
        reason: format!("{context}: {e}"),
    }
}

/// Report the first gap between the store's state and a searchable store.
/// Any store error is reported as `StoreUnavailable`.
pub fn inspect(store: &dyn ITicketStore) -> HelpdeskResult<StoreReadiness> {
    let count = store
        .count()
        .map_err(|e| unavailable("historical store unreachable", e))?;
    if count == 0 {
        return Ok(StoreReadiness::EmptyHistory);
    }

    let capability = StoreCapability::VectorSearch;
    if !store
        .has_capability(capability)
        .map_err(|e| unavailable("capability check failed", e))?
    {
        return Ok(StoreReadiness::MissingCapability);
    }

    let attribute = TicketAttribute::Embedding;
    if !store
        .has_attribute(attribute)
        .map_err(|e| unavailable("attribute check failed", e))?
    {
        return Ok(StoreReadiness::MissingAttribute);
    }

    let embedded = store
        .count_with_attribute(attribute)
        .map_err(|e| unavailable("embedding count failed", e))?;
    if embedded == 0 {
        return Ok(StoreReadiness::NoEmbeddings);
    }

    let usable = store
        .count_usable()
        .map_err(|e| unavailable("labelled history count failed", e))?;
    if usable == 0 {
        return Ok(StoreReadiness::NoLabelledHistory);
    }

    Ok(StoreReadiness::Ready)
}

fn repair(store: &dyn ITicketStore, gap: StoreReadiness) -> HelpdeskResult<()> {
    let name = match gap {
        StoreReadiness::MissingCapability => {
            let capability = StoreCapability::VectorSearch;
            store.enable_capability(capability).map_err(|e| {
                unavailable(&format!("could not enable '{capability}'"), e)
            })?;
            capability.as_str()
        }
        StoreReadiness::MissingAttribute => {
            let attribute = TicketAttribute::Embedding;
            store
                .add_attribute(attribute)
                .map_err(|e| unavailable(&format!("could not add '{attribute}'"), e))?;
            attribute.as_str()
        }
        _ => return Ok(()),
    };
    events::store_self_healed(name);
    Ok(())
}

/// Bring the store to [`StoreReadiness::Ready`] or explain why it cannot be.
///
/// `EmptyHistory`, `NoEmbeddings` and `NoLabelledHistory` yield
/// `InsufficientHistory`; a gap that
/// survives its repair, or a failed repair, yields `StoreUnavailable`.
pub fn ensure_ready(store: &dyn ITicketStore) -> HelpdeskResult<()> {
    let mut repaired: Vec<StoreReadiness> = Vec::with_capacity(2);
    loop {
        match inspect(store)? {
            StoreReadiness::Ready => return Ok(()),
            StoreReadiness::EmptyHistory => {
                return Err(HelpdeskError::InsufficientHistory {
                    reason: "historical store has no tickets".to_string(),
                })
            }
            StoreReadiness::NoEmbeddings => {
                return Err(HelpdeskError::InsufficientHistory {
                    reason: "no historical tickets carry an embedding".to_string(),
                })
            }
            StoreReadiness::NoLabelledHistory => {
                return Err(HelpdeskError::InsufficientHistory {
                    reason: "no embedded historical ticket has an assigned group".to_string(),
                })
            }
            gap => {
                if repaired.contains(&gap) {
                    return Err(HelpdeskError::StoreUnavailable {
                        reason: format!("{gap:?} persists after self-healing"),
                    });
                }
                repair(store, gap)?;
                repaired.push(gap);
            }
        }
    }
}
