//! # helpdesk-observability
//!
//! Structured JSON tracing, span helpers per operation, and one logging
//! function per notable event in the classification pipeline.

pub mod tracing_setup;

pub use tracing_setup::events;
pub use tracing_setup::{init_tracing, init_tracing_from_config, init_tracing_with_filter};
