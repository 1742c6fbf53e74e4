//! Span definitions per operation.

/// Span around one `classify_ticket` request.
#[macro_export]
macro_rules! classification_span {
    ($subject:expr) => {
        tracing::info_span!("helpdesk.classify_ticket", subject = %$subject)
    };
}

/// Span around one similarity lookup.
#[macro_export]
macro_rules! similarity_span {
    ($top_k:expr, $threshold:expr) => {
        tracing::info_span!("helpdesk.similarity", top_k = $top_k, threshold = $threshold)
    };
}

/// Span around an embedding backfill run.
#[macro_export]
macro_rules! backfill_span {
    ($provider:expr, $batch_size:expr) => {
        tracing::info_span!("helpdesk.backfill", provider = %$provider, batch_size = $batch_size)
    };
}
