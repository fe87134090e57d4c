use reqwest::StatusCode;

/// Marker the API puts in the body when an idempotency key was already
/// consumed within its deduplication window.
const IDEMPOTENCY_CONFLICT_MARKER: &str = "idempotency key already used";

#[derive(thiserror::Error)]
pub enum LettermintError {
    /// The client settings cannot produce a working transport, e.g. an
    /// empty API key.
    #[error("invalid client configuration: {0}")]
    Configuration(String),
    /// A request failed pre-flight validation; nothing was sent.
    #[error("{0}")]
    InvalidRequest(String),
    /// The API answered with a non-success status. The raw body is kept so
    /// callers can decide how to treat specific failures.
    #[error("Lettermint API error ({status}): {body}")]
    Api { status: StatusCode, body: String },
    /// The API answered with a success status but the body could not be
    /// deserialized.
    #[error("failed to deserialize the Lettermint API response")]
    Protocol(#[source] serde_json::Error),
    /// The request never completed: connection failure, timeout, or an
    /// abort while the call was in flight.
    #[error("failed to reach the Lettermint API")]
    Transport(#[from] reqwest::Error),
}

impl LettermintError {
    /// True when the API rejected the call because its idempotency key was
    /// already used. Some callers treat that as "already sent" rather than
    /// as a failure; this layer never makes that decision for them.
    pub fn is_idempotency_conflict(&self) -> bool {
        match self {
            Self::Api { body, .. } => body.to_lowercase().contains(IDEMPOTENCY_CONFLICT_MARKER),
            _ => false,
        }
    }
}

impl std::fmt::Debug for LettermintError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// Walks the source chain so `{:?}` shows the whole causal story, not just
/// the outermost message.
fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
