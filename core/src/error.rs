//! Error types for the Medware API client.
//!
//! # Design
//! Every failure mode an operation can hit lands in one `ApiError`: the
//! server rejecting a write, the transport failing outright, or a body that
//! cannot be (de)serialized. Callers treat them uniformly — the embedding
//! UI shows one generic "failed to fetch/create" notice — but the variants
//! keep the raw detail for diagnostics.

use thiserror::Error;

/// Errors returned by `ApiClient` and `CollectionController` operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned a non-2xx status for a create.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The request never completed: connection refused, DNS failure, etc.
    #[error("transport failed: {0}")]
    Transport(String),

    /// The response body could not be parsed as JSON of the expected shape.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The draft could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}
