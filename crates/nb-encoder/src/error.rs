use nb_types::TypeError;

/// Errors that can occur while building an append-children request.
///
/// The encoder checks the request against the API's per-request limits
/// before serializing anything, and propagates failures from the typed
/// value layer.
///
/// Error hierarchy:
///
/// ```text
///   EncodeError
///   ├── EmptyPayload          ← no blocks were added before .encode()
///   ├── TooManyChildren       ← one children array exceeds the limit
///   ├── NestingTooDeep        ← children nested past the allowed depth
///   ├── InvalidHeadingLevel   ← add_heading called with a level not in 1..=3
///   ├── Type(TypeError)       ← from nb-types value encoding
///   └── Json(serde_json)      ← from final serialization
/// ```
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("no blocks have been added to the encoder")]
    EmptyPayload,

    #[error("children array holds {count} blocks (limit {limit})")]
    TooManyChildren { count: usize, limit: usize },

    #[error("block nested {depth} levels deep (limit {limit})")]
    NestingTooDeep { depth: usize, limit: usize },

    #[error("heading level must be 1, 2, or 3 (got {0})")]
    InvalidHeadingLevel(u8),

    #[error(transparent)]
    Type(#[from] TypeError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
