use nb_types::TypeError;

/// Errors that can occur while decoding API responses into blocks.
///
/// Error hierarchy:
///
/// ```text
///   DecodeError
///   ├── Json(serde_json)     ← input is not valid JSON
///   ├── UnexpectedShape      ← JSON is valid but holds no block list
///   ├── UnknownBlockType     ← unknown type under UnknownBlockPolicy::Reject
///   └── Block { index, .. }  ← one block failed in nb-types (TypeError)
/// ```
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// The top-level value was neither a block object, an array of
    /// blocks, nor a list response.
    #[error("expected a block, an array of blocks, or a list response; found {found}")]
    UnexpectedShape { found: &'static str },

    #[error("block {index}: unknown block type {type_name:?}")]
    UnknownBlockType { index: usize, type_name: String },

    /// A single block failed to decode. `index` is its position in the
    /// input list, counting skipped blocks.
    #[error("block {index}: {source}")]
    Block {
        index: usize,
        #[source]
        source: TypeError,
    },
}
