use nb_wire::WireError;

/// Errors that can occur when encoding or decoding typed block values.
///
/// These are higher-level than [`WireError`]: they know which union or
/// block type was being decoded. A `TypeError` wraps the underlying
/// `WireError` when the problem is a missing key or a value of the wrong
/// JSON kind.
///
/// # Error hierarchy
///
/// ```text
/// ┌──────────────────────────────────────────────────────────┐
/// │ TypeError (this crate)                                   │
/// │   ├── UnknownVariant for closed unions (file, icon)      │
/// │   ├── InvalidPayload for a block payload that won't fit  │
/// │   └── wraps WireError for key-level failures             │
/// └──────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, thiserror::Error)]
pub enum TypeError {
    /// A closed union saw a `type` tag it has no variant for.
    ///
    /// Open unions (`LinkToPageBlockValue`, `BlockContent`, rich text)
    /// never raise this; they keep an `Unknown` variant instead.
    #[error("unknown {union} type: {tag:?}")]
    UnknownVariant { union: &'static str, tag: String },

    /// The payload under a block's `type` key failed to decode as that
    /// block type's value.
    #[error("invalid {block_type} payload: {source}")]
    InvalidPayload {
        block_type: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Wire(#[from] WireError),
}
