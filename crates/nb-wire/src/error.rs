/// Errors raised while reading or writing a single JSON object on the wire.
///
/// These sit below the typed block layer: they only know about keys,
/// JSON value kinds, and the `type` discriminator convention. The
/// `nb-types` crate wraps them in `TypeError` when a block value fails
/// to decode.
///
/// ```text
/// ┌───────────────────┬────────────────────────────────────────────────┐
/// │ Variant           │ Cause                                          │
/// ├───────────────────┼────────────────────────────────────────────────┤
/// │ MissingField      │ required key absent from the object            │
/// │ MissingPayload    │ no object under the key named by `type`        │
/// │ UnexpectedType    │ key present but holds the wrong JSON kind      │
/// │ NotAnObject       │ expected a JSON object, got something else     │
/// │ InvalidField      │ key present but its value failed to deserialize│
/// │ Json              │ serde_json failure outside a specific field    │
/// └───────────────────┴────────────────────────────────────────────────┘
/// ```
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    /// The object declared `"type": tag` but carried no `tag` payload.
    #[error("missing payload object for type `{tag}`")]
    MissingPayload { tag: String },

    #[error("field {field}: expected {expected}, found {found}")]
    UnexpectedType {
        field: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    #[error("expected a JSON object, found {found}")]
    NotAnObject { found: &'static str },

    /// The key was present but its value did not match the field's type.
    #[error("invalid value for field {field}: {source}")]
    InvalidField {
        field: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
