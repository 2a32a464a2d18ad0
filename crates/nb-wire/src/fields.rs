use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::WireError;

/// A JSON object as it travels on the wire.
///
/// Every block value reads its fields out of an `Object` and writes them
/// into one. Because reads only borrow the object, several decoders can
/// look at the same object one after the other, each picking out the keys
/// it owns. Writers share one `Object` sink the same way, which is how two
/// logically separate values end up merged into one flat JSON object:
///
/// ```text
///   decode                           encode
///   ┌──────────────┐                 ┌──────────────┐
///   │ raw Object   │──► caption      │  caption ───►│
///   │  (borrowed)  │──► file (type,  │  file ──────►│ one Object
///   └──────────────┘     external)   └──────────────┘
/// ```
pub type Object = Map<String, Value>;

/// Name the JSON kind of a value, for diagnostics.
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Borrow a value as an object, or fail with [`WireError::NotAnObject`].
pub fn as_object(value: &Value) -> Result<&Object, WireError> {
    value.as_object().ok_or(WireError::NotAnObject {
        found: json_kind(value),
    })
}

/// Take ownership of a value as an object.
pub fn into_object(value: Value) -> Result<Object, WireError> {
    match value {
        Value::Object(obj) => Ok(obj),
        other => Err(WireError::NotAnObject {
            found: json_kind(&other),
        }),
    }
}

// ── Reading ───────────────────────────────────────────────────────────
//
// Reads never consume the object. A key that belongs to another decoder
// is simply left alone, and keys nobody asks for are ignored.

/// Read a required field.
///
/// Absence is [`WireError::MissingField`]; a present value of the wrong
/// shape is [`WireError::InvalidField`]. An explicit `null` is handed to
/// `T`, so `T = Option<_>` accepts it while `T = String` rejects it.
pub fn read_required<T: DeserializeOwned>(obj: &Object, field: &'static str) -> Result<T, WireError> {
    let value = obj.get(field).ok_or(WireError::MissingField { field })?;
    T::deserialize(value).map_err(|source| WireError::InvalidField { field, source })
}

/// Read an optional field. Both an absent key and an explicit `null`
/// decode to `None`.
pub fn read_optional<T: DeserializeOwned>(
    obj: &Object,
    field: &'static str,
) -> Result<Option<T>, WireError> {
    match obj.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => T::deserialize(value)
            .map(Some)
            .map_err(|source| WireError::InvalidField { field, source }),
    }
}

/// Read a required string field without copying it.
pub fn read_str<'a>(obj: &'a Object, field: &'static str) -> Result<&'a str, WireError> {
    match obj.get(field) {
        Some(Value::String(s)) => Ok(s.as_str()),
        Some(other) => Err(WireError::UnexpectedType {
            field,
            expected: "string",
            found: json_kind(other),
        }),
        None => Err(WireError::MissingField { field }),
    }
}

// ── Writing ───────────────────────────────────────────────────────────

/// Write `value` under `field`, replacing any previous entry.
pub fn write_field<T: Serialize + ?Sized>(
    obj: &mut Object,
    field: &str,
    value: &T,
) -> Result<(), WireError> {
    obj.insert(field.to_string(), serde_json::to_value(value)?);
    Ok(())
}

/// Write `value` when present. `None` leaves the key out entirely.
pub fn write_optional<T: Serialize>(
    obj: &mut Object,
    field: &str,
    value: Option<&T>,
) -> Result<(), WireError> {
    match value {
        Some(v) => write_field(obj, field, v),
        None => Ok(()),
    }
}

/// Write `field` with an explicit JSON `null`.
///
/// Distinct from omitting the key: the API treats `"k": null` and a
/// missing `k` differently in some request bodies.
pub fn write_null(obj: &mut Object, field: &str) {
    obj.insert(field.to_string(), Value::Null);
}
