use serde_json::Value;

use crate::error::WireError;
use crate::fields::{Object, as_object, json_kind, read_str};

/// Key holding the discriminator in every tagged object.
pub const TYPE_KEY: &str = "type";

/// A sibling-tagged JSON object, read without copying.
///
/// The API tags its unions the same way everywhere (blocks, rich text
/// spans, files, icons): a string `type` key names the variant, and the
/// variant's payload sits under a sibling key spelled exactly like the
/// tag.
///
/// ```text
/// {
///   "type": "paragraph",          ◄── tag
///   "paragraph": { ... },         ◄── payload (key == tag)
///   "id": "...", ...              ◄── other keys, untouched
/// }
/// ```
///
/// The frame only borrows the object, so the caller can keep reading the
/// remaining keys from it afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TaggedFrame<'a> {
    pub tag: &'a str,
    /// The value under the key named by `tag`, if any.
    pub payload: Option<&'a Value>,
}

impl<'a> TaggedFrame<'a> {
    /// Read the discriminator and locate its payload.
    ///
    /// A missing or non-string `type` is an error. A missing payload is
    /// not: some variants carry none, so the caller decides via
    /// [`payload_object`](Self::payload_object).
    pub fn read(obj: &'a Object) -> Result<Self, WireError> {
        let tag = read_str(obj, TYPE_KEY)?;
        Ok(Self {
            tag,
            payload: obj.get(tag),
        })
    }

    /// Borrow the payload as an object.
    ///
    /// Returns [`WireError::MissingPayload`] when the key is absent and
    /// [`WireError::NotAnObject`] when it holds some other JSON kind.
    pub fn payload_object(&self) -> Result<&'a Object, WireError> {
        as_object(self.payload_value()?)
    }

    /// Same checks as [`payload_object`](Self::payload_object), but hands
    /// back the `Value` itself so it can go straight into
    /// `T::deserialize`.
    pub fn payload_value(&self) -> Result<&'a Value, WireError> {
        match self.payload {
            Some(value) if value.is_object() => Ok(value),
            Some(other) => Err(WireError::NotAnObject {
                found: json_kind(other),
            }),
            None => Err(WireError::MissingPayload {
                tag: self.tag.to_string(),
            }),
        }
    }

    /// Write `"type": tag` and `tag: payload` into `obj`.
    ///
    /// Other entries of `obj` are kept, so a frame can be merged into an
    /// object that already holds sibling fields.
    pub fn write(obj: &mut Object, tag: &str, payload: Value) {
        obj.insert(TYPE_KEY.to_string(), Value::String(tag.to_string()));
        obj.insert(tag.to_string(), payload);
    }
}
