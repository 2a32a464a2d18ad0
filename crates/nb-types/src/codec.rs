use nb_wire::Object;
use nb_wire::fields::as_object;
use serde_json::Value;

use crate::error::TypeError;

/// Object-level codec for values whose wire shape is not a plain struct.
///
/// Implementors write their fields *into* an existing object rather than
/// returning a fresh one. That lets a composite value hand the same sink
/// to a second codec and get one flat JSON object out, and lets decoders
/// read the same borrowed object more than once.
///
/// Regular values use `serde` derives directly; only the irregular ones
/// (sibling-tagged unions, flat merges, explicit nulls) implement this
/// trait and get their `Serialize`/`Deserialize` impls from
/// [`serde_via_object_codec!`].
pub trait ObjectCodec: Sized {
    /// Write this value's fields into `obj`, leaving other keys alone.
    fn encode_into(&self, obj: &mut Object) -> Result<(), TypeError>;

    /// Read a value out of `obj`. Keys the value does not own are ignored.
    fn decode_object(obj: &Object) -> Result<Self, TypeError>;

    /// Encode into a fresh object.
    fn encode_object(&self) -> Result<Object, TypeError> {
        let mut obj = Object::new();
        self.encode_into(&mut obj)?;
        Ok(obj)
    }

    /// Decode from a JSON value that must be an object.
    fn decode_value(value: &Value) -> Result<Self, TypeError> {
        Self::decode_object(as_object(value)?)
    }
}

/// Implement `Serialize` and `Deserialize` for types that implement
/// [`ObjectCodec`], so they nest inside derived structs (`Vec<RichText>`,
/// `Option<IconFile>`, ...).
macro_rules! serde_via_object_codec {
    ($($ty:ty),+ $(,)?) => {$(
        impl serde::Serialize for $ty {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                use serde::ser::Error as _;
                let obj = $crate::codec::ObjectCodec::encode_object(self)
                    .map_err(S::Error::custom)?;
                serde::Serialize::serialize(&obj, serializer)
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                use serde::de::Error as _;
                let obj = <nb_wire::Object as serde::Deserialize>::deserialize(deserializer)?;
                <$ty as $crate::codec::ObjectCodec>::decode_object(&obj).map_err(D::Error::custom)
            }
        }
    )+};
}

pub(crate) use serde_via_object_codec;
