use nb_wire::Object;
use nb_wire::fields::{read_optional, write_field, write_null};
use serde::{Deserialize, Serialize};

use crate::codec::{ObjectCodec, serde_via_object_codec};
use crate::error::TypeError;
use crate::identifier::BlockId;

const SYNCED_FROM: &str = "synced_from";

/// Payload of `synced_block`.
///
/// An original synced block owns its content; a reference mirrors the
/// content of the original identified by `block_id`.
///
/// ```text
/// OriginalBlock   ◄──►  {"synced_from": null}
/// Reference(id)   ◄──►  {"synced_from": {"block_id": "<id>"}}
/// ```
///
/// On encode, `OriginalBlock` writes the key with an explicit `null`; the
/// key is never omitted. On decode, a missing key and a `null` are both
/// read as `OriginalBlock`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SyncedBlockValue {
    OriginalBlock,
    Reference(BlockId),
}

#[derive(Deserialize)]
struct SyncedFrom {
    block_id: BlockId,
}

#[derive(Serialize)]
struct SyncedFromRef<'a> {
    block_id: &'a BlockId,
}

impl ObjectCodec for SyncedBlockValue {
    fn encode_into(&self, obj: &mut Object) -> Result<(), TypeError> {
        match self {
            Self::Reference(block_id) => {
                write_field(obj, SYNCED_FROM, &SyncedFromRef { block_id })?;
            }
            Self::OriginalBlock => write_null(obj, SYNCED_FROM),
        }
        Ok(())
    }

    fn decode_object(obj: &Object) -> Result<Self, TypeError> {
        Ok(match read_optional::<SyncedFrom>(obj, SYNCED_FROM)? {
            Some(reference) => Self::Reference(reference.block_id),
            None => Self::OriginalBlock,
        })
    }
}

serde_via_object_codec!(SyncedBlockValue);

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn absent_key_is_original() {
        assert_eq!(
            SyncedBlockValue::decode_value(&json!({})).unwrap(),
            SyncedBlockValue::OriginalBlock
        );
    }

    #[test]
    fn null_is_original() {
        assert_eq!(
            SyncedBlockValue::decode_value(&json!({ "synced_from": null })).unwrap(),
            SyncedBlockValue::OriginalBlock
        );
    }

    #[test]
    fn reference_decodes_block_id() {
        let value = json!({ "synced_from": { "type": "block_id", "block_id": "B" } });
        assert_eq!(
            SyncedBlockValue::decode_value(&value).unwrap(),
            SyncedBlockValue::Reference(BlockId::new("B"))
        );
    }

    #[test]
    fn original_encodes_explicit_null() {
        let encoded = serde_json::to_string(&SyncedBlockValue::OriginalBlock).unwrap();
        assert_eq!(encoded, r#"{"synced_from":null}"#);
    }

    #[test]
    fn reference_encodes_block_id() {
        let value = serde_json::to_value(SyncedBlockValue::Reference(BlockId::new("B"))).unwrap();
        assert_eq!(value, json!({ "synced_from": { "block_id": "B" } }));
    }

    #[test]
    fn reference_without_block_id_fails() {
        let value = json!({ "synced_from": {} });
        assert!(SyncedBlockValue::decode_value(&value).is_err());
    }

    #[test]
    fn synced_from_wrong_type_fails() {
        let value = json!({ "synced_from": "B" });
        assert!(SyncedBlockValue::decode_value(&value).is_err());
    }
}
