use nb_types::{Block, BlockContent, BlockType, ObjectCodec};
use nb_wire::fields::json_kind;
use nb_wire::tagged::TYPE_KEY;
use serde_json::Value;

use crate::config::{DecoderConfig, UnknownBlockPolicy};
use crate::error::DecodeError;

/// The result of decoding a response body.
///
/// ```text
/// ┌────────────────────────────────────────────────────┐
/// │ DecodedBlocks                                      │
/// │   blocks: Vec<Block>  ← input order, minus skips   │
/// │   skipped: usize      ← unknown types dropped      │
/// └────────────────────────────────────────────────────┘
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct DecodedBlocks {
    pub blocks: Vec<Block>,
    /// Blocks dropped under [`UnknownBlockPolicy::Skip`].
    pub skipped: usize,
}

/// Decodes API responses into typed [`Block`]s.
///
/// Three input shapes are accepted:
///
/// ```text
/// { "object": "block", "type": ..., ... }          one block
/// [ { "object": "block", ... }, ... ]               bare array
/// { "object": "list", "results": [ ... ], ... }     list response
/// ```
///
/// List responses are what the block-children endpoint returns; the
/// pagination fields around `results` are ignored.
///
/// # Example
///
/// ```rust
/// use nb_decoder::BlockDecoder;
///
/// let json = br#"{
///     "object": "list",
///     "results": [
///         { "object": "block", "id": "b1", "type": "divider", "divider": {} }
///     ],
///     "has_more": false
/// }"#;
///
/// let decoded = BlockDecoder::decode(json).unwrap();
/// assert_eq!(decoded.blocks.len(), 1);
/// ```
pub struct BlockDecoder;

impl BlockDecoder {
    /// Decode with the default configuration (unknown types preserved).
    ///
    /// # Errors
    ///
    /// - [`DecodeError::Json`] if `input` is not valid JSON.
    /// - [`DecodeError::UnexpectedShape`] if it holds no block list.
    /// - [`DecodeError::Block`] if any block fails to decode.
    pub fn decode(input: &[u8]) -> Result<DecodedBlocks, DecodeError> {
        Self::decode_with_config(input, &DecoderConfig::default())
    }

    /// Decode with an explicit [`DecoderConfig`].
    ///
    /// # Errors
    ///
    /// All errors from [`decode`](Self::decode), plus
    /// [`DecodeError::UnknownBlockType`] under
    /// [`UnknownBlockPolicy::Reject`].
    pub fn decode_with_config(
        input: &[u8],
        config: &DecoderConfig,
    ) -> Result<DecodedBlocks, DecodeError> {
        let value: Value = serde_json::from_slice(input)?;
        Self::decode_value(&value, config)
    }

    /// Decode an already-parsed JSON value.
    ///
    /// # Errors
    ///
    /// Same as [`decode_with_config`](Self::decode_with_config), minus
    /// [`DecodeError::Json`].
    pub fn decode_value(value: &Value, config: &DecoderConfig) -> Result<DecodedBlocks, DecodeError> {
        let items = block_list(value, "results")?;
        tracing::debug!(count = items.len(), "decoding blocks");

        let mut blocks = Vec::with_capacity(items.len());
        let mut skipped = 0;
        for (index, item) in items.iter().enumerate() {
            if let Some(type_name) = unknown_type(item) {
                match config.unknown_blocks {
                    UnknownBlockPolicy::Preserve => {
                        tracing::warn!(index, type_name, "preserving unknown block type");
                    }
                    UnknownBlockPolicy::Skip => {
                        tracing::warn!(index, type_name, "skipping unknown block type");
                        skipped += 1;
                        continue;
                    }
                    UnknownBlockPolicy::Reject => {
                        return Err(DecodeError::UnknownBlockType {
                            index,
                            type_name: type_name.to_string(),
                        });
                    }
                }
            }

            let block = Block::decode_value(item)
                .map_err(|source| DecodeError::Block { index, source })?;
            tracing::trace!(index, id = %block.id, "decoded block");
            blocks.push(block);
        }

        Ok(DecodedBlocks { blocks, skipped })
    }

    /// Decode request-shaped block contents, without envelopes.
    ///
    /// Accepts one block object, a bare array, or an append request body
    /// (`{"children": [...]}`). Blocks need no `id`, and unknown types
    /// are always preserved.
    ///
    /// # Errors
    ///
    /// [`DecodeError::Json`], [`DecodeError::UnexpectedShape`], or
    /// [`DecodeError::Block`].
    pub fn decode_contents(input: &[u8]) -> Result<Vec<BlockContent>, DecodeError> {
        let value: Value = serde_json::from_slice(input)?;
        block_list(&value, "children")?
            .iter()
            .enumerate()
            .map(|(index, item)| {
                BlockContent::decode_value(item).map_err(|source| DecodeError::Block { index, source })
            })
            .collect()
    }
}

/// Find the list of block values in `value`.
///
/// `wrapper` names the array key of an object that wraps a list
/// (`results` in responses, `children` in request bodies). A list
/// response always counts as a wrapper, even though it carries a `type`
/// of its own (`"type": "block"`); another object counts as one when it
/// has the wrapper key and no `type`. Any other object is a single block.
fn block_list<'a>(value: &'a Value, wrapper: &'static str) -> Result<&'a [Value], DecodeError> {
    match value {
        Value::Array(items) => Ok(items),
        Value::Object(obj) if obj.get("object").and_then(Value::as_str) == Some("list") => {
            match obj.get(wrapper) {
                Some(Value::Array(items)) => Ok(items),
                Some(other) => Err(DecodeError::UnexpectedShape {
                    found: json_kind(other),
                }),
                None => Err(DecodeError::UnexpectedShape {
                    found: "list without block array",
                }),
            }
        }
        Value::Object(obj) if obj.get(TYPE_KEY).is_none() && obj.contains_key(wrapper) => {
            match &obj[wrapper] {
                Value::Array(items) => Ok(items),
                other => Err(DecodeError::UnexpectedShape {
                    found: json_kind(other),
                }),
            }
        }
        Value::Object(_) => Ok(std::slice::from_ref(value)),
        other => Err(DecodeError::UnexpectedShape {
            found: json_kind(other),
        }),
    }
}

/// The `type` string of `item` when it names no known block type.
fn unknown_type(item: &Value) -> Option<&str> {
    let type_name = item.get(TYPE_KEY)?.as_str()?;
    match BlockType::from_wire_name(type_name) {
        BlockType::Unknown(_) => Some(type_name),
        _ => None,
    }
}
