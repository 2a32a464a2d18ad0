use nb_types::{
    BlockContent, CodeBlockValue, HeadingBlockValue, ObjectCodec, QuoteBlockValue, RichText,
    TextAndChildrenBlockValue, ToDoBlockValue,
};
use nb_wire::Object;
use serde_json::Value;

use crate::config::EncoderConfig;
use crate::error::EncodeError;

const CHILDREN: &str = "children";

/// Builds the body of an append-block-children request.
///
/// Blocks are added in order with [`add`](Self::add) or one of the
/// `add_*` shortcuts for common text blocks, then serialized with
/// [`encode`](Self::encode):
///
/// ```text
/// {
///   "children": [
///     { "object": "block", "type": "heading_1", "heading_1": { ... } },
///     { "object": "block", "type": "paragraph", "paragraph": { ... } }
///   ]
/// }
/// ```
///
/// Nested `children` set on the added values are encoded inline, so the
/// limits in [`EncoderConfig`] are checked across the whole tree before
/// anything is written.
///
/// # Usage
///
/// ```rust
/// use nb_encoder::BlockEncoder;
///
/// let body = BlockEncoder::new()
///     .add_heading(1, "Release notes")
///     .unwrap()
///     .add_paragraph("Nothing broke this time.")
///     .add_divider()
///     .encode()
///     .unwrap();
///
/// assert_eq!(body["children"].as_array().unwrap().len(), 3);
/// ```
pub struct BlockEncoder {
    blocks: Vec<BlockContent>,
    config: EncoderConfig,
}

impl BlockEncoder {
    /// Create an encoder with the default request limits.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EncoderConfig::default())
    }

    #[must_use]
    pub fn with_config(config: EncoderConfig) -> Self {
        Self {
            blocks: Vec::new(),
            config,
        }
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn blocks(&self) -> &[BlockContent] {
        &self.blocks
    }

    // ── Block addition methods ──────────────────────────────────────────
    //
    // Each shortcut wraps `text` in a single unstyled span and pushes the
    // matching `BlockContent` variant. Anything richer goes through `add`.

    /// Append an already-built block.
    pub fn add(&mut self, content: BlockContent) -> &mut Self {
        self.blocks.push(content);
        self
    }

    pub fn add_paragraph(&mut self, text: &str) -> &mut Self {
        self.add(BlockContent::Paragraph(TextAndChildrenBlockValue::new(
            spans(text),
        )))
    }

    /// Append a heading of the given level.
    ///
    /// # Errors
    ///
    /// [`EncodeError::InvalidHeadingLevel`] unless `level` is 1, 2, or 3.
    pub fn add_heading(&mut self, level: u8, text: &str) -> Result<&mut Self, EncodeError> {
        let value = HeadingBlockValue::new(spans(text));
        let content = match level {
            1 => BlockContent::Heading1(value),
            2 => BlockContent::Heading2(value),
            3 => BlockContent::Heading3(value),
            other => return Err(EncodeError::InvalidHeadingLevel(other)),
        };
        Ok(self.add(content))
    }

    pub fn add_to_do(&mut self, text: &str, checked: bool) -> &mut Self {
        self.add(BlockContent::ToDo(
            ToDoBlockValue::new(spans(text)).with_checked(checked),
        ))
    }

    pub fn add_bulleted(&mut self, text: &str) -> &mut Self {
        self.add(BlockContent::BulletedListItem(
            TextAndChildrenBlockValue::new(spans(text)),
        ))
    }

    pub fn add_numbered(&mut self, text: &str) -> &mut Self {
        self.add(BlockContent::NumberedListItem(
            TextAndChildrenBlockValue::new(spans(text)),
        ))
    }

    pub fn add_quote(&mut self, text: &str) -> &mut Self {
        self.add(BlockContent::Quote(QuoteBlockValue::new(spans(text))))
    }

    /// Append a code block. `language` uses the API's language names
    /// (`"rust"`, `"plain text"`, ...).
    pub fn add_code(&mut self, language: &str, source: &str) -> &mut Self {
        self.add(BlockContent::Code(
            CodeBlockValue::new(spans(source)).with_language(language),
        ))
    }

    pub fn add_divider(&mut self) -> &mut Self {
        self.add(BlockContent::Divider)
    }

    // ── Serialization ───────────────────────────────────────────────────

    /// Check the request limits and build the `{"children": [...]}` body.
    ///
    /// # Errors
    ///
    /// - [`EncodeError::EmptyPayload`] if no block was added.
    /// - [`EncodeError::TooManyChildren`] if the top-level list or any
    ///   nested `children` exceeds `max_children`.
    /// - [`EncodeError::NestingTooDeep`] if a block sits deeper than
    ///   `max_nesting`.
    /// - [`EncodeError::Type`] if a value fails to encode.
    pub fn encode(&self) -> Result<Value, EncodeError> {
        if self.blocks.is_empty() {
            return Err(EncodeError::EmptyPayload);
        }
        self.check_limits(&self.blocks, 0)?;

        let mut children = Vec::with_capacity(self.blocks.len());
        for content in &self.blocks {
            let block_type = content.block_type();
            tracing::trace!(block_type = block_type.wire_name(), "encoding block");
            children.push(Value::Object(content.encode_object()?));
        }

        let mut body = Object::new();
        body.insert(CHILDREN.to_string(), Value::Array(children));
        tracing::debug!(blocks = self.blocks.len(), "encoded append request");
        Ok(Value::Object(body))
    }

    /// [`encode`](Self::encode), serialized to compact JSON bytes.
    ///
    /// # Errors
    ///
    /// Same as [`encode`](Self::encode), plus [`EncodeError::Json`].
    pub fn encode_to_vec(&self) -> Result<Vec<u8>, EncodeError> {
        Ok(serde_json::to_vec(&self.encode()?)?)
    }

    /// Walk one children list at `depth`, then recurse into each block's
    /// own children.
    fn check_limits(&self, blocks: &[BlockContent], depth: usize) -> Result<(), EncodeError> {
        if depth > self.config.max_nesting {
            return Err(EncodeError::NestingTooDeep {
                depth,
                limit: self.config.max_nesting,
            });
        }
        if blocks.len() > self.config.max_children {
            return Err(EncodeError::TooManyChildren {
                count: blocks.len(),
                limit: self.config.max_children,
            });
        }
        for content in blocks {
            if let Some(children) = content.children() {
                self.check_limits(children, depth + 1)?;
            }
        }
        Ok(())
    }
}

impl Default for BlockEncoder {
    fn default() -> Self {
        Self::new()
    }
}

fn spans(text: &str) -> Vec<RichText> {
    vec![RichText::plain(text)]
}
