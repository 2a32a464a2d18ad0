use nb_wire::fields::{read_optional, read_required, write_field, write_optional};
use nb_wire::tagged::TYPE_KEY;
use nb_wire::{Object, TaggedFrame, WireError};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::block_type::BlockType;
use crate::codec::{ObjectCodec, serde_via_object_codec};
use crate::error::TypeError;
use crate::identifier::BlockId;
use crate::rich_text::RichText;
use crate::values::{
    BookmarkBlockValue, CalloutBlockValue, ChildDatabaseBlockValue, ChildPageBlockValue,
    ChildrenBlockValue, CodeBlockValue, EmbedBlockValue, EquationBlockValue, FileBlockValue,
    HeadingBlockValue, LinkToPageBlockValue, QuoteBlockValue, SyncedBlockValue,
    TemplateBlockValue, TextAndChildrenBlockValue, ToDoBlockValue,
};

const OBJECT_KEY: &str = "object";
const OBJECT_BLOCK: &str = "block";

/// A block as returned by the API: envelope metadata plus typed content.
///
/// The envelope fields and the content share one flat JSON object:
///
/// ```text
/// {
///   "object": "block",
///   "id": "...",                      ◄── envelope
///   "has_children": false,            ◄── envelope
///   "archived": false,                ◄── envelope
///   "created_time": "...",            ◄── envelope (optional)
///   "last_edited_time": "...",        ◄── envelope (optional)
///   "type": "paragraph",              ◄── content
///   "paragraph": { "rich_text": [] }  ◄── content
/// }
/// ```
///
/// Decoding reads the envelope and then decodes the same object again as
/// a [`BlockContent`]. Encoding lets the content write its keys and then
/// adds the envelope fields next to them.
#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    pub id: BlockId,
    pub has_children: bool,
    pub archived: bool,
    pub created_time: Option<String>,
    pub last_edited_time: Option<String>,
    pub content: BlockContent,
}

impl Block {
    /// A block with default envelope flags and no timestamps.
    pub fn new(id: impl Into<BlockId>, content: BlockContent) -> Self {
        Self {
            id: id.into(),
            has_children: false,
            archived: false,
            created_time: None,
            last_edited_time: None,
            content,
        }
    }

    pub fn block_type(&self) -> BlockType {
        self.content.block_type()
    }
}

impl ObjectCodec for Block {
    fn encode_into(&self, obj: &mut Object) -> Result<(), TypeError> {
        self.content.encode_into(obj)?;
        write_field(obj, "id", &self.id)?;
        write_field(obj, "has_children", &self.has_children)?;
        write_field(obj, "archived", &self.archived)?;
        write_optional(obj, "created_time", self.created_time.as_ref())?;
        write_optional(obj, "last_edited_time", self.last_edited_time.as_ref())?;
        Ok(())
    }

    fn decode_object(obj: &Object) -> Result<Self, TypeError> {
        Ok(Self {
            id: read_required(obj, "id")?,
            has_children: read_optional(obj, "has_children")?.unwrap_or(false),
            archived: read_optional(obj, "archived")?.unwrap_or(false),
            created_time: read_optional(obj, "created_time")?,
            last_edited_time: read_optional(obj, "last_edited_time")?,
            content: BlockContent::decode_object(obj)?,
        })
    }
}

/// The typed content of a block, one variant per block type.
///
/// Variants that share a value type share its wire shape: the three
/// heading levels all hold a [`HeadingBlockValue`], and every media
/// block holds a [`FileBlockValue`].
///
/// ```text
/// ┌──────────────────────────────────────┬──────────────────────────────┐
/// │ Variants                             │ Value                        │
/// ├──────────────────────────────────────┼──────────────────────────────┤
/// │ Paragraph, BulletedListItem,         │ TextAndChildrenBlockValue    │
/// │ NumberedListItem, Toggle             │                              │
/// │ Heading1, Heading2, Heading3         │ HeadingBlockValue            │
/// │ Image, Video, File, Pdf, Audio       │ FileBlockValue               │
/// │ Column, ColumnList                   │ ChildrenBlockValue           │
/// │ Divider, TableOfContents,            │ none (encoded as `{}`)       │
/// │ Breadcrumb, Unsupported              │                              │
/// │ Unknown                              │ raw JSON, kept verbatim      │
/// └──────────────────────────────────────┴──────────────────────────────┘
/// ```
///
/// `Unknown` keeps block types added to the API after this crate was
/// written. It re-encodes exactly what was read.
#[derive(Clone, Debug, PartialEq)]
pub enum BlockContent {
    Paragraph(TextAndChildrenBlockValue),
    Heading1(HeadingBlockValue),
    Heading2(HeadingBlockValue),
    Heading3(HeadingBlockValue),
    BulletedListItem(TextAndChildrenBlockValue),
    NumberedListItem(TextAndChildrenBlockValue),
    ToDo(ToDoBlockValue),
    Toggle(TextAndChildrenBlockValue),
    ChildPage(ChildPageBlockValue),
    ChildDatabase(ChildDatabaseBlockValue),
    Embed(EmbedBlockValue),
    Image(FileBlockValue),
    Video(FileBlockValue),
    File(FileBlockValue),
    Pdf(FileBlockValue),
    Audio(FileBlockValue),
    Bookmark(BookmarkBlockValue),
    Callout(CalloutBlockValue),
    Quote(QuoteBlockValue),
    Equation(EquationBlockValue),
    Divider,
    TableOfContents,
    Breadcrumb,
    Column(ChildrenBlockValue),
    ColumnList(ChildrenBlockValue),
    LinkToPage(LinkToPageBlockValue),
    SyncedBlock(SyncedBlockValue),
    Template(TemplateBlockValue),
    Code(CodeBlockValue),
    Unsupported,
    /// A block type this crate does not know, with its payload as read.
    Unknown {
        type_name: String,
        payload: Option<Value>,
    },
}

impl BlockContent {
    pub fn block_type(&self) -> BlockType {
        match self {
            Self::Paragraph(_) => BlockType::Paragraph,
            Self::Heading1(_) => BlockType::Heading1,
            Self::Heading2(_) => BlockType::Heading2,
            Self::Heading3(_) => BlockType::Heading3,
            Self::BulletedListItem(_) => BlockType::BulletedListItem,
            Self::NumberedListItem(_) => BlockType::NumberedListItem,
            Self::ToDo(_) => BlockType::ToDo,
            Self::Toggle(_) => BlockType::Toggle,
            Self::ChildPage(_) => BlockType::ChildPage,
            Self::ChildDatabase(_) => BlockType::ChildDatabase,
            Self::Embed(_) => BlockType::Embed,
            Self::Image(_) => BlockType::Image,
            Self::Video(_) => BlockType::Video,
            Self::File(_) => BlockType::File,
            Self::Pdf(_) => BlockType::Pdf,
            Self::Audio(_) => BlockType::Audio,
            Self::Bookmark(_) => BlockType::Bookmark,
            Self::Callout(_) => BlockType::Callout,
            Self::Quote(_) => BlockType::Quote,
            Self::Equation(_) => BlockType::Equation,
            Self::Divider => BlockType::Divider,
            Self::TableOfContents => BlockType::TableOfContents,
            Self::Breadcrumb => BlockType::Breadcrumb,
            Self::Column(_) => BlockType::Column,
            Self::ColumnList(_) => BlockType::ColumnList,
            Self::LinkToPage(_) => BlockType::LinkToPage,
            Self::SyncedBlock(_) => BlockType::SyncedBlock,
            Self::Template(_) => BlockType::Template,
            Self::Code(_) => BlockType::Code,
            Self::Unsupported => BlockType::Unsupported,
            Self::Unknown { type_name, .. } => BlockType::Unknown(type_name.clone()),
        }
    }

    /// Nested children attached for a create/append request, if any.
    pub fn children(&self) -> Option<&[BlockContent]> {
        let children = match self {
            Self::Paragraph(v)
            | Self::BulletedListItem(v)
            | Self::NumberedListItem(v)
            | Self::Toggle(v) => v.children.as_ref(),
            Self::ToDo(v) => v.children.as_ref(),
            Self::Callout(v) => v.children.as_ref(),
            Self::Quote(v) => v.children.as_ref(),
            Self::Template(v) => v.children.as_ref(),
            Self::Column(v) | Self::ColumnList(v) => v.children.as_ref(),
            _ => None,
        };
        children.map(Vec::as_slice)
    }

    /// The main rich text of text-bearing blocks, or the caption of
    /// media and link blocks.
    pub fn rich_text(&self) -> Option<&[RichText]> {
        let spans = match self {
            Self::Paragraph(v)
            | Self::BulletedListItem(v)
            | Self::NumberedListItem(v)
            | Self::Toggle(v) => &v.rich_text,
            Self::Heading1(v) | Self::Heading2(v) | Self::Heading3(v) => &v.rich_text,
            Self::ToDo(v) => &v.rich_text,
            Self::Callout(v) => &v.rich_text,
            Self::Quote(v) => &v.rich_text,
            Self::Template(v) => &v.rich_text,
            Self::Code(v) => &v.rich_text,
            Self::Image(v) | Self::Video(v) | Self::File(v) | Self::Pdf(v) | Self::Audio(v) => {
                &v.caption
            }
            Self::Embed(v) => &v.caption,
            Self::Bookmark(v) => &v.caption,
            _ => return None,
        };
        Some(spans.as_slice())
    }

    /// Encode only the value under the type key, without the `type` and
    /// `object` keys around it. Payload-less variants give `{}`; an
    /// `Unknown` without a payload gives `None`.
    pub fn encode_payload(&self) -> Result<Option<Value>, TypeError> {
        let payload = match self {
            Self::Paragraph(v)
            | Self::BulletedListItem(v)
            | Self::NumberedListItem(v)
            | Self::Toggle(v) => to_payload(v)?,
            Self::Heading1(v) | Self::Heading2(v) | Self::Heading3(v) => to_payload(v)?,
            Self::ToDo(v) => to_payload(v)?,
            Self::ChildPage(v) => to_payload(v)?,
            Self::ChildDatabase(v) => to_payload(v)?,
            Self::Embed(v) => to_payload(v)?,
            Self::Image(v) | Self::Video(v) | Self::File(v) | Self::Pdf(v) | Self::Audio(v) => {
                Value::Object(v.encode_object()?)
            }
            Self::Bookmark(v) => to_payload(v)?,
            Self::Callout(v) => to_payload(v)?,
            Self::Quote(v) => to_payload(v)?,
            Self::Equation(v) => to_payload(v)?,
            Self::Divider | Self::TableOfContents | Self::Breadcrumb | Self::Unsupported => {
                Value::Object(Object::new())
            }
            Self::Column(v) | Self::ColumnList(v) => to_payload(v)?,
            Self::LinkToPage(v) => Value::Object(v.encode_object()?),
            Self::SyncedBlock(v) => Value::Object(v.encode_object()?),
            Self::Template(v) => to_payload(v)?,
            Self::Code(v) => to_payload(v)?,
            Self::Unknown { payload, .. } => return Ok(payload.clone()),
        };
        Ok(Some(payload))
    }
}

impl ObjectCodec for BlockContent {
    fn encode_into(&self, obj: &mut Object) -> Result<(), TypeError> {
        obj.insert(OBJECT_KEY.to_string(), Value::String(OBJECT_BLOCK.to_string()));
        let block_type = self.block_type();
        match self.encode_payload()? {
            Some(payload) => TaggedFrame::write(obj, block_type.wire_name(), payload),
            None => write_field(obj, TYPE_KEY, block_type.wire_name())?,
        }
        Ok(())
    }

    /// Dispatch on `type` and decode the payload under the matching key.
    ///
    /// Typed variants need their payload object; payload-less variants
    /// ignore it. Unrecognized types become [`BlockContent::Unknown`].
    fn decode_object(obj: &Object) -> Result<Self, TypeError> {
        let frame = TaggedFrame::read(obj)?;
        let content = match BlockType::from_wire_name(frame.tag) {
            BlockType::Paragraph => Self::Paragraph(from_payload(&frame)?),
            BlockType::Heading1 => Self::Heading1(from_payload(&frame)?),
            BlockType::Heading2 => Self::Heading2(from_payload(&frame)?),
            BlockType::Heading3 => Self::Heading3(from_payload(&frame)?),
            BlockType::BulletedListItem => Self::BulletedListItem(from_payload(&frame)?),
            BlockType::NumberedListItem => Self::NumberedListItem(from_payload(&frame)?),
            BlockType::ToDo => Self::ToDo(from_payload(&frame)?),
            BlockType::Toggle => Self::Toggle(from_payload(&frame)?),
            BlockType::ChildPage => Self::ChildPage(from_payload(&frame)?),
            BlockType::ChildDatabase => Self::ChildDatabase(from_payload(&frame)?),
            BlockType::Embed => Self::Embed(from_payload(&frame)?),
            BlockType::Image => Self::Image(from_codec(&frame)?),
            BlockType::Video => Self::Video(from_codec(&frame)?),
            BlockType::File => Self::File(from_codec(&frame)?),
            BlockType::Pdf => Self::Pdf(from_codec(&frame)?),
            BlockType::Audio => Self::Audio(from_codec(&frame)?),
            BlockType::Bookmark => Self::Bookmark(from_payload(&frame)?),
            BlockType::Callout => Self::Callout(from_payload(&frame)?),
            BlockType::Quote => Self::Quote(from_payload(&frame)?),
            BlockType::Equation => Self::Equation(from_payload(&frame)?),
            BlockType::Divider => Self::Divider,
            BlockType::TableOfContents => Self::TableOfContents,
            BlockType::Breadcrumb => Self::Breadcrumb,
            BlockType::Column => Self::Column(from_payload(&frame)?),
            BlockType::ColumnList => Self::ColumnList(from_payload(&frame)?),
            BlockType::LinkToPage => Self::LinkToPage(from_codec(&frame)?),
            BlockType::SyncedBlock => Self::SyncedBlock(from_codec(&frame)?),
            BlockType::Template => Self::Template(from_payload(&frame)?),
            BlockType::Code => Self::Code(from_payload(&frame)?),
            BlockType::Unsupported => Self::Unsupported,
            BlockType::Unknown(type_name) => Self::Unknown {
                type_name,
                payload: frame.payload.cloned(),
            },
        };
        Ok(content)
    }
}

serde_via_object_codec!(Block, BlockContent);

fn to_payload<T: Serialize>(value: &T) -> Result<Value, TypeError> {
    Ok(serde_json::to_value(value).map_err(WireError::from)?)
}

/// Decode a derived value from the payload object named by the frame.
fn from_payload<T: DeserializeOwned>(frame: &TaggedFrame<'_>) -> Result<T, TypeError> {
    let payload = frame.payload_value()?;
    T::deserialize(payload).map_err(|source| TypeError::InvalidPayload {
        block_type: frame.tag.to_string(),
        source,
    })
}

/// Decode a hand-coded value from the payload object named by the frame.
fn from_codec<T: ObjectCodec>(frame: &TaggedFrame<'_>) -> Result<T, TypeError> {
    T::decode_object(frame.payload_object()?)
}
