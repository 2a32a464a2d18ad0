//! Per-type payload values, one struct or enum per block variant.
//!
//! Most values map field-for-field onto their JSON object via serde
//! derives. Three do not, and carry hand-written codecs:
//!
//! - [`FileBlockValue`] merges a caption and a [`FileFile`](crate::FileFile)
//!   into one flat object.
//! - [`LinkToPageBlockValue`] is tagged by a sibling `type` string.
//! - [`SyncedBlockValue`] must write an explicit `null`.

pub mod text;
pub mod child;
pub mod media;
pub mod file_block;
pub mod link_to_page;
pub mod synced_block;

pub use child::{ChildDatabaseBlockValue, ChildPageBlockValue};
pub use file_block::FileBlockValue;
pub use link_to_page::LinkToPageBlockValue;
pub use media::{BookmarkBlockValue, EmbedBlockValue, EquationBlockValue};
pub use synced_block::SyncedBlockValue;
pub use text::{
    CalloutBlockValue, ChildrenBlockValue, CodeBlockValue, HeadingBlockValue, QuoteBlockValue,
    TemplateBlockValue, TextAndChildrenBlockValue, ToDoBlockValue,
};
