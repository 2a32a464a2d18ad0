#![warn(clippy::pedantic)]

pub mod error;
pub mod codec;
pub mod identifier;
pub mod rich_text;
pub mod file;
pub mod icon;
pub mod block_type;
pub mod values;
pub mod block;

pub use block::{Block, BlockContent};
pub use block_type::BlockType;
pub use codec::ObjectCodec;
pub use error::TypeError;
pub use file::FileFile;
pub use icon::IconFile;
pub use identifier::{BlockId, DatabaseId, PageId};
pub use rich_text::{Annotations, Link, RichText, RichTextContent};
pub use values::{
    BookmarkBlockValue, CalloutBlockValue, ChildDatabaseBlockValue, ChildPageBlockValue,
    ChildrenBlockValue, CodeBlockValue, EmbedBlockValue, EquationBlockValue, FileBlockValue,
    HeadingBlockValue, LinkToPageBlockValue, QuoteBlockValue, SyncedBlockValue,
    TemplateBlockValue, TextAndChildrenBlockValue, ToDoBlockValue,
};
