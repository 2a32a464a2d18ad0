use nb_wire::fields::read_required;
use nb_wire::{Object, TaggedFrame};
use serde_json::Value;

use crate::codec::{ObjectCodec, serde_via_object_codec};
use crate::error::TypeError;
use crate::identifier::{DatabaseId, PageId};

const PAGE_ID: &str = "page_id";
const DATABASE_ID: &str = "database_id";

/// Payload of `link_to_page`: which page or database the block links to.
///
/// ```text
/// ┌───────────────┬───────────────────────────────────────────────┐
/// │ type          │ Wire shape                                    │
/// ├───────────────┼───────────────────────────────────────────────┤
/// │ page_id       │ {"type":"page_id","page_id":"..."}            │
/// │ database_id   │ {"type":"database_id","database_id":"..."}    │
/// │ anything else │ decodes to Unknown, encodes as {}             │
/// └───────────────┴───────────────────────────────────────────────┘
/// ```
///
/// `Unknown` keeps newer link targets from failing the whole block. It
/// does not remember what it replaced, so it encodes to an empty object.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LinkToPageBlockValue {
    Page(PageId),
    Database(DatabaseId),
    Unknown,
}

impl ObjectCodec for LinkToPageBlockValue {
    fn encode_into(&self, obj: &mut Object) -> Result<(), TypeError> {
        match self {
            Self::Page(id) => {
                TaggedFrame::write(obj, PAGE_ID, Value::String(id.to_string()));
            }
            Self::Database(id) => {
                TaggedFrame::write(obj, DATABASE_ID, Value::String(id.to_string()));
            }
            Self::Unknown => {}
        }
        Ok(())
    }

    fn decode_object(obj: &Object) -> Result<Self, TypeError> {
        let frame = TaggedFrame::read(obj)?;
        match frame.tag {
            PAGE_ID => Ok(Self::Page(read_required(obj, PAGE_ID)?)),
            DATABASE_ID => Ok(Self::Database(read_required(obj, DATABASE_ID)?)),
            _ => Ok(Self::Unknown),
        }
    }
}

serde_via_object_codec!(LinkToPageBlockValue);
