use nb_wire::Object;
use nb_wire::fields::{read_required, write_field};

use crate::codec::{ObjectCodec, serde_via_object_codec};
use crate::error::TypeError;
use crate::file::FileFile;
use crate::rich_text::RichText;

/// Payload of `image`, `video`, `file`, `pdf`, and `audio` blocks.
///
/// The file reference is not nested under its own key. Its `type`
/// discriminator and type-specific payload sit at the same level as
/// `caption`:
///
/// ```text
/// {
///   "caption": [...],                 ◄── FileBlockValue
///   "type": "external",               ◄── FileFile
///   "external": { "url": "..." }      ◄── FileFile
/// }
/// ```
///
/// Decoding reads `caption` from the object, then decodes the same
/// object again as a [`FileFile`]. Encoding writes `caption`, then lets
/// `FileFile` write its fields into the same object.
#[derive(Clone, Debug, PartialEq)]
pub struct FileBlockValue {
    pub file: FileFile,
    pub caption: Vec<RichText>,
}

impl FileBlockValue {
    pub fn new(file: FileFile, caption: Vec<RichText>) -> Self {
        Self { file, caption }
    }
}

impl ObjectCodec for FileBlockValue {
    fn encode_into(&self, obj: &mut Object) -> Result<(), TypeError> {
        write_field(obj, "caption", &self.caption)?;
        self.file.encode_into(obj)
    }

    fn decode_object(obj: &Object) -> Result<Self, TypeError> {
        let caption = read_required(obj, "caption")?;
        let file = FileFile::decode_object(obj)?;
        Ok(Self { file, caption })
    }
}

serde_via_object_codec!(FileBlockValue);
