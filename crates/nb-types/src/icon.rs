use nb_wire::fields::read_str;
use nb_wire::{Object, TaggedFrame};
use serde_json::Value;

use crate::codec::{ObjectCodec, serde_via_object_codec};
use crate::error::TypeError;
use crate::file::FileFile;

const EMOJI: &str = "emoji";

/// Icon shown on a callout: an emoji, or an image file.
///
/// The emoji payload is a bare string (`{"type":"emoji","emoji":"💡"}`);
/// every other tag is handed to [`FileFile`], which reads the same object.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IconFile {
    Emoji(String),
    File(FileFile),
}

impl ObjectCodec for IconFile {
    fn encode_into(&self, obj: &mut Object) -> Result<(), TypeError> {
        match self {
            Self::Emoji(emoji) => {
                TaggedFrame::write(obj, EMOJI, Value::String(emoji.clone()));
                Ok(())
            }
            Self::File(file) => file.encode_into(obj),
        }
    }

    fn decode_object(obj: &Object) -> Result<Self, TypeError> {
        let frame = TaggedFrame::read(obj)?;
        if frame.tag == EMOJI {
            return Ok(Self::Emoji(read_str(obj, EMOJI)?.to_string()));
        }
        match FileFile::decode_object(obj) {
            Ok(file) => Ok(Self::File(file)),
            Err(TypeError::UnknownVariant { tag, .. }) => {
                Err(TypeError::UnknownVariant { union: "icon", tag })
            }
            Err(other) => Err(other),
        }
    }
}

serde_via_object_codec!(IconFile);

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn emoji_roundtrip() {
        let value = json!({ "type": "emoji", "emoji": "💡" });
        let icon = IconFile::decode_value(&value).unwrap();
        assert_eq!(icon, IconFile::Emoji("💡".to_string()));
        assert_eq!(serde_json::to_value(&icon).unwrap(), value);
    }

    #[test]
    fn external_icon() {
        let value = json!({ "type": "external", "external": { "url": "https://example.com/i.svg" } });
        let icon = IconFile::decode_value(&value).unwrap();
        assert_eq!(icon, IconFile::File(FileFile::external("https://example.com/i.svg")));
        assert_eq!(serde_json::to_value(&icon).unwrap(), value);
    }

    #[test]
    fn emoji_must_be_string() {
        let value = json!({ "type": "emoji", "emoji": { "name": "bulb" } });
        assert!(IconFile::decode_value(&value).is_err());
    }

    #[test]
    fn unknown_icon_type_names_icon_union() {
        let value = json!({ "type": "custom_emoji", "custom_emoji": { "id": "c1" } });
        let err = IconFile::decode_value(&value).unwrap_err();
        assert!(matches!(err, TypeError::UnknownVariant { union: "icon", .. }));
    }
}
