use nb_wire::fields::{read_optional, read_required, write_field, write_optional};
use nb_wire::{Object, TaggedFrame};
use serde_json::Value;

use crate::codec::{ObjectCodec, serde_via_object_codec};
use crate::error::TypeError;

const EXTERNAL: &str = "external";
const HOSTED: &str = "file";

/// A file reference: either a URL the caller supplies, or a file hosted
/// by the API behind a short-lived signed URL.
///
/// ```text
/// ┌──────────┬──────────────────────────────────────────────────────────┐
/// │ type     │ Wire shape                                               │
/// ├──────────┼──────────────────────────────────────────────────────────┤
/// │ external │ {"type":"external","external":{"url":...}}               │
/// │ file     │ {"type":"file","file":{"url":...,"expiry_time":...}}     │
/// └──────────┴──────────────────────────────────────────────────────────┘
/// ```
///
/// The codec writes into and reads from a shared object, so the same
/// fields can sit flat beside other keys (see `FileBlockValue`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FileFile {
    External {
        url: String,
    },
    Hosted {
        url: String,
        /// ISO 8601 timestamp after which `url` stops working.
        expiry_time: Option<String>,
    },
}

impl FileFile {
    pub fn external(url: impl Into<String>) -> Self {
        Self::External { url: url.into() }
    }

    pub fn url(&self) -> &str {
        match self {
            Self::External { url } | Self::Hosted { url, .. } => url.as_str(),
        }
    }
}

impl ObjectCodec for FileFile {
    fn encode_into(&self, obj: &mut Object) -> Result<(), TypeError> {
        let mut payload = Object::new();
        let tag = match self {
            Self::External { url } => {
                write_field(&mut payload, "url", url)?;
                EXTERNAL
            }
            Self::Hosted { url, expiry_time } => {
                write_field(&mut payload, "url", url)?;
                write_optional(&mut payload, "expiry_time", expiry_time.as_ref())?;
                HOSTED
            }
        };
        TaggedFrame::write(obj, tag, Value::Object(payload));
        Ok(())
    }

    fn decode_object(obj: &Object) -> Result<Self, TypeError> {
        let frame = TaggedFrame::read(obj)?;
        match frame.tag {
            EXTERNAL => {
                let payload = frame.payload_object()?;
                Ok(Self::External {
                    url: read_required(payload, "url")?,
                })
            }
            HOSTED => {
                let payload = frame.payload_object()?;
                Ok(Self::Hosted {
                    url: read_required(payload, "url")?,
                    expiry_time: read_optional(payload, "expiry_time")?,
                })
            }
            other => Err(TypeError::UnknownVariant {
                union: "file",
                tag: other.to_string(),
            }),
        }
    }
}

serde_via_object_codec!(FileFile);

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn external_roundtrip() {
        let file = FileFile::external("https://example.com/report.pdf");
        let value = serde_json::to_value(&file).unwrap();
        assert_eq!(
            value,
            json!({ "type": "external", "external": { "url": "https://example.com/report.pdf" } })
        );
        assert_eq!(FileFile::decode_value(&value).unwrap(), file);
    }

    #[test]
    fn hosted_with_expiry() {
        let value = json!({
            "type": "file",
            "file": {
                "url": "https://files.example.com/signed",
                "expiry_time": "2024-05-01T12:00:00.000Z"
            }
        });
        let file = FileFile::decode_value(&value).unwrap();
        assert_eq!(
            file,
            FileFile::Hosted {
                url: "https://files.example.com/signed".to_string(),
                expiry_time: Some("2024-05-01T12:00:00.000Z".to_string()),
            }
        );
        assert_eq!(file.url(), "https://files.example.com/signed");
    }

    #[test]
    fn unknown_type_rejected() {
        let value = json!({ "type": "file_upload", "file_upload": { "id": "x" } });
        let err = FileFile::decode_value(&value).unwrap_err();
        assert!(matches!(
            err,
            TypeError::UnknownVariant { union: "file", ref tag } if tag == "file_upload"
        ));
    }

    #[test]
    fn missing_payload_rejected() {
        let value = json!({ "type": "external" });
        assert!(FileFile::decode_value(&value).is_err());
    }
}
