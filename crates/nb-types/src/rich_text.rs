use nb_wire::fields::{read_optional, read_required, write_field, write_optional};
use nb_wire::{Object, TaggedFrame};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::codec::{ObjectCodec, serde_via_object_codec};
use crate::error::TypeError;

/// One span of styled text.
///
/// Text-bearing blocks hold an ordered `Vec<RichText>`; the order is the
/// reading order and is kept exactly as received.
///
/// Wire shape (a sibling-tagged union plus shared fields):
///
/// ```text
/// {
///   "type": "text",
///   "text": { "content": "Hello", "link": null },
///   "annotations": { "bold": false, ..., "color": "default" },
///   "plain_text": "Hello",
///   "href": null
/// }
/// ```
///
/// `annotations`, `plain_text`, and `href` are filled in by the API on
/// read and may be left out when building a request.
#[derive(Clone, Debug, PartialEq)]
pub struct RichText {
    pub content: RichTextContent,
    pub annotations: Option<Annotations>,
    pub plain_text: Option<String>,
    pub href: Option<String>,
}

/// The tagged part of a [`RichText`] span.
#[derive(Clone, Debug, PartialEq)]
pub enum RichTextContent {
    Text { content: String, link: Option<Link> },
    Equation { expression: String },
    /// Mentions come in many shapes (user, page, date, ...); the raw
    /// payload object is kept as-is.
    Mention(Value),
    /// A span type this version doesn't model. Re-encodes unchanged.
    Unknown { type_name: String, payload: Option<Value> },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
}

/// Styling flags of a span. Every field defaults when absent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Annotations {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub underline: bool,
    pub code: bool,
    pub color: String,
}

impl Default for Annotations {
    fn default() -> Self {
        Self {
            bold: false,
            italic: false,
            strikethrough: false,
            underline: false,
            code: false,
            color: "default".to_string(),
        }
    }
}

impl RichText {
    /// An unstyled text span, as you would send it in a request.
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            content: RichTextContent::Text {
                content: content.into(),
                link: None,
            },
            annotations: None,
            plain_text: None,
            href: None,
        }
    }

    /// A text span that links to `url`.
    pub fn link(content: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            content: RichTextContent::Text {
                content: content.into(),
                link: Some(Link { url: url.into() }),
            },
            annotations: None,
            plain_text: None,
            href: None,
        }
    }

    /// An inline equation span.
    pub fn equation(expression: impl Into<String>) -> Self {
        Self {
            content: RichTextContent::Equation {
                expression: expression.into(),
            },
            annotations: None,
            plain_text: None,
            href: None,
        }
    }

    #[must_use]
    pub fn with_annotations(mut self, annotations: Annotations) -> Self {
        self.annotations = Some(annotations);
        self
    }

    /// Best-effort plain rendering of the span.
    ///
    /// Prefers the API-provided `plain_text`, then falls back to the
    /// span's own content. Mentions without `plain_text` render empty.
    pub fn as_plain_text(&self) -> &str {
        if let Some(plain) = &self.plain_text {
            return plain;
        }
        match &self.content {
            RichTextContent::Text { content, .. } => content.as_str(),
            RichTextContent::Equation { expression } => expression.as_str(),
            RichTextContent::Mention(_) | RichTextContent::Unknown { .. } => "",
        }
    }

    /// Concatenate the plain rendering of a span sequence.
    pub fn concat_plain(spans: &[RichText]) -> String {
        spans.iter().map(RichText::as_plain_text).collect()
    }
}

impl ObjectCodec for RichText {
    fn encode_into(&self, obj: &mut Object) -> Result<(), TypeError> {
        match &self.content {
            RichTextContent::Text { content, link } => {
                let mut text = Object::new();
                write_field(&mut text, "content", content)?;
                write_optional(&mut text, "link", link.as_ref())?;
                TaggedFrame::write(obj, "text", Value::Object(text));
            }
            RichTextContent::Equation { expression } => {
                let mut equation = Object::new();
                write_field(&mut equation, "expression", expression)?;
                TaggedFrame::write(obj, "equation", Value::Object(equation));
            }
            RichTextContent::Mention(payload) => {
                TaggedFrame::write(obj, "mention", payload.clone());
            }
            RichTextContent::Unknown { type_name, payload } => match payload {
                Some(payload) => TaggedFrame::write(obj, type_name, payload.clone()),
                None => write_field(obj, nb_wire::tagged::TYPE_KEY, type_name)?,
            },
        }
        write_optional(obj, "annotations", self.annotations.as_ref())?;
        write_optional(obj, "plain_text", self.plain_text.as_ref())?;
        write_optional(obj, "href", self.href.as_ref())?;
        Ok(())
    }

    fn decode_object(obj: &Object) -> Result<Self, TypeError> {
        let frame = TaggedFrame::read(obj)?;
        let content = match frame.tag {
            "text" => {
                let text = frame.payload_object()?;
                RichTextContent::Text {
                    content: read_required(text, "content")?,
                    link: read_optional(text, "link")?,
                }
            }
            "equation" => {
                let equation = frame.payload_object()?;
                RichTextContent::Equation {
                    expression: read_required(equation, "expression")?,
                }
            }
            "mention" => RichTextContent::Mention(frame.payload_object()?.clone().into()),
            other => RichTextContent::Unknown {
                type_name: other.to_string(),
                payload: frame.payload.cloned(),
            },
        };

        Ok(Self {
            content,
            annotations: read_optional(obj, "annotations")?,
            plain_text: read_optional(obj, "plain_text")?,
            href: read_optional(obj, "href")?,
        })
    }
}

serde_via_object_codec!(RichText);
