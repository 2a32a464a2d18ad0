use serde::{Deserialize, Serialize};

use crate::block::BlockContent;
use crate::icon::IconFile;
use crate::rich_text::RichText;

// ── Deprecated `text` alias ───────────────────────────────────────────
//
// The API renamed `text` to `rich_text`. Only `rich_text` is stored and
// only `rich_text` goes on the wire; `text()` is a read-only view kept
// for callers written against the old name.

macro_rules! rich_text_alias {
    ($($ty:ident),+ $(,)?) => {$(
        impl $ty {
            /// Old name for `rich_text`.
            #[deprecated(note = "renamed to `rich_text`")]
            pub fn text(&self) -> &[RichText] {
                &self.rich_text
            }
        }
    )+};
}

/// Payload of `column_list` and `column` blocks: nothing but children.
///
/// `children` is write-only. It is sent when creating or appending
/// blocks; the API never returns it inline, and decoding never reads it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChildrenBlockValue {
    #[serde(default, skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<BlockContent>>,
}

impl ChildrenBlockValue {
    /// A container with no children attached.
    pub const NONE: Self = Self { children: None };

    pub fn new(children: Option<Vec<BlockContent>>) -> Self {
        Self { children }
    }
}

/// Payload shared by `paragraph`, `bulleted_list_item`,
/// `numbered_list_item`, and `toggle`.
///
/// ```text
/// { "rich_text": [...], "children": [...] }   children: request only
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextAndChildrenBlockValue {
    pub rich_text: Vec<RichText>,
    #[serde(default, skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<BlockContent>>,
}

impl TextAndChildrenBlockValue {
    pub fn new(rich_text: Vec<RichText>) -> Self {
        Self {
            rich_text,
            children: None,
        }
    }

    #[must_use]
    pub fn with_children(mut self, children: Vec<BlockContent>) -> Self {
        self.children = Some(children);
        self
    }

    #[deprecated(note = "use `TextAndChildrenBlockValue::new` instead")]
    pub fn from_text(text: Vec<RichText>, children: Option<Vec<BlockContent>>) -> Self {
        Self {
            rich_text: text,
            children,
        }
    }
}

/// Payload of `heading_1`, `heading_2`, and `heading_3`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HeadingBlockValue {
    pub rich_text: Vec<RichText>,
}

impl HeadingBlockValue {
    pub fn new(rich_text: Vec<RichText>) -> Self {
        Self { rich_text }
    }

    #[deprecated(note = "use `HeadingBlockValue::new` instead")]
    pub fn from_text(text: Vec<RichText>) -> Self {
        Self { rich_text: text }
    }
}

/// Payload of `to_do`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ToDoBlockValue {
    pub rich_text: Vec<RichText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
    #[serde(default, skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<BlockContent>>,
}

impl ToDoBlockValue {
    pub fn new(rich_text: Vec<RichText>) -> Self {
        Self {
            rich_text,
            checked: None,
            children: None,
        }
    }

    #[must_use]
    pub fn with_checked(mut self, checked: bool) -> Self {
        self.checked = Some(checked);
        self
    }

    #[must_use]
    pub fn with_children(mut self, children: Vec<BlockContent>) -> Self {
        self.children = Some(children);
        self
    }

    /// `checked` with an absent value read as unchecked.
    pub fn is_checked(&self) -> bool {
        self.checked.unwrap_or(false)
    }

    #[deprecated(note = "use `ToDoBlockValue::new` instead")]
    pub fn from_text(
        text: Vec<RichText>,
        checked: Option<bool>,
        children: Option<Vec<BlockContent>>,
    ) -> Self {
        Self {
            rich_text: text,
            checked,
            children,
        }
    }
}

/// Payload of `code`. `language` is the API's language name
/// (`"rust"`, `"plain text"`, ...), passed through untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CodeBlockValue {
    pub rich_text: Vec<RichText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

impl CodeBlockValue {
    pub fn new(rich_text: Vec<RichText>) -> Self {
        Self {
            rich_text,
            language: None,
        }
    }

    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    #[deprecated(note = "use `CodeBlockValue::new` instead")]
    pub fn from_text(text: Vec<RichText>, language: Option<String>) -> Self {
        Self {
            rich_text: text,
            language,
        }
    }
}

/// Payload of `callout`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalloutBlockValue {
    pub rich_text: Vec<RichText>,
    #[serde(default, skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<BlockContent>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconFile>,
}

impl CalloutBlockValue {
    pub fn new(rich_text: Vec<RichText>) -> Self {
        Self {
            rich_text,
            children: None,
            icon: None,
        }
    }

    #[must_use]
    pub fn with_children(mut self, children: Vec<BlockContent>) -> Self {
        self.children = Some(children);
        self
    }

    #[must_use]
    pub fn with_icon(mut self, icon: IconFile) -> Self {
        self.icon = Some(icon);
        self
    }

    #[deprecated(note = "use `CalloutBlockValue::new` instead")]
    pub fn from_text(
        text: Vec<RichText>,
        children: Option<Vec<BlockContent>>,
        icon: Option<IconFile>,
    ) -> Self {
        Self {
            rich_text: text,
            children,
            icon,
        }
    }
}

/// Payload of `quote`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QuoteBlockValue {
    pub rich_text: Vec<RichText>,
    #[serde(default, skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<BlockContent>>,
}

impl QuoteBlockValue {
    pub fn new(rich_text: Vec<RichText>) -> Self {
        Self {
            rich_text,
            children: None,
        }
    }

    #[must_use]
    pub fn with_children(mut self, children: Vec<BlockContent>) -> Self {
        self.children = Some(children);
        self
    }

    #[deprecated(note = "use `QuoteBlockValue::new` instead")]
    pub fn from_text(text: Vec<RichText>, children: Option<Vec<BlockContent>>) -> Self {
        Self {
            rich_text: text,
            children,
        }
    }
}

/// Payload of `template`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TemplateBlockValue {
    pub rich_text: Vec<RichText>,
    #[serde(default, skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<BlockContent>>,
}

impl TemplateBlockValue {
    pub fn new(rich_text: Vec<RichText>) -> Self {
        Self {
            rich_text,
            children: None,
        }
    }

    #[must_use]
    pub fn with_children(mut self, children: Vec<BlockContent>) -> Self {
        self.children = Some(children);
        self
    }

    #[deprecated(note = "use `TemplateBlockValue::new` instead")]
    pub fn from_text(text: Vec<RichText>, children: Option<Vec<BlockContent>>) -> Self {
        Self {
            rich_text: text,
            children,
        }
    }
}

rich_text_alias!(
    TextAndChildrenBlockValue,
    HeadingBlockValue,
    ToDoBlockValue,
    CodeBlockValue,
    CalloutBlockValue,
    QuoteBlockValue,
    TemplateBlockValue,
);
