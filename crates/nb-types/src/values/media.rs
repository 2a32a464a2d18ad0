use serde::{Deserialize, Serialize};

use crate::rich_text::RichText;

/// Payload of `embed`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EmbedBlockValue {
    pub url: String,
    pub caption: Vec<RichText>,
}

/// Payload of `bookmark`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookmarkBlockValue {
    pub url: String,
    pub caption: Vec<RichText>,
}

/// Payload of `equation`: a KaTeX expression.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquationBlockValue {
    pub expression: String,
}

impl EmbedBlockValue {
    pub fn new(url: impl Into<String>, caption: Vec<RichText>) -> Self {
        Self {
            url: url.into(),
            caption,
        }
    }
}

impl BookmarkBlockValue {
    pub fn new(url: impl Into<String>, caption: Vec<RichText>) -> Self {
        Self {
            url: url.into(),
            caption,
        }
    }
}

impl EquationBlockValue {
    pub fn new(expression: impl Into<String>) -> Self {
        Self {
            expression: expression.into(),
        }
    }
}
