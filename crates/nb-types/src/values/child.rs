use serde::{Deserialize, Serialize};

/// Payload of `child_page`: the title of a page nested under this block.
///
/// Read-only in practice; child pages are created through the pages
/// endpoint, not by appending blocks.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildPageBlockValue {
    pub title: String,
}

/// Payload of `child_database`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildDatabaseBlockValue {
    pub title: String,
}

impl ChildPageBlockValue {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

impl ChildDatabaseBlockValue {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}
