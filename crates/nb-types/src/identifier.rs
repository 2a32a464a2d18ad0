use std::fmt;

use serde::{Deserialize, Serialize};

// ── Macro for opaque string identifiers ───────────────────────────────
//
// Pages, databases, and blocks are all addressed by UUID-like strings.
// The model never parses them; it only copies them around. Separate
// newtypes keep a page id from being passed where a block id is wanted.

macro_rules! identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }
    };
}

identifier! {
    /// Identifier of a page.
    PageId
}

identifier! {
    /// Identifier of a database.
    DatabaseId
}

identifier! {
    /// Identifier of a block.
    BlockId
}
