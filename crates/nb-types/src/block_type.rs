// ── Macro for the block type table ────────────────────────────────────
//
// Each known block type is a unit variant paired with its `type` string
// on the wire. The macro generates both directions of the mapping from
// one table so they can't drift apart.

macro_rules! block_types {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident = $wire:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
            /// Forward-compatible catch-all for block types this version
            /// doesn't recognize. The raw `type` string is preserved so
            /// it can be re-encoded without loss.
            Unknown(String),
        }

        impl $name {
            /// Every `type` string this version knows, in table order.
            pub const KNOWN_NAMES: &'static [&'static str] = &[$($wire),+];

            /// Return the `type` string for this block type.
            pub fn wire_name(&self) -> &str {
                match self {
                    $( Self::$variant => $wire, )+
                    Self::Unknown(name) => name.as_str(),
                }
            }

            /// Parse a `type` string into a [`BlockType`].
            ///
            /// Known names map to their named variant. Anything else
            /// becomes `Unknown(name)`.
            pub fn from_wire_name(name: &str) -> Self {
                match name {
                    $( $wire => Self::$variant, )+
                    other => Self::Unknown(other.to_string()),
                }
            }
        }
    };
}

block_types! {
    /// Semantic block type identifiers.
    ///
    /// Each variant maps to the string the API puts in a block's `type`
    /// field (and uses as the key of the block's payload object).
    ///
    /// ```text
    /// ┌──────────────────────┬──────────────────────────────────────┐
    /// │ Wire name            │ Payload value                        │
    /// ├──────────────────────┼──────────────────────────────────────┤
    /// │ paragraph            │ TextAndChildrenBlockValue            │
    /// │ heading_1..3         │ HeadingBlockValue                    │
    /// │ bulleted_list_item   │ TextAndChildrenBlockValue            │
    /// │ numbered_list_item   │ TextAndChildrenBlockValue            │
    /// │ to_do                │ ToDoBlockValue                       │
    /// │ toggle               │ TextAndChildrenBlockValue            │
    /// │ child_page           │ ChildPageBlockValue                  │
    /// │ child_database       │ ChildDatabaseBlockValue              │
    /// │ embed                │ EmbedBlockValue                      │
    /// │ image/video/file/    │ FileBlockValue                       │
    /// │   pdf/audio          │                                      │
    /// │ bookmark             │ BookmarkBlockValue                   │
    /// │ callout              │ CalloutBlockValue                    │
    /// │ quote                │ QuoteBlockValue                      │
    /// │ equation             │ EquationBlockValue                   │
    /// │ divider, breadcrumb, │ (empty object)                       │
    /// │   table_of_contents  │                                      │
    /// │ column, column_list  │ ChildrenBlockValue                   │
    /// │ link_to_page         │ LinkToPageBlockValue                 │
    /// │ synced_block         │ SyncedBlockValue                     │
    /// │ template             │ TemplateBlockValue                   │
    /// │ code                 │ CodeBlockValue                       │
    /// │ unsupported          │ (empty object)                       │
    /// └──────────────────────┴──────────────────────────────────────┘
    /// ```
    #[derive(Clone, Debug, PartialEq, Eq, Hash)]
    pub enum BlockType {
        Paragraph = "paragraph",
        Heading1 = "heading_1",
        Heading2 = "heading_2",
        Heading3 = "heading_3",
        BulletedListItem = "bulleted_list_item",
        NumberedListItem = "numbered_list_item",
        ToDo = "to_do",
        Toggle = "toggle",
        ChildPage = "child_page",
        ChildDatabase = "child_database",
        Embed = "embed",
        Image = "image",
        Video = "video",
        File = "file",
        Pdf = "pdf",
        Audio = "audio",
        Bookmark = "bookmark",
        Callout = "callout",
        Quote = "quote",
        Equation = "equation",
        Divider = "divider",
        TableOfContents = "table_of_contents",
        Breadcrumb = "breadcrumb",
        Column = "column",
        ColumnList = "column_list",
        LinkToPage = "link_to_page",
        SyncedBlock = "synced_block",
        Template = "template",
        Code = "code",
        /// The API's own marker for blocks it can't expose.
        Unsupported = "unsupported",
    }
}
