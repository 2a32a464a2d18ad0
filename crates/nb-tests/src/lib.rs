//! Shared helpers for the integration tests in `tests/`.

use std::path::{Path, PathBuf};

use nb_types::{
    BlockContent, CalloutBlockValue, CodeBlockValue, FileBlockValue, FileFile, HeadingBlockValue,
    IconFile, RichText, TextAndChildrenBlockValue, ToDoBlockValue,
};

/// Path of a fixture under `tests/fixtures/`.
pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

/// Read a fixture file, panicking with its path on failure.
pub fn fixture(name: &str) -> Vec<u8> {
    let path = fixture_path(name);
    std::fs::read(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", path.display()))
}

/// A short page body covering the common block families, as a caller
/// would build it for an append request.
pub fn sample_contents() -> Vec<BlockContent> {
    vec![
        BlockContent::Heading1(HeadingBlockValue::new(vec![RichText::plain("Weekly sync")])),
        BlockContent::Paragraph(TextAndChildrenBlockValue::new(vec![
            RichText::plain("Notes from "),
            RichText::link("the tracker", "https://example.com/board"),
        ])),
        BlockContent::ToDo(
            ToDoBlockValue::new(vec![RichText::plain("Send the recap")]).with_checked(false),
        ),
        BlockContent::Callout(
            CalloutBlockValue::new(vec![RichText::plain("Release freeze on Friday")])
                .with_icon(IconFile::Emoji("🚧".to_string())),
        ),
        BlockContent::Code(
            CodeBlockValue::new(vec![RichText::plain("cargo test --workspace")])
                .with_language("shell"),
        ),
        BlockContent::Image(FileBlockValue::new(
            FileFile::external("https://example.com/burndown.png"),
            vec![RichText::plain("Burndown")],
        )),
        BlockContent::Divider,
    ]
}
