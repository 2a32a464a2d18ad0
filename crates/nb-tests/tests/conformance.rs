//! Conformance tests: API-shaped fixtures decoded into typed blocks.
//!
//! `tests/fixtures/page_blocks.json` is a block-children list response
//! holding one block of every known type, with the extra keys the API
//! sends (`parent`, `created_by`, `color`, `is_toggleable`, ...). Each
//! test decodes it and checks one block family; a few re-encode single
//! blocks and compare against inline insta snapshots.
//!
//! serde_json objects serialize with sorted keys, so snapshot strings
//! list keys alphabetically rather than in API order.

use insta::assert_snapshot;
use nb_decoder::{BlockDecoder, DecodedBlocks};
use nb_tests::fixture;
use nb_types::{
    Block, BlockContent, BlockId, BlockType, FileFile, IconFile, LinkToPageBlockValue, PageId,
    RichText, RichTextContent, SyncedBlockValue,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn page() -> DecodedBlocks {
    BlockDecoder::decode(&fixture("page_blocks.json"))
        .unwrap_or_else(|e| panic!("page_blocks.json failed to decode: {e}"))
}

fn block<'a>(decoded: &'a DecodedBlocks, id: &str) -> &'a Block {
    decoded
        .blocks
        .iter()
        .find(|b| b.id.as_str() == id)
        .unwrap_or_else(|| panic!("no block with id {id}"))
}

fn compact(block: &Block) -> String {
    serde_json::to_string(block).unwrap()
}

// ── Whole page ────────────────────────────────────────────────────────────────

#[test]
fn page_decodes_every_block_in_order() {
    let decoded = page();
    assert_eq!(decoded.blocks.len(), 30);
    assert_eq!(decoded.skipped, 0);

    let types: Vec<String> = decoded
        .blocks
        .iter()
        .map(|b| b.block_type().wire_name().to_string())
        .collect();
    assert_snapshot!(
        types.join(","),
        @"heading_1,paragraph,to_do,bulleted_list_item,numbered_list_item,toggle,quote,callout,code,image,file,bookmark,embed,equation,divider,table_of_contents,breadcrumb,child_page,child_database,link_to_page,synced_block,synced_block,column_list,template,heading_2,heading_3,video,pdf,audio,unsupported"
    );
}

#[test]
fn page_has_no_unknown_types() {
    let decoded = page();
    assert!(
        decoded
            .blocks
            .iter()
            .all(|b| !matches!(b.block_type(), BlockType::Unknown(_)))
    );
}

#[test]
fn envelope_fields() {
    let decoded = page();
    let toggle = block(&decoded, "b-006");
    assert!(toggle.has_children);
    assert!(!toggle.archived);
    assert_eq!(toggle.created_time.as_deref(), Some("2024-01-15T09:30:00.000Z"));
    assert_eq!(
        toggle.last_edited_time.as_deref(),
        Some("2024-01-16T14:05:00.000Z")
    );
}

// ── Text blocks ───────────────────────────────────────────────────────────────

#[test]
fn paragraph_spans_keep_order_and_styling() {
    let decoded = page();
    let BlockContent::Paragraph(paragraph) = &block(&decoded, "b-002").content else {
        panic!("b-002 is not a paragraph");
    };
    assert_eq!(paragraph.rich_text.len(), 4);
    assert_eq!(
        RichText::concat_plain(&paragraph.rich_text),
        "Goals are final, see the brief"
    );
    assert!(paragraph.rich_text[1].annotations.as_ref().unwrap().bold);
    assert_eq!(
        paragraph.rich_text[3].href.as_deref(),
        Some("https://example.com/brief")
    );
    match &paragraph.rich_text[3].content {
        RichTextContent::Text { link, .. } => {
            assert_eq!(link.as_ref().unwrap().url, "https://example.com/brief");
        }
        other => panic!("expected a text span, got {other:?}"),
    }
    assert_eq!(paragraph.children, None);
}

#[test]
fn to_do_checked() {
    let decoded = page();
    let BlockContent::ToDo(to_do) = &block(&decoded, "b-003").content else {
        panic!("b-003 is not a to_do");
    };
    assert_eq!(to_do.checked, Some(true));
}

#[test]
fn callout_emoji_icon() {
    let decoded = page();
    let BlockContent::Callout(callout) = &block(&decoded, "b-008").content else {
        panic!("b-008 is not a callout");
    };
    assert_eq!(callout.icon, Some(IconFile::Emoji("💡".to_string())));
}

#[test]
fn code_language() {
    let decoded = page();
    let BlockContent::Code(code) = &block(&decoded, "b-009").content else {
        panic!("b-009 is not a code block");
    };
    assert_eq!(code.language.as_deref(), Some("rust"));
    assert_eq!(RichText::concat_plain(&code.rich_text), "fn main() {}");
}

#[test]
fn headings_keep_their_level() {
    let decoded = page();
    assert_eq!(block(&decoded, "b-001").block_type(), BlockType::Heading1);
    assert_eq!(block(&decoded, "b-025").block_type(), BlockType::Heading2);
    assert_eq!(block(&decoded, "b-026").block_type(), BlockType::Heading3);
}

// ── Media blocks ──────────────────────────────────────────────────────────────

#[test]
fn image_external_file_with_caption() {
    let decoded = page();
    let BlockContent::Image(image) = &block(&decoded, "b-010").content else {
        panic!("b-010 is not an image");
    };
    assert_eq!(image.file, FileFile::external("https://example.com/arch.png"));
    assert_eq!(RichText::concat_plain(&image.caption), "Architecture");
}

#[test]
fn hosted_file_keeps_expiry() {
    let decoded = page();
    let BlockContent::File(file) = &block(&decoded, "b-011").content else {
        panic!("b-011 is not a file block");
    };
    assert_eq!(
        file.file,
        FileFile::Hosted {
            url: "https://s3.example.com/design.pdf".to_string(),
            expiry_time: Some("2024-01-16T15:05:00.000Z".to_string()),
        }
    );
}

#[test]
fn video_pdf_audio_share_file_shape() {
    let decoded = page();
    for (id, url) in [
        ("b-027", "https://example.com/demo.mp4"),
        ("b-028", "https://example.com/brief.pdf"),
        ("b-029", "https://example.com/standup.mp3"),
    ] {
        let (BlockContent::Video(value) | BlockContent::Pdf(value) | BlockContent::Audio(value)) =
            &block(&decoded, id).content
        else {
            panic!("{id} is not a media block");
        };
        assert_eq!(value.file.url(), url);
    }
}

#[test]
fn image_reencodes_flat() {
    let decoded = page();
    assert_snapshot!(
        compact(block(&decoded, "b-010")),
        @r#"{"archived":false,"created_time":"2024-01-15T09:30:00.000Z","has_children":false,"id":"b-010","image":{"caption":[{"annotations":{"bold":false,"code":false,"color":"default","italic":false,"strikethrough":false,"underline":false},"plain_text":"Architecture","text":{"content":"Architecture"},"type":"text"}],"external":{"url":"https://example.com/arch.png"},"type":"external"},"last_edited_time":"2024-01-16T14:05:00.000Z","object":"block","type":"image"}"#
    );
}

// ── Structural blocks ─────────────────────────────────────────────────────────

#[test]
fn payloadless_blocks() {
    let decoded = page();
    assert_eq!(block(&decoded, "b-015").content, BlockContent::Divider);
    assert_eq!(block(&decoded, "b-016").content, BlockContent::TableOfContents);
    assert_eq!(block(&decoded, "b-017").content, BlockContent::Breadcrumb);
    assert_eq!(block(&decoded, "b-030").content, BlockContent::Unsupported);
}

#[test]
fn divider_reencodes_with_empty_payload() {
    let decoded = page();
    assert_snapshot!(
        compact(block(&decoded, "b-015")),
        @r#"{"archived":false,"created_time":"2024-01-15T09:30:00.000Z","divider":{},"has_children":false,"id":"b-015","last_edited_time":"2024-01-16T14:05:00.000Z","object":"block","type":"divider"}"#
    );
}

#[test]
fn child_page_and_database_titles() {
    let decoded = page();
    let BlockContent::ChildPage(child_page) = &block(&decoded, "b-018").content else {
        panic!("b-018 is not a child_page");
    };
    assert_eq!(child_page.title, "Meeting notes");
    let BlockContent::ChildDatabase(child_db) = &block(&decoded, "b-019").content else {
        panic!("b-019 is not a child_database");
    };
    assert_eq!(child_db.title, "Task tracker");
}

#[test]
fn column_list_has_no_inline_children() {
    let decoded = page();
    let column_list = block(&decoded, "b-023");
    assert!(column_list.has_children);
    assert_eq!(column_list.content.children(), None);
}

// ── Link and sync blocks ──────────────────────────────────────────────────────

#[test]
fn link_to_page_target() {
    let decoded = page();
    assert_eq!(
        block(&decoded, "b-020").content,
        BlockContent::LinkToPage(LinkToPageBlockValue::Page(PageId::new("9a7d-linked-page")))
    );
    assert_snapshot!(
        compact(block(&decoded, "b-020")),
        @r#"{"archived":false,"created_time":"2024-01-15T09:30:00.000Z","has_children":false,"id":"b-020","last_edited_time":"2024-01-16T14:05:00.000Z","link_to_page":{"page_id":"9a7d-linked-page","type":"page_id"},"object":"block","type":"link_to_page"}"#
    );
}

#[test]
fn synced_original_and_reference() {
    let decoded = page();
    assert_eq!(
        block(&decoded, "b-021").content,
        BlockContent::SyncedBlock(SyncedBlockValue::OriginalBlock)
    );
    assert_eq!(
        block(&decoded, "b-022").content,
        BlockContent::SyncedBlock(SyncedBlockValue::Reference(BlockId::new("b-021")))
    );
}

#[test]
fn synced_original_reencodes_explicit_null() {
    let decoded = page();
    assert_snapshot!(
        compact(block(&decoded, "b-021")),
        @r#"{"archived":false,"created_time":"2024-01-15T09:30:00.000Z","has_children":true,"id":"b-021","last_edited_time":"2024-01-16T14:05:00.000Z","object":"block","synced_block":{"synced_from":null},"type":"synced_block"}"#
    );
}
