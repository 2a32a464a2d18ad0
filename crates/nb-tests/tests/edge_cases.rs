//! Edge-case integration tests: unknown types, partial input, and the
//! few wire shapes that do not follow the plain-struct pattern.

use insta::assert_snapshot;
use nb_decoder::{BlockDecoder, DecodeError, DecoderConfig, UnknownBlockPolicy};
use nb_encoder::{BlockEncoder, EncodeError, EncoderConfig};
use nb_tests::fixture;
use nb_types::{
    BlockContent, BlockType, CalloutBlockValue, ChildrenBlockValue, FileBlockValue,
    HeadingBlockValue, IconFile, LinkToPageBlockValue, ObjectCodec, RichText, RichTextContent,
    SyncedBlockValue, TextAndChildrenBlockValue, ToDoBlockValue, TypeError,
};
use nb_wire::WireError;
use serde_json::json;

// ── Unknown block types ───────────────────────────────────────────────────────

#[test]
fn unknown_types_preserved_and_reencoded() {
    let decoded = BlockDecoder::decode(&fixture("unknown_types.json")).unwrap();
    assert_eq!(decoded.blocks.len(), 4);
    assert_eq!(
        decoded.blocks[1].block_type(),
        BlockType::Unknown("ai_block".to_string())
    );

    let value = serde_json::to_value(&decoded.blocks[1]).unwrap();
    assert_eq!(
        value["ai_block"],
        json!({ "prompt": "Summarize the page", "model": "fast" })
    );
}

#[test]
fn unknown_types_skipped() {
    let config = DecoderConfig::default().with_unknown_blocks(UnknownBlockPolicy::Skip);
    let decoded =
        BlockDecoder::decode_with_config(&fixture("unknown_types.json"), &config).unwrap();
    assert_eq!(decoded.skipped, 2);
    let ids: Vec<&str> = decoded.blocks.iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, ["u-001", "u-004"]);
}

#[test]
fn unknown_types_rejected() {
    let config = DecoderConfig::default().with_unknown_blocks(UnknownBlockPolicy::Reject);
    let err =
        BlockDecoder::decode_with_config(&fixture("unknown_types.json"), &config).unwrap_err();
    assert_snapshot!(err.to_string(), @r#"block 1: unknown block type "ai_block""#);
}

// ── Partial or malformed input ────────────────────────────────────────────────

#[test]
fn missing_payload_reports_block_index() {
    let err = BlockDecoder::decode(&fixture("missing_payload.json")).unwrap_err();
    assert!(matches!(
        err,
        DecodeError::Block {
            index: 2,
            source: TypeError::Wire(WireError::MissingPayload { .. })
        }
    ));
    assert_snapshot!(err.to_string(), @"block 2: missing payload object for type `bookmark`");
}

#[test]
fn empty_array_decodes_to_nothing() {
    let decoded = BlockDecoder::decode(b"[]").unwrap();
    assert!(decoded.blocks.is_empty());
    assert_eq!(decoded.skipped, 0);
}

#[test]
fn empty_rich_text_is_valid() {
    let value = json!({ "type": "paragraph", "paragraph": { "rich_text": [] } });
    let content = BlockContent::decode_value(&value).unwrap();
    assert_eq!(
        content,
        BlockContent::Paragraph(TextAndChildrenBlockValue::new(Vec::new()))
    );
}

#[test]
fn unknown_rich_text_span_survives() {
    let value = json!({
        "type": "heading_1",
        "heading_1": {
            "rich_text": [{ "type": "template_mention", "template_mention": { "type": "today" } }]
        }
    });
    let content = BlockContent::decode_value(&value).unwrap();
    let BlockContent::Heading1(heading) = &content else {
        panic!("expected heading_1");
    };
    assert!(matches!(
        &heading.rich_text[0].content,
        RichTextContent::Unknown { type_name, .. } if type_name == "template_mention"
    ));
    assert_eq!(
        serde_json::to_value(&content).unwrap()["heading_1"],
        value["heading_1"]
    );
}

#[test]
fn unknown_icon_type_fails_callout() {
    let value = json!({
        "type": "callout",
        "callout": {
            "rich_text": [],
            "icon": { "type": "custom_emoji", "custom_emoji": { "id": "x" } }
        }
    });
    let err = BlockContent::decode_value(&value).unwrap_err();
    assert!(matches!(err, TypeError::InvalidPayload { ref block_type, .. } if block_type == "callout"));
}

#[test]
fn hosted_file_without_expiry() {
    let value = json!({ "caption": [], "type": "file", "file": { "url": "https://x" } });
    let file = FileBlockValue::decode_value(&value).unwrap();
    assert_eq!(file.file.url(), "https://x");
}

// ── Irregular wire shapes ─────────────────────────────────────────────────────

#[test]
fn link_to_page_unknown_encodes_empty() {
    let content = BlockContent::decode_value(&json!({
        "type": "link_to_page",
        "link_to_page": { "type": "comment_id", "comment_id": "c-1" }
    }))
    .unwrap();
    assert_eq!(
        content,
        BlockContent::LinkToPage(LinkToPageBlockValue::Unknown)
    );
    assert_snapshot!(
        serde_json::to_string(&content).unwrap(),
        @r#"{"link_to_page":{},"object":"block","type":"link_to_page"}"#
    );
}

#[test]
fn synced_block_original_always_writes_null() {
    let encoded = serde_json::to_string(&SyncedBlockValue::OriginalBlock).unwrap();
    assert_snapshot!(encoded, @r#"{"synced_from":null}"#);
}

#[test]
fn synced_block_missing_key_is_original() {
    let content = BlockContent::decode_value(&json!({
        "type": "synced_block",
        "synced_block": {}
    }))
    .unwrap();
    assert_eq!(
        content,
        BlockContent::SyncedBlock(SyncedBlockValue::OriginalBlock)
    );
}

#[test]
fn file_block_never_nests_under_file_key() {
    let value = serde_json::to_value(FileBlockValue::new(
        nb_types::FileFile::external("https://example.com/a.png"),
        Vec::new(),
    ))
    .unwrap();
    assert!(value.get("file").is_none());
    assert_eq!(value["type"], "external");
}

// ── Deprecated `text` alias ───────────────────────────────────────────────────

#[test]
#[allow(deprecated)]
fn text_alias_matches_rich_text() {
    let spans = vec![RichText::plain("alias")];

    let to_do = ToDoBlockValue::from_text(spans.clone(), Some(true), None);
    assert_eq!(to_do.text(), spans.as_slice());
    assert_eq!(to_do.rich_text, spans);

    let heading = HeadingBlockValue::from_text(spans.clone());
    assert_eq!(heading.text(), heading.rich_text.as_slice());

    let callout = CalloutBlockValue::from_text(
        spans.clone(),
        None,
        Some(IconFile::Emoji("📌".to_string())),
    );
    let value = serde_json::to_value(&callout).unwrap();
    assert!(value.get("text").is_none());
    assert_eq!(value["rich_text"][0]["text"]["content"], "alias");
}

// ── Request limits ────────────────────────────────────────────────────────────

#[test]
fn append_request_fixture_decodes_without_children() {
    let contents = BlockDecoder::decode_contents(&fixture("append_request.json")).unwrap();
    assert_eq!(contents.len(), 3);
    assert_eq!(contents[1].block_type(), BlockType::Toggle);
    assert_eq!(contents[1].children(), None);
}

#[test]
fn request_limits_apply_to_nested_children() {
    let column = BlockContent::Column(ChildrenBlockValue::new(Some(vec![
        BlockContent::Divider;
        3
    ])));
    let mut encoder = BlockEncoder::with_config(EncoderConfig {
        max_children: 2,
        max_nesting: 2,
    });
    encoder.add(BlockContent::ColumnList(ChildrenBlockValue::new(Some(vec![
        column,
    ]))));
    let err = encoder.encode().unwrap_err();
    assert!(matches!(err, EncodeError::TooManyChildren { count: 3, limit: 2 }));
}

#[test]
fn encoded_request_snapshot() {
    let body = BlockEncoder::new()
        .add_paragraph("Hello")
        .encode_to_vec()
        .unwrap();
    assert_snapshot!(
        String::from_utf8(body).unwrap(),
        @r#"{"children":[{"object":"block","paragraph":{"rich_text":[{"text":{"content":"Hello"},"type":"text"}]},"type":"paragraph"}]}"#
    );
}
