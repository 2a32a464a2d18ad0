/// Implementation of `nb inspect`.
///
/// # Output format
///
/// ```text
/// Blocks: 4 (1 skipped)
/// Block 0: heading_1 id=9bc3… "Release notes"
/// Block 1: paragraph id=1f0a… "Nothing broke this time." +children
/// Block 2: image id=77e2… external https://example.com/a.png
/// Block 3: link_to_page id=0c4d… page=5a2b…
/// ```
use std::fs;

use anyhow::{Context, Result};
use nb_decoder::{BlockDecoder, DecoderConfig};
use nb_types::{Block, BlockContent, FileFile, LinkToPageBlockValue, RichText, SyncedBlockValue};

use crate::InspectArgs;

/// Longest text excerpt shown per block, in characters.
const EXCERPT_CHARS: usize = 60;

/// Run the `nb inspect` command.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not decode, or if
/// `--block` is out of range.
pub fn run(args: &InspectArgs, config: &DecoderConfig) -> Result<()> {
    let bytes =
        fs::read(&args.file).with_context(|| format!("cannot read {}", args.file.display()))?;

    let decoded = BlockDecoder::decode_with_config(&bytes, config)
        .with_context(|| format!("failed to decode {}", args.file.display()))?;

    if let Some(target) = args.block
        && target >= decoded.blocks.len()
    {
        anyhow::bail!(
            "block index {target} out of range ({} blocks)",
            decoded.blocks.len()
        );
    }

    if decoded.skipped == 0 {
        println!("Blocks: {}", decoded.blocks.len());
    } else {
        println!("Blocks: {} ({} skipped)", decoded.blocks.len(), decoded.skipped);
    }

    for (idx, block) in decoded.blocks.iter().enumerate() {
        if let Some(target) = args.block
            && idx != target
        {
            continue;
        }
        println!("Block {idx}: {}", describe(block));
    }

    Ok(())
}

// ── Block formatting helpers ──────────────────────────────────────────────────

/// One-line description: type, id, type-specific detail, children marker.
fn describe(block: &Block) -> String {
    let block_type = block.block_type();
    let mut line = format!("{} id={}", block_type.wire_name(), block.id);
    let detail = block_detail(&block.content);
    if !detail.is_empty() {
        line.push(' ');
        line.push_str(&detail);
    }
    if block.has_children {
        line.push_str(" +children");
    }
    line
}

fn block_detail(content: &BlockContent) -> String {
    match content {
        BlockContent::Image(v)
        | BlockContent::Video(v)
        | BlockContent::File(v)
        | BlockContent::Pdf(v)
        | BlockContent::Audio(v) => match &v.file {
            FileFile::External { url } => format!("external {url}"),
            FileFile::Hosted { url, .. } => format!("hosted {url}"),
        },
        BlockContent::Embed(v) => v.url.clone(),
        BlockContent::Bookmark(v) => v.url.clone(),
        BlockContent::ChildPage(v) => format!("title={:?}", v.title),
        BlockContent::ChildDatabase(v) => format!("title={:?}", v.title),
        BlockContent::Equation(v) => v.expression.clone(),
        BlockContent::ToDo(v) => {
            let mark = if v.is_checked() { "[x]" } else { "[ ]" };
            format!("{mark} {}", excerpt(&v.rich_text))
        }
        BlockContent::Code(v) => {
            let language = v.language.as_deref().unwrap_or("plain text");
            format!("[{language}] {}", excerpt(&v.rich_text))
        }
        BlockContent::LinkToPage(v) => match v {
            LinkToPageBlockValue::Page(id) => format!("page={id}"),
            LinkToPageBlockValue::Database(id) => format!("database={id}"),
            LinkToPageBlockValue::Unknown => "target=unknown".to_string(),
        },
        BlockContent::SyncedBlock(v) => match v {
            SyncedBlockValue::OriginalBlock => "original".to_string(),
            SyncedBlockValue::Reference(id) => format!("synced_from={id}"),
        },
        BlockContent::Unknown { payload, .. } => {
            if payload.is_some() {
                "[unknown type, payload kept]".to_string()
            } else {
                "[unknown type]".to_string()
            }
        }
        other => other.rich_text().map(excerpt).unwrap_or_default(),
    }
}

/// Quoted, truncated plain text of a span list. Empty text gives `""`.
fn excerpt(spans: &[RichText]) -> String {
    let text = RichText::concat_plain(spans);
    let truncated: String = text.chars().take(EXCERPT_CHARS).collect();
    let ellipsis = if text.chars().count() > EXCERPT_CHARS { "…" } else { "" };
    format!("{:?}", format!("{truncated}{ellipsis}"))
}
