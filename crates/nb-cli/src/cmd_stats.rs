/// Implementation of `nb stats`.
///
/// # Example output
///
/// ```text
/// File:    page.json  (4812 bytes)
/// Blocks:  9 total, 2 with children, 0 skipped
///
/// Type                  Count   Chars
/// ────────────────────────────────────
/// paragraph                 4     312
/// heading_2                 2      41
/// image                     1       0
/// to_do                     2      37
/// ────────────────────────────────────
/// Total                     9     390
/// ```
///
/// `Chars` counts the plain text of each block's rich text (or caption),
/// so it roughly tracks how much readable text a page holds.
use std::collections::HashMap;
use std::fs;

use anyhow::{Context, Result};
use nb_decoder::{BlockDecoder, DecoderConfig};
use nb_types::{BlockContent, RichText};

use crate::StatsArgs;

const RULE: &str = "────────────────────────────────────";

/// Run the `nb stats` command.
///
/// # Errors
///
/// Returns an error if the file cannot be read or does not decode.
pub fn run(args: &StatsArgs, config: &DecoderConfig) -> Result<()> {
    let bytes =
        fs::read(&args.file).with_context(|| format!("cannot read {}", args.file.display()))?;

    let decoded = BlockDecoder::decode_with_config(&bytes, config)
        .with_context(|| format!("failed to decode {}", args.file.display()))?;

    // Aggregate by type name, remembering first-seen order for output.
    let mut order: Vec<String> = Vec::new();
    let mut totals: HashMap<String, (usize, usize)> = HashMap::new();
    for block in &decoded.blocks {
        let name = block.block_type().wire_name().to_string();
        let chars = text_chars(&block.content);
        let entry = totals.entry(name.clone()).or_insert_with(|| {
            order.push(name);
            (0, 0)
        });
        entry.0 += 1;
        entry.1 += chars;
    }

    let with_children = decoded.blocks.iter().filter(|b| b.has_children).count();

    println!("File:    {}  ({} bytes)", args.file.display(), bytes.len());
    println!(
        "Blocks:  {} total, {with_children} with children, {} skipped",
        decoded.blocks.len(),
        decoded.skipped
    );
    println!();
    println!("{:<20} {:>7} {:>7}", "Type", "Count", "Chars");
    println!("{RULE}");

    let mut total_chars = 0;
    for name in &order {
        let (count, chars) = totals[name];
        total_chars += chars;
        println!("{name:<20} {count:>7} {chars:>7}");
    }

    println!("{RULE}");
    println!("{:<20} {:>7} {total_chars:>7}", "Total", decoded.blocks.len());

    Ok(())
}

fn text_chars(content: &BlockContent) -> usize {
    content
        .rich_text()
        .map_or(0, |spans| RichText::concat_plain(spans).chars().count())
}
