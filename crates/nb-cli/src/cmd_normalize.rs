/// Implementation of `nb normalize`.
///
/// Decodes a file and writes the blocks back out as the encoder would
/// produce them: keys the model does not know are dropped, optional
/// fields that were `null` are left out, and list responses are
/// unwrapped to a bare array.
///
/// With `--request` the envelopes (`id`, timestamps, ...) are dropped as
/// well, and the output is an append-children request body checked
/// against the API's per-request limits.
use std::fs;
use std::io::{self, Write};

use anyhow::{Context, Result};
use nb_decoder::{BlockDecoder, DecoderConfig};
use nb_encoder::{BlockEncoder, EncoderConfig};
use nb_types::{Block, BlockContent};
use serde_json::Value;

use crate::NormalizeArgs;

/// Run the `nb normalize` command.
///
/// # Errors
///
/// Returns an error if the file cannot be read or decoded, if the
/// request limits are exceeded under `--request`, or if the output
/// cannot be written.
pub fn run(args: &NormalizeArgs, config: &DecoderConfig) -> Result<()> {
    let bytes =
        fs::read(&args.file).with_context(|| format!("cannot read {}", args.file.display()))?;

    let decoded = BlockDecoder::decode_with_config(&bytes, config)
        .with_context(|| format!("failed to decode {}", args.file.display()))?;
    tracing::debug!(
        blocks = decoded.blocks.len(),
        skipped = decoded.skipped,
        request = args.request,
        "normalizing"
    );

    let output = if args.request {
        let mut encoder = BlockEncoder::with_config(EncoderConfig {
            max_children: args.max_children,
            ..EncoderConfig::default()
        });
        let (contents, dropped) = request_contents(decoded.blocks);
        tracing::debug!(dropped, "built request contents");
        for content in contents {
            encoder.add(content);
        }
        encoder.encode().context("cannot build request body")?
    } else {
        let blocks = decoded
            .blocks
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()
            .context("cannot re-encode blocks")?;
        Value::Array(blocks)
    };

    let mut text = if args.compact {
        serde_json::to_string(&output)?
    } else {
        serde_json::to_string_pretty(&output)?
    };
    text.push('\n');

    match &args.output {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("cannot write {}", path.display()))?;
        }
        None => io::stdout()
            .write_all(text.as_bytes())
            .context("cannot write to stdout")?,
    }

    Ok(())
}

/// Strip envelopes for a request body.
///
/// Responses never carry children inline, so a block flagged
/// `has_children` loses its subtree here. Returns the contents and how
/// many subtrees were dropped.
fn request_contents(blocks: Vec<Block>) -> (Vec<BlockContent>, usize) {
    let mut dropped = 0;
    let contents = blocks
        .into_iter()
        .enumerate()
        .map(|(index, block)| {
            if block.has_children {
                tracing::warn!(index, id = %block.id, "dropping children not present in input");
                dropped += 1;
            }
            block.content
        })
        .collect();
    (contents, dropped)
}

#[cfg(test)]
mod tests {
    use nb_types::{RichText, TextAndChildrenBlockValue};

    use super::*;

    #[test]
    fn request_contents_counts_dropped_subtrees() {
        let mut toggle = Block::new(
            "t-1",
            BlockContent::Toggle(TextAndChildrenBlockValue::new(vec![RichText::plain("More")])),
        );
        toggle.has_children = true;
        let blocks = vec![Block::new("d-1", BlockContent::Divider), toggle.clone()];

        let (contents, dropped) = request_contents(blocks);
        assert_eq!(dropped, 1);
        assert_eq!(contents, vec![BlockContent::Divider, toggle.content]);
    }

    #[test]
    fn request_contents_without_children() {
        let (contents, dropped) = request_contents(vec![Block::new("d-1", BlockContent::Divider)]);
        assert_eq!(dropped, 0);
        assert_eq!(contents.len(), 1);
    }
}
