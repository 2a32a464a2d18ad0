/// Implementation of `nb validate`.
///
/// Decodes the whole file and prints either success checkmarks (`✓`) or
/// one diagnostic failure line (`✗`). Exits with code 1 on failure.
///
/// # Success output
///
/// ```text
/// ✓ JSON: well-formed
/// ✓ Blocks: 12 blocks decoded successfully
/// ✓ Types: all block types known
/// ```
///
/// # Failure output
///
/// ```text
/// ✗ Error: block 3: missing payload object for type `quote`
/// ```
use std::fs;

use anyhow::{Context, Result, anyhow};
use nb_decoder::{BlockDecoder, DecodeError, DecoderConfig};
use nb_types::BlockContent;

use crate::ValidateArgs;

/// Run the `nb validate` command.
///
/// # Errors
///
/// Returns an error if the file cannot be read or any block fails to
/// decode under the active unknown-type policy.
pub fn run(args: &ValidateArgs, config: &DecoderConfig) -> Result<()> {
    let bytes =
        fs::read(&args.file).with_context(|| format!("cannot read {}", args.file.display()))?;

    match BlockDecoder::decode_with_config(&bytes, config) {
        Ok(decoded) => {
            let count = decoded.blocks.len();
            println!("✓ JSON: well-formed");
            println!(
                "✓ Blocks: {count} block{} decoded successfully",
                if count == 1 { "" } else { "s" }
            );
            let unknown = decoded
                .blocks
                .iter()
                .filter(|b| matches!(b.content, BlockContent::Unknown { .. }))
                .count();
            match (unknown, decoded.skipped) {
                (0, 0) => println!("✓ Types: all block types known"),
                (0, skipped) => println!("✓ Types: {skipped} unknown skipped"),
                (kept, _) => println!("✓ Types: {kept} unknown preserved"),
            }
            Ok(())
        }

        Err(e) => {
            println!("✗ Error: {}", decode_error_diagnostic(&e));
            Err(anyhow!("validation failed"))
        }
    }
}

// ── Error formatting ──────────────────────────────────────────────────────────

/// Converts a `DecodeError` into a one-line diagnostic.
///
/// ```text
/// ┌──────────────────────┬──────────────────────────────────────────────┐
/// │ DecodeError variant  │ Diagnostic                                   │
/// ├──────────────────────┼──────────────────────────────────────────────┤
/// │ Json                 │ "invalid JSON at line L column C: <msg>"     │
/// │ UnknownBlockType     │ "block N: unknown block type \"t\" (rejected)"│
/// │ Block / other        │ "<error Display>"                            │
/// └──────────────────────┴──────────────────────────────────────────────┘
/// ```
fn decode_error_diagnostic(e: &DecodeError) -> String {
    match e {
        DecodeError::Json(inner) => format!(
            "invalid JSON at line {} column {}: {inner}",
            inner.line(),
            inner.column()
        ),
        DecodeError::UnknownBlockType { .. } => format!("{e} (rejected)"),
        other => other.to_string(),
    }
}
