#![no_main]

use libfuzzer_sys::fuzz_target;
use nb_decoder::BlockDecoder;

// Fuzz target: BlockDecoder::decode on arbitrary bytes.
//
// Catches bugs in:
// - Top-level shape detection (block, array, list response)
// - Tagged payload lookup for every block type
// - Flat file shapes and nullable synced_from
//
// Anything that decodes must also re-encode.
fuzz_target!(|data: &[u8]| {
    let Ok(decoded) = BlockDecoder::decode(data) else {
        return;
    };
    for block in &decoded.blocks {
        let encoded = serde_json::to_value(block);
        assert!(encoded.is_ok(), "decoded block failed to encode: {block:?}");
    }
});
