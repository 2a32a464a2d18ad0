#![no_main]

use libfuzzer_sys::fuzz_target;
use nb_decoder::BlockDecoder;

// Fuzz target: BlockDecoder::decode_contents (request bodies, no envelope).
fuzz_target!(|data: &[u8]| {
    let _ = BlockDecoder::decode_contents(data);
});
