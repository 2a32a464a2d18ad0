#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use libfuzzer_sys::fuzz_target;
use nb_decoder::BlockDecoder;
use nb_encoder::BlockEncoder;

#[derive(Debug, Arbitrary)]
enum FuzzBlock {
    Paragraph(String),
    Heading { level: u8, text: String },
    ToDo { text: String, checked: bool },
    Bulleted(String),
    Numbered(String),
    Quote(String),
    Code { language: String, source: String },
    Divider,
}

// Fuzz target: BlockEncoder -> BlockDecoder::decode_contents roundtrip.
//
// Builds a request body through the encoder shortcuts, decodes it back,
// and checks the decoded contents match what was added.
fuzz_target!(|data: &[u8]| {
    let mut u = Unstructured::new(data);
    let Ok(blocks) = Vec::<FuzzBlock>::arbitrary(&mut u) else {
        return;
    };
    if blocks.is_empty() {
        return;
    }

    let mut encoder = BlockEncoder::new();
    for block in blocks.iter().take(32) {
        match block {
            FuzzBlock::Paragraph(text) => {
                encoder.add_paragraph(text);
            }
            FuzzBlock::Heading { level, text } => {
                // Levels outside 1..=3 are rejected and add nothing.
                let _ = encoder.add_heading(*level, text);
            }
            FuzzBlock::ToDo { text, checked } => {
                encoder.add_to_do(text, *checked);
            }
            FuzzBlock::Bulleted(text) => {
                encoder.add_bulleted(text);
            }
            FuzzBlock::Numbered(text) => {
                encoder.add_numbered(text);
            }
            FuzzBlock::Quote(text) => {
                encoder.add_quote(text);
            }
            FuzzBlock::Code { language, source } => {
                encoder.add_code(language, source);
            }
            FuzzBlock::Divider => {
                encoder.add_divider();
            }
        }
    }

    let Ok(body) = encoder.encode_to_vec() else {
        return;
    };

    let decoded = BlockDecoder::decode_contents(&body);
    assert!(decoded.is_ok(), "decoder failed on valid encoder output: {:?}", decoded.err());
    assert_eq!(decoded.unwrap(), encoder.blocks());
});
