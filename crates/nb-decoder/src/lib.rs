#![warn(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod decoder;

pub use config::{DecoderConfig, UnknownBlockPolicy};
pub use decoder::{BlockDecoder, DecodedBlocks};
pub use error::DecodeError;
