#![warn(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod encoder;

pub use config::EncoderConfig;
pub use encoder::BlockEncoder;
pub use error::EncodeError;
