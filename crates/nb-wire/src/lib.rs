#![warn(clippy::pedantic)]

pub mod error;
pub mod fields;
pub mod tagged;

pub use error::WireError;
pub use fields::Object;
pub use tagged::TaggedFrame;
