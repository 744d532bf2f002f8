pub mod annotate;
pub mod converter;
pub mod reconstruct;
pub mod settings;
pub mod token;
pub mod tokenizer;
pub mod unicode;

pub use converter::{ConvertError, Converter};
