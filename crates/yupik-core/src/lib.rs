pub mod adjust;
pub mod exceptions;
pub mod explain;
pub mod grapheme;
pub mod pipeline;
pub mod settings;
pub mod stress;
pub mod syllable;
pub mod translit;
pub mod unicode;
pub mod validate;

#[cfg(test)]
mod tests;
