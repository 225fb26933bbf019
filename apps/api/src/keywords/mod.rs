//! Keyword extraction core: normalization, tokenization, dictionary lookup,
//! frequency/phrase scoring, categorization, and the request pipeline that
//! strings them together.

pub mod categorize;
pub mod dictionary;
pub mod handlers;
pub mod normalize;
pub mod pipeline;
pub mod scoring;
pub mod tokenize;
