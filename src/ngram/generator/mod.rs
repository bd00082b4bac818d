// src/ngram/generator/mod.rs

mod core;
mod word_ngrams;
mod range;
mod parallel;

// Re-export the main types and structs
pub use self::core::NGramExtractor;
pub use self::core::MIN_PARALLEL_THRESHOLD;
pub use self::word_ngrams::Windows;
