pub mod generator;
pub mod types;

pub use self::generator::{NGramExtractor, Windows};
pub use self::types::{GramRange, NGram};

pub use crate::error::{Error, Result};
