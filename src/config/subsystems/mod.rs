pub mod extractor;
pub mod output;

pub use extractor::ExtractorConfig;
pub use output::OutputConfig;
