// src/output.rs

use std::io::Write;
use serde::{Serialize, Deserialize};

use crate::error::Result;
use crate::ngram::NGram;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum OutputFormat {
    /// One n-gram per line, tokens joined by a separator
    #[default]
    Text,
    /// A single JSON array of token arrays
    Json,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// Write n-grams to `writer` in the given format.
pub fn write_ngrams<W: Write>(
    writer: &mut W,
    ngrams: &[NGram],
    format: OutputFormat,
    separator: &str,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for ngram in ngrams {
                writeln!(writer, "{}", ngram.join(separator))?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *writer, ngrams)?;
            writeln!(writer)?;
        }
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ngram::NGramExtractor;

    #[test]
    fn test_text_output() {
        let ngrams = NGramExtractor::new("A brown fox").extract_size(2).unwrap();
        let mut buf = Vec::new();
        write_ngrams(&mut buf, &ngrams, OutputFormat::Text, "_").unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "A_brown\nbrown_fox\n");
    }

    #[test]
    fn test_json_output() {
        let ngrams = NGramExtractor::new("A brown fox").extract_up_to(2).unwrap();
        let mut buf = Vec::new();
        write_ngrams(&mut buf, &ngrams, OutputFormat::Json, " ").unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "[[\"A\"],[\"brown\"],[\"fox\"],[\"A\",\"brown\"],[\"brown\",\"fox\"]]\n"
        );
    }

    #[test]
    fn test_format_names() {
        assert_eq!(OutputFormat::from_str(" JSON "), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_str("xml"), None);
        assert_eq!(OutputFormat::Text.as_str(), "text");
    }
}
