use serde::{Serialize, Serializer, Deserialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::{Error, Result};

/// One window of consecutive tokens.
///
/// An owned copy: it shares token text with the extractor's sequence but
/// holds no reference back to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NGram {
    tokens: Box<[Arc<str>]>,
}

impl NGram {
    pub fn from_window(window: &[Arc<str>]) -> Self {
        Self {
            tokens: window.into(),
        }
    }

    /// Gram size of this window.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn tokens(&self) -> &[Arc<str>] {
        &self.tokens
    }

    pub fn as_strs(&self) -> Vec<&str> {
        self.tokens.iter().map(|t| t.as_ref()).collect()
    }

    pub fn join(&self, separator: &str) -> String {
        self.as_strs().join(separator)
    }
}

impl fmt::Display for NGram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join(" "))
    }
}

// Serialized as a plain array of strings
impl Serialize for NGram {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.tokens.iter().map(|t| t.as_ref()))
    }
}

impl<S: AsRef<str>, const N: usize> PartialEq<[S; N]> for NGram {
    fn eq(&self, other: &[S; N]) -> bool {
        self.tokens.len() == N
            && self.tokens.iter().zip(other.iter()).all(|(a, b)| a.as_ref() == b.as_ref())
    }
}

impl<S: AsRef<str>> PartialEq<Vec<S>> for NGram {
    fn eq(&self, other: &Vec<S>) -> bool {
        self.tokens.len() == other.len()
            && self.tokens.iter().zip(other.iter()).all(|(a, b)| a.as_ref() == b.as_ref())
    }
}

/// Inclusive range of gram sizes, `min..=max`.
///
/// Bounds are checked when the range is used against a token sequence, not at
/// construction. The textual form accepts `"a..b"`, `"a..=b"` and `"a-b"`
/// (all inclusive). A bare number `"n"` means `1..=n`, the same upper-bound
/// convention as [`GramRange::up_to`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GramRange {
    pub min: usize,
    pub max: usize,
}

impl GramRange {
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// Every size from 1 up to and including `max`.
    pub fn up_to(max: usize) -> Self {
        Self::new(1, max)
    }

    pub fn exactly(n: usize) -> Self {
        Self::new(n, n)
    }

    pub fn sizes(&self) -> RangeInclusive<usize> {
        self.min..=self.max
    }

    pub fn validate(&self) -> Result<()> {
        if self.min < 1 || self.min > self.max {
            return Err(Error::InvalidNgramRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

impl Default for GramRange {
    fn default() -> Self {
        Self::up_to(3)
    }
}

impl fmt::Display for GramRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.min, self.max)
    }
}

impl From<RangeInclusive<usize>> for GramRange {
    fn from(range: RangeInclusive<usize>) -> Self {
        Self::new(*range.start(), *range.end())
    }
}

impl FromStr for GramRange {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let parse_bound = |value: &str| -> Result<usize> {
            value.trim().parse::<usize>().map_err(|_| {
                Error::config(format!("Invalid gram size '{}' in range '{}'", value.trim(), s))
            })
        };

        let bounds = if let Some((min, max)) = s.split_once("..=") {
            Some((min, max))
        } else if let Some((min, max)) = s.split_once("..") {
            Some((min, max))
        } else {
            s.split_once('-')
        };

        let range = match bounds {
            Some((min, max)) => Self::new(parse_bound(min)?, parse_bound(max)?),
            None => Self::up_to(parse_bound(s)?),
        };
        range.validate().map_err(|e| Error::config(e.to_string()))?;
        Ok(range)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gram(words: &[&str]) -> NGram {
        let tokens: Vec<Arc<str>> = words.iter().map(|w| Arc::from(*w)).collect();
        NGram::from_window(&tokens)
    }

    #[test]
    fn test_ngram_display_and_join() {
        let g = gram(&["A", "brown", "fox"]);
        assert_eq!(g.len(), 3);
        assert_eq!(g.to_string(), "A brown fox");
        assert_eq!(g.join("_"), "A_brown_fox");
        assert_eq!(g, ["A", "brown", "fox"]);
        assert_eq!(g, vec!["A".to_string(), "brown".to_string(), "fox".to_string()]);
        assert_ne!(g, ["A", "brown"]);
    }

    #[test]
    fn test_ngram_serializes_as_string_array() {
        let json = serde_json::to_string(&gram(&["brown", "fox"])).unwrap();
        assert_eq!(json, r#"["brown","fox"]"#);
    }

    #[test]
    fn test_bare_number_is_upper_bound() {
        let range: GramRange = "3".parse().unwrap();
        assert_eq!(range, GramRange::new(1, 3));
        assert_eq!(range, GramRange::up_to(3));
    }

    #[test]
    fn test_explicit_range_forms() {
        for text in ["2..4", "2..=4", "2-4", " 2 .. 4 "] {
            let range: GramRange = text.parse().unwrap();
            assert_eq!(range, GramRange::new(2, 4), "parsing {:?}", text);
        }
        assert_eq!("5..5".parse::<GramRange>().unwrap(), GramRange::exactly(5));
    }

    #[test]
    fn test_malformed_ranges_are_config_errors() {
        for text in ["", "x", "0", "4..2", "0..3", "1..", "a-b"] {
            match text.parse::<GramRange>() {
                Err(Error::Config(_)) => {}
                other => panic!("expected config error for {:?}, got {:?}", text, other),
            }
        }
    }

    #[test]
    fn test_validate_and_display() {
        assert!(GramRange::new(1, 1).validate().is_ok());
        assert!(GramRange::new(0, 2).validate().unwrap_err().is_invalid_argument());
        assert!(GramRange::new(3, 2).validate().is_err());
        assert_eq!(GramRange::from(2..=5).to_string(), "2..5");
        assert_eq!(GramRange::default().sizes().collect::<Vec<_>>(), vec![1, 2, 3]);
    }
}
