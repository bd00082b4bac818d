pub mod subsystems;

use serde::{Serialize, Deserialize};
use std::path::Path;
use std::fs;
use crate::error::{Error, Result};
use log::{warn, trace};

pub trait FromIni {
    fn from_ini_section(&mut self, section_name: &str, key: &str, value: &str) -> Option<Result<()>>;
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NgramConfig {
    pub extractor: subsystems::ExtractorConfig,
    pub output: subsystems::OutputConfig,
}

impl NgramConfig {
    pub fn validate(&self) -> Result<()> {
        self.extractor.validate()?;
        self.output.validate()?;
        Ok(())
    }

    pub fn from_ini<P: AsRef<Path>>(path: P) -> Result<Self> {
        let absolute_path = std::fs::canonicalize(&path)
            .unwrap_or_else(|_| path.as_ref().to_path_buf());

        trace!("Loading configuration from: {:?}", absolute_path);

        let content = fs::read_to_string(&path)?;
        Self::parse_ini(&content)
    }

    /// Parse INI text. Unknown sections and keys are skipped with a warning,
    /// invalid values for known keys are errors.
    pub fn parse_ini(content: &str) -> Result<Self> {
        let mut config = Self::default();
        let mut current_section = String::new();

        for (line_num, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }

            if line.starts_with('[') && line.ends_with(']') {
                current_section = line[1..line.len()-1].trim().to_string();
                trace!("  Line {}: Found section: [{}]", line_num + 1, current_section);
                continue;
            }

            let Some((key, value)) = line.split_once('=') else {
                warn!("Ignoring malformed config line {}: {}", line_num + 1, line);
                continue;
            };
            let key = key.trim();
            let value = value.trim();

            // Delegate to appropriate subsystem config
            let handled = match current_section.as_str() {
                "extractor" => config.extractor.from_ini_section(&current_section, key, value),
                "output" => config.output.from_ini_section(&current_section, key, value),
                _ => None,
            };

            match handled {
                Some(Ok(())) => {}
                Some(Err(e)) => {
                    return Err(Error::config(format!(
                        "line {}: {}={}: {}", line_num + 1, key, value, e
                    )));
                }
                None => {
                    warn!("Unrecognized config key: {}={} in section [{}]", key, value, current_section);
                }
            }
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use crate::ngram::GramRange;
    use crate::output::OutputFormat;

    #[test]
    fn test_defaults_validate() {
        let config = NgramConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.extractor.sizes, GramRange::up_to(3));
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_from_ini_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# sample").unwrap();
        writeln!(file, "[extractor]").unwrap();
        writeln!(file, "sizes = 2..4").unwrap();
        writeln!(file, "use_parallel = false").unwrap();
        writeln!(file, "thread_count = 2").unwrap();
        writeln!(file, "ngram_log = debug").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "[output]").unwrap();
        writeln!(file, "format = json").unwrap();
        writeln!(file, "separator = \"_\"").unwrap();
        writeln!(file, "[unknown]").unwrap();
        writeln!(file, "whatever = 1").unwrap();
        file.flush().unwrap();

        let config = NgramConfig::from_ini(file.path()).unwrap();
        assert_eq!(config.extractor.sizes, GramRange::new(2, 4));
        assert!(!config.extractor.use_parallel);
        assert_eq!(config.extractor.thread_count, 2);
        assert_eq!(config.extractor.get_log_level(), log::LevelFilter::Debug);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.output.separator, "_");
    }

    #[test]
    fn test_invalid_value_is_rejected() {
        let err = NgramConfig::parse_ini("[extractor]\nsizes = 4..2\n").unwrap_err();
        assert!(matches!(err, Error::Config(_)), "{:?}", err);

        let err = NgramConfig::parse_ini("[output]\nformat = xml\n").unwrap_err();
        assert!(err.to_string().contains("line 2"), "{}", err);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = NgramConfig::from_ini(dir.path().join("missing.ini")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
