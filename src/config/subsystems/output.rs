// src/config/subsystems/output.rs

use serde::{Serialize, Deserialize};
use crate::error::{Error, Result};
use crate::config::FromIni;
use crate::output::OutputFormat;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    // Joins tokens of one n-gram in text output
    pub separator: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            separator: " ".to_string(),
        }
    }
}

impl FromIni for OutputConfig {
    fn from_ini_section(&mut self, section_name: &str, key: &str, value: &str) -> Option<Result<()>> {
        if section_name != "output" {
            return None;
        }

        match key {
            "format" => {
                match OutputFormat::from_str(value) {
                    Some(format) => {
                        self.format = format;
                        Some(Ok(()))
                    },
                    None => Some(Err(Error::Config(
                        format!("Invalid format (must be 'text' or 'json'): {}", value)
                    ))),
                }
            },
            "separator" => {
                self.separator = value.trim_matches('"').to_string();
                Some(Ok(()))
            },
            _ => None,
        }
    }
}

impl OutputConfig {
    pub fn validate(&self) -> Result<()> {
        if self.format == OutputFormat::Text && self.separator.is_empty() {
            return Err(Error::Config(
                "separator must not be empty for text output".to_string()
            ));
        }
        Ok(())
    }
}
