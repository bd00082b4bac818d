// src/config/subsystems/extractor.rs

use serde::{Serialize, Deserialize};
use crate::error::{Error, Result};
use crate::config::FromIni;
use crate::ngram::GramRange;
use crate::ngram::generator::MIN_PARALLEL_THRESHOLD;
use log::LevelFilter;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    // Gram sizes produced when no explicit range is requested
    pub sizes: GramRange,

    // Parallelization settings
    pub use_parallel: bool,
    // 0 means the global rayon pool
    pub thread_count: usize,
    // Minimum number of windows in one size before work is split across threads
    pub parallel_threshold: usize,

    // Log level
    pub ngram_log: String,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            sizes: GramRange::default(),
            use_parallel: true,
            thread_count: 0,
            parallel_threshold: MIN_PARALLEL_THRESHOLD,
            ngram_log: "info".to_string(),
        }
    }
}

fn parse_level(value: &str) -> Option<LevelFilter> {
    match value.trim().to_lowercase().as_str() {
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        "none" | "off" => Some(LevelFilter::Off),
        _ => None,
    }
}

impl FromIni for ExtractorConfig {
    fn from_ini_section(&mut self, section_name: &str, key: &str, value: &str) -> Option<Result<()>> {
        if section_name != "extractor" {
            return None;
        }

        match key {
            "sizes" => Some(value.parse::<GramRange>().map(|sizes| {
                self.sizes = sizes;
            })),
            "use_parallel" => {
                match value.parse() {
                    Ok(flag) => {
                        self.use_parallel = flag;
                        Some(Ok(()))
                    },
                    Err(_) => Some(Err(Error::Config(
                        format!("Invalid use_parallel value (must be true/false): {}", value)
                    ))),
                }
            },
            "thread_count" => {
                match value.parse() {
                    Ok(count) => {
                        self.thread_count = count;
                        Some(Ok(()))
                    },
                    Err(_) => Some(Err(Error::Config(
                        format!("Invalid thread_count (must be >= 0): {}", value)
                    ))),
                }
            },
            "parallel_threshold" => {
                match value.parse() {
                    Ok(threshold) if threshold > 0 => {
                        self.parallel_threshold = threshold;
                        Some(Ok(()))
                    },
                    _ => Some(Err(Error::Config(
                        format!("Invalid parallel_threshold (must be > 0): {}", value)
                    ))),
                }
            },
            "ngram_log" => Some(self.set_log_level(value)),
            _ => None,
        }
    }
}

impl ExtractorConfig {
    pub fn set_log_level(&mut self, value: &str) -> Result<()> {
        match parse_level(value) {
            Some(_) => {
                self.ngram_log = value.trim().to_lowercase();
                Ok(())
            },
            None => Err(Error::Config(
                format!("Invalid log level '{}'. Must be one of: none, error, warn, info, debug, trace", value)
            )),
        }
    }

    pub fn get_log_level(&self) -> LevelFilter {
        // Default to Info if invalid
        parse_level(&self.ngram_log).unwrap_or(LevelFilter::Info)
    }

    pub fn validate(&self) -> Result<()> {
        self.sizes.validate().map_err(|e| Error::Config(e.to_string()))?;

        if self.parallel_threshold == 0 {
            return Err(Error::Config(
                "parallel_threshold must be greater than 0".to_string()
            ));
        }

        if self.thread_count > 0 && !self.use_parallel {
            log::warn!(
                "thread_count ({}) is ignored because use_parallel is disabled",
                self.thread_count
            );
        }

        Ok(())
    }

    /// Adjust thread count based on available system resources
    pub fn adjust_thread_count(&mut self) {
        if self.use_parallel {
            if self.thread_count > 0 {
                let system_threads = num_cpus::get();
                // Use at most 75% of available threads
                self.thread_count = std::cmp::min(
                    self.thread_count,
                    std::cmp::max(1, (system_threads as f32 * 0.75) as usize)
                );
            }
        } else {
            self.thread_count = 0;
        }
    }

    /// Returns a human-readable description of the configuration
    pub fn describe(&self) -> String {
        format!(
            "NGram extractor configuration:\n\
             - Gram sizes: {}\n\
             - Parallel processing: {}\n\
             - Thread count: {}\n\
             - Parallel threshold: {} windows",
            self.sizes,
            if self.use_parallel { "enabled" } else { "disabled" },
            if self.thread_count == 0 { "rayon default".to_string() } else { self.thread_count.to_string() },
            self.parallel_threshold
        )
    }
}
