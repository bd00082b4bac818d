// src/ngram/generator/parallel.rs

use std::sync::Arc;
use rayon::prelude::*;
use log::{debug, trace};

use crate::config::subsystems::ExtractorConfig;
use crate::error::Result;
use crate::ngram::NGram;

use super::core::NGramExtractor;

impl NGramExtractor {
    pub(crate) fn should_parallelize(&self, total_windows: usize) -> bool {
        self.config.use_parallel && total_windows >= self.config.parallel_threshold
    }

    /// Split the start indices of size `n` across workers. The indexed
    /// parallel extend keeps windows in start-index order.
    pub(crate) fn push_windows_parallel(&self, n: usize, out: &mut Vec<NGram>) {
        let tokens = self.tokens.as_slice();
        let total_windows = tokens.len() - n + 1;
        trace!("Splitting {} {}-gram windows across workers", total_windows, n);

        let extend = |out: &mut Vec<NGram>| {
            out.par_extend(
                (0..total_windows)
                    .into_par_iter()
                    .map(|window_start| NGram::from_window(&tokens[window_start..window_start + n])),
            );
        };

        match &self.thread_pool {
            Some(pool) => {
                debug!("Using dedicated pool with {} threads", pool.current_num_threads());
                pool.install(|| extend(out));
            }
            None => {
                debug!("Using global rayon pool with {} threads", rayon::current_num_threads());
                extend(out);
            }
        }
    }

    pub(crate) fn build_thread_pool(config: &ExtractorConfig) -> Result<Option<Arc<rayon::ThreadPool>>> {
        if !config.use_parallel || config.thread_count == 0 {
            return Ok(None);
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .thread_name(|i| format!("ngram-worker-{}", i))
            .build()?;
        Ok(Some(Arc::new(pool)))
    }
}

#[cfg(test)]
mod tests {
    use crate::config::subsystems::ExtractorConfig;
    use crate::ngram::NGramExtractor;

    fn sample_text(words: usize) -> String {
        (0..words).map(|i| format!("w{}", i % 37)).collect::<Vec<_>>().join(" ")
    }

    fn sequential(text: &str) -> NGramExtractor {
        let config = ExtractorConfig {
            use_parallel: false,
            ..ExtractorConfig::default()
        };
        NGramExtractor::new(text).with_config(config).unwrap()
    }

    fn parallel(text: &str, thread_count: usize) -> NGramExtractor {
        let config = ExtractorConfig {
            use_parallel: true,
            thread_count,
            parallel_threshold: 1,
            ..ExtractorConfig::default()
        };
        NGramExtractor::new(text).with_config(config).unwrap()
    }

    #[test]
    fn test_parallel_matches_sequential_global_pool() {
        let text = sample_text(2_000);
        let expected = sequential(&text).extract_range(1, 5).unwrap();
        let actual = parallel(&text, 0).extract_range(1, 5).unwrap();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_parallel_matches_sequential_dedicated_pool() {
        let text = sample_text(1_500);
        let seq = sequential(&text);
        let par = parallel(&text, 3);
        for n in [1, 2, 7, 1_500] {
            assert_eq!(par.extract_size(n).unwrap(), seq.extract_size(n).unwrap(), "n = {}", n);
        }
    }

    #[test]
    fn test_threshold_gates_parallel_path() {
        let extractor = NGramExtractor::new("a b c");
        assert!(!extractor.should_parallelize(3));
        assert!(extractor.should_parallelize(crate::ngram::generator::MIN_PARALLEL_THRESHOLD));
        assert!(!sequential("a b c").should_parallelize(usize::MAX));
    }
}
