//! Batch front end: read patterns and queries, match, write results.

pub mod loader;
pub mod report;

use std::io::{Read, Write};

use tracing::{info, warn};

use crate::config::WildpathConfig;
use crate::data_structures::PatternMatcher;
use crate::error::WildpathResult;

pub use loader::{parse_input, read_input, MatchInput};
pub use report::ReportWriter;

/// Counts from one [`run`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Distinct patterns in the index after loading
    pub patterns_registered: usize,
    /// Pattern tokens that could not be registered
    pub patterns_rejected: usize,
    /// Result lines written
    pub queries: usize,
    /// Result lines that named a pattern
    pub matched: usize,
}

/// Builds a matcher from `input`, skipping patterns the index rejects.
///
/// # Returns
///
/// The matcher and the number of rejected pattern tokens.
pub fn build_matcher(input: &MatchInput, config: &WildpathConfig) -> (PatternMatcher, usize) {
    let mut matcher = PatternMatcher::with_config(config.index.clone());
    let mut rejected = 0;

    for raw in &input.patterns {
        if let Err(err) = matcher.register(raw) {
            warn!(pattern = %raw, error = %err, "Skipping invalid pattern");
            rejected += 1;
        }
    }

    (matcher, rejected)
}

/// Reads a count-prefixed stream from `reader`, matches every query and writes
/// one result line per query to `writer`.
///
/// Invalid patterns are logged and skipped. Malformed stream structure (a missing
/// or bad count, a short block) fails the whole run before anything is written.
///
/// # Arguments
///
/// * `reader` - Source of the pattern and query stream
/// * `writer` - Destination for the report
/// * `config` - Index, matching and report settings
pub fn run<R: Read, W: Write>(
    reader: R,
    writer: W,
    config: &WildpathConfig,
) -> WildpathResult<RunSummary> {
    let input = read_input(reader)?;
    let (matcher, patterns_rejected) = build_matcher(&input, config);

    let queries: Vec<&str> = if config.matching.dedupe_queries {
        input.unique_queries()
    } else {
        input.queries.iter().map(String::as_str).collect()
    };

    let workers = config.matching.workers_for(queries.len());
    let outcomes = matcher.match_all(&queries, workers);

    let mut report = ReportWriter::new(writer, config.report.clone());
    let mut matched = 0;
    for (query, outcome) in queries.iter().zip(&outcomes) {
        if outcome.is_match() {
            matched += 1;
        }
        report.write_result(query, outcome)?;
    }
    report.finish()?;

    let summary = RunSummary {
        patterns_registered: matcher.len(),
        patterns_rejected,
        queries: queries.len(),
        matched,
    };
    info!(
        patterns = summary.patterns_registered,
        rejected = summary.patterns_rejected,
        queries = summary.queries,
        matched = summary.matched,
        workers,
        "Run complete"
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReportConfig;
    use crate::data_structures::PatternIndexConfig;
    use crate::error::input::InputError;
    use crate::error::WildpathError;

    fn run_str(input: &str, config: &WildpathConfig) -> (String, RunSummary) {
        let mut output = Vec::new();
        let summary = run(input.as_bytes(), &mut output, config).unwrap();
        (String::from_utf8(output).unwrap(), summary)
    }

    #[test]
    fn test_duplicate_queries_are_answered_once() {
        let (output, summary) = run_str("1 a,* 3 a/b a/b x/y", &WildpathConfig::default());

        assert_eq!(
            output,
            "The outputs\n-----------\na/b - a,*\nx/y - NO MATCH\n"
        );
        assert_eq!(summary.queries, 2);
        assert_eq!(summary.matched, 1);
    }

    #[test]
    fn test_duplicate_queries_kept_when_dedupe_disabled() {
        let mut config = WildpathConfig::default();
        config.matching.dedupe_queries = false;
        config.report = ReportConfig {
            header: false,
            ..ReportConfig::default()
        };

        let (output, summary) = run_str("1 a,* 2 a/b a/b", &config);
        assert_eq!(output, "a/b - a,*\na/b - a,*\n");
        assert_eq!(summary.queries, 2);
    }

    #[test]
    fn test_too_deep_patterns_are_rejected_not_fatal() {
        let mut config = WildpathConfig::default();
        config.index = PatternIndexConfig { max_depth: Some(2) };
        config.report.header = false;

        let (output, summary) = run_str("3 a,b a,b,c , 2 a/b a/b/c", &config);
        assert_eq!(output, "a/b - a,b\na/b/c - NO MATCH\n");
        assert_eq!(summary.patterns_registered, 1);
        assert_eq!(summary.patterns_rejected, 2);
    }

    #[test]
    fn test_parallel_batch_keeps_input_order() {
        let mut config = WildpathConfig::default();
        config.matching.worker_threads = 4;
        config.matching.parallel_threshold = 1;
        config.report.header = false;

        let (output, _) = run_str("2 *,b a,* 4 a/b z/b a/z z/z", &config);
        assert_eq!(
            output,
            "a/b - a,*\nz/b - *,b\na/z - a,*\nz/z - NO MATCH\n"
        );
    }

    #[test]
    fn test_malformed_stream_writes_nothing() {
        let mut output = Vec::new();
        let result = run("2 a,b".as_bytes(), &mut output, &WildpathConfig::default());

        assert!(matches!(
            result,
            Err(WildpathError::Input(InputError::Truncated { .. }))
        ));
        assert!(output.is_empty());
    }
}
