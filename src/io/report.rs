//! Result output.

use std::io::Write;

use serde::Serialize;

use crate::config::{ReportConfig, ReportFormat};
use crate::data_structures::MatchOutcome;
use crate::error::WildpathResult;

/// First header line of plain output.
pub const HEADER_TITLE: &str = "The outputs";

/// Second header line of plain output.
pub const HEADER_RULE: &str = "-----------";

#[derive(Serialize)]
struct JsonRecord<'a> {
    query: &'a str,
    result: String,
    matched: bool,
}

/// Writes one line per query result in the configured format.
pub struct ReportWriter<W: Write> {
    writer: W,
    config: ReportConfig,
    started: bool,
}

impl<W: Write> ReportWriter<W> {
    /// Creates a writer over `writer`.
    pub fn new(writer: W, config: ReportConfig) -> Self {
        Self {
            writer,
            config,
            started: false,
        }
    }

    /// Writes the header if this format has one and it has not been written yet.
    pub fn begin(&mut self) -> WildpathResult<()> {
        if !self.started {
            self.started = true;
            if self.config.format == ReportFormat::Plain && self.config.header {
                writeln!(self.writer, "{HEADER_TITLE}")?;
                writeln!(self.writer, "{HEADER_RULE}")?;
            }
        }
        Ok(())
    }

    /// Writes the result for one query.
    pub fn write_result(&mut self, query: &str, outcome: &MatchOutcome) -> WildpathResult<()> {
        self.begin()?;
        match self.config.format {
            ReportFormat::Plain => writeln!(self.writer, "{query} - {outcome}")?,
            ReportFormat::Json => {
                let record = JsonRecord {
                    query,
                    result: outcome.to_string(),
                    matched: outcome.is_match(),
                };
                serde_json::to_writer(&mut self.writer, &record)?;
                writeln!(self.writer)?;
            }
        }
        Ok(())
    }

    /// Flushes and returns the underlying writer.
    pub fn finish(mut self) -> WildpathResult<W> {
        self.begin()?;
        self.writer.flush()?;
        Ok(self.writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_structures::Pattern;

    fn render(config: ReportConfig, rows: &[(&str, MatchOutcome)]) -> String {
        let mut report = ReportWriter::new(Vec::new(), config);
        for (query, outcome) in rows {
            report.write_result(query, outcome).unwrap();
        }
        String::from_utf8(report.finish().unwrap()).unwrap()
    }

    fn rows() -> Vec<(&'static str, MatchOutcome)> {
        vec![
            ("a/b/c", MatchOutcome::Matched(Pattern::parse("a,*,*").unwrap())),
            ("foo/", MatchOutcome::NoMatch),
        ]
    }

    #[test]
    fn test_plain_with_header() {
        let output = render(ReportConfig::default(), &rows());
        assert_eq!(
            output,
            "The outputs\n-----------\na/b/c - a,*,*\nfoo/ - NO MATCH\n"
        );
    }

    #[test]
    fn test_plain_without_header() {
        let config = ReportConfig {
            header: false,
            ..ReportConfig::default()
        };
        assert_eq!(render(config, &rows()), "a/b/c - a,*,*\nfoo/ - NO MATCH\n");
    }

    #[test]
    fn test_header_is_written_for_empty_report() {
        assert_eq!(
            render(ReportConfig::default(), &[]),
            "The outputs\n-----------\n"
        );
    }

    #[test]
    fn test_json_lines() {
        let config = ReportConfig {
            format: ReportFormat::Json,
            header: true,
        };
        let output = render(config, &rows());
        let lines: Vec<serde_json::Value> = output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            serde_json::json!({"query": "a/b/c", "result": "a,*,*", "matched": true})
        );
        assert_eq!(
            lines[1],
            serde_json::json!({"query": "foo/", "result": "NO MATCH", "matched": false})
        );
    }
}
