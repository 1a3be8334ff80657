//! Integration tests for the batch pipeline.
//! Runs the bundled sample stream end to end through the public library API.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use wildpath_lib::config::{ReportFormat, WildpathConfig};
use wildpath_lib::io::{read_input, run, RunSummary};

fn sample_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/sample_input.txt")
}

fn open_sample() -> BufReader<File> {
    BufReader::new(File::open(sample_path()).unwrap())
}

#[test]
fn test_sample_report() {
    let mut output = Vec::new();
    let summary = run(open_sample(), &mut output, &WildpathConfig::default()).unwrap();

    let expected = "\
The outputs
-----------
/w/x/y/z/ - *,x,y,z
a/b/c - a,*,*
foo/ - NO MATCH
foo/bar/ - NO MATCH
foo/bar/baz/ - foo,bar,baz
a/b/c/d/e/f - NO MATCH
";
    assert_eq!(String::from_utf8(output).unwrap(), expected);
    assert_eq!(
        summary,
        RunSummary {
            patterns_registered: 6,
            patterns_rejected: 0,
            queries: 6,
            matched: 3,
        }
    );
}

#[test]
fn test_sample_queries_in_stream_order() {
    let input = read_input(open_sample()).unwrap();
    assert_eq!(input.patterns.len(), 6);
    assert_eq!(
        input.unique_queries(),
        vec![
            "/w/x/y/z/",
            "a/b/c",
            "foo/",
            "foo/bar/",
            "foo/bar/baz/",
            "a/b/c/d/e/f"
        ]
    );
}

#[test]
fn test_sample_report_as_json() {
    let mut config = WildpathConfig::default();
    config.report.format = ReportFormat::Json;
    config.matching.parallel_threshold = 0;
    config.matching.worker_threads = 4;

    let mut output = Vec::new();
    run(open_sample(), &mut output, &config).unwrap();

    let lines: Vec<serde_json::Value> = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0]["query"], "/w/x/y/z/");
    assert_eq!(lines[0]["result"], "*,x,y,z");
    assert_eq!(lines[5]["result"], "NO MATCH");
    assert_eq!(lines[5]["matched"], false);
}
