//! Tests for the batch pipeline driven by loaded configuration.

use proptest::prelude::*;

use super::{path_strategy, pattern_strategy, TestFixture};
use crate::config::{ConfigLoader, WildpathConfig};
use crate::data_structures::PatternMatcher;
use crate::io::{self, RunSummary};

const SAMPLE: &str = "6
*,b,*
a,*,*
*,*,c
foo,bar,baz
w,x,*,*
*,x,y,z
5
/w/x/y/z/
a/b/c
foo/
foo/bar/
foo/bar/baz/
";

fn render(patterns: &[String], paths: &[String]) -> String {
    let mut input = format!("{}\n", patterns.len());
    for pattern in patterns {
        input.push_str(pattern);
        input.push('\n');
    }
    input.push_str(&format!("{}\n", paths.len()));
    for path in paths {
        input.push_str(path);
        input.push('\n');
    }
    input
}

#[test]
fn test_sample_with_json_config() {
    let fixture = TestFixture::new().unwrap();
    let config_path = fixture
        .create_file(
            "report.toml",
            "[report]\nformat = \"json\"\n[matching]\nparallel_threshold = 2\nworker_threads = 3\n",
        )
        .unwrap();
    let config = ConfigLoader::new(Some(&config_path), "WILDPATH_TEST_IO")
        .load()
        .unwrap();

    let mut output = Vec::new();
    let summary = io::run(SAMPLE.as_bytes(), &mut output, &config).unwrap();

    assert_eq!(
        summary,
        RunSummary {
            patterns_registered: 6,
            patterns_rejected: 0,
            queries: 5,
            matched: 3,
        }
    );

    let results: Vec<(String, bool)> = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| {
            let value: serde_json::Value = serde_json::from_str(line).unwrap();
            (
                value["result"].as_str().unwrap().to_string(),
                value["matched"].as_bool().unwrap(),
            )
        })
        .collect();

    assert_eq!(
        results,
        vec![
            ("*,x,y,z".to_string(), true),
            ("a,*,*".to_string(), true),
            ("NO MATCH".to_string(), false),
            ("NO MATCH".to_string(), false),
            ("foo,bar,baz".to_string(), true),
        ]
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // Property: the pipeline reports exactly what the matcher answers for each unique query
    #[test]
    fn prop_run_agrees_with_matcher(
        patterns in prop::collection::vec(pattern_strategy(4), 0..12),
        paths in prop::collection::vec(path_strategy(4), 0..24),
    ) {
        let mut config = WildpathConfig::default();
        config.report.header = false;
        config.matching.parallel_threshold = 4;

        let mut output = Vec::new();
        let summary = io::run(render(&patterns, &paths).as_bytes(), &mut output, &config).unwrap();

        let mut matcher = PatternMatcher::new();
        for pattern in &patterns {
            matcher.register(pattern).unwrap();
        }

        let mut expected = String::new();
        let mut seen = Vec::new();
        for path in &paths {
            if !seen.contains(path) {
                seen.push(path.clone());
                expected.push_str(&format!("{path} - {}\n", matcher.find_matching_pattern(path)));
            }
        }

        prop_assert_eq!(String::from_utf8(output).unwrap(), expected);
        prop_assert_eq!(summary.queries, seen.len());
        prop_assert_eq!(summary.patterns_registered, matcher.len());
    }
}
