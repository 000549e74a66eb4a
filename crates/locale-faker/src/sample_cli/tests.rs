//! Unit tests for the sample CLI helpers.

use camino::Utf8PathBuf;
use cap_std::{ambient_authority, fs::Dir};
use rstest::{fixture, rstest};
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;

const CHINA_CONFIG: &str = r#"{
    "version": 1,
    "languages": ["simplifiedChinese"],
    "regions": ["china"],
    "cardTypes": ["unionPay"],
    "emailDomains": ["example.cn"],
    "count": 4
}"#;

struct ConfigFixture {
    path: Utf8PathBuf,
}

impl Drop for ConfigFixture {
    fn drop(&mut self) {
        if let Ok(root) = Dir::open_ambient_dir(".", ambient_authority()) {
            drop(root.remove_file(&self.path));
        }
    }
}

#[fixture]
fn config_fixture() -> ConfigFixture {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let counter = COUNTER.fetch_add(1, Ordering::Relaxed);
    let dir = Utf8PathBuf::from("target").join("sample-cli-tests");
    let root = Dir::open_ambient_dir(".", ambient_authority()).expect("open working dir");
    root.create_dir_all(&dir).expect("create temp dir");
    let path = dir.join(format!("config-{}-{counter}.json", std::process::id()));
    root.write(&path, CHINA_CONFIG).expect("write config");
    ConfigFixture { path }
}

fn options_from(args: &[&str]) -> Options {
    let outcome =
        parse_args(args.iter().map(|arg| (*arg).to_owned())).expect("parse args");
    let ParseOutcome::Options(options) = outcome else {
        panic!("expected options");
    };
    options
}

#[rstest]
#[case("--help")]
#[case("-h")]
fn parse_args_returns_help_for_help_flag(#[case] flag: &str) {
    let outcome = parse_args(vec![flag.to_owned()].into_iter()).expect("parse args");

    assert_eq!(outcome, ParseOutcome::Help);
}

#[test]
fn parse_args_defaults_to_one_person() {
    let options = options_from(&[]);

    assert_eq!(options.kind(), RecordKind::Person);
    assert_eq!(options.config_path(), None);
    assert_eq!(options.count(), None);
    assert_eq!(options.seed(), None);
}

#[rstest]
#[case("--config")]
#[case("--kind")]
#[case("--count")]
#[case("--seed")]
fn parse_args_reports_missing_value(#[case] flag: &'static str) {
    let err = parse_args(vec![flag.to_owned()].into_iter()).expect_err("expected error");

    assert_eq!(err, CliError::MissingValue { flag });
}

#[test]
fn parse_args_reports_unknown_arguments() {
    let args = vec!["--kind".to_owned(), "file".to_owned(), "--nope".to_owned()];

    let err = parse_args(args.into_iter()).expect_err("expected error");

    assert_eq!(
        err,
        CliError::UnknownArgument {
            value: "--nope".to_owned(),
        }
    );
}

#[test]
fn parse_args_reports_unknown_kinds() {
    let args = vec!["--kind".to_owned(), "planet".to_owned()];

    let err = parse_args(args.into_iter()).expect_err("expected error");

    assert_eq!(
        err,
        CliError::UnknownKind {
            value: "planet".to_owned(),
        }
    );
}

#[test]
fn parse_args_reports_invalid_numbers() {
    let args = vec!["--count".to_owned(), "-3".to_owned()];

    let err = parse_args(args.into_iter()).expect_err("expected error");

    let CliError::InvalidNumber { flag, value, .. } = err else {
        panic!("expected invalid number error");
    };
    assert_eq!(flag, "--count");
    assert_eq!(value, "-3");
}

#[test]
fn parse_args_parses_full_options() {
    let options = options_from(&[
        "--config", "sample.json", "--kind", "location", "--count", "12", "--seed", "2026",
    ]);

    assert_eq!(options.config_path(), Some(camino::Utf8Path::new("sample.json")));
    assert_eq!(options.kind(), RecordKind::Location);
    assert_eq!(options.count(), Some(12));
    assert_eq!(options.seed(), Some(2026));
}

#[rstest]
#[case(RecordKind::Person)]
#[case(RecordKind::Company)]
#[case(RecordKind::Location)]
#[case(RecordKind::File)]
#[case(RecordKind::Card)]
fn kinds_round_trip_through_their_names(#[case] kind: RecordKind) {
    assert_eq!(kind.to_string().parse::<RecordKind>(), Ok(kind));
}

#[rstest]
#[case("person")]
#[case("company")]
#[case("location")]
#[case("file")]
#[case("card")]
fn run_sample_prints_tagged_json_lines(#[case] kind: &str) {
    let options = options_from(&["--kind", kind, "--count", "3"]);

    let lines = run_sample(&options).expect("generate");

    assert_eq!(lines.len(), 3);
    for line in &lines {
        let record: serde_json::Value = serde_json::from_str(line).expect("json line");
        assert_eq!(record["kind"], kind);
    }
}

#[test]
fn seeded_runs_repeat() {
    let options = options_from(&["--kind", "person", "--count", "5", "--seed", "42"]);

    let first = run_sample(&options).expect("generate");
    let second = run_sample(&options).expect("generate");

    assert_eq!(first, second);
}

#[rstest]
#[case("0", 0)]
#[case("1001", 1_001)]
fn run_sample_rejects_counts_out_of_range(#[case] count: &str, #[case] actual: usize) {
    let options = options_from(&["--count", count]);

    let err = run_sample(&options).expect_err("count out of range");

    assert_eq!(
        err,
        CliError::Config {
            source: ConfigError::CountOutOfRange {
                min: 1,
                max: 1_000,
                actual,
            },
        }
    );
}

#[rstest]
fn run_sample_reads_the_config_file(config_fixture: ConfigFixture) {
    let options = options_from(&["--config", config_fixture.path.as_str(), "--kind", "card"]);

    let lines = run_sample(&options).expect("generate");

    assert_eq!(lines.len(), 4);
    for line in &lines {
        let record: serde_json::Value = serde_json::from_str(line).expect("json line");
        assert_eq!(record["network"], "unionPay");
        assert_eq!(record["language"], "simplifiedChinese");
    }
}

#[rstest]
fn count_flag_overrides_the_config(config_fixture: ConfigFixture) {
    let options = options_from(&[
        "--config",
        config_fixture.path.as_str(),
        "--kind",
        "location",
        "--count",
        "2",
    ]);

    let lines = run_sample(&options).expect("generate");

    assert_eq!(lines.len(), 2);
    assert!(lines.iter().all(|line| line.contains("\"region\":\"china\"")));
}

#[test]
fn missing_config_files_are_io_errors() {
    let options = options_from(&["--config", "target/sample-cli-tests/absent.json"]);

    let err = run_sample(&options).expect_err("missing file");

    assert!(matches!(
        err,
        CliError::Config {
            source: ConfigError::IoError { .. }
        }
    ));
}
