use std::io::Write;

use chrono::NaiveDate;
use property_wrappers::pages::{projected_value_page, wrapped_value_page};
use property_wrappers::{PlaygroundConfig, WrapperError};
use tempfile::{Builder, NamedTempFile};

fn write_config(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn loads_toml_by_extension() {
    let file = write_config(
        ".toml",
        r#"
        [exam]
        min = 50
        max = 60

        [review]
        ambiance = "✨"
        "#,
    );

    let config = PlaygroundConfig::load(file.path()).unwrap();
    assert_eq!((config.exam.min(), config.exam.max()), (50, 60));
    assert_eq!(config.review.ambiance.symbol(), "✨");

    let page = wrapped_value_page(&config);
    assert_eq!(page[4].lines, vec!["50"]);
}

#[test]
fn loads_json_by_extension() {
    let file = write_config(".json", r#"{"birth_date": {"format": "dd.MM.yyyy"}}"#);

    let config = PlaygroundConfig::load(file.path()).unwrap();
    let born = NaiveDate::from_ymd_opt(2021, 1, 5).unwrap();
    assert_eq!(projected_value_page(&config, born)[1].lines[0], "05.01.2021");
}

#[test]
fn sniffs_content_without_a_known_extension() {
    let json = write_config(".conf", r#"{"exam_ratio": {"min": 0.0, "max": 0.25}}"#);
    let config = PlaygroundConfig::load(json.path()).unwrap();
    assert_eq!(config.exam_ratio.max(), 0.25);

    let toml = write_config(".conf", "[exam_ratio]\nmin = 0.1\nmax = 0.2\n");
    let config = PlaygroundConfig::load(toml.path()).unwrap();
    assert_eq!(config.exam_ratio.min(), 0.1);
}

#[test]
fn invalid_policies_fail_the_load() {
    let file = write_config(".toml", "[birth_date]\nformat = \"yyyy QQ\"\n");
    let err = PlaygroundConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, WrapperError::Parse { .. }));
    assert!(err.to_string().contains("Unsupported field 'Q'"));
}

#[test]
fn malformed_json_reports_its_position() {
    let file = write_config(".json", "{\n  \"exam\": {\"min\": 1,\n    \"max\": }}");
    match PlaygroundConfig::load(file.path()).unwrap_err() {
        WrapperError::Parse { line, .. } => assert_eq!(line, 3),
        other => panic!("expected a parse error, got {other:?}"),
    }
}

#[test]
fn malformed_toml_reports_its_position() {
    let file = write_config(".toml", "[exam]\nmin = 10\nmax = = 80\n");
    match PlaygroundConfig::load(file.path()).unwrap_err() {
        WrapperError::Parse { line, col, .. } => {
            assert_eq!(line, 3);
            assert!(col > 1, "column {col} should point past the key");
        }
        other => panic!("expected a parse error, got {other:?}"),
    }
}

#[test]
fn shipped_sample_config_loads() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/playground.toml");
    let config = PlaygroundConfig::load(&path).unwrap();
    assert_eq!(config.birth_date.format.pattern(), "EEEE, MMM d, yyyy");
    assert_eq!(wrapped_value_page(&config)[5].lines, vec!["0.8"]);
}
