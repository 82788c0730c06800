// tests/config_test.rs
use release_tree::classifier::ScorePredicate;
use release_tree::config::{load_config, Config, LogFormat, ReleaseOrder, CONFIG_FILE_NAME};
use release_tree::domain::SentimentLabel;
use release_tree::SentimentClassifier;
use serial_test::serial;
use std::io::Write;
use tempfile::{NamedTempFile, TempDir};

#[test]
fn test_load_default_config() {
    let config = Config::default();
    assert_eq!(config.layout.base, 2.5);
    assert_eq!(config.layout.step, 2.0);
    assert_eq!(config.layout.horizontal_reach, 5.0);
    assert_eq!(config.layout.order, ReleaseOrder::FirstAppearance);
    assert_eq!(config.input.release_column, "Release Version");
    assert_eq!(config.logging.format, LogFormat::Pretty);
}

#[test]
fn test_default_keywords() {
    let config = Config::default();
    let positive = &config.classifier.rules[0];
    assert!(positive.keywords.contains(&"useful".to_string()));
    assert_eq!(positive.score, Some(ScorePredicate::AtLeast(4.0)));

    let negative = &config.classifier.rules[1];
    assert!(negative.keywords.contains(&"terrible".to_string()));
    assert_eq!(negative.score, Some(ScorePredicate::AtMost(2.0)));
}

#[test]
fn test_load_from_file() {
    let mut temp_file = NamedTempFile::new().unwrap();
    let toml_content = r#"
[layout]
horizontal_reach = 4.5

[input]
content_column = "review"
"#;
    temp_file.write_all(toml_content.as_bytes()).unwrap();
    temp_file.flush().unwrap();

    let config = load_config(Some(temp_file.path().to_str().unwrap())).unwrap();
    assert_eq!(config.layout.horizontal_reach, 4.5);
    assert_eq!(config.layout.step, 2.0);
    assert_eq!(config.input.content_column, "review");
    assert_eq!(config.input.score_column, "score");
}

#[test]
#[serial]
fn test_custom_rules_fixture() {
    let config = load_config(Some("tests/fixtures/custom_rules.toml"))
        .expect("Failed to load test config");

    assert_eq!(config.classifier.rules.len(), 2);
    assert_eq!(config.classifier.rules[0].label, SentimentLabel::Negative);
    assert_eq!(config.layout.order, ReleaseOrder::Version);
    assert_eq!(config.scene.title, "Webex Tree of Releases");
    assert_eq!(config.scene.timeline.len(), 1);
    assert_eq!(config.logging.format, LogFormat::Json);

    let classifier = SentimentClassifier::new(&config.classifier);
    // Negative rule now runs first
    assert_eq!(
        classifier.classify("great but it crashes", Some(5.0)),
        SentimentLabel::Negative
    );
    assert_eq!(classifier.classify("", Some(4.0)), SentimentLabel::Neutral);
}

#[test]
fn test_invalid_toml_is_error() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(b"[layout\nstep = 2").unwrap();
    temp_file.flush().unwrap();

    assert!(load_config(Some(temp_file.path().to_str().unwrap())).is_err());
}

#[test]
#[serial]
fn test_missing_custom_file_is_error() {
    assert!(load_config(Some("tests/fixtures/does_not_exist.toml")).is_err());
}

#[test]
#[serial]
fn test_discovers_local_config_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join(CONFIG_FILE_NAME),
        "[layout]\nbase = 7.0\n",
    )
    .unwrap();

    let previous = std::env::current_dir().unwrap();
    std::env::set_current_dir(dir.path()).unwrap();
    let config = load_config(None);
    std::env::set_current_dir(previous).unwrap();

    assert_eq!(config.unwrap().layout.base, 7.0);
}
