//! Loading configuration files from disk

use gatecall_common::{Language, TemplateKind};
use gatecall_config::{ConfigError, ConfigFormat, ConfigLoader};
use gatecall_speech::GenderPreference;
use std::fs;
use tempfile::TempDir;

fn write(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("Failed to write config file");
    path
}

#[test]
fn test_load_yaml_config() {
    let dir = TempDir::new().unwrap();
    let locales = dir.path().join("locales");
    fs::create_dir_all(&locales).unwrap();

    let yaml = format!(
        "announcement:\n  languages: [es, en]\n  default_template: group-call\n  locales_dir: {}\nspeech:\n  enabled: true\n  language: en\n  gender: female\n  rate: 0.9\n  pitch: 1.1\n  volume: 0.7\nlogging:\n  level: info\n",
        locales.display()
    );
    let path = write(&dir, "gatecall.yaml", &yaml);

    let config = ConfigLoader::load_config(&path).expect("Failed to load config");
    assert_eq!(config.announcement.languages, vec![Language::Spanish, Language::English]);
    assert_eq!(config.announcement.default_template, TemplateKind::GroupCall);
    assert_eq!(config.announcement.locales_dir.as_deref(), Some(locales.as_path()));
    assert!(config.speech.enabled);
    assert_eq!(config.speech.gender, GenderPreference::Female);
    assert!((config.speech.settings.volume - 0.7).abs() < f32::EPSILON);
}

#[test]
fn test_load_toml_config() {
    let dir = TempDir::new().unwrap();
    let toml = r#"
[announcement]
languages = ["pt"]
default_template = "cancelacion"

[speech]
language = "pt"
gender = "male"
rate = 1.5

[logging]
level = "debug"
json_format = true
"#;
    let path = write(&dir, "gatecall.toml", toml);

    let config = ConfigLoader::load_config(&path).expect("Failed to load config");
    assert_eq!(config.announcement.languages, vec![Language::Portuguese]);
    assert_eq!(config.announcement.default_template, TemplateKind::Cancellation);
    assert_eq!(config.speech.language, Language::Portuguese);
    assert!((config.speech.settings.rate - 1.5).abs() < f32::EPSILON);
    assert!(config.logging.json_format);
}

#[test]
fn test_empty_file_is_all_defaults() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "gatecall.toml", "");

    let config = ConfigLoader::load_config(&path).expect("Failed to load config");
    assert_eq!(config.announcement.languages, Language::ALL.to_vec());
}

#[test]
fn test_invalid_yaml() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "gatecall.yml", "announcement:\n  languages: [unclosed");

    let result = ConfigLoader::load_config(&path);
    assert!(matches!(result.unwrap_err(), ConfigError::ParseError(_)));
}

#[test]
fn test_invalid_toml() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "gatecall.toml", "[speech\nrate = ");

    let result = ConfigLoader::load_config(&path);
    assert!(matches!(result.unwrap_err(), ConfigError::TomlError(_)));
}

#[test]
fn test_unknown_language_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "gatecall.yaml", "announcement:\n  languages: [fr]\n");

    assert!(matches!(
        ConfigLoader::load_config(&path).unwrap_err(),
        ConfigError::ParseError(_)
    ));
}

#[test]
fn test_validation_error() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "gatecall.yaml", "speech:\n  volume: 4.0\n");

    let result = ConfigLoader::load_config(&path);
    assert!(matches!(result.unwrap_err(), ConfigError::ValidationError(_)));
}

#[test]
fn test_unsupported_extension() {
    let dir = TempDir::new().unwrap();
    let path = write(&dir, "gatecall.json", "{}");

    assert!(matches!(
        ConfigLoader::load_config(&path).unwrap_err(),
        ConfigError::UnsupportedFormat(_)
    ));
}

#[test]
fn test_parse_without_validation() {
    let config = ConfigLoader::parse("speech:\n  volume: 4.0\n", ConfigFormat::Yaml).unwrap();
    assert!(config.validate_all().is_err());
}
