use std::path::PathBuf;

use super::*;
use crate::algorithm::AlgorithmId;

#[test]
fn test_default_settings() {
    let settings = Settings::default();
    assert_eq!(settings.algorithm, Selection::Single(AlgorithmId::Kmp));
    assert!(!settings.ignore_case);
    assert_eq!(settings.text, "abababcabababcabcabc");
    assert_eq!(settings.patterns, "ababc");
    assert_eq!(settings.playback.interval, Duration::from_millis(500));
    assert_eq!(settings.output.format, OutputFormat::Text);
    assert!(!settings.output.trace);
}

#[test]
fn test_load_without_user_file() {
    assert_eq!(Settings::load(None).unwrap(), Settings::default());
}

#[test]
fn test_load_missing_user_file() {
    let path = PathBuf::from("etc/examples/does-not-exist.yaml");
    assert_eq!(Settings::load(Some(path.as_path())).unwrap(), Settings::default());
}

#[test]
fn test_load_user_file() {
    let settings = Settings::load(Some(Path::new("etc/examples/config-benchmark.yaml"))).unwrap();
    assert_eq!(settings.algorithm, Selection::All);
    assert!(settings.ignore_case);
    assert_eq!(settings.patterns, "ab, abc, ababc");
    assert_eq!(settings.text, "abababcabababcabcabc");
    assert_eq!(settings.playback.interval, Duration::from_millis(1250));
    assert_eq!(settings.output.format, OutputFormat::Json);
    assert!(!settings.output.trace);
}
