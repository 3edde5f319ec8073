//! 설정 파일 생성/저장/정리 테스트.
use fuel_calculator::config::{load_or_default, Config, MAX_DECIMALS};

#[test]
fn missing_file_is_created_with_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    let cfg = load_or_default(&path).expect("load");
    assert_eq!(cfg, Config::default());
    assert!(path.exists());
}

#[test]
fn saved_settings_are_loaded_back() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    let cfg = Config {
        language: "en".into(),
        decimals: 4,
        ..Config::default()
    };
    cfg.save(&path).expect("save");
    assert_eq!(load_or_default(&path).expect("load"), cfg);
}

#[test]
fn partial_and_out_of_range_values_are_sanitized() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "decimals = 42\nwindow_alpha = 0.0\n").expect("write");
    let cfg = load_or_default(&path).expect("load");
    assert_eq!(cfg.decimals, MAX_DECIMALS);
    assert_eq!(cfg.window_alpha, 0.3);
    assert_eq!(cfg.language, "auto");
}

#[test]
fn malformed_file_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "decimals = \"two\"").expect("write");
    assert!(load_or_default(&path).is_err());
}
