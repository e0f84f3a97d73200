use sorteio::settings::{NameGenSettings, Settings};
use std::time::Duration;
use tempfile::tempdir;

#[test]
fn missing_file_yields_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let s = Settings::load(path.to_str().unwrap()).unwrap();
    assert_eq!(s.roll_ticks, 30);
    assert_eq!(s.roll_interval(), Duration::from_millis(80));
    assert_eq!(s.confetti_particles, 150);
    assert_eq!(s.default_range, (1, 100));
    assert!(s.enable_toasts);
    assert!(!s.debug_logging);
    assert_eq!(s.name_gen, NameGenSettings::default());
}

#[test]
fn partial_file_fills_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(
        &path,
        r#"{ "roll_ticks": 12, "name_gen": { "count": 25, "topic": "frutas" } }"#,
    )
    .unwrap();
    let s = Settings::load(path.to_str().unwrap()).unwrap();
    assert_eq!(s.roll_ticks, 12);
    assert_eq!(s.roll_interval_ms, 80);
    assert_eq!(s.name_gen.count, 25);
    assert_eq!(s.name_gen.topic, "frutas");
    assert_eq!(s.name_gen.model, "gemini-2.5-flash");
    assert_eq!(s.name_gen.api_key_env, "GEMINI_API_KEY");
}

#[test]
fn invalid_json_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(Settings::load(path.to_str().unwrap()).is_err());
}

#[test]
fn save_then_load_round_trips() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let mut s = Settings::default();
    s.debug_logging = true;
    s.default_range = (-10, 10);
    s.confetti_seconds = None;
    s.name_gen.api_key = Some("secret".into());
    s.save(path.to_str().unwrap()).unwrap();

    let loaded = Settings::load(path.to_str().unwrap()).unwrap();
    assert!(loaded.debug_logging);
    assert_eq!(loaded.default_range, (-10, 10));
    assert_eq!(loaded.confetti_seconds, None);
    assert_eq!(loaded.confetti_lifetime(), None);
    assert_eq!(loaded.name_gen.api_key.as_deref(), Some("secret"));
}

#[test]
fn confetti_lifetime_ignores_non_positive_values() {
    let mut s = Settings::default();
    assert_eq!(s.confetti_lifetime(), Some(Duration::from_secs(8)));
    s.confetti_seconds = Some(0.0);
    assert_eq!(s.confetti_lifetime(), None);
    s.confetti_seconds = Some(-3.0);
    assert_eq!(s.confetti_lifetime(), None);
}

#[test]
fn api_key_prefers_settings_over_env() {
    let env_name = "SORTEIO_TEST_KEY_PRECEDENCE";
    std::env::set_var(env_name, "from-env");
    let mut ng = NameGenSettings {
        api_key_env: env_name.into(),
        ..Default::default()
    };
    assert_eq!(ng.resolve_api_key().as_deref(), Some("from-env"));
    ng.api_key = Some("from-file".into());
    assert_eq!(ng.resolve_api_key().as_deref(), Some("from-file"));
    std::env::remove_var(env_name);
}

#[test]
fn blank_api_key_counts_as_missing() {
    let ng = NameGenSettings {
        api_key: Some("   ".into()),
        api_key_env: "SORTEIO_TEST_KEY_UNSET".into(),
        ..Default::default()
    };
    assert_eq!(ng.resolve_api_key(), None);
}
