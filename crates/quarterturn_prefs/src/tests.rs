use std::path::Path;

use pretty_assertions::assert_eq;

use super::*;

fn no_env() -> config::Environment {
    persist::env_source().source(Some(config::Map::new()))
}

fn load_file(path: &Path) -> Preferences {
    Preferences::load_with_env(Some(path), no_env())
}

#[test]
fn test_default_yaml_matches_defaults() {
    assert_eq!(*DEFAULT_PREFS, Preferences::default());
    assert_eq!(DEFAULT_PREFS.engine_config(), EngineConfig::default());
}

#[test]
fn test_partial_user_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.yaml");
    std::fs::write(&path, "timing:\n  turn_time_ms: 120\nqueue:\n  max_moves: 8\n").unwrap();

    let prefs = load_file(&path);
    assert_eq!(prefs.timing.turn_time_ms, 120);
    assert_eq!(prefs.timing.shuffle_turn_time_ms, 50);
    assert_eq!(prefs.queue.max_moves, 8);
    assert_eq!(prefs.queue.shuffle_length, 20);
    assert_eq!(prefs.animation.max_animations, 6);

    let config = prefs.engine_config();
    assert_eq!(config.max_moves, 8);
    assert_eq!(config.turn_times.normal, 120);
    assert_eq!(config.turn_times.shuffle, 50);
}

#[test]
fn test_bad_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.yaml");
    std::fs::write(&path, "timing:\n  turn_time_ms: fast\n").unwrap();
    assert_eq!(load_file(&path), Preferences::default());
}

#[test]
fn test_missing_explicit_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does_not_exist.yaml");
    assert_eq!(load_file(&path), Preferences::default());
}

#[test]
fn test_env_overrides_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.yaml");
    std::fs::write(&path, "timing:\n  turn_time_ms: 120\n").unwrap();

    let env: config::Map<String, String> = [
        ("QUARTERTURN_TIMING__TURN_TIME_MS", "90"),
        ("QUARTERTURN_ANIMATION__MAX_ANIMATIONS", "3"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_owned(), v.to_owned()))
    .collect();
    let prefs = Preferences::load_with_env(Some(&path), persist::env_source().source(Some(env)));
    assert_eq!(prefs.timing.turn_time_ms, 90);
    assert_eq!(prefs.animation.max_animations, 3);
    assert_eq!(prefs.queue, QueuePreferences::default());
}

#[test]
fn test_save_and_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("prefs.yaml");

    let mut prefs = Preferences::default();
    prefs.timing.shuffle_turn_time_ms = 10;
    prefs.queue.shuffle_length = 30;
    prefs.save(&path).unwrap();

    assert_eq!(load_file(&path), prefs);
}
