use std::fs;

use tempfile::TempDir;

use duck_hunt::config::Config;
use duck_hunt::textures::TextureStyle;

#[test]
fn missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load(&dir.path().join("nope.json"));
    assert_eq!(config, Config::default());
    assert_eq!(config.high_score, 0);
    assert!(config.use_remake_textures);
}

#[test]
fn malformed_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, "{ high score: lots").unwrap();
    assert_eq!(Config::load(&path), Config::default());
}

#[test]
fn partial_file_fills_in_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{ "highScore": 48200 }"#).unwrap();
    let config = Config::load(&path);
    assert_eq!(config.high_score, 48_200);
    assert!(config.use_remake_textures);
}

#[test]
fn save_then_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.json");
    let config = Config {
        high_score: 31_500,
        use_remake_textures: false,
    };
    config.save(&path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("\"highScore\": 31500"));
    assert!(text.contains("\"useRemakeTextures\": false"));
    assert_eq!(Config::load(&path), config);
}

#[test]
fn record_score_keeps_the_best() {
    let mut config = Config::default();
    assert!(config.record_score(1500));
    assert!(!config.record_score(800));
    assert!(!config.record_score(1500));
    assert_eq!(config.high_score, 1500);
    assert!(config.record_score(1501));
    assert_eq!(config.high_score, 1501);
}

#[test]
fn texture_style_follows_flag() {
    let mut config = Config::default();
    assert_eq!(config.texture_style(), TextureStyle::Remake);
    config.use_remake_textures = false;
    assert_eq!(config.texture_style(), TextureStyle::Classic);
}
