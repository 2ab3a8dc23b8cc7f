use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use overview_config::loader::{CONFIG_JSON_VAR, CONFIG_PATH_VAR};
use overview_config::{
    CardSource, ConfigLoadError, ConfigSource, GalleryConfig, load_cards,
};
use overview_core::GallerySelectionController;
use tempfile::tempdir;

fn lookup_from(
    vars: &[(&str, String)],
) -> impl Fn(&str) -> Option<String> + use<> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect();
    move |name| vars.get(name).cloned()
}

#[test]
fn defaults_when_nothing_is_configured() {
    let dir = tempdir().expect("tempdir");
    let (config, source) =
        GalleryConfig::load_with(lookup_from(&[]), dir.path()).unwrap();
    assert_eq!(source, ConfigSource::Default);
    assert_eq!(config, GalleryConfig::default());
}

#[test]
fn env_path_wins_over_inline_json_and_default_files() {
    let dir = tempdir().expect("tempdir");
    let explicit = dir.path().join("custom.toml");
    fs::write(&explicit, "[labels]\nempty_gallery = \"Nothing here\"\n")
        .unwrap();
    fs::write(
        dir.path().join("overview.toml"),
        "[labels]\nempty_gallery = \"From default file\"\n",
    )
    .unwrap();

    let lookup = lookup_from(&[
        (CONFIG_PATH_VAR, explicit.display().to_string()),
        (
            CONFIG_JSON_VAR,
            r#"{"labels":{"empty_gallery":"inline"}}"#.to_string(),
        ),
    ]);
    let (config, source) = GalleryConfig::load_with(lookup, dir.path()).unwrap();
    assert_eq!(source, ConfigSource::EnvPath(explicit));
    assert_eq!(config.labels.empty_gallery, "Nothing here");
}

#[test]
fn inline_json_is_used_before_default_files() {
    let dir = tempdir().expect("tempdir");
    fs::write(dir.path().join("overview.json"), "{}").unwrap();

    let lookup = lookup_from(&[(
        CONFIG_JSON_VAR,
        r#"{"layout":{"screen_width":800.0}}"#.to_string(),
    )]);
    let (config, source) = GalleryConfig::load_with(lookup, dir.path()).unwrap();
    assert_eq!(source, ConfigSource::EnvInline);
    assert_eq!(config.layout.screen_width, 800.0);
}

#[test]
fn default_file_in_config_dir_is_found() {
    let dir = tempdir().expect("tempdir");
    fs::create_dir_all(dir.path().join("config")).unwrap();
    let path = dir.path().join("config/overview.json");
    fs::write(&path, r#"{"labels":{"standard_card":"Main"}}"#).unwrap();

    let (config, source) =
        GalleryConfig::load_with(lookup_from(&[]), dir.path()).unwrap();
    assert_eq!(source, ConfigSource::File(path));
    assert_eq!(config.labels.standard_card, "Main");
}

#[test]
fn broken_inline_json_reports_variable() {
    let dir = tempdir().expect("tempdir");
    let lookup = lookup_from(&[(CONFIG_JSON_VAR, "{not json".to_string())]);
    let err = GalleryConfig::load_with(lookup, dir.path()).unwrap_err();
    assert!(format!("{err:#}").contains(CONFIG_JSON_VAR));
}

#[test]
fn card_file_feeds_the_controller() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("cards.toml");
    fs::write(
        &path,
        r#"
[[cards]]
id = "travel"
owner_name = "Ada Lovelace"
number = "1111 2222 3333 4444"
image_url = "https://example.test/travel.jpg"
custom_name = "Travel"

[[cards]]
id = "gold"
owner_name = "Ada Lovelace"
number = "5555 6666 7777 8888"
type = "premium"
state = "disabled"
image_url = "https://example.test/gold.jpg"
"#,
    )
    .unwrap();

    let config = GalleryConfig {
        cards: CardSource::File(path),
        ..GalleryConfig::default()
    };
    let cards = config.load_cards().unwrap();
    assert_eq!(cards.len(), 2);
    assert!(cards[1].is_disabled());

    let gallery = GallerySelectionController::with_labels(
        cards,
        config.gallery_labels(),
    )
    .unwrap();
    assert_eq!(gallery.selected_card_id().unwrap().as_str(), "travel");
}

fn write_sibling_cards(dir: &std::path::Path) {
    let card = r#"{"id":"a","owner_name":"A","number":"1","image_url":"u"}"#;
    fs::write(dir.join("cards.json"), format!(r#"{{"cards":[{card}]}}"#))
        .unwrap();
}

#[test]
fn relative_card_file_resolves_next_to_config() {
    let dir = tempdir().expect("tempdir");
    write_sibling_cards(dir.path());
    let config_path = dir.path().join("gallery.toml");
    fs::write(&config_path, "cards = { file = \"cards.json\" }\n").unwrap();

    // The test process runs from the crate directory, not `dir`.
    let config = GalleryConfig::load_from_file(&config_path).unwrap();
    assert_eq!(config.cards, CardSource::File(dir.path().join("cards.json")));
    let cards = config.load_cards().unwrap();
    assert_eq!(cards[0].id().as_str(), "a");
}

#[test]
fn relative_card_file_from_env_path_and_default_file() {
    let config_dir = tempdir().expect("tempdir");
    write_sibling_cards(config_dir.path());
    let config_path = config_dir.path().join("gallery.json");
    fs::write(&config_path, r#"{"cards":{"file":"cards.json"}}"#).unwrap();

    let elsewhere = tempdir().expect("tempdir");
    let lookup =
        lookup_from(&[(CONFIG_PATH_VAR, config_path.display().to_string())]);
    let (config, _) =
        GalleryConfig::load_with(lookup, elsewhere.path()).unwrap();
    assert_eq!(config.load_cards().unwrap().len(), 1);

    let base = tempdir().expect("tempdir");
    let nested = base.path().join("config");
    fs::create_dir_all(&nested).unwrap();
    write_sibling_cards(&nested);
    fs::write(
        nested.join("overview.toml"),
        "cards = { file = \"cards.json\" }\n",
    )
    .unwrap();
    let (config, source) =
        GalleryConfig::load_with(lookup_from(&[]), base.path()).unwrap();
    assert_eq!(source, ConfigSource::File(nested.join("overview.toml")));
    assert_eq!(config.cards, CardSource::File(nested.join("cards.json")));
}

#[test]
fn inline_json_card_file_resolves_against_base_dir() {
    let dir = tempdir().expect("tempdir");
    write_sibling_cards(dir.path());
    let lookup = lookup_from(&[(
        CONFIG_JSON_VAR,
        r#"{"cards":{"file":"cards.json"}}"#.to_string(),
    )]);
    let (config, _) = GalleryConfig::load_with(lookup, dir.path()).unwrap();
    assert_eq!(config.load_cards().unwrap().len(), 1);
}

#[test]
fn card_file_with_duplicate_ids_is_rejected() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("cards.json");
    let card = r#"{"id":"1","owner_name":"A","number":"1","image_url":"u"}"#;
    fs::write(&path, format!(r#"{{"cards":[{card},{card}]}}"#)).unwrap();

    let err = load_cards(&path).unwrap_err();
    assert!(matches!(err, ConfigLoadError::InvalidCards { .. }));
}

#[test]
fn missing_card_file_is_an_io_error() {
    let err = load_cards(&PathBuf::from("/definitely/not/here.json"))
        .unwrap_err();
    assert!(matches!(err, ConfigLoadError::CardFileIo { .. }));
}

#[test]
fn sample_source_yields_three_cards() {
    let cards = GalleryConfig::default().load_cards().unwrap();
    assert_eq!(cards.len(), 3);
}
