use janken_core::{Hand, RoundResult, DEFAULT_ROUNDS};
use janken_data::{builtin_i18n, load_game_config, load_i18n, I18nError};
use std::path::PathBuf;

fn assets_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("assets")
}

#[test]
fn loads_bundled_game_config() {
    let config = load_game_config(&assets_root()).expect("load config");
    assert_eq!(config.initial_rounds, DEFAULT_ROUNDS);
}

#[test]
fn loads_bundled_locales() {
    let i18n = load_i18n(&assets_root()).expect("load i18n");
    assert_eq!(i18n.default_locale(), "en");
    assert_eq!(i18n.language_name("ja"), Some("日本語"));
    assert_eq!(i18n.language_name("ko"), Some("한국어"));
    assert_eq!(i18n.translate("ja", "nav.home"), Ok("ホーム"));
    assert_eq!(i18n.translate("xx", "nav.home"), Ok("Home"));
    assert!(matches!(
        i18n.translate("ja", "nav.nowhere"),
        Err(I18nError::MissingKey { .. })
    ));
}

#[test]
fn disk_and_builtin_tables_agree() {
    let disk = load_i18n(&assets_root()).expect("load i18n");
    let builtin = builtin_i18n().expect("builtin");
    assert_eq!(disk.languages(), builtin.languages());
    for code in disk.languages().keys() {
        assert_eq!(
            disk.translate(code, "game.submit"),
            builtin.translate(code, "game.submit")
        );
    }
}

#[test]
fn every_game_label_is_translated() {
    let i18n = load_i18n(&assets_root()).expect("load i18n");
    let mut keys: Vec<&str> = Hand::ALL.iter().map(|hand| hand.label_key()).collect();
    keys.extend(
        [RoundResult::Win, RoundResult::Lose, RoundResult::Draw]
            .iter()
            .map(|result| result.label_key()),
    );
    for code in i18n.languages().keys() {
        for key in &keys {
            assert!(i18n.translate(code, key).is_ok(), "{code} lacks {key}");
        }
    }
    assert_eq!(i18n.translate("ja", Hand::Rock.label_key()), Ok("グー"));
    assert_eq!(i18n.translate("ko", RoundResult::Win.label_key()), Ok("이겼습니다!"));
}

#[test]
fn navigation_paths_round_trip_for_prefixed_locales() {
    let i18n = load_i18n(&assets_root()).expect("load i18n");
    assert_eq!(i18n.resolve_locale_from_path("https://x/ko/about"), "ko");
    assert_eq!(i18n.resolve_locale_from_path("https://x/about"), "en");
    assert_eq!(i18n.localize_path("/about", "en"), "/about");
    assert_eq!(i18n.localize_path("/about", "ja"), "/ja/about");
    for code in ["ja", "ko"] {
        let localized = i18n.localize_path("/blog/post", code);
        assert_eq!(i18n.resolve_locale_from_path(&localized), code);
        assert_eq!(i18n.strip_locale_prefix(&localized), "/blog/post");
    }
    let plain = i18n.localize_path("/blog/post", "en");
    assert_eq!(i18n.strip_locale_prefix(&plain), "/blog/post");
}
