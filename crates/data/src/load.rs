use crate::i18n::I18n;
use crate::schema::{GameConfig, LocaleManifest, LocaleTable, StringTable};
use anyhow::Context;
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

const GAME_CONFIG_FILE: &str = "game.json";
const I18N_DIR: &str = "i18n";
const LANGUAGES_FILE: &str = "languages.json";

const BUILTIN_LANGUAGES: &str = include_str!("../../../assets/i18n/languages.json");
const BUILTIN_TABLES: &[(&str, &str)] = &[
    ("en", include_str!("../../../assets/i18n/en.json")),
    ("ja", include_str!("../../../assets/i18n/ja.json")),
    ("ko", include_str!("../../../assets/i18n/ko.json")),
];

/// Reads `game.json` from `dir`; a missing file yields the default config.
pub fn load_game_config(dir: &Path) -> anyhow::Result<GameConfig> {
    let path = dir.join(GAME_CONFIG_FILE);
    let config = if path.exists() {
        load_json(&path)?
    } else {
        log::debug!("{} not found, using default config", path.display());
        GameConfig::default()
    };
    config
        .validate()
        .with_context(|| format!("validate {}", path.display()))?;
    Ok(config)
}

/// Loads the language manifest and one string table per listed locale.
pub fn load_i18n(dir: &Path) -> anyhow::Result<I18n> {
    let root = dir.join(I18N_DIR);
    let manifest: LocaleManifest = load_json(root.join(LANGUAGES_FILE))?;
    let mut table = LocaleTable::new();
    for code in manifest.languages.keys() {
        let strings: StringTable = load_json(root.join(format!("{code}.json")))?;
        table.insert(code.clone(), strings);
    }
    let i18n = I18n::new(manifest, table).with_context(|| format!("validate {}", root.display()))?;
    log::info!(
        "loaded {} locales from {} (default {})",
        i18n.languages().len(),
        root.display(),
        i18n.default_locale()
    );
    Ok(i18n)
}

/// String tables compiled into the binary.
pub fn builtin_i18n() -> anyhow::Result<I18n> {
    let manifest: LocaleManifest =
        serde_json::from_str(BUILTIN_LANGUAGES).context("parse builtin languages")?;
    let mut table = LocaleTable::new();
    for (code, raw) in BUILTIN_TABLES {
        let strings: StringTable = serde_json::from_str(raw)
            .with_context(|| format!("parse builtin strings for {code}"))?;
        table.insert(code.to_string(), strings);
    }
    let i18n = I18n::new(manifest, table).context("validate builtin strings")?;
    Ok(i18n)
}

/// Prefers tables on disk and falls back to the compiled-in copy.
pub fn load_i18n_or_builtin(dir: &Path) -> anyhow::Result<I18n> {
    if dir.join(I18N_DIR).is_dir() {
        return load_i18n(dir);
    }
    log::warn!(
        "{} has no {} directory, using builtin strings",
        dir.display(),
        I18N_DIR
    );
    builtin_i18n()
}

fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value = serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(value)
}
