use crate::schema::{LocaleManifest, LocaleTable};
use std::collections::BTreeMap;
use thiserror::Error;
use url::Url;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum I18nError {
    #[error("missing translation for '{key}' in '{locale}' and the default locale")]
    MissingKey { locale: String, key: String },
    #[error("default locale '{0}' has no string table")]
    MissingDefaultLocale(String),
    #[error("locale '{0}' is not paired with both a language entry and a string table")]
    UnknownLocale(String),
}

/// Read-only string lookup with a single fallback to the default locale.
#[derive(Debug, Clone)]
pub struct I18n {
    default_locale: String,
    languages: BTreeMap<String, String>,
    table: LocaleTable,
}

impl I18n {
    pub fn new(manifest: LocaleManifest, table: LocaleTable) -> Result<Self, I18nError> {
        if !table.contains_key(&manifest.default_locale) {
            return Err(I18nError::MissingDefaultLocale(manifest.default_locale));
        }
        if let Some(code) = manifest
            .languages
            .keys()
            .find(|code| !table.contains_key(*code))
        {
            return Err(I18nError::UnknownLocale(code.clone()));
        }
        if let Some(code) = table
            .keys()
            .find(|code| !manifest.languages.contains_key(*code))
        {
            return Err(I18nError::UnknownLocale(code.clone()));
        }
        Ok(Self {
            default_locale: manifest.default_locale,
            languages: manifest.languages,
            table,
        })
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    pub fn languages(&self) -> &BTreeMap<String, String> {
        &self.languages
    }

    pub fn language_name(&self, locale: &str) -> Option<&str> {
        self.languages.get(locale).map(String::as_str)
    }

    pub fn is_supported(&self, locale: &str) -> bool {
        self.table.contains_key(locale)
    }

    /// Normalizes `raw` and returns it when supported, else the default locale.
    pub fn locale_or_default(&self, raw: Option<&str>) -> &str {
        let normalized = normalize_locale(raw.unwrap_or_default());
        match self.table.get_key_value(normalized.as_str()) {
            Some((code, _)) => code.as_str(),
            None => self.default_locale.as_str(),
        }
    }

    /// Next supported locale after `current`, wrapping around.
    pub fn next_locale(&self, current: &str) -> &str {
        let first = self
            .table
            .keys()
            .next()
            .map(String::as_str)
            .unwrap_or(self.default_locale.as_str());
        self.table
            .keys()
            .skip_while(|code| code.as_str() != current)
            .nth(1)
            .map(String::as_str)
            .unwrap_or(first)
    }

    pub fn translate(&self, locale: &str, key: &str) -> Result<&str, I18nError> {
        self.table
            .get(locale)
            .and_then(|strings| strings.get(key))
            .filter(|value| !value.is_empty())
            .or_else(|| {
                self.table
                    .get(&self.default_locale)
                    .and_then(|strings| strings.get(key))
            })
            .map(String::as_str)
            .ok_or_else(|| I18nError::MissingKey {
                locale: locale.to_string(),
                key: key.to_string(),
            })
    }

    /// Like [`I18n::translate`], but surfaces the raw key when nothing matches.
    pub fn translate_or_key<'a>(&'a self, locale: &str, key: &'a str) -> &'a str {
        self.translate(locale, key).unwrap_or(key)
    }

    /// Binds a locale so callers can look up keys with a single argument.
    pub fn translator<'a>(&'a self, locale: &'a str) -> impl Fn(&'a str) -> &'a str + 'a {
        move |key| self.translate_or_key(locale, key)
    }

    /// Locale named by the first non-empty path segment, or the default.
    ///
    /// Absolute URLs are accepted too; only their path is inspected.
    pub fn resolve_locale_from_path(&self, path: &str) -> &str {
        match Url::parse(path) {
            Ok(url) if url.has_host() => self.resolve_locale_from_url(&url),
            _ => self.locale_in_path(path),
        }
    }

    pub fn resolve_locale_from_url(&self, url: &Url) -> &str {
        self.locale_in_path(url.path())
    }

    fn locale_in_path(&self, path: &str) -> &str {
        path.split('/')
            .find(|segment| !segment.is_empty())
            .and_then(|segment| self.table.get_key_value(segment))
            .map(|(code, _)| code.as_str())
            .unwrap_or(self.default_locale.as_str())
    }

    /// Prefixes `path` with `/{locale}` unless `locale` is the default.
    ///
    /// The locale is used as given; pass it through [`I18n::locale_or_default`]
    /// first to keep links on supported locales.
    pub fn localize_path(&self, path: &str, locale: &str) -> String {
        let clean = path.strip_prefix('/').unwrap_or(path);
        if locale == self.default_locale {
            format!("/{clean}")
        } else {
            format!("/{locale}/{clean}")
        }
    }

    /// Drops a leading locale segment; other paths come back unchanged.
    pub fn strip_locale_prefix(&self, path: &str) -> String {
        let segments: Vec<&str> = path.split('/').filter(|segment| !segment.is_empty()).collect();
        match segments.split_first() {
            Some((first, rest)) if self.is_supported(first) => format!("/{}", rest.join("/")),
            _ => path.to_string(),
        }
    }
}

/// Lowercases, maps `_` to `-` and keeps the primary language subtag.
pub fn normalize_locale(raw: &str) -> String {
    let lowered = raw.trim().replace('_', "-").to_ascii_lowercase();
    lowered.split('-').next().unwrap_or_default().to_string()
}
