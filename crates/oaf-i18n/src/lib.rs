pub mod error;

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use indexmap::IndexMap;
use serde::Deserialize;

pub use error::LocalizationError;

/// Multi-document file of `language -> {source text -> translation}`.
pub const DEFAULT_TRANSLATIONS_PATH: &str = "superset/translations/translations.yaml";

/// Flat `key -> text` mapping for the example datasets.
pub const DEFAULT_DATASET_STRINGS_PATH: &str = "superset/translations/dataset_strings.yaml";

type Catalogue = IndexMap<String, String>;

/// Loaded translation catalogues.
#[derive(Debug, Clone, Default)]
pub struct Translations {
    languages: IndexMap<String, Catalogue>,
    dataset_strings: Catalogue,
}

impl Translations {
    /// Load both files. Documents in the translations file are merged in
    /// order, so later documents extend and override earlier ones.
    pub fn load(translations: &Path, dataset_strings: &Path) -> Result<Self, LocalizationError> {
        Ok(Self {
            languages: load_languages(translations)?,
            dataset_strings: load_dataset_strings(dataset_strings)?,
        })
    }

    /// The translation of `text`, or `text` itself when there is none.
    pub fn get<'a>(&'a self, text: &'a str, language: &str) -> &'a str {
        self.languages
            .get(language)
            .and_then(|catalogue| catalogue.get(text))
            .map_or(text, String::as_str)
    }

    pub fn dataset_string(&self, key: &str) -> Option<&str> {
        self.dataset_strings.get(key).map(String::as_str)
    }

    /// Languages in the order they first appear in the translations file.
    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.languages.keys().map(String::as_str)
    }
}

fn read(path: &Path) -> Result<String, LocalizationError> {
    fs::read_to_string(path).map_err(|source| LocalizationError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn load_languages(path: &Path) -> Result<IndexMap<String, Catalogue>, LocalizationError> {
    let content = read(path)?;
    let parse_error = |source| LocalizationError::Parse {
        path: path.to_path_buf(),
        source,
    };

    let mut languages: IndexMap<String, Catalogue> = IndexMap::new();
    for document in serde_yaml_ng::Deserializer::from_str(&content) {
        let part: Option<IndexMap<String, Catalogue>> =
            Option::deserialize(document).map_err(parse_error)?;
        for (language, entries) in part.into_iter().flatten() {
            languages.entry(language).or_default().extend(entries);
        }
    }
    Ok(languages)
}

fn load_dataset_strings(path: &Path) -> Result<Catalogue, LocalizationError> {
    let content = read(path)?;
    let strings: Option<Catalogue> =
        serde_yaml_ng::from_str(&content).map_err(|source| LocalizationError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(strings.unwrap_or_default())
}

static TRANSLATIONS: LazyLock<Translations> = LazyLock::new(|| {
    Translations::load(
        Path::new(DEFAULT_TRANSLATIONS_PATH),
        Path::new(DEFAULT_DATASET_STRINGS_PATH),
    )
    .unwrap_or_else(|e| {
        log::warn!("translations unavailable, falling back to source text: {e}");
        Translations::default()
    })
});

/// Process-wide lookup against the default translation files, loaded on
/// first use.
pub fn get_translation(text: &str, language: &str) -> String {
    TRANSLATIONS.get(text, language).to_string()
}

pub fn dataset_string(key: &str) -> Option<&'static str> {
    TRANSLATIONS.dataset_string(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translations() -> Translations {
        let mut languages = IndexMap::new();
        languages.insert(
            "fr".to_string(),
            Catalogue::from([("Charts".to_string(), "Graphiques".to_string())]),
        );
        Translations {
            languages,
            dataset_strings: Catalogue::from([("birth_names".to_string(), "Names".to_string())]),
        }
    }

    #[test]
    fn test_get_falls_back_to_source_text() {
        let t = translations();
        assert_eq!(t.get("Charts", "fr"), "Graphiques");
        assert_eq!(t.get("Dashboards", "fr"), "Dashboards");
        assert_eq!(t.get("Charts", "de"), "Charts");
    }

    #[test]
    fn test_dataset_string() {
        let t = translations();
        assert_eq!(t.dataset_string("birth_names"), Some("Names"));
        assert_eq!(t.dataset_string("energy"), None);
    }

    #[test]
    fn test_empty_catalogue() {
        let t = Translations::default();
        assert_eq!(t.get("Charts", "fr"), "Charts");
        assert_eq!(t.languages().count(), 0);
    }
}
