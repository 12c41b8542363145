// 🌍 Language Catalog
// Closed list of the Dyen languages + longest-name-first matching
//
// Matching is plain substring search, so a name that occurs inside the
// word text itself would be misread. The Dyen data never does this; other
// datasets must satisfy the same precondition.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// The 95 language names used by the Dyen Indo-European list
pub const DYEN_LANGUAGES: [&str; 95] = [
    "NEW ENGLISH",
    "TAKITAKI",
    "WAZIRI",
    "ARMENIAN",
    "BRAZILIAN",
    "PORTUGUESE",
    "BULGARIAN",
    "UKRAINIAN",
    "BYELORUSSIAN",
    "EAST CZECH",
    "MOD ARMENIAN",
    "KHASKURA",
    "PANJABI",
    "HINDI",
    "BENGALI",
    "MARATHI",
    "PERSIAN",
    "ALBANIAN",
    "GUJARATI",
    "MACEDONIAN",
    "TADZIK",
    "ALBANIAN SG",
    "ALBANIAN C",
    "ALBANIAN K",
    "ALBANIAN T",
    "AFRIKAANS",
    "DUTCH",
    "DUTCH P",
    "FLEMISH",
    "FRISIAN",
    "FAROESE",
    "DANISH",
    "SWEDISH",
    "RIKSMAL NORWAY",
    "MOD ICELANDIC",
    "GERMAN",
    "BRETON ST",
    "BRETON SE",
    "BRETON",
    "WELSH C",
    "WELSH N",
    "EIRE",
    "IRISH",
    "FRENCH",
    "CREOLE DF",
    "WALLOON",
    "PROVENCAL",
    "SPANISH",
    "CATALAN",
    "ITALIAN",
    "SARDINIAN C",
    "LADIN",
    "RUMANIAN",
    "AFGHAN",
    "BALOCHI",
    "WAKHI",
    "LAHNDA",
    "NEPALI",
    "KASHMIRI",
    "SINGHALESE",
    "GREEK MOD",
    "GREEK ML",
    "GREEK K",
    "GREEK MD",
    "GREEK D",
    "LITHUANIAN",
    "LITHUANIAN X",
    "LATVIAN",
    "BULGARIAN P",
    "BYELORUSSIAN P",
    "CZECH",
    "CZECH P",
    "LUSATIAN LP",
    "LUSATIAN UP",
    "MACEDONIAN P",
    "POLISH",
    "POLISH P",
    "RUSSIAN",
    "RUSSIAN P",
    "SERBOCROATIAN",
    "SERBOCROATIAN P",
    "SLOVAK",
    "SLOVAK P",
    "SLOVENIAN",
    "SLOVENIAN P",
    "UKRAINIAN P",
    "CREOLE D",
    "OSSETIC",
    "SARDINIAN N",
    "SARDINIAN L",
    "ALBANIAN TOP",
    "VLACH",
    "GYPSY GK",
    "SWEDISH UP",
    "SWEDISH VL",
];

// ============================================================================
// MATCH RESULT
// ============================================================================

/// A data-row text split into its language and its word text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageMatch<'a> {
    pub language: &'a str,
    pub word_text: String,
}

// ============================================================================
// CATALOG
// ============================================================================

/// Fixed catalog of language names.
///
/// Names are kept longest first (ties keep catalog order) so that
/// "ALBANIAN TOP" is tried before "ALBANIAN".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct LanguageCatalog {
    names: Vec<String>,
}

impl LanguageCatalog {
    /// Catalog of the Dyen Indo-European languages
    pub fn dyen() -> Self {
        Self::from_names(DYEN_LANGUAGES.iter().map(|s| s.to_string()))
    }

    /// Build a catalog from arbitrary names (duplicates are dropped)
    pub fn from_names<I>(names: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for name in names {
            let name = name.trim().to_string();
            if !name.is_empty() && !unique.contains(&name) {
                unique.push(name);
            }
        }
        // Stable sort: equal lengths keep catalog order
        unique.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));
        LanguageCatalog { names: unique }
    }

    /// Load a catalog override from a JSON array of names
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read language catalog: {:?}", path.as_ref()))?;

        let names: Vec<String> = serde_json::from_str(&content)
            .context("Failed to parse language catalog JSON")?;

        if names.is_empty() {
            anyhow::bail!("Language catalog {:?} is empty", path.as_ref());
        }

        Ok(LanguageCatalog::from_names(names))
    }

    /// Split `text` into (language, remaining word text).
    ///
    /// The first name (longest first) contained anywhere in `text` wins;
    /// every occurrence of it is removed and the rest is trimmed.
    pub fn match_language(&self, text: &str) -> Option<LanguageMatch<'_>> {
        self.names
            .iter()
            .find(|name| text.contains(name.as_str()))
            .map(|name| LanguageMatch {
                language: name.as_str(),
                word_text: text.replace(name.as_str(), "").trim().to_string(),
            })
    }

    pub fn contains(&self, language: &str) -> bool {
        self.names.iter().any(|n| n == language)
    }

    /// Names in matching order (longest first)
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for LanguageCatalog {
    fn default() -> Self {
        Self::dyen()
    }
}

impl From<Vec<String>> for LanguageCatalog {
    fn from(names: Vec<String>) -> Self {
        LanguageCatalog::from_names(names)
    }
}

impl From<LanguageCatalog> for Vec<String> {
    fn from(catalog: LanguageCatalog) -> Self {
        catalog.names
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_dyen_catalog_size() {
        let catalog = LanguageCatalog::dyen();
        assert_eq!(catalog.len(), 95);
        assert!(catalog.contains("ALBANIAN TOP"));
        assert!(catalog.contains("GERMAN"));
        assert!(!catalog.contains("KLINGON"));
    }

    #[test]
    fn test_longest_name_wins() {
        let catalog = LanguageCatalog::dyen();
        let m = catalog.match_language("ALBANIAN TOP word1, word2").unwrap();
        assert_eq!(m.language, "ALBANIAN TOP");
        assert_eq!(m.word_text, "word1, word2");

        let m = catalog.match_language("ALBANIAN dora").unwrap();
        assert_eq!(m.language, "ALBANIAN");
        assert_eq!(m.word_text, "dora");
    }

    #[test]
    fn test_prefix_names_resolve_to_compound() {
        let catalog = LanguageCatalog::dyen();
        assert_eq!(catalog.match_language("SWEDISH VL hand").unwrap().language, "SWEDISH VL");
        assert_eq!(catalog.match_language("GREEK MOD xeri").unwrap().language, "GREEK MOD");
        assert_eq!(catalog.match_language("CZECH P ruka").unwrap().language, "CZECH P");
        assert_eq!(catalog.match_language("CZECH ruka").unwrap().language, "CZECH");
    }

    #[test]
    fn test_order_independent_of_input_order() {
        let catalog = LanguageCatalog::from_names(vec![
            "ALBANIAN".to_string(),
            "ALBANIAN TOP".to_string(),
        ]);
        assert_eq!(catalog.names()[0], "ALBANIAN TOP");
        assert_eq!(catalog.match_language("ALBANIAN TOP dore").unwrap().language, "ALBANIAN TOP");
    }

    #[test]
    fn test_language_only_row_has_empty_word_text() {
        let catalog = LanguageCatalog::dyen();
        let m = catalog.match_language("GERMAN").unwrap();
        assert_eq!(m.word_text, "");
    }

    #[test]
    fn test_no_match() {
        let catalog = LanguageCatalog::dyen();
        assert!(catalog.match_language("KLINGON qaH").is_none());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"["ENGLISH", "OLD ENGLISH", "ENGLISH"]"#).unwrap();

        let catalog = LanguageCatalog::from_file(file.path()).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.names()[0], "OLD ENGLISH");
    }

    #[test]
    fn test_from_file_rejects_empty() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[]").unwrap();
        assert!(LanguageCatalog::from_file(file.path()).is_err());
    }
}
