//! Static configuration: the enumerated codepage list.
//!
//! The list is the sole source of truth for which codepages get a compiled
//! table. It is an array of tables rather than a map because emission order
//! must be deterministic for regeneration to be reproducible.

use serde::Deserialize;
use std::path::Path;

/// One `[[codepage]]` entry from `codepages.toml`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct CodepageConfig {
    /// Exact runtime lookup key, e.g. "ISO-8859-2". Case sensitive, and
    /// must be a name the conversion backend recognizes.
    pub name: String,
    /// Human readable description, carried into the generated module
    /// unchanged.
    pub comment: String,
}

/// The ordered codepage list loaded from TOML.
#[derive(Debug, Deserialize)]
pub struct CodepageSet {
    /// The codepages to compile, in emission order
    #[serde(rename = "codepage")]
    pub codepages: Vec<CodepageConfig>,
}

impl CodepageSet {
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the built-in list the committed tables were generated from.
    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../../codepages.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Loads a codepage list from a custom file path.
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    pub fn get(&self, name: &str) -> Option<&CodepageConfig> {
        self.codepages.iter().find(|cp| cp.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_list() {
        let set = CodepageSet::load_default().unwrap();
        assert_eq!(set.codepages.len(), 6);
        assert!(set.get("CP1252").is_some());
        assert!(set.get("ISO-8859-15").is_some());
    }

    #[test]
    fn test_default_list_order() {
        // Emission order is part of the artifact contract.
        let set = CodepageSet::load_default().unwrap();
        assert_eq!(set.codepages[0].name, "CP437");
        assert_eq!(set.codepages[5].name, "ISO-8859-15");
    }

    #[test]
    fn test_comments_are_present() {
        let set = CodepageSet::load_default().unwrap();
        assert!(set.codepages.iter().all(|cp| !cp.comment.is_empty()));
        assert_eq!(
            set.get("CP437").unwrap().comment,
            "Character set of original IBM PC"
        );
    }

    #[test]
    fn test_names_keep_original_spelling() {
        let set = CodepageSet::load_default().unwrap();
        // Lookup keys are never laundered.
        assert!(set.get("ISO-8859-2").is_some());
        assert!(set.get("ISO_8859_2").is_none());
    }

    #[test]
    fn test_from_toml_string() {
        let set = CodepageSet::from_toml(
            r#"
[[codepage]]
name = "CP850"
comment = "Western Europe DOS"
"#,
        )
        .unwrap();
        assert_eq!(set.codepages.len(), 1);
        assert_eq!(set.get("CP850").unwrap().comment, "Western Europe DOS");
    }
}
