//! Breed value object

use crate::core::string::capitalize_words;
use serde::{Deserialize, Serialize};

/// A breed or sub-breed from the remote catalog (Value Object)
///
/// `parent` is the lower-case taxonomy key (e.g. `"bulldog"`). For
/// sub-breeds, `sub_name` holds the sub-breed key (e.g. `"french"`).
/// An empty sub-name is normalized to `None` on construction, so two
/// breeds compare equal iff their parent and sub-name are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "BreedRecord")]
pub struct Breed {
    parent: String,
    sub_name: Option<String>,
}

impl Breed {
    /// Create a top-level breed
    pub fn new(parent: impl Into<String>) -> Self {
        Self {
            parent: parent.into(),
            sub_name: None,
        }
    }

    /// Create a sub-breed. An empty `sub_name` yields a top-level breed.
    pub fn with_sub_breed(parent: impl Into<String>, sub_name: impl Into<String>) -> Self {
        Self::from_parts(parent, Some(sub_name.into()))
    }

    /// Create a breed from its raw parts
    pub fn from_parts(parent: impl Into<String>, sub_name: Option<String>) -> Self {
        Self {
            parent: parent.into(),
            sub_name: sub_name.filter(|s| !s.is_empty()),
        }
    }

    pub fn parent(&self) -> &str {
        &self.parent
    }

    pub fn sub_name(&self) -> Option<&str> {
        self.sub_name.as_deref()
    }

    pub fn is_sub_breed(&self) -> bool {
        self.sub_name.is_some()
    }

    /// Display name for the UI, e.g. `"Bulldog (French)"` or `"Akita"`
    pub fn display_name(&self) -> String {
        match &self.sub_name {
            Some(sub) => format!(
                "{} ({})",
                capitalize_words(&self.parent),
                capitalize_words(sub)
            ),
            None => capitalize_words(&self.parent),
        }
    }

    /// Catalog path key: `"parent"` or `"parent/sub"`
    pub fn path_key(&self) -> String {
        match &self.sub_name {
            Some(sub) => format!("{}/{}", self.parent, sub),
            None => self.parent.clone(),
        }
    }
}

impl std::fmt::Display for Breed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Serialized shape of a [`Breed`]; routes deserialization through
/// [`Breed::from_parts`] so the empty sub-name normalization holds.
#[derive(Deserialize)]
struct BreedRecord {
    parent: String,
    #[serde(default)]
    sub_name: Option<String>,
}

impl From<BreedRecord> for Breed {
    fn from(record: BreedRecord) -> Self {
        Breed::from_parts(record.parent, record.sub_name)
    }
}

/// Sort breeds by display name, ascending
pub fn sort_by_display_name(breeds: &mut [Breed]) {
    breeds.sort_by_cached_key(Breed::display_name);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_display_name_top_level() {
        assert_eq!(Breed::new("bulldog").display_name(), "Bulldog");
        assert_eq!(Breed::new("akita").to_string(), "Akita");
    }

    #[test]
    fn test_display_name_sub_breed() {
        let breed = Breed::with_sub_breed("bulldog", "french");
        assert_eq!(breed.display_name(), "Bulldog (French)");
    }

    #[test]
    fn test_display_name_multi_word() {
        let breed = Breed::with_sub_breed("mountain dog", "bernese");
        assert_eq!(breed.display_name(), "Mountain Dog (Bernese)");
    }

    #[test]
    fn test_path_key() {
        assert_eq!(Breed::new("bulldog").path_key(), "bulldog");
        assert_eq!(
            Breed::with_sub_breed("bulldog", "french").path_key(),
            "bulldog/french"
        );
    }

    #[test]
    fn test_empty_sub_name_is_absent() {
        let breed = Breed::with_sub_breed("bulldog", "");
        assert!(!breed.is_sub_breed());
        assert_eq!(breed, Breed::new("bulldog"));
        assert_eq!(breed.path_key(), "bulldog");
        assert_eq!(breed.display_name(), "Bulldog");
    }

    #[test]
    fn test_equality_and_hash() {
        let a = Breed::new("bulldog");
        let b = Breed::new("bulldog");
        let c = Breed::new("retriever");

        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(Breed::with_sub_breed("bulldog", "x"), Breed::new("bulldog"));

        let set: HashSet<Breed> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_equality_is_case_sensitive() {
        assert_ne!(Breed::new("Bulldog"), Breed::new("bulldog"));
    }

    #[test]
    fn test_sort_by_display_name() {
        let mut breeds = vec![
            Breed::with_sub_breed("shepherd", "german"),
            Breed::new("akita"),
            Breed::with_sub_breed("bulldog", "french"),
            Breed::new("bulldog"),
        ];
        sort_by_display_name(&mut breeds);

        let names: Vec<_> = breeds.iter().map(Breed::display_name).collect();
        assert_eq!(
            names,
            vec!["Akita", "Bulldog", "Bulldog (French)", "Shepherd (German)"]
        );
    }

    #[test]
    fn test_deserialize_normalizes_empty_sub_name() {
        let breed: Breed =
            serde_json::from_str(r#"{"parent":"bulldog","sub_name":""}"#).unwrap();
        assert_eq!(breed, Breed::new("bulldog"));

        let breed: Breed = serde_json::from_str(r#"{"parent":"hound"}"#).unwrap();
        assert_eq!(breed, Breed::new("hound"));
    }
}
