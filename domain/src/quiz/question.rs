//! Question entity

use super::value_objects::ImageUrl;
use crate::breed::entities::Breed;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One round of the quiz: a photo plus the breeds to choose from.
///
/// `options` is the on-screen order for the round. It holds distinct
/// breeds and contains `correct_breed` exactly once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "QuestionRecord")]
pub struct Question {
    image_url: ImageUrl,
    correct_breed: Breed,
    options: Vec<Breed>,
}

/// Unchecked wire form; deserialization goes through [`Question::new`]
#[derive(Deserialize)]
struct QuestionRecord {
    image_url: ImageUrl,
    correct_breed: Breed,
    options: Vec<Breed>,
}

impl TryFrom<QuestionRecord> for Question {
    type Error = DomainError;

    fn try_from(record: QuestionRecord) -> Result<Self, Self::Error> {
        Question::new(record.image_url, record.correct_breed, record.options)
    }
}

impl Question {
    pub fn new(
        image_url: ImageUrl,
        correct_breed: Breed,
        options: Vec<Breed>,
    ) -> Result<Self, DomainError> {
        let mut seen = HashSet::with_capacity(options.len());
        if let Some(dup) = options.iter().find(|b| !seen.insert(*b)) {
            return Err(DomainError::InvalidQuestion(format!(
                "duplicate option: {}",
                dup.path_key()
            )));
        }

        if !seen.contains(&correct_breed) {
            return Err(DomainError::InvalidQuestion(format!(
                "options do not contain the correct breed {}",
                correct_breed.path_key()
            )));
        }

        Ok(Self {
            image_url,
            correct_breed,
            options,
        })
    }

    pub fn image_url(&self) -> &ImageUrl {
        &self.image_url
    }

    pub fn correct_breed(&self) -> &Breed {
        &self.correct_breed
    }

    pub fn options(&self) -> &[Breed] {
        &self.options
    }

    /// Option at a zero-based display position
    pub fn option(&self, index: usize) -> Option<&Breed> {
        self.options.get(index)
    }

    pub fn is_correct(&self, breed: &Breed) -> bool {
        *breed == self.correct_breed
    }

    /// Zero-based display position of the correct breed
    pub fn correct_index(&self) -> usize {
        self.options
            .iter()
            .position(|b| *b == self.correct_breed)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url() -> ImageUrl {
        ImageUrl::parse("https://example.com/dog.jpg").unwrap()
    }

    #[test]
    fn test_new_valid() {
        let correct = Breed::new("akita");
        let options = vec![Breed::new("beagle"), correct.clone(), Breed::new("boxer")];
        let q = Question::new(url(), correct.clone(), options).unwrap();

        assert_eq!(q.options().len(), 3);
        assert_eq!(q.correct_index(), 1);
        assert!(q.is_correct(&correct));
        assert!(!q.is_correct(&Breed::new("boxer")));
        assert_eq!(q.option(2), Some(&Breed::new("boxer")));
        assert_eq!(q.option(3), None);
    }

    #[test]
    fn test_new_rejects_duplicates() {
        let correct = Breed::new("akita");
        let options = vec![correct.clone(), Breed::new("boxer"), Breed::new("boxer")];
        assert!(matches!(
            Question::new(url(), correct, options),
            Err(DomainError::InvalidQuestion(_))
        ));
    }

    #[test]
    fn test_new_rejects_missing_correct() {
        let options = vec![Breed::new("beagle"), Breed::new("boxer")];
        assert!(Question::new(url(), Breed::new("akita"), options).is_err());
    }

    #[test]
    fn test_deserialize_round_trip() {
        let correct = Breed::with_sub_breed("bulldog", "french");
        let q = Question::new(url(), correct.clone(), vec![Breed::new("akita"), correct]).unwrap();

        let json = serde_json::to_string(&q).unwrap();
        let back: Question = serde_json::from_str(&json).unwrap();
        assert_eq!(back, q);
    }

    #[test]
    fn test_deserialize_rejects_duplicate_options() {
        let json = r#"{
            "image_url": "https://example.com/dog.jpg",
            "correct_breed": {"parent": "akita"},
            "options": [{"parent": "akita"}, {"parent": "boxer"}, {"parent": "boxer"}]
        }"#;
        assert!(serde_json::from_str::<Question>(json).is_err());
    }

    #[test]
    fn test_deserialize_rejects_missing_correct() {
        let json = r#"{
            "image_url": "https://example.com/dog.jpg",
            "correct_breed": {"parent": "akita"},
            "options": [{"parent": "beagle"}, {"parent": "boxer"}]
        }"#;
        assert!(serde_json::from_str::<Question>(json).is_err());
    }
}
