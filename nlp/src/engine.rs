//! The language engine seam and its bundled implementation.

use std::fmt;

use once_cell::unsync::OnceCell;
use tracing::debug;

use crate::error::NlpError;
use crate::language::check_language;
use crate::segment::{Abbreviations, split_sentences, split_words};
use crate::tagger::{Lexicon, TaggedWord};

/// Linguistic data an engine loads on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    /// Sentence and word segmentation data.
    Punkt,
    /// Part-of-speech lexicon.
    Tagger,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Punkt => f.write_str("punkt"),
            Resource::Tagger => f.write_str("tagger"),
        }
    }
}

/// Text analysis used by the tokenizing and tagging stages.
///
/// Implementations are shared between stages of one pipeline, so every
/// method takes `&self`.
pub trait LanguageEngine {
    /// Make `resource` available. Calling this for a resource that is already
    /// present does nothing.
    fn ensure_resource(&self, resource: Resource) -> Result<(), NlpError>;

    /// Split `text` into sentences, in order.
    fn segment_sentences(&self, text: &str, language: &str) -> Result<Vec<String>, NlpError>;

    /// Split `text` into word and punctuation tokens, in order.
    fn tokenize_words(&self, text: &str, language: &str) -> Result<Vec<String>, NlpError>;

    /// Tag one token, without any surrounding context.
    fn tag_part_of_speech(&self, word: &str) -> Result<TaggedWord, NlpError>;
}

/// UAX #29 segmentation plus a lexicon tagger.
///
/// Resources are built in memory the first time they are ensured.
#[derive(Debug, Default)]
pub struct UnicodeEngine {
    abbreviations: OnceCell<Abbreviations>,
    lexicon: OnceCell<Lexicon>,
}

impl UnicodeEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Is `resource` already loaded?
    pub fn has_resource(&self, resource: Resource) -> bool {
        match resource {
            Resource::Punkt => self.abbreviations.get().is_some(),
            Resource::Tagger => self.lexicon.get().is_some(),
        }
    }

    fn abbreviations(&self) -> Result<&Abbreviations, NlpError> {
        self.abbreviations
            .get()
            .ok_or(NlpError::ResourceMissing(Resource::Punkt))
    }

    fn lexicon(&self) -> Result<&Lexicon, NlpError> {
        self.lexicon
            .get()
            .ok_or(NlpError::ResourceMissing(Resource::Tagger))
    }
}

impl LanguageEngine for UnicodeEngine {
    fn ensure_resource(&self, resource: Resource) -> Result<(), NlpError> {
        if self.has_resource(resource) {
            debug!(%resource, "resource already present");
            return Ok(());
        }

        match resource {
            Resource::Punkt => {
                let abbreviations = self.abbreviations.get_or_init(Abbreviations::load);
                debug!(%resource, abbreviations = abbreviations.len(), "resource loaded");
            }
            Resource::Tagger => {
                let lexicon = self.lexicon.get_or_init(Lexicon::load);
                debug!(%resource, entries = lexicon.len(), "resource loaded");
            }
        }
        Ok(())
    }

    fn segment_sentences(&self, text: &str, language: &str) -> Result<Vec<String>, NlpError> {
        check_language(language)?;
        Ok(split_sentences(text, self.abbreviations()?))
    }

    fn tokenize_words(&self, text: &str, language: &str) -> Result<Vec<String>, NlpError> {
        check_language(language)?;
        // Word bounds need no data, but the contract is the same as sentences
        self.abbreviations()?;
        Ok(split_words(text))
    }

    fn tag_part_of_speech(&self, word: &str) -> Result<TaggedWord, NlpError> {
        self.lexicon()?.tag(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_is_idempotent() {
        let engine = UnicodeEngine::new();
        assert!(!engine.has_resource(Resource::Punkt));

        engine.ensure_resource(Resource::Punkt).unwrap();
        engine.ensure_resource(Resource::Punkt).unwrap();

        assert!(engine.has_resource(Resource::Punkt));
        assert!(!engine.has_resource(Resource::Tagger));
    }

    #[test]
    fn test_segmentation_requires_resource() {
        let engine = UnicodeEngine::new();
        assert_eq!(
            engine.segment_sentences("Hi there.", "english"),
            Err(NlpError::ResourceMissing(Resource::Punkt))
        );
        assert_eq!(
            engine.tokenize_words("Hi there.", "english"),
            Err(NlpError::ResourceMissing(Resource::Punkt))
        );
        assert_eq!(
            engine.tag_part_of_speech("there"),
            Err(NlpError::ResourceMissing(Resource::Tagger))
        );
    }

    #[test]
    fn test_unsupported_language() {
        let engine = UnicodeEngine::new();
        engine.ensure_resource(Resource::Punkt).unwrap();
        assert_eq!(
            engine.tokenize_words("Hi", "elvish"),
            Err(NlpError::UnsupportedLanguage("elvish".to_string()))
        );
    }

    #[test]
    fn test_words_and_tags() {
        let engine = UnicodeEngine::new();
        engine.ensure_resource(Resource::Punkt).unwrap();
        engine.ensure_resource(Resource::Tagger).unwrap();

        let words = engine.tokenize_words("The fox ran.", "english").unwrap();
        assert_eq!(words, vec!["The", "fox", "ran", "."]);

        let tags: Vec<&str> = words
            .iter()
            .map(|w| engine.tag_part_of_speech(w).unwrap().tag)
            .collect();
        assert_eq!(tags, vec!["DT", "NN", "NN", "."]);
    }

    #[test]
    fn test_resource_display() {
        assert_eq!(Resource::Punkt.to_string(), "punkt");
        assert_eq!(Resource::Tagger.to_string(), "tagger");
    }
}
