//! The `sentences` and `words` stages.
//!
//! Both make sure the segmentation resource is present when they open, then
//! expand each line into its sentences or tokens, in order. A line the
//! engine cannot handle is reported with a short preview and skipped.

use std::rc::Rc;

use langpipe_nlp::{LanguageEngine, Resource};

use crate::error::{ItemError, PipelineError, preview};
use crate::pipeline::Item;
use crate::stage::ItemStage;

/// Default `--language`.
pub const DEFAULT_LANGUAGE: &str = "english";

/// What a line is split into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Sentences,
    Words,
}

impl Unit {
    pub fn label(self) -> &'static str {
        match self {
            Unit::Sentences => "sentences",
            Unit::Words => "words",
        }
    }
}

pub struct TokenizeStage {
    unit: Unit,
    language: String,
    engine: Rc<dyn LanguageEngine>,
}

impl TokenizeStage {
    pub fn new(unit: Unit, language: String, engine: Rc<dyn LanguageEngine>) -> Self {
        Self {
            unit,
            language,
            engine,
        }
    }
}

impl ItemStage for TokenizeStage {
    fn open(&mut self) -> Result<(), PipelineError> {
        self.engine.ensure_resource(Resource::Punkt)?;
        Ok(())
    }

    fn process(&mut self, line: Item) -> Result<Vec<Item>, ItemError> {
        let split = match self.unit {
            Unit::Sentences => self.engine.segment_sentences(&line, &self.language),
            Unit::Words => self.engine.tokenize_words(&line, &self.language),
        };
        split.map_err(|source| ItemError::Tokenize {
            unit: self.unit.label(),
            preview: preview(&line),
            source,
        })
    }

    fn name(&self) -> &str {
        self.unit.label()
    }
}
