//! The `filter-pos` and `filter-length-gte` stages.

use std::collections::HashSet;
use std::rc::Rc;

use langpipe_nlp::{LanguageEngine, Resource};

use crate::error::{ItemError, PipelineError};
use crate::pipeline::Item;
use crate::stage::ItemStage;

/// Keeps words whose part-of-speech tag is in the allow-set.
///
/// Words are tagged one at a time with no surrounding sentence, since they
/// usually arrive already split by an upstream `words` stage.
pub struct PosFilterStage {
    allowed: HashSet<String>,
    engine: Rc<dyn LanguageEngine>,
}

impl PosFilterStage {
    pub fn new(tags: Vec<String>, engine: Rc<dyn LanguageEngine>) -> Self {
        Self {
            allowed: tags.into_iter().collect(),
            engine,
        }
    }
}

impl ItemStage for PosFilterStage {
    fn open(&mut self) -> Result<(), PipelineError> {
        self.engine.ensure_resource(Resource::Tagger)?;
        Ok(())
    }

    fn process(&mut self, word: Item) -> Result<Vec<Item>, ItemError> {
        let tagged = match self.engine.tag_part_of_speech(&word) {
            Ok(tagged) => tagged,
            Err(source) => return Err(ItemError::Tag { word, source }),
        };
        if self.allowed.contains(tagged.tag) {
            Ok(vec![word])
        } else {
            Ok(vec![])
        }
    }

    fn name(&self) -> &str {
        "filter-pos"
    }
}

/// Keeps items at least `min` characters long.
pub struct MinLengthStage {
    min: usize,
}

impl MinLengthStage {
    pub fn new(min: usize) -> Self {
        Self { min }
    }
}

impl ItemStage for MinLengthStage {
    fn process(&mut self, item: Item) -> Result<Vec<Item>, ItemError> {
        if item.chars().count() >= self.min {
            Ok(vec![item])
        } else {
            Ok(vec![])
        }
    }

    fn name(&self) -> &str {
        "filter-length-gte"
    }
}
