//! The stage contract and the per-item stream adapter.
//!
//! Every stage turns one [`Sequence`] into another. Most stages work one
//! item at a time; they implement [`ItemStage`] and are lifted into a
//! [`Stage`] by [`EachItem`], which owns the shared failure policy:
//!
//! - `open` runs once, on the first pull. If it fails the stage reports the
//!   error and yields nothing, without pulling its input.
//! - a failed item is reported and dropped, unless the error carries an item
//!   that should still go downstream.

use std::rc::Rc;

use langpipe_nlp::LanguageEngine;
use tracing::{error, warn};

use crate::config::StageConfig;
use crate::error::{ItemError, PipelineError};
use crate::filter::{MinLengthStage, PosFilterStage};
use crate::pipeline::{Item, Sequence, deferred, empty};
use crate::replace::ReplaceStage;
use crate::source::ReadLines;
use crate::stopwords::StopwordStage;
use crate::tokenize::{TokenizeStage, Unit};
use crate::trace::TraceStage;

/// A configured transform from one item stream to another.
pub trait Stage {
    /// The display name of this stage.
    fn name(&self) -> &str;

    /// Wrap `input` into this stage's output stream. Must not pull anything.
    fn transform(self: Box<Self>, input: Sequence) -> Sequence;
}

/// A stage that handles its input one item at a time.
pub trait ItemStage {
    /// Build auxiliary state. Runs once, before the first item.
    fn open(&mut self) -> Result<(), PipelineError> {
        Ok(())
    }

    /// Process a single item, returning zero or more output items.
    fn process(&mut self, item: Item) -> Result<Vec<Item>, ItemError>;

    /// The display name of this stage.
    fn name(&self) -> &str;
}

/// Lifts an [`ItemStage`] into a lazy [`Stage`].
pub struct EachItem<S> {
    stage: S,
}

impl<S: ItemStage> EachItem<S> {
    pub fn new(stage: S) -> Self {
        Self { stage }
    }
}

impl<S: ItemStage + 'static> Stage for EachItem<S> {
    fn name(&self) -> &str {
        self.stage.name()
    }

    fn transform(self: Box<Self>, input: Sequence) -> Sequence {
        let mut stage = self.stage;
        deferred(move || match stage.open() {
            Ok(()) => Box::new(ItemStream {
                stage,
                input,
                pending: Vec::new().into_iter(),
            }),
            Err(err) => {
                error!(stage = stage.name(), "{err}");
                empty()
            }
        })
    }
}

struct ItemStream<S> {
    stage: S,
    input: Sequence,
    pending: std::vec::IntoIter<Item>,
}

impl<S: ItemStage> Iterator for ItemStream<S> {
    type Item = Item;

    fn next(&mut self) -> Option<Item> {
        loop {
            if let Some(item) = self.pending.next() {
                return Some(item);
            }
            let item = self.input.next()?;
            match self.stage.process(item) {
                Ok(items) => self.pending = items.into_iter(),
                Err(err) => {
                    warn!(stage = self.stage.name(), "{err}");
                    if let Some(item) = err.into_salvaged() {
                        return Some(item);
                    }
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Factory
// ---------------------------------------------------------------------------

/// Create a `Stage` from a validated `StageConfig`.
///
/// Nothing is opened or read here; auxiliary files and language resources are
/// loaded when the stage sees its first pull.
pub fn config_to_stage(config: StageConfig, engine: &Rc<dyn LanguageEngine>) -> Box<dyn Stage> {
    match config {
        StageConfig::ReadLines { files } => Box::new(ReadLines::new(files)),
        StageConfig::Trace => Box::new(EachItem::new(TraceStage::new(std::io::stdout()))),
        StageConfig::Sentences { language } => Box::new(EachItem::new(TokenizeStage::new(
            Unit::Sentences,
            language,
            engine.clone(),
        ))),
        StageConfig::Words { language } => Box::new(EachItem::new(TokenizeStage::new(
            Unit::Words,
            language,
            engine.clone(),
        ))),
        StageConfig::Replace(config) => Box::new(EachItem::new(ReplaceStage::new(config))),
        StageConfig::FilterPos { tags } => {
            Box::new(EachItem::new(PosFilterStage::new(tags, engine.clone())))
        }
        StageConfig::FilterLengthGte { min } => Box::new(EachItem::new(MinLengthStage::new(min))),
        StageConfig::RemoveStopwords { file } => Box::new(EachItem::new(StopwordStage::new(file))),
    }
}
