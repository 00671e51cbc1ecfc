//! The `remove-stopwords` stage.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ItemError, PipelineError};
use crate::pipeline::Item;
use crate::stage::ItemStage;

/// Case-insensitive set of words to drop.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// Collect every whitespace-separated word of `reader`, lowercased.
    pub fn from_reader<R: BufRead>(reader: R) -> std::io::Result<Self> {
        let mut words = HashSet::new();
        for line in reader.lines() {
            words.extend(line?.split_whitespace().map(str::to_lowercase));
        }
        Ok(Self { words })
    }

    /// Read a stopword file.
    pub fn load(path: &Path) -> Result<Self, PipelineError> {
        let aux_error = |source| PipelineError::AuxiliaryFile {
            kind: "stopword",
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(aux_error)?;
        Self::from_reader(BufReader::new(file)).map_err(aux_error)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

pub struct StopwordStage {
    path: PathBuf,
    stopwords: StopwordSet,
}

impl StopwordStage {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            stopwords: StopwordSet::default(),
        }
    }
}

impl ItemStage for StopwordStage {
    fn open(&mut self) -> Result<(), PipelineError> {
        self.stopwords = StopwordSet::load(&self.path)?;
        debug!(
            path = %self.path.display(),
            count = self.stopwords.len(),
            "stopwords loaded"
        );
        Ok(())
    }

    fn process(&mut self, word: Item) -> Result<Vec<Item>, ItemError> {
        if self.stopwords.contains(&word) {
            Ok(vec![])
        } else {
            Ok(vec![word])
        }
    }

    fn name(&self) -> &str {
        "remove-stopwords"
    }
}
