//! Error types for pipeline stages.
//!
//! Two families, matching where a failure is caught:
//!
//! - [`PipelineError`] - a source or stage could not be set up (bad options,
//!   unreadable auxiliary file, missing language resource, unopenable input).
//! - [`ItemError`] - one item could not be processed; the stream carries on.

use std::io;
use std::path::PathBuf;

use langpipe_nlp::NlpError;
use thiserror::Error;

use crate::pipeline::Item;

/// Number of characters of a line shown in tokenizer diagnostics.
pub const PREVIEW_CHARS: usize = 10;

/// A failure that affects a whole source or stage.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// An input path could not be opened.
    #[error("could not open \"{}\": {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An input opened fine but failed part-way through.
    #[error("could not read \"{}\": {source}", .path.display())]
    SourceRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// `replace` was given both an inline pair and a substitution file.
    #[error("--source/--dest cannot be combined with --file")]
    ConflictingReplaceOptions,

    /// `replace` was given a destination with nothing to replace.
    #[error("--dest requires --source")]
    DestWithoutSource,

    /// A substitution or stopword file could not be read.
    #[error("could not read {kind} file \"{}\": {source}", .path.display())]
    AuxiliaryFile {
        kind: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A substitution file is not valid CSV.
    #[error("malformed substitution file \"{}\": {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// A substitution record does not hold exactly a source and a destination.
    #[error(
        "substitution file \"{}\" record {record}: expected 2 fields, found {found}",
        .path.display()
    )]
    MalformedReplacement {
        path: PathBuf,
        record: usize,
        found: usize,
    },

    /// The language engine could not provide a resource.
    #[error("language resource unavailable: {0}")]
    Resource(#[from] NlpError),
}

/// A failure processing a single item.
#[derive(Error, Debug)]
pub enum ItemError {
    #[error("could not tokenize line into {unit} \"{preview}\": {source}")]
    Tokenize {
        unit: &'static str,
        preview: String,
        #[source]
        source: NlpError,
    },

    #[error("could not tag {word:?}: {source}")]
    Tag {
        word: String,
        #[source]
        source: NlpError,
    },

    /// Replacement stopped part-way; `line` holds the text so far.
    #[error("could not apply replacement {pattern:?} --> {replacement:?} on line {line:?}: {reason}")]
    Replace {
        pattern: String,
        replacement: String,
        line: String,
        reason: &'static str,
    },

    #[error("could not echo item {item:?}: {source}")]
    Trace {
        item: Item,
        #[source]
        source: io::Error,
    },
}

impl ItemError {
    /// The item that should still go downstream despite the failure, if any.
    pub fn into_salvaged(self) -> Option<Item> {
        match self {
            ItemError::Replace { line, .. } => Some(line),
            ItemError::Trace { item, .. } => Some(item),
            ItemError::Tokenize { .. } | ItemError::Tag { .. } => None,
        }
    }
}

/// First [`PREVIEW_CHARS`] characters of `line`.
pub fn preview(line: &str) -> String {
    line.chars().take(PREVIEW_CHARS).collect()
}
