//! # langpipe
//!
//! Chained, lazily evaluated text processing.
//!
//! A pipeline is an ordered list of stages. Each stage wraps the item stream
//! of the stage before it and yields its own; nothing is read or computed
//! until the composed stream is pulled, and then each item flows through the
//! whole chain before the next one is read.
//!
//! ## Overview
//!
//! - **Items**: lines (terminator kept) or tokens, as `String`s
//! - **Sources**: `read-lines` ignores its input and reads files or stdin
//! - **Transforms**: tokenizers, filters, substitution, stopword removal
//! - **Trace**: echoes items to standard output, the only visible output
//! - **Failures**: a bad item is reported and skipped; a stage that cannot
//!   start is reported and yields nothing; the run always completes
//!
//! ## Example
//!
//! ```
//! use langpipe::{EachItem, MinLengthStage, Pipeline, Stage, from_lines};
//!
//! let stage = Box::new(EachItem::new(MinLengthStage::new(4)));
//! let kept: Vec<String> = stage.transform(from_lines("ab\nabcdef\n")).collect();
//! assert_eq!(kept, vec!["abcdef\n"]);
//!
//! let pipeline = Pipeline::new().then(Box::new(EachItem::new(MinLengthStage::new(1))));
//! assert_eq!(pipeline.names(), vec!["filter-length-gte"]);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod logging;
pub mod pipeline;
pub mod replace;
pub mod source;
pub mod stage;
pub mod stopwords;
pub mod tokenize;
pub mod trace;

#[cfg(test)]
mod testing;

pub use cli::{Cli, Invocation, StageCommand, parse_invocation};
pub use config::{ReplaceConfig, Replacement, StageConfig, report_chain_shape};
pub use error::{ItemError, PipelineError};
pub use filter::{MinLengthStage, PosFilterStage};
pub use logging::Verbosity;
pub use pipeline::{Item, Pipeline, Sequence, compose, deferred, drain, empty, from_items, from_lines};
pub use replace::{Dialect, ReplaceStage, ReplacementTable};
pub use source::{LineSource, ReadLines};
pub use stage::{EachItem, ItemStage, Stage, config_to_stage};
pub use stopwords::{StopwordSet, StopwordStage};
pub use tokenize::{TokenizeStage, Unit};
pub use trace::TraceStage;
