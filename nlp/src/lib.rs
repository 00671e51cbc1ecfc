//! # langpipe-nlp
//!
//! The natural-language collaborator behind the `langpipe` tokenizing and
//! tagging stages.
//!
//! The pipeline only ever talks to this crate through [`LanguageEngine`]:
//!
//! - `ensure_resource` - idempotent fetch-if-missing of linguistic data
//! - `segment_sentences` - text in, ordered sentences out
//! - `tokenize_words` - text in, ordered tokens out
//! - `tag_part_of_speech` - token in, (token, tag) out
//!
//! [`UnicodeEngine`] is the bundled implementation. It segments with the
//! UAX #29 rules from `unicode-segmentation` and tags with a closed-class
//! lexicon plus suffix heuristics, one word at a time.
//!
//! ## Example
//!
//! ```
//! use langpipe_nlp::{LanguageEngine, Resource, UnicodeEngine};
//!
//! let engine = UnicodeEngine::new();
//! engine.ensure_resource(Resource::Punkt).unwrap();
//!
//! let sentences = engine
//!     .segment_sentences("Hello world. Goodbye now.", "english")
//!     .unwrap();
//! assert_eq!(sentences, vec!["Hello world.", "Goodbye now."]);
//! ```

pub mod engine;
pub mod error;
pub mod language;
pub mod segment;
pub mod tagger;

pub use engine::{LanguageEngine, Resource, UnicodeEngine};
pub use error::NlpError;
pub use language::{SUPPORTED_LANGUAGES, check_language};
pub use tagger::{Lexicon, TaggedWord};
