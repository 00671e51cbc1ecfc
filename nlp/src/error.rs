//! Error type for the language engine.

use thiserror::Error;

use crate::engine::Resource;

/// Failures raised by a [`LanguageEngine`](crate::LanguageEngine) call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NlpError {
    /// The requested language has no segmentation model.
    #[error("unsupported language \"{0}\"")]
    UnsupportedLanguage(String),

    /// A segmentation or tagging call was made before its resource was loaded.
    #[error("resource '{0}' is not loaded")]
    ResourceMissing(Resource),

    /// A resource could not be obtained.
    #[error("could not load resource '{resource}': {message}")]
    ResourceUnavailable { resource: Resource, message: String },

    /// The tagger was handed an empty string.
    #[error("cannot tag an empty token")]
    EmptyToken,

    /// The tagger was handed something that is not a single token.
    #[error("\"{0}\" is not a single token")]
    NotAToken(String),
}
