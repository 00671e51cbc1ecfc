//! Validated stage configuration.
//!
//! Each subcommand on the command line resolves into one [`StageConfig`].
//! Configuration is checked here, before any stage is built, so a bad
//! combination of options never reaches the running pipeline.

use std::path::PathBuf;

use tracing::{info, warn};

use crate::error::PipelineError;

/// A single substitution: every occurrence of `pattern` becomes `replacement`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub pattern: String,
    pub replacement: String,
}

impl Replacement {
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            replacement: replacement.into(),
        }
    }
}

/// Where the `replace` stage gets its substitutions from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReplaceConfig {
    pub inline: Option<Replacement>,
    pub file: Option<PathBuf>,
}

impl ReplaceConfig {
    /// Validate the `replace` options.
    ///
    /// An inline pair (`source`, optional `dest`, defaulting to the empty
    /// string) and a substitution `file` are mutually exclusive. Neither is
    /// fine: the stage then passes items through unchanged.
    pub fn new(
        source: Option<String>,
        dest: Option<String>,
        file: Option<PathBuf>,
    ) -> Result<Self, PipelineError> {
        if (source.is_some() || dest.is_some()) && file.is_some() {
            return Err(PipelineError::ConflictingReplaceOptions);
        }

        let inline = match (source, dest) {
            (Some(pattern), dest) => Some(Replacement::new(pattern, dest.unwrap_or_default())),
            (None, Some(_)) => return Err(PipelineError::DestWithoutSource),
            (None, None) => None,
        };

        Ok(Self { inline, file })
    }
}

/// One configured stage of the chain.
#[derive(Debug, Clone, PartialEq)]
pub enum StageConfig {
    /// read-lines -f PATH... - read lines from files or standard input
    ReadLines { files: Vec<PathBuf> },
    /// trace - echo items to standard output
    Trace,
    /// sentences -l LANG - split lines into sentences
    Sentences { language: String },
    /// words -l LANG - split lines into word tokens
    Words { language: String },
    /// replace - substitute strings
    Replace(ReplaceConfig),
    /// filter-pos -p TAG... - keep words whose tag is allowed
    FilterPos { tags: Vec<String> },
    /// filter-length-gte -n N - keep items at least N characters long
    FilterLengthGte { min: usize },
    /// remove-stopwords -f PATH - drop words listed in a stopword file
    RemoveStopwords { file: PathBuf },
}

impl StageConfig {
    /// The subcommand name.
    pub fn name(&self) -> &'static str {
        match self {
            StageConfig::ReadLines { .. } => "read-lines",
            StageConfig::Trace => "trace",
            StageConfig::Sentences { .. } => "sentences",
            StageConfig::Words { .. } => "words",
            StageConfig::Replace(_) => "replace",
            StageConfig::FilterPos { .. } => "filter-pos",
            StageConfig::FilterLengthGte { .. } => "filter-length-gte",
            StageConfig::RemoveStopwords { .. } => "remove-stopwords",
        }
    }

    /// Does this stage ignore its input and produce its own items?
    pub fn is_source(&self) -> bool {
        matches!(self, StageConfig::ReadLines { .. })
    }
}

/// Point out chain shapes that lose items.
///
/// A chain that does not start with a source has nothing to read, and a
/// source placed later discards everything its predecessors produced.
pub fn report_chain_shape(chain: &[StageConfig]) {
    if chain.first().is_some_and(|first| !first.is_source()) {
        info!("chain does not start with read-lines; no items will be read");
    }
    for (position, config) in chain.iter().enumerate().skip(1) {
        if config.is_source() {
            warn!(
                position = position + 1,
                "{} ignores the items of the stages before it",
                config.name()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::capture_logs;

    #[test]
    fn test_inline_pair() {
        let config = ReplaceConfig::new(Some("a".into()), Some("b".into()), None).unwrap();
        assert_eq!(config.inline, Some(Replacement::new("a", "b")));
        assert_eq!(config.file, None);
    }

    #[test]
    fn test_dest_defaults_to_empty() {
        let config = ReplaceConfig::new(Some("drop me".into()), None, None).unwrap();
        assert_eq!(config.inline, Some(Replacement::new("drop me", "")));
    }

    #[test]
    fn test_file_only() {
        let config = ReplaceConfig::new(None, None, Some("subs.csv".into())).unwrap();
        assert_eq!(config.inline, None);
        assert_eq!(config.file, Some(PathBuf::from("subs.csv")));
    }

    #[test]
    fn test_inline_and_file_conflict() {
        let err = ReplaceConfig::new(Some("a".into()), None, Some("subs.csv".into())).unwrap_err();
        assert!(matches!(err, PipelineError::ConflictingReplaceOptions));

        let err = ReplaceConfig::new(None, Some("b".into()), Some("subs.csv".into())).unwrap_err();
        assert!(matches!(err, PipelineError::ConflictingReplaceOptions));
    }

    #[test]
    fn test_dest_without_source() {
        let err = ReplaceConfig::new(None, Some("b".into()), None).unwrap_err();
        assert!(matches!(err, PipelineError::DestWithoutSource));
    }

    #[test]
    fn test_nothing_configured() {
        assert_eq!(
            ReplaceConfig::new(None, None, None).unwrap(),
            ReplaceConfig::default()
        );
    }

    #[test]
    fn test_names_and_sources() {
        let read = StageConfig::ReadLines { files: vec![] };
        assert_eq!(read.name(), "read-lines");
        assert!(read.is_source());
        assert!(!StageConfig::Trace.is_source());
        assert_eq!(
            StageConfig::FilterLengthGte { min: 1 }.name(),
            "filter-length-gte"
        );
    }

    #[test]
    fn test_chain_shape_reports() {
        let read = || StageConfig::ReadLines { files: vec![] };

        let ((), logs) = capture_logs(|| report_chain_shape(&[read(), StageConfig::Trace]));
        assert!(logs.is_empty(), "logs: {logs}");

        let ((), logs) = capture_logs(|| report_chain_shape(&[StageConfig::Trace]));
        assert!(logs.contains("does not start with read-lines"), "logs: {logs}");

        let ((), logs) = capture_logs(|| report_chain_shape(&[read(), StageConfig::Trace, read()]));
        assert!(logs.contains("read-lines ignores the items"), "logs: {logs}");
        assert!(logs.contains("position=3"), "logs: {logs}");

        let ((), logs) = capture_logs(|| report_chain_shape(&[]));
        assert!(logs.is_empty(), "logs: {logs}");
    }
}
