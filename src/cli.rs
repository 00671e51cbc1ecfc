//! Command-line parsing for stage chains.
//!
//! A chain is written as consecutive subcommands:
//!
//! ```text
//! langpipe read-lines -f notes.txt words remove-stopwords -f stop.txt trace
//! ```
//!
//! clap parses one subcommand at a time. Whatever follows a subcommand's own
//! options lands in a hidden trailing list, which is parsed again as the next
//! link until nothing is left. Option values bind before that, so
//! `replace -s words` replaces the string "words".

use std::ffi::OsString;
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::config::{ReplaceConfig, StageConfig};
use crate::error::PipelineError;
use crate::logging::Verbosity;
use crate::tokenize::DEFAULT_LANGUAGE;

/// Chain lazy text-processing stages; each stage consumes the one before it.
#[derive(Parser, Debug)]
#[command(name = "langpipe", version)]
#[command(
    after_help = "Example:\n  langpipe read-lines -f notes.txt sentences words filter-length-gte -n 4 trace"
)]
pub struct Cli {
    #[command(flatten)]
    pub verbosity: Verbosity,

    #[command(subcommand)]
    pub command: Option<StageCommand>,
}

/// Parser for every link after the first.
#[derive(Parser, Debug)]
#[command(name = "langpipe", no_binary_name = true)]
struct ChainLink {
    #[command(subcommand)]
    command: StageCommand,
}

/// The stages that can appear in a chain.
#[derive(Subcommand, Debug)]
pub enum StageCommand {
    /// Read lines from files ("-" reads standard input)
    #[command(visible_alias = "readlines")]
    ReadLines(ReadLinesArgs),

    /// Print each item to standard output and pass it on unchanged
    Trace(TraceArgs),

    /// Split each line into sentences
    Sentences(TokenizeArgs),

    /// Split each line into word tokens
    Words(TokenizeArgs),

    /// Substitute strings, from an inline pair or a CSV file of pairs
    Replace(ReplaceArgs),

    /// Keep words whose part-of-speech tag is listed
    FilterPos(FilterPosArgs),

    /// Keep items at least N characters long
    FilterLengthGte(FilterLengthArgs),

    /// Drop words listed in a stopword file
    RemoveStopwords(StopwordArgs),
}

/// The rest of the command line, parsed as the next stage.
#[derive(Args, Debug, Default)]
pub struct Chain {
    #[arg(
        value_name = "NEXT",
        trailing_var_arg = true,
        allow_hyphen_values = true,
        hide = true
    )]
    pub rest: Vec<String>,
}

#[derive(Args, Debug)]
pub struct ReadLinesArgs {
    /// Input path; repeat for several
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    pub files: Vec<PathBuf>,

    #[command(flatten)]
    pub chain: Chain,
}

#[derive(Args, Debug)]
pub struct TraceArgs {
    #[command(flatten)]
    pub chain: Chain,
}

#[derive(Args, Debug)]
pub struct TokenizeArgs {
    /// Language of the text
    #[arg(short = 'l', long, default_value = DEFAULT_LANGUAGE)]
    pub language: String,

    #[command(flatten)]
    pub chain: Chain,
}

#[derive(Args, Debug)]
pub struct ReplaceArgs {
    /// String to replace
    #[arg(short = 's', long, visible_alias = "src", allow_hyphen_values = true)]
    pub source: Option<String>,

    /// Replacement for --source (default: remove it)
    #[arg(short = 'd', long, visible_alias = "dst", allow_hyphen_values = true)]
    pub dest: Option<String>,

    /// CSV file of source,destination pairs applied in order
    #[arg(short = 'f', long, value_name = "CSV")]
    pub file: Option<PathBuf>,

    #[command(flatten)]
    pub chain: Chain,
}

#[derive(Args, Debug)]
pub struct FilterPosArgs {
    /// Penn Treebank tag to keep (e.g. NN, JJ); repeat for several
    #[arg(short = 'p', long = "pos", value_name = "TAG")]
    pub tags: Vec<String>,

    #[command(flatten)]
    pub chain: Chain,
}

#[derive(Args, Debug)]
pub struct FilterLengthArgs {
    /// Minimum length in characters
    #[arg(short = 'n', long = "num", value_name = "N")]
    pub min: usize,

    #[command(flatten)]
    pub chain: Chain,
}

#[derive(Args, Debug)]
pub struct StopwordArgs {
    /// File of stopwords, one or more per line
    #[arg(short = 'f', long, value_name = "PATH")]
    pub file: PathBuf,

    #[command(flatten)]
    pub chain: Chain,
}

impl StageCommand {
    /// Validate this link, returning its configuration and the unparsed rest.
    pub fn into_link(self) -> Result<(StageConfig, Vec<String>), PipelineError> {
        let link = match self {
            StageCommand::ReadLines(args) => (
                StageConfig::ReadLines { files: args.files },
                args.chain.rest,
            ),
            StageCommand::Trace(args) => (StageConfig::Trace, args.chain.rest),
            StageCommand::Sentences(args) => (
                StageConfig::Sentences {
                    language: args.language,
                },
                args.chain.rest,
            ),
            StageCommand::Words(args) => (
                StageConfig::Words {
                    language: args.language,
                },
                args.chain.rest,
            ),
            StageCommand::Replace(args) => (
                StageConfig::Replace(ReplaceConfig::new(args.source, args.dest, args.file)?),
                args.chain.rest,
            ),
            StageCommand::FilterPos(args) => {
                (StageConfig::FilterPos { tags: args.tags }, args.chain.rest)
            }
            StageCommand::FilterLengthGte(args) => (
                StageConfig::FilterLengthGte { min: args.min },
                args.chain.rest,
            ),
            StageCommand::RemoveStopwords(args) => (
                StageConfig::RemoveStopwords { file: args.file },
                args.chain.rest,
            ),
        };
        Ok(link)
    }
}

/// A fully parsed and validated command line.
#[derive(Debug)]
pub struct Invocation {
    pub verbosity: Verbosity,
    pub chain: Vec<StageConfig>,
}

/// Parse `args` (binary name first) into a validated chain.
///
/// Configuration errors come back as clap usage errors, so they print and
/// exit like any other bad argument.
pub fn parse_invocation<I, T>(args: I) -> Result<Invocation, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = Cli::try_parse_from(args)?;

    let mut chain = Vec::new();
    let mut next = cli.command;
    while let Some(command) = next.take() {
        let (config, rest) = command.into_link().map_err(usage_error)?;
        chain.push(config);
        if !rest.is_empty() {
            next = Some(ChainLink::try_parse_from(rest)?.command);
        }
    }

    Ok(Invocation {
        verbosity: cli.verbosity,
        chain,
    })
}

fn usage_error(err: PipelineError) -> clap::Error {
    Cli::command().error(ErrorKind::ArgumentConflict, err)
}
