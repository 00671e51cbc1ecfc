//! The `replace` stage.
//!
//! The replacement table is built once, when the stage opens: the inline
//! pair first, then the rows of the substitution file in file order. Each
//! item then goes through every pair in table order, each pair applied to
//! the output of the one before it.

use std::fs;
use std::path::Path;

use crate::config::{ReplaceConfig, Replacement};
use crate::error::{ItemError, PipelineError};
use crate::pipeline::Item;
use crate::stage::ItemStage;

/// Bytes of a substitution file inspected to guess its dialect.
pub const SNIFF_LEN: usize = 1024;

const CANDIDATE_DELIMITERS: &[u8] = b",;\t|";

/// CSV dialect guessed from the start of a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dialect {
    pub delimiter: u8,
    pub quote: u8,
}

impl Default for Dialect {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
        }
    }
}

impl Dialect {
    /// Guess the dialect of `sample`.
    ///
    /// The delimiter is the first candidate that occurs the same, non-zero
    /// number of times on every complete line; failing that, the most
    /// frequent candidate; failing that, a comma.
    pub fn sniff(sample: &[u8]) -> Self {
        let text = String::from_utf8_lossy(sample);
        let mut lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
        // The last line of a truncated sample is probably cut short
        if sample.len() >= SNIFF_LEN && lines.len() > 1 && !text.ends_with('\n') {
            lines.pop();
        }

        let counts = |delimiter: u8| -> Vec<usize> {
            lines
                .iter()
                .map(|line| line.bytes().filter(|&b| b == delimiter).count())
                .collect()
        };

        let consistent = CANDIDATE_DELIMITERS.iter().copied().find(|&d| {
            let per_line = counts(d);
            per_line.first().is_some_and(|&first| first > 0)
                && per_line.iter().all(|&n| n == per_line[0])
        });

        let delimiter = consistent
            .or_else(|| {
                CANDIDATE_DELIMITERS
                    .iter()
                    .copied()
                    .map(|d| (d, counts(d).iter().sum::<usize>()))
                    .filter(|&(_, total)| total > 0)
                    .max_by_key(|&(_, total)| total)
                    .map(|(d, _)| d)
            })
            .unwrap_or(b',');

        Self {
            delimiter,
            quote: sniff_quote(&lines, delimiter),
        }
    }
}

/// Single quotes win only when they wrap more fields than double quotes do.
///
/// A quote wraps a field when it opens at the start of a line or right after
/// a delimiter, and its next occurrence sits at the end of the line or right
/// before a delimiter. Apostrophes inside words never qualify.
fn sniff_quote(lines: &[&str], delimiter: u8) -> u8 {
    let wrapped = |quote: u8| -> usize {
        lines
            .iter()
            .map(|line| count_wrapped_fields(line.as_bytes(), quote, delimiter))
            .sum()
    };

    if wrapped(b'\'') > wrapped(b'"') {
        b'\''
    } else {
        b'"'
    }
}

fn count_wrapped_fields(bytes: &[u8], quote: u8, delimiter: u8) -> usize {
    let mut count = 0;
    let mut i = 0;
    while i < bytes.len() {
        let opens = bytes[i] == quote && (i == 0 || bytes[i - 1] == delimiter);
        if !opens {
            i += 1;
            continue;
        }
        let Some(offset) = bytes[i + 1..].iter().position(|&b| b == quote) else {
            break;
        };
        let close = i + 1 + offset;
        if bytes.get(close + 1).is_none_or(|&b| b == delimiter) {
            count += 1;
        }
        i = close + 1;
    }
    count
}

/// Ordered substitutions applied to every item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplacementTable {
    pairs: Vec<Replacement>,
}

impl ReplacementTable {
    pub fn new(pairs: Vec<Replacement>) -> Self {
        Self { pairs }
    }

    /// Build the table described by `config`, reading its file if it has one.
    pub fn load(config: &ReplaceConfig) -> Result<Self, PipelineError> {
        let mut pairs: Vec<Replacement> = config.inline.iter().cloned().collect();
        if let Some(path) = &config.file {
            pairs.extend(read_substitutions(path)?);
        }
        Ok(Self { pairs })
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Apply every pair in order, each to the result of the previous one.
    ///
    /// An empty pattern stops the run; the error carries the line as it
    /// stood at that point.
    pub fn apply(&self, line: Item) -> Result<Item, ItemError> {
        let mut line = line;
        for pair in &self.pairs {
            if pair.pattern.is_empty() {
                return Err(ItemError::Replace {
                    pattern: pair.pattern.clone(),
                    replacement: pair.replacement.clone(),
                    line,
                    reason: "empty source pattern",
                });
            }
            line = line.replace(&pair.pattern, &pair.replacement);
        }
        Ok(line)
    }
}

/// Read (source, destination) records from a CSV file of any common dialect.
pub fn read_substitutions(path: &Path) -> Result<Vec<Replacement>, PipelineError> {
    let bytes = fs::read(path).map_err(|source| PipelineError::AuxiliaryFile {
        kind: "substitution",
        path: path.to_path_buf(),
        source,
    })?;

    let dialect = Dialect::sniff(&bytes[..bytes.len().min(SNIFF_LEN)]);
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(dialect.delimiter)
        .quote(dialect.quote)
        .from_reader(bytes.as_slice());

    let mut pairs = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record.map_err(|source| PipelineError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        if record.len() != 2 {
            return Err(PipelineError::MalformedReplacement {
                path: path.to_path_buf(),
                record: index + 1,
                found: record.len(),
            });
        }
        pairs.push(Replacement::new(&record[0], &record[1]));
    }
    Ok(pairs)
}

pub struct ReplaceStage {
    config: ReplaceConfig,
    table: ReplacementTable,
}

impl ReplaceStage {
    pub fn new(config: ReplaceConfig) -> Self {
        Self {
            config,
            table: ReplacementTable::default(),
        }
    }
}

impl ItemStage for ReplaceStage {
    fn open(&mut self) -> Result<(), PipelineError> {
        self.table = ReplacementTable::load(&self.config)?;
        Ok(())
    }

    fn process(&mut self, item: Item) -> Result<Vec<Item>, ItemError> {
        Ok(vec![self.table.apply(item)?])
    }

    fn name(&self) -> &str {
        "replace"
    }
}
