//! The `read-lines` source stage.
//!
//! Paths are opened lazily, one at a time, in argument order. A path that
//! cannot be opened (or fails part-way) is reported and skipped; the
//! remaining paths are still read.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::error::PipelineError;
use crate::pipeline::{Item, Sequence};
use crate::stage::Stage;

/// Path argument meaning "read standard input".
pub const STDIN_MARKER: &str = "-";

/// Source stage yielding the lines of each configured path.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadLines {
    paths: Vec<PathBuf>,
}

impl ReadLines {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }
}

impl Stage for ReadLines {
    fn name(&self) -> &str {
        "read-lines"
    }

    /// The upstream stream is ignored.
    fn transform(self: Box<Self>, _input: Sequence) -> Sequence {
        Box::new(LineSource::new(self.paths))
    }
}

/// Lazy iterator over the lines of several inputs, terminators included.
pub struct LineSource {
    paths: std::vec::IntoIter<PathBuf>,
    current: Option<OpenInput>,
}

struct OpenInput {
    path: PathBuf,
    reader: Box<dyn BufRead>,
}

impl LineSource {
    pub fn new(paths: Vec<PathBuf>) -> Self {
        Self {
            paths: paths.into_iter(),
            current: None,
        }
    }
}

impl Iterator for LineSource {
    type Item = Item;

    fn next(&mut self) -> Option<Item> {
        loop {
            if let Some(input) = self.current.as_mut() {
                let mut line = String::new();
                match input.reader.read_line(&mut line) {
                    Ok(0) => debug!(path = %input.path.display(), "end of input"),
                    Ok(_) => return Some(line),
                    Err(source) => {
                        let err = PipelineError::SourceRead {
                            path: input.path.clone(),
                            source,
                        };
                        warn!("{err}");
                    }
                }
                // Dropping the reader closes the file
                self.current = None;
                continue;
            }

            let path = self.paths.next()?;
            match open_input(&path) {
                Ok(input) => self.current = Some(input),
                Err(err) => warn!("{err}"),
            }
        }
    }
}

fn open_input(path: &Path) -> Result<OpenInput, PipelineError> {
    info!("opening \"{}\"", path.display());

    let reader: Box<dyn BufRead> = if path.as_os_str() == STDIN_MARKER {
        Box::new(io::stdin().lock())
    } else {
        let file = File::open(path).map_err(|source| PipelineError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
        Box::new(BufReader::new(file))
    };

    Ok(OpenInput {
        path: path.to_path_buf(),
        reader,
    })
}
