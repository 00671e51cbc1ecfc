//! The `trace` stage: echo each item, then pass it on unchanged.

use std::io::Write;

use crate::error::ItemError;
use crate::pipeline::Item;
use crate::stage::ItemStage;

/// Writes every item to `out` (one per line) and forwards it untouched.
pub struct TraceStage<W> {
    out: W,
}

impl<W: Write> TraceStage<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> ItemStage for TraceStage<W> {
    fn process(&mut self, item: Item) -> Result<Vec<Item>, ItemError> {
        let shown = item.trim_end_matches(['\r', '\n']);
        match writeln!(self.out, "{shown}") {
            Ok(()) => Ok(vec![item]),
            Err(source) => Err(ItemError::Trace { item, source }),
        }
    }

    fn name(&self) -> &str {
        "trace"
    }
}
