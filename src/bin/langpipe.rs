//! Run a chain of text-processing stages given on the command line.
//!
//! Usage:
//!   langpipe [-v|-q] <stage> [options] [<stage> [options] ...]
//!
//! Per-item and per-stage failures are reported on stderr and never change
//! the exit status; only usage errors exit non-zero.

use std::rc::Rc;

use langpipe::{Pipeline, config_to_stage, logging, parse_invocation, report_chain_shape};
use langpipe_nlp::{LanguageEngine, UnicodeEngine};
use tracing::{debug, info};

fn main() {
    let invocation = match parse_invocation(std::env::args_os()) {
        Ok(invocation) => invocation,
        Err(err) => err.exit(),
    };
    logging::init(invocation.verbosity);
    report_chain_shape(&invocation.chain);

    if invocation.chain.is_empty() {
        debug!("no stages given");
        return;
    }

    let engine: Rc<dyn LanguageEngine> = Rc::new(UnicodeEngine::new());
    let pipeline: Pipeline = invocation
        .chain
        .into_iter()
        .map(|config| config_to_stage(config, &engine))
        .collect();

    info!(stages = ?pipeline.names(), "running pipeline");
    pipeline.run();
}
