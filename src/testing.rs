//! Test doubles shared by the unit tests.

use std::cell::{Cell, RefCell};
use std::io::{self, Write};
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use langpipe_nlp::{LanguageEngine, NlpError, Resource, TaggedWord, UnicodeEngine};
use tracing_subscriber::fmt::MakeWriter;

use crate::error::ItemError;
use crate::pipeline::{Item, Sequence, from_items};
use crate::stage::{ItemStage, Stage};

/// Source stage emitting fixed items and ignoring its input.
pub struct Emit {
    items: Vec<Item>,
}

impl Emit {
    pub fn new(items: &[&str]) -> Self {
        Self {
            items: items.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Stage for Emit {
    fn name(&self) -> &str {
        "emit"
    }

    fn transform(self: Box<Self>, _input: Sequence) -> Sequence {
        from_items(self.items)
    }
}

/// Uppercases every item.
pub struct Upper;

impl ItemStage for Upper {
    fn process(&mut self, item: Item) -> Result<Vec<Item>, ItemError> {
        Ok(vec![item.to_uppercase()])
    }

    fn name(&self) -> &str {
        "upper"
    }
}

/// Passes items through, counting how many it was asked to process.
pub struct Counter {
    seen: Rc<Cell<usize>>,
}

impl Counter {
    pub fn new(seen: Rc<Cell<usize>>) -> Self {
        Self { seen }
    }
}

impl ItemStage for Counter {
    fn process(&mut self, item: Item) -> Result<Vec<Item>, ItemError> {
        self.seen.set(self.seen.get() + 1);
        Ok(vec![item])
    }

    fn name(&self) -> &str {
        "counter"
    }
}

/// A writer whose contents stay readable after it has been moved into a stage.
#[derive(Clone, Default)]
pub struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.borrow()).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A writer that always fails.
pub struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Wraps the real engine, records resource requests and can be told to fail.
#[derive(Default)]
pub struct ScriptedEngine {
    inner: UnicodeEngine,
    pub ensured: RefCell<Vec<Resource>>,
    /// Lines containing this marker fail to tokenize.
    pub poison: Option<&'static str>,
    /// Every `ensure_resource` call fails.
    pub unavailable: bool,
}

impl ScriptedEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn poisoned(marker: &'static str) -> Self {
        Self {
            poison: Some(marker),
            ..Self::default()
        }
    }

    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    fn check(&self, text: &str) -> Result<(), NlpError> {
        match self.poison {
            Some(marker) if text.contains(marker) => {
                Err(NlpError::UnsupportedLanguage(marker.to_string()))
            }
            _ => Ok(()),
        }
    }
}

impl LanguageEngine for ScriptedEngine {
    fn ensure_resource(&self, resource: Resource) -> Result<(), NlpError> {
        self.ensured.borrow_mut().push(resource);
        if self.unavailable {
            return Err(NlpError::ResourceUnavailable {
                resource,
                message: "offline".to_string(),
            });
        }
        self.inner.ensure_resource(resource)
    }

    fn segment_sentences(&self, text: &str, language: &str) -> Result<Vec<String>, NlpError> {
        self.check(text)?;
        self.inner.segment_sentences(text, language)
    }

    fn tokenize_words(&self, text: &str, language: &str) -> Result<Vec<String>, NlpError> {
        self.check(text)?;
        self.inner.tokenize_words(text, language)
    }

    fn tag_part_of_speech(&self, word: &str) -> Result<TaggedWord, NlpError> {
        self.inner.tag_part_of_speech(word)
    }
}

#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

struct CapturedWriter(Arc<Mutex<Vec<u8>>>);

impl Write for CapturedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if let Ok(mut logs) = self.0.lock() {
            logs.extend_from_slice(buf);
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedWriter;

    fn make_writer(&'a self) -> Self::Writer {
        CapturedWriter(self.0.clone())
    }
}

/// Run `f` with a subscriber that records every event, returning the output
/// of `f` and the rendered log text.
pub fn capture_logs<T>(f: impl FnOnce() -> T) -> (T, String) {
    let logs = CapturedLogs::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(logs.clone())
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .without_time()
        .finish();
    let result = tracing::subscriber::with_default(subscriber, f);
    let text = logs
        .0
        .lock()
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
        .unwrap_or_default();
    (result, text)
}
