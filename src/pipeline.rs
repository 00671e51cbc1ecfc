//! Lazy item streams and left-to-right stage composition.
//!
//! A [`Sequence`] is a single-pass iterator of [`Item`]s. Composing a chain of
//! stages does no work by itself: each stage wraps the stream of the stage
//! before it, and nothing moves until the final stream is pulled, normally by
//! [`drain`].

use tracing::debug;

use crate::stage::Stage;

/// A unit of text flowing through the pipeline: a line (possibly still
/// carrying its terminator) or a token.
pub type Item = String;

/// A lazy, single-pass stream of items.
pub type Sequence = Box<dyn Iterator<Item = Item>>;

/// The stream with no items.
pub fn empty() -> Sequence {
    Box::new(std::iter::empty())
}

/// Stream the given items.
pub fn from_items<I>(items: I) -> Sequence
where
    I: IntoIterator<Item = Item>,
    I::IntoIter: 'static,
{
    Box::new(items.into_iter())
}

/// Stream the lines of `text`, each keeping its trailing newline.
pub fn from_lines(text: &str) -> Sequence {
    let lines: Vec<Item> = text.split_inclusive('\n').map(str::to_string).collect();
    from_items(lines)
}

/// A stream whose construction is postponed until its first item is pulled.
pub fn deferred<F>(build: F) -> Sequence
where
    F: FnOnce() -> Sequence + 'static,
{
    Box::new(Deferred {
        build: Some(build),
        running: None,
    })
}

struct Deferred<F> {
    build: Option<F>,
    running: Option<Sequence>,
}

impl<F> Iterator for Deferred<F>
where
    F: FnOnce() -> Sequence,
{
    type Item = Item;

    fn next(&mut self) -> Option<Item> {
        if let Some(build) = self.build.take() {
            self.running = Some(build());
        }
        self.running.as_mut()?.next()
    }
}

/// Fold `stages` left to right, starting from the empty stream.
///
/// Stage *i + 1* receives exactly the output of stage *i*.
pub fn compose<I>(stages: I) -> Sequence
where
    I: IntoIterator<Item = Box<dyn Stage>>,
{
    stages.into_iter().fold(empty(), |stream, stage| {
        debug!(stage = stage.name(), "linking stage");
        stage.transform(stream)
    })
}

/// Pull `stream` to exhaustion, discarding every item.
pub fn drain(stream: Sequence) {
    let count = stream.count();
    debug!(count, "pipeline drained");
}

/// An ordered chain of stages, built up before anything runs.
#[derive(Default)]
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a stage to the end of the chain.
    pub fn then(mut self, stage: Box<dyn Stage>) -> Self {
        self.stages.push(stage);
        self
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Stage names in chain order.
    pub fn names(&self) -> Vec<&str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }

    /// The composed, still unevaluated output stream.
    pub fn into_sequence(self) -> Sequence {
        compose(self.stages)
    }

    /// Compose and drain.
    pub fn run(self) {
        drain(self.into_sequence());
    }
}

impl FromIterator<Box<dyn Stage>> for Pipeline {
    fn from_iter<T: IntoIterator<Item = Box<dyn Stage>>>(iter: T) -> Self {
        Self {
            stages: iter.into_iter().collect(),
        }
    }
}
