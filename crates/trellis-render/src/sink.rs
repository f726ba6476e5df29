// crates/trellis-render/src/sink.rs
use glam::{Vec2, Vec4};

/// One axis-aligned rectangle fill, the only primitive the core emits.
///
/// `depth` is a draw-order key for the sink's z-sorting; it has no
/// geometric meaning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectPrimitive {
    pub origin: Vec2,
    pub size: Vec2,
    pub depth: f32,
    pub color: Vec4,
}

#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("draw batch submission failed: {0}")]
    SubmitFailed(String),
}

pub type SinkResult<T> = std::result::Result<T, SinkError>;

/// The external primitive sink.
///
/// The core calls `fill_rect` any number of times per render pass; the
/// sink owns batching, GPU state and the once-per-frame flush.
pub trait DrawSink {
    fn fill_rect(&mut self, rect: RectPrimitive);

    /// Submits everything accumulated since the last flush.
    fn flush(&mut self) -> SinkResult<()>;
}

/// A sink that records primitives in emission order. Used by tests and
/// the demo driver in place of a GPU batcher.
#[derive(Debug, Default)]
pub struct RecordingSink {
    primitives: Vec<RectPrimitive>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn primitives(&self) -> &[RectPrimitive] {
        &self.primitives
    }

    pub fn clear(&mut self) {
        self.primitives.clear();
    }
}

impl DrawSink for RecordingSink {
    fn fill_rect(&mut self, rect: RectPrimitive) {
        self.primitives.push(rect);
    }

    fn flush(&mut self) -> SinkResult<()> {
        Ok(())
    }
}
