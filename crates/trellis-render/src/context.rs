// crates/trellis-render/src/context.rs
use glam::{Vec2, Vec4};

use crate::sink::{DrawSink, RectPrimitive};

/// Scratch state threaded through the render traversal.
///
/// `offset` and `depth` accumulate down the tree. Every subtree visit
/// must wrap its mutations in [`RenderContext::scoped`] so sibling
/// subtrees never observe each other's accumulated transform.
pub struct RenderContext<'a> {
    pub offset: Vec2,
    pub depth: f32,
    sink: &'a mut dyn DrawSink,
}

impl<'a> RenderContext<'a> {
    pub fn new(sink: &'a mut dyn DrawSink) -> Self {
        Self { offset: Vec2::ZERO, depth: 0.0, sink }
    }

    /// Emits a rectangle fill at the given absolute origin and the
    /// currently accumulated depth.
    pub fn fill_rect(&mut self, origin: Vec2, size: Vec2, color: Vec4) {
        self.sink.fill_rect(RectPrimitive { origin, size, depth: self.depth, color });
    }

    /// Saves offset and depth, runs `f`, restores them on exit.
    pub fn scoped<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        let offset = self.offset;
        let depth = self.depth;
        let out = f(self);
        self.offset = offset;
        self.depth = depth;
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::RecordingSink;

    #[test]
    fn test_scoped_restores_offset_and_depth() {
        let mut sink = RecordingSink::new();
        let mut ctx = RenderContext::new(&mut sink);
        ctx.offset = Vec2::new(5.0, 5.0);
        ctx.depth = 1.0;
        ctx.scoped(|ctx| {
            ctx.offset += Vec2::new(10.0, 20.0);
            ctx.depth += 3.0;
            ctx.scoped(|ctx| {
                ctx.offset = Vec2::ZERO;
                ctx.depth = 100.0;
            });
            assert_eq!(ctx.offset, Vec2::new(15.0, 25.0));
            assert_eq!(ctx.depth, 4.0);
        });
        assert_eq!(ctx.offset, Vec2::new(5.0, 5.0));
        assert_eq!(ctx.depth, 1.0);
    }

    #[test]
    fn test_fill_rect_uses_accumulated_depth() {
        let mut sink = RecordingSink::new();
        {
            let mut ctx = RenderContext::new(&mut sink);
            ctx.depth = 7.0;
            ctx.fill_rect(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0), Vec4::ONE);
        }
        let prims = sink.primitives();
        assert_eq!(prims.len(), 1);
        assert_eq!(prims[0].origin, Vec2::new(1.0, 2.0));
        assert_eq!(prims[0].size, Vec2::new(3.0, 4.0));
        assert_eq!(prims[0].depth, 7.0);
    }
}
