// crates/trellis-widgets/src/position.rs
use glam::Vec2;
use trellis_layout::BoxConstraints;
use trellis_render::RenderContext;

use crate::widget::{Widget, WidgetState};

/// Pins its child at an explicit coordinate.
///
/// Measures the child against an unconstrained space, ignores its own
/// incoming constraints and reports zero size upward, so it never
/// participates in the parent's sizing. With [`PositionBox::absolute`]
/// set, the accumulated offset is reset to zero before descending, so
/// every repositioning ancestor between the root and this node is
/// bypassed; depth still accumulates from ancestor elevation.
pub struct PositionBox {
    state: WidgetState,
    child: Box<dyn Widget>,
    pos: Vec2,
    absolute: bool,
}

impl PositionBox {
    pub fn new(pos: Vec2, child: Box<dyn Widget>) -> Self {
        Self { state: WidgetState::default(), child, pos, absolute: false }
    }

    pub fn absolute(mut self) -> Self {
        self.absolute = true;
        self
    }
}

impl Widget for PositionBox {
    fn state(&self) -> &WidgetState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut WidgetState {
        &mut self.state
    }

    fn measure(&mut self, _constraints: &BoxConstraints) -> Vec2 {
        self.child.measure(&BoxConstraints::none());
        self.child.set_render_pos(self.pos);
        Vec2::ZERO
    }

    fn render(&mut self, ctx: &mut RenderContext<'_>) {
        ctx.scoped(|ctx| {
            ctx.offset = if self.absolute {
                Vec2::ZERO
            } else {
                self.state.render_pos
            };
            self.child.render(ctx);
        });
    }
}

/// Raises the depth of its subtree by a fixed delta. Pure draw-order
/// state; geometry is untouched.
pub struct Elevate {
    state: WidgetState,
    child: Box<dyn Widget>,
    z: f32,
}

impl Elevate {
    pub fn new(z: f32, child: Box<dyn Widget>) -> Self {
        Self { state: WidgetState::default(), child, z }
    }
}

impl Widget for Elevate {
    fn state(&self) -> &WidgetState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut WidgetState {
        &mut self.state
    }

    fn measure(&mut self, constraints: &BoxConstraints) -> Vec2 {
        self.child.measure(constraints)
    }

    fn render(&mut self, ctx: &mut RenderContext<'_>) {
        ctx.scoped(|ctx| {
            ctx.offset += self.state.render_pos;
            ctx.depth += self.z;
            self.child.render(ctx);
        });
    }
}
