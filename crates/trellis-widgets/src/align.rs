// crates/trellis-widgets/src/align.rs
use glam::Vec2;
use trellis_layout::BoxConstraints;
use trellis_render::RenderContext;

use crate::widget::{Widget, WidgetState};

/// A point in the `[-1, 1] x [-1, 1]` alignment square: `-1` is flush to
/// the start edge, `0` centered, `+1` flush to the end edge, per axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Alignment(pub Vec2);

impl Alignment {
    pub const TOP_LEFT: Alignment = Alignment(Vec2::new(-1.0, -1.0));
    pub const TOP_CENTER: Alignment = Alignment(Vec2::new(0.0, -1.0));
    pub const TOP_RIGHT: Alignment = Alignment(Vec2::new(1.0, -1.0));
    pub const CENTER_LEFT: Alignment = Alignment(Vec2::new(-1.0, 0.0));
    pub const CENTER: Alignment = Alignment(Vec2::new(0.0, 0.0));
    pub const CENTER_RIGHT: Alignment = Alignment(Vec2::new(1.0, 0.0));
    pub const BOTTOM_LEFT: Alignment = Alignment(Vec2::new(-1.0, 1.0));
    pub const BOTTOM_CENTER: Alignment = Alignment(Vec2::new(0.0, 1.0));
    pub const BOTTOM_RIGHT: Alignment = Alignment(Vec2::new(1.0, 1.0));

    pub fn new(x: f32, y: f32) -> Self {
        Alignment(Vec2::new(x, y))
    }
}

impl Default for Alignment {
    fn default() -> Self {
        Alignment::CENTER
    }
}

/// Positions its child inside itself by an alignment vector.
///
/// The child is measured against loosened constraints, so it is never
/// forced to fill. The per-axis `factor` scales the child's size into
/// this widget's own reported size (before constraining).
pub struct Align {
    state: WidgetState,
    child: Box<dyn Widget>,
    alignment: Alignment,
    factor: Vec2,
}

impl Align {
    pub fn new(alignment: Alignment, child: Box<dyn Widget>) -> Self {
        Self {
            state: WidgetState::default(),
            child,
            alignment,
            factor: Vec2::ONE,
        }
    }

    pub fn center(child: Box<dyn Widget>) -> Self {
        Self::new(Alignment::CENTER, child)
    }

    pub fn with_factor(mut self, factor: Vec2) -> Self {
        self.factor = factor;
        self
    }

    pub fn with_width_factor(mut self, factor: f32) -> Self {
        self.factor.x = factor;
        self
    }

    pub fn with_height_factor(mut self, factor: f32) -> Self {
        self.factor.y = factor;
        self
    }
}

impl Widget for Align {
    fn state(&self) -> &WidgetState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut WidgetState {
        &mut self.state
    }

    fn measure(&mut self, constraints: &BoxConstraints) -> Vec2 {
        let wanted = self.child.measure(&constraints.loosen());
        let size = constraints.constrain(wanted * self.factor);
        let pos = (size - wanted) * (self.alignment.0 + Vec2::ONE) / 2.0;
        self.child.set_render_pos(pos);
        size
    }

    fn render(&mut self, ctx: &mut RenderContext<'_>) {
        ctx.scoped(|ctx| {
            ctx.offset += self.state.render_pos;
            self.child.render(ctx);
        });
    }
}
