// crates/trellis-widgets/src/fill.rs
use glam::{Vec2, Vec4};
use trellis_layout::BoxConstraints;
use trellis_render::RenderContext;

use crate::widget::{Widget, WidgetState};

/// Leaf widget: a solid rectangle with a preferred size.
///
/// Measures to its preferred size clamped into the incoming constraints
/// and emits a single fill primitive at the accumulated offset and depth.
pub struct Fill {
    state: WidgetState,
    size: Vec2,
    color: Vec4,
}

impl Fill {
    pub fn new(size: Vec2, color: Vec4) -> Self {
        Self { state: WidgetState::default(), size, color }
    }

    pub fn set_size(&mut self, size: Vec2) {
        self.size = size;
    }

    pub fn set_color(&mut self, color: Vec4) {
        self.color = color;
    }
}

impl Widget for Fill {
    fn state(&self) -> &WidgetState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut WidgetState {
        &mut self.state
    }

    fn measure(&mut self, constraints: &BoxConstraints) -> Vec2 {
        self.state.render_size = constraints.constrain(self.size);
        self.state.render_size
    }

    fn render(&mut self, ctx: &mut RenderContext<'_>) {
        let origin = ctx.offset + self.state.render_pos;
        ctx.fill_rect(origin, self.state.render_size, self.color);
    }
}
