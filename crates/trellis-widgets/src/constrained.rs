// crates/trellis-widgets/src/constrained.rs
use glam::Vec2;
use trellis_layout::BoxConstraints;
use trellis_render::RenderContext;

use crate::widget::{Widget, WidgetState};

/// Imposes extra constraints on its child, merged with the incoming ones
/// via [`BoxConstraints::enforce`].
pub struct ConstrainedBox {
    state: WidgetState,
    child: Option<Box<dyn Widget>>,
    constraints: BoxConstraints,
}

impl ConstrainedBox {
    pub fn new(constraints: BoxConstraints, child: Option<Box<dyn Widget>>) -> Self {
        Self { state: WidgetState::default(), child, constraints }
    }

    /// Both axes forced to exactly `size` (the classic sized box).
    pub fn sized(size: Vec2, child: Option<Box<dyn Widget>>) -> Self {
        Self::new(BoxConstraints::tight(size), child)
    }

    /// As large as the incoming constraints allow.
    pub fn expand(child: Option<Box<dyn Widget>>) -> Self {
        Self::sized(Vec2::INFINITY, child)
    }

    /// As small as the incoming constraints allow.
    pub fn shrink(child: Option<Box<dyn Widget>>) -> Self {
        Self::sized(Vec2::ZERO, child)
    }
}

impl Widget for ConstrainedBox {
    fn state(&self) -> &WidgetState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut WidgetState {
        &mut self.state
    }

    fn measure(&mut self, constraints: &BoxConstraints) -> Vec2 {
        let merged = self.constraints.enforce(constraints);
        match &mut self.child {
            Some(child) => child.measure(&merged),
            None => merged.constrain(Vec2::ZERO),
        }
    }

    fn render(&mut self, ctx: &mut RenderContext<'_>) {
        let Some(child) = &mut self.child else { return };
        ctx.scoped(|ctx| {
            ctx.offset += self.state.render_pos;
            child.render(ctx);
        });
    }
}

/// Caps unbounded incoming axes at a maximum size; bounded axes pass
/// through untouched.
pub struct LimitedBox {
    state: WidgetState,
    child: Option<Box<dyn Widget>>,
    max_size: Vec2,
}

impl LimitedBox {
    pub fn new(max_size: Vec2, child: Option<Box<dyn Widget>>) -> Self {
        Self { state: WidgetState::default(), child, max_size }
    }

    fn limit(&self, constraints: &BoxConstraints) -> BoxConstraints {
        BoxConstraints::new(
            constraints.min_width,
            if constraints.has_bounded_width() {
                constraints.max_width
            } else {
                constraints.constrain_width(self.max_size.x)
            },
            constraints.min_height,
            if constraints.has_bounded_height() {
                constraints.max_height
            } else {
                constraints.constrain_height(self.max_size.y)
            },
        )
    }
}

impl Widget for LimitedBox {
    fn state(&self) -> &WidgetState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut WidgetState {
        &mut self.state
    }

    fn measure(&mut self, constraints: &BoxConstraints) -> Vec2 {
        let limited = self.limit(constraints);
        match &mut self.child {
            Some(child) => constraints.constrain(child.measure(&limited)),
            None => limited.constrain(Vec2::ZERO),
        }
    }

    fn render(&mut self, ctx: &mut RenderContext<'_>) {
        let Some(child) = &mut self.child else { return };
        ctx.scoped(|ctx| {
            ctx.offset += self.state.render_pos;
            child.render(ctx);
        });
    }
}
