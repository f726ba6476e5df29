// crates/trellis-widgets/src/widget.rs
use glam::Vec2;
use trellis_core::WidgetProps;
use trellis_layout::BoxConstraints;
use trellis_render::RenderContext;

/// Per-node scratch every widget carries.
///
/// `render_pos` is written by the parent during its measure, and
/// `render_size` by the widget itself; both are consumed by the widget's
/// own render. They are per-frame caches, overwritten on every pass and
/// never diffed against a previous frame.
#[derive(Debug, Clone, Default)]
pub struct WidgetState {
    pub render_pos: Vec2,
    pub render_size: Vec2,
    pub props: WidgetProps,
}

/// The node capability interface.
///
/// Frame contract: `measure` runs on a node before `render` does, and the
/// returned size must satisfy the constraints it was given (positioning
/// nodes, which opt out of parent sizing, are the documented exception).
/// `render` must leave the context exactly as it found it.
pub trait Widget {
    fn state(&self) -> &WidgetState;
    fn state_mut(&mut self) -> &mut WidgetState;

    fn measure(&mut self, constraints: &BoxConstraints) -> Vec2;
    fn render(&mut self, ctx: &mut RenderContext<'_>);

    fn render_pos(&self) -> Vec2 {
        self.state().render_pos
    }

    fn set_render_pos(&mut self, pos: Vec2) {
        self.state_mut().render_pos = pos;
    }

    fn render_size(&self) -> Vec2 {
        self.state().render_size
    }

    fn set_render_size(&mut self, size: Vec2) {
        self.state_mut().render_size = size;
    }

    fn props(&self) -> &WidgetProps {
        &self.state().props
    }

    fn props_mut(&mut self) -> &mut WidgetProps {
        &mut self.state_mut().props
    }
}

/// Single-child pass-through container.
///
/// Delegates measurement unchanged; with no child it reports the
/// constraint space's smallest satisfiable size.
pub struct Wrapper {
    state: WidgetState,
    child: Option<Box<dyn Widget>>,
}

impl Wrapper {
    pub fn new(child: Box<dyn Widget>) -> Self {
        Self { state: WidgetState::default(), child: Some(child) }
    }

    pub fn empty() -> Self {
        Self { state: WidgetState::default(), child: None }
    }
}

impl Widget for Wrapper {
    fn state(&self) -> &WidgetState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut WidgetState {
        &mut self.state
    }

    fn measure(&mut self, constraints: &BoxConstraints) -> Vec2 {
        match &mut self.child {
            Some(child) => child.measure(constraints),
            None => constraints.smallest(),
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

/// Ordered overlay of children.
///
/// Every child is measured against the same incoming constraints; the
/// children overlay rather than arrange, and the stack itself always
/// reports the smallest satisfiable size. Later children draw on top of
/// earlier ones at the same depth.
pub struct Stack {
    state: WidgetState,
    children: Vec<Box<dyn Widget>>,
}

impl Stack {
    pub fn new(children: Vec<Box<dyn Widget>>) -> Self {
        Self { state: WidgetState::default(), children }
    }

    pub fn child(mut self, child: Box<dyn Widget>) -> Self {
        self.children.push(child);
        self
    }
}

impl Widget for Stack {
    fn state(&self) -> &WidgetState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut WidgetState {
        &mut self.state
    }

    fn measure(&mut self, constraints: &BoxConstraints) -> Vec2 {
        for child in &mut self.children {
            child.measure(constraints);
        }
        constraints.smallest()
    }

    fn render(&mut self, ctx: &mut RenderContext<'_>) {
        ctx.scoped(|ctx| {
            ctx.offset += self.state.render_pos;
            for child in &mut self.children {
                child.render(ctx);
            }
        });
    }
}
