// crates/trellis-widgets/src/flex.rs
use glam::Vec2;
use tracing::trace;
use trellis_core::{Axis, TextDirection, VerticalDirection};
use trellis_layout::BoxConstraints;
use trellis_render::RenderContext;

use crate::widget::{Widget, WidgetState};

/// Whether a flexible child must consume its full main-axis budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlexFit {
    Tight = 0,
    Loose = 1,
}

impl FlexFit {
    fn from_prop(value: i32) -> Self {
        match value {
            1 => FlexFit::Loose,
            _ => FlexFit::Tight,
        }
    }
}

/// How much main-axis room the container claims for itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainAxisSize {
    Min,
    Max,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainAxisAlignment {
    Start,
    End,
    Center,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

impl MainAxisAlignment {
    /// Splits leftover main-axis space into (leading, between, trailing)
    /// gaps for `n` children.
    ///
    /// `SpaceBetween` with a single child divides by zero; the NaN
    /// propagates to placement rather than being guarded here.
    pub fn distribute(self, free: f32, n: usize) -> (f32, f32, f32) {
        let n = n as f32;
        match self {
            MainAxisAlignment::Start => (0.0, 0.0, free),
            MainAxisAlignment::End => (free, 0.0, 0.0),
            MainAxisAlignment::Center => (free / 2.0, 0.0, free / 2.0),
            MainAxisAlignment::SpaceBetween => (0.0, free / (n - 1.0), 0.0),
            MainAxisAlignment::SpaceAround => (free / (2.0 * n), free / n, free / (2.0 * n)),
            MainAxisAlignment::SpaceEvenly => {
                let gap = free / (n + 1.0);
                (gap, gap, gap)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossAxisAlignment {
    Start,
    End,
    Center,
    Stretch,
    Baseline,
}

impl CrossAxisAlignment {
    /// Cross-axis offset of a child of extent `child_cross` inside a run
    /// of extent `cross_size`. Baseline is unimplemented and yields the
    /// `-1.0` sentinel.
    pub fn cross_offset(self, cross_size: f32, child_cross: f32) -> f32 {
        match self {
            CrossAxisAlignment::Start | CrossAxisAlignment::Stretch => 0.0,
            CrossAxisAlignment::End => cross_size - child_cross,
            CrossAxisAlignment::Center => (cross_size - child_cross) / 2.0,
            CrossAxisAlignment::Baseline => -1.0,
        }
    }
}

/// Ordered children laid out along a main axis with proportional
/// distribution of leftover space.
///
/// Children opt into flexing through their attribute store: `"flex"`
/// (i32 weight, absent = inflexible) and `"fit"` (i32, see [`FlexFit`],
/// absent = tight). Measurement runs two passes: inflexible children
/// first, then flexible ones sharing what is left. A container whose
/// main axis is unbounded cannot flex; its free space is treated as zero
/// and flexible children are starved down to their minimum. That is
/// documented behavior, kept as-is.
pub struct Flex {
    state: WidgetState,
    direction: Axis,
    main_axis_alignment: MainAxisAlignment,
    main_axis_size: MainAxisSize,
    cross_axis_alignment: CrossAxisAlignment,
    text_direction: TextDirection,
    vertical_direction: VerticalDirection,
    children: Vec<Box<dyn Widget>>,
}

impl Flex {
    pub fn new(direction: Axis) -> Self {
        Self {
            state: WidgetState::default(),
            direction,
            main_axis_alignment: MainAxisAlignment::Start,
            main_axis_size: MainAxisSize::Max,
            cross_axis_alignment: CrossAxisAlignment::Center,
            text_direction: TextDirection::default(),
            vertical_direction: VerticalDirection::default(),
            children: Vec::new(),
        }
    }

    pub fn row(children: Vec<Box<dyn Widget>>) -> Self {
        let mut flex = Self::new(Axis::Horizontal);
        flex.children = children;
        flex
    }

    pub fn column(children: Vec<Box<dyn Widget>>) -> Self {
        let mut flex = Self::new(Axis::Vertical);
        flex.children = children;
        flex
    }

    pub fn with_main_axis_alignment(mut self, alignment: MainAxisAlignment) -> Self {
        self.main_axis_alignment = alignment;
        self
    }

    pub fn with_main_axis_size(mut self, size: MainAxisSize) -> Self {
        self.main_axis_size = size;
        self
    }

    pub fn with_cross_axis_alignment(mut self, alignment: CrossAxisAlignment) -> Self {
        self.cross_axis_alignment = alignment;
        self
    }

    pub fn with_text_direction(mut self, direction: TextDirection) -> Self {
        self.text_direction = direction;
        self
    }

    pub fn with_vertical_direction(mut self, direction: VerticalDirection) -> Self {
        self.vertical_direction = direction;
        self
    }

    pub fn child(mut self, child: Box<dyn Widget>) -> Self {
        self.children.push(child);
        self
    }

    pub fn push_child(&mut self, child: Box<dyn Widget>) {
        self.children.push(child);
    }

    fn can_compute_intrinsics(&self) -> bool {
        self.cross_axis_alignment != CrossAxisAlignment::Baseline
    }

    /// Two-pass measurement: inflexible children first against an
    /// unbounded main axis, then flexible children sharing the leftover.
    ///
    /// Every flexible child except the last gets `space_per_flex * flex`;
    /// the last one gets the exact remainder so rounding never loses
    /// space. Returns the container's own size (width/height) and each
    /// child's measured size in child order.
    fn compute_sizes(&mut self, constraints: &BoxConstraints) -> (Vec2, Vec<Vec2>) {
        let direction = self.direction;
        let stretch = self.cross_axis_alignment == CrossAxisAlignment::Stretch;
        let max_main_size = match direction {
            Axis::Horizontal => constraints.max_width,
            Axis::Vertical => constraints.max_height,
        };
        let can_flex = max_main_size < f32::INFINITY;

        let mut total_flex: i32 = 0;
        let mut cross_size: f32 = 0.0;
        let mut allocated_size: f32 = 0.0;
        let mut sizes = vec![Vec2::ZERO; self.children.len()];
        let mut last_flex_child = None;

        // Inflexible children measure against an unbounded main axis.
        let inflexible_inner = if stretch {
            match direction {
                Axis::Horizontal => BoxConstraints::tight_h(constraints.max_height),
                Axis::Vertical => BoxConstraints::tight_w(constraints.max_width),
            }
        } else {
            match direction {
                Axis::Horizontal => {
                    BoxConstraints::new(0.0, f32::INFINITY, 0.0, constraints.max_height)
                }
                Axis::Vertical => {
                    BoxConstraints::new(0.0, constraints.max_width, 0.0, f32::INFINITY)
                }
            }
        };

        for (i, child) in self.children.iter_mut().enumerate() {
            let flex = child.props().get_i32("flex").unwrap_or(0);
            if flex > 0 {
                total_flex += flex;
                last_flex_child = Some(i);
                continue;
            }
            let child_size = child.measure(&inflexible_inner);
            sizes[i] = child_size;
            let main_cross = direction.to_main_cross(child_size);
            allocated_size += main_cross.x;
            cross_size = cross_size.max(main_cross.y);
        }

        let free_space =
            ((if can_flex { max_main_size } else { 0.0 }) - allocated_size).max(0.0);
        let space_per_flex = if can_flex && total_flex > 0 {
            free_space / total_flex as f32
        } else {
            f32::NAN
        };
        if total_flex > 0 {
            trace!(total_flex, free_space, can_flex, "distributing flex space");
        }

        let mut allocated_flex_space: f32 = 0.0;
        for (i, child) in self.children.iter_mut().enumerate() {
            let flex = child.props().get_i32("flex").unwrap_or(0);
            if flex <= 0 {
                continue;
            }
            let max_child_extent = if can_flex {
                if last_flex_child == Some(i) {
                    free_space - allocated_flex_space
                } else {
                    space_per_flex * flex as f32
                }
            } else {
                f32::INFINITY
            };
            let fit = FlexFit::from_prop(child.props().get_i32("fit").unwrap_or(0));
            let min_child_extent = match fit {
                FlexFit::Tight => max_child_extent,
                FlexFit::Loose => 0.0,
            };
            let inner =
                flex_child_constraints(direction, stretch, constraints, min_child_extent, max_child_extent);
            let child_size = child.measure(&inner);
            sizes[i] = child_size;
            let main_cross = direction.to_main_cross(child_size);
            debug_assert!(main_cross.x <= max_child_extent);
            allocated_size += main_cross.x;
            allocated_flex_space += max_child_extent;
            cross_size = cross_size.max(main_cross.y);
        }

        let ideal_size = if can_flex && self.main_axis_size == MainAxisSize::Max {
            max_main_size
        } else {
            allocated_size
        };
        let size = direction.from_main_cross(Vec2::new(ideal_size, cross_size));
        (size, sizes)
    }

    /// Walks the measured children with a main-axis cursor, then mirrors
    /// the already-placed offsets when the reading or vertical direction
    /// reverses the axis. Gaps are placement-only; they were never part
    /// of allocated space.
    fn position_children(&mut self, sizes: &[Vec2], main_size: f32, cross_size: f32) {
        let direction = self.direction;
        let cross_alignment = self.cross_axis_alignment;
        let used_main: f32 = sizes.iter().map(|s| direction.to_main_cross(*s).x).sum();
        let (leading, between, _trailing) = self
            .main_axis_alignment
            .distribute(main_size - used_main, sizes.len());

        let main_backwards = (direction == Axis::Horizontal
            && self.text_direction == TextDirection::Rtl)
            || (direction == Axis::Vertical
                && self.vertical_direction == VerticalDirection::Up);
        let cross_backwards = (direction == Axis::Vertical
            && self.text_direction == TextDirection::Rtl)
            || (direction == Axis::Horizontal
                && self.vertical_direction == VerticalDirection::Up);

        let mut cursor = leading;
        for (i, (child, size)) in self.children.iter_mut().zip(sizes).enumerate() {
            let main_cross = direction.to_main_cross(*size);
            if i != 0 {
                cursor += between;
            }
            let mut main = cursor;
            let mut cross = cross_alignment.cross_offset(cross_size, main_cross.y);
            cursor += main_cross.x;
            if cross_backwards {
                cross = cross_size - cross;
            }
            if main_backwards {
                main = main_size - main - main_cross.x;
            }
            child.set_render_pos(direction.from_main_cross(Vec2::new(main, cross)));
        }
    }
}

/// Constraints for a flexible child with a fixed main-axis budget.
fn flex_child_constraints(
    direction: Axis,
    stretch: bool,
    constraints: &BoxConstraints,
    min_main: f32,
    max_main: f32,
) -> BoxConstraints {
    if stretch {
        match direction {
            Axis::Horizontal => BoxConstraints::new(
                min_main,
                max_main,
                constraints.max_height,
                constraints.max_height,
            ),
            Axis::Vertical => BoxConstraints::new(
                constraints.max_width,
                constraints.max_width,
                min_main,
                max_main,
            ),
        }
    } else {
        match direction {
            Axis::Horizontal => BoxConstraints::new(min_main, max_main, 0.0, constraints.max_height),
            Axis::Vertical => BoxConstraints::new(0.0, constraints.max_width, min_main, max_main),
        }
    }
}

impl Widget for Flex {
    fn state(&self) -> &WidgetState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut WidgetState {
        &mut self.state
    }

    fn measure(&mut self, constraints: &BoxConstraints) -> Vec2 {
        if !self.can_compute_intrinsics() {
            return Vec2::ZERO;
        }
        let (size, sizes) = self.compute_sizes(constraints);
        let new_size = constraints.constrain(size);
        let main_cross = self.direction.to_main_cross(new_size);
        self.position_children(&sizes, main_cross.x, main_cross.y);
        new_size
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

/// Marks its child as flexible for an enclosing [`Flex`].
///
/// Writes `"fit"` into its own attribute store at construction and
/// `"flex"` through [`Flexible::flex`]; the enclosing container reads
/// both off this widget directly.
pub struct Flexible {
    state: WidgetState,
    child: Box<dyn Widget>,
}

impl Flexible {
    pub fn new(child: Box<dyn Widget>) -> Self {
        Self::with_fit(child, FlexFit::Loose)
    }

    /// A tight-fit flexible child: forced to consume its full budget.
    pub fn expanded(child: Box<dyn Widget>) -> Self {
        Self::with_fit(child, FlexFit::Tight)
    }

    pub fn with_fit(child: Box<dyn Widget>, fit: FlexFit) -> Self {
        let mut state = WidgetState::default();
        state.props.set("fit", fit as i32);
        Self { state, child }
    }

    pub fn flex(mut self, weight: i32) -> Self {
        self.state.props.set("flex", weight);
        self
    }
}

impl Widget for Flexible {
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
            self.child.render(ctx);
        });
    }
}

/// An empty tight-fit child with weight 1: soaks up leftover space.
pub fn spacer() -> Flexible {
    Flexible::expanded(Box::new(crate::constrained::ConstrainedBox::shrink(None))).flex(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fill::Fill;
    use glam::Vec4;
    use trellis_render::{RecordingSink, RenderContext};

    fn fill(w: f32, h: f32) -> Box<dyn Widget> {
        Box::new(Fill::new(Vec2::new(w, h), Vec4::ONE))
    }

    fn render_positions(flex: &mut Flex) -> Vec<Vec2> {
        let mut sink = RecordingSink::new();
        {
            let mut ctx = RenderContext::new(&mut sink);
            flex.render(&mut ctx);
        }
        sink.primitives().iter().map(|p| p.origin).collect()
    }

    #[test]
    fn test_last_flex_child_gets_exact_remainder() {
        // 300 of free space split between weights 1 and 2: the first
        // child is budgeted 100, the last takes the remainder 200.
        let mut row = Flex::row(vec![
            Box::new(Flexible::expanded(fill(10.0, 10.0)).flex(1)),
            Box::new(Flexible::expanded(fill(10.0, 10.0)).flex(2)),
        ]);
        let size = row.measure(&BoxConstraints::new(0.0, 300.0, 0.0, 50.0));
        assert_eq!(size.x, 300.0);

        let positions = render_positions(&mut row);
        assert_eq!(positions[0].x, 0.0);
        assert_eq!(positions[1].x, 100.0);
    }

    #[test]
    fn test_tight_fit_forces_budget_loose_fit_does_not() {
        let mut row = Flex::row(vec![
            Box::new(Flexible::expanded(fill(10.0, 10.0)).flex(1)),
            Box::new(Flexible::new(fill(10.0, 10.0)).flex(1)),
        ]);
        row.measure(&BoxConstraints::new(0.0, 200.0, 0.0, 50.0));
        // Tight child fills its 100 budget; loose child keeps its own 10.
        let positions = render_positions(&mut row);
        assert_eq!(positions[1].x, 100.0);
    }

    #[test]
    fn test_gap_distribution_table() {
        assert_eq!(
            MainAxisAlignment::SpaceBetween.distribute(100.0, 3),
            (0.0, 50.0, 0.0)
        );
        assert_eq!(
            MainAxisAlignment::Center.distribute(100.0, 3),
            (50.0, 0.0, 50.0)
        );
        assert_eq!(
            MainAxisAlignment::SpaceEvenly.distribute(100.0, 3),
            (25.0, 25.0, 25.0)
        );
        assert_eq!(
            MainAxisAlignment::SpaceAround.distribute(120.0, 3),
            (20.0, 40.0, 20.0)
        );
        assert_eq!(MainAxisAlignment::Start.distribute(80.0, 2), (0.0, 0.0, 80.0));
        assert_eq!(MainAxisAlignment::End.distribute(80.0, 2), (80.0, 0.0, 0.0));
    }

    #[test]
    fn test_space_between_placement() {
        let mut row = Flex::row(vec![fill(50.0, 10.0), fill(50.0, 10.0), fill(50.0, 10.0)])
            .with_main_axis_alignment(MainAxisAlignment::SpaceBetween);
        row.measure(&BoxConstraints::new(0.0, 250.0, 0.0, 10.0));
        let positions = render_positions(&mut row);
        assert_eq!(positions[0].x, 0.0);
        assert_eq!(positions[1].x, 100.0);
        assert_eq!(positions[2].x, 200.0);
    }

    #[test]
    fn test_unbounded_main_axis_starves_flex_children() {
        // Free space against an infinite bound is treated as zero; the
        // loose flex child collapses to its minimum.
        let mut row = Flex::row(vec![
            fill(40.0, 10.0),
            Box::new(Flexible::new(fill(30.0, 10.0)).flex(1)),
        ]);
        let size = row.measure(&BoxConstraints::new(0.0, f32::INFINITY, 0.0, 20.0));
        assert_eq!(size.x, 70.0);
    }

    #[test]
    fn test_main_axis_size_min_hugs_children() {
        let mut row = Flex::row(vec![fill(40.0, 10.0), fill(60.0, 10.0)])
            .with_main_axis_size(MainAxisSize::Min);
        let size = row.measure(&BoxConstraints::new(0.0, 500.0, 0.0, 20.0));
        assert_eq!(size.x, 100.0);

        let mut row = Flex::row(vec![fill(40.0, 10.0), fill(60.0, 10.0)]);
        let size = row.measure(&BoxConstraints::new(0.0, 500.0, 0.0, 20.0));
        assert_eq!(size.x, 500.0);
    }

    #[test]
    fn test_cross_axis_alignment_offsets() {
        assert_eq!(CrossAxisAlignment::Start.cross_offset(100.0, 40.0), 0.0);
        assert_eq!(CrossAxisAlignment::Stretch.cross_offset(100.0, 40.0), 0.0);
        assert_eq!(CrossAxisAlignment::End.cross_offset(100.0, 40.0), 60.0);
        assert_eq!(CrossAxisAlignment::Center.cross_offset(100.0, 40.0), 30.0);
        assert_eq!(CrossAxisAlignment::Baseline.cross_offset(100.0, 40.0), -1.0);
    }

    #[test]
    fn test_column_transposes_axes() {
        let mut column = Flex::column(vec![fill(30.0, 40.0), fill(50.0, 60.0)])
            .with_main_axis_size(MainAxisSize::Min)
            .with_cross_axis_alignment(CrossAxisAlignment::Start);
        let size = column.measure(&BoxConstraints::loose(Vec2::new(200.0, 200.0)));
        assert_eq!(size, Vec2::new(50.0, 100.0));
        let positions = render_positions(&mut column);
        assert_eq!(positions[0], Vec2::new(0.0, 0.0));
        assert_eq!(positions[1], Vec2::new(0.0, 40.0));
    }

    #[test]
    fn test_rtl_mirrors_placed_offsets() {
        let mut row = Flex::row(vec![fill(40.0, 10.0), fill(60.0, 10.0)])
            .with_text_direction(TextDirection::Rtl);
        row.measure(&BoxConstraints::new(0.0, 200.0, 0.0, 10.0));
        let positions = render_positions(&mut row);
        // First child mirrors from 0 to 200 - 0 - 40, second from 40 to
        // 200 - 40 - 60.
        assert_eq!(positions[0].x, 160.0);
        assert_eq!(positions[1].x, 100.0);
    }

    #[test]
    fn test_bottom_up_column_mirrors_placed_offsets() {
        let mut column = Flex::column(vec![fill(10.0, 30.0), fill(10.0, 50.0)])
            .with_vertical_direction(VerticalDirection::Up);
        column.measure(&BoxConstraints::new(0.0, 10.0, 0.0, 100.0));
        let positions = render_positions(&mut column);
        assert_eq!(positions[0].y, 70.0);
        assert_eq!(positions[1].y, 20.0);
    }

    #[test]
    fn test_stretch_forces_cross_extent() {
        let mut row = Flex::row(vec![fill(40.0, 10.0)])
            .with_cross_axis_alignment(CrossAxisAlignment::Stretch);
        let size = row.measure(&BoxConstraints::new(0.0, 100.0, 0.0, 80.0));
        assert_eq!(size.y, 80.0);
    }

    #[test]
    fn test_baseline_alignment_measures_to_zero() {
        let mut row = Flex::row(vec![fill(40.0, 10.0)])
            .with_cross_axis_alignment(CrossAxisAlignment::Baseline);
        let size = row.measure(&BoxConstraints::new(0.0, 100.0, 0.0, 80.0));
        assert_eq!(size, Vec2::ZERO);
    }

    #[test]
    fn test_spacer_soaks_up_free_space() {
        let mut row = Flex::row(vec![fill(50.0, 10.0), Box::new(spacer()), fill(50.0, 10.0)]);
        row.measure(&BoxConstraints::new(0.0, 300.0, 0.0, 10.0));
        let positions = render_positions(&mut row);
        assert_eq!(positions[0].x, 0.0);
        assert_eq!(positions[1].x, 250.0);
    }
}
