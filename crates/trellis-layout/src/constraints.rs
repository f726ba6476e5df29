// crates/trellis-layout/src/constraints.rs
use glam::Vec2;
use trellis_core::Insets;

/// An admissible range of sizes, per axis, handed down from a parent to a
/// child during the measure pass.
///
/// A normalized space satisfies `0 <= min <= max` on each axis
/// independently; `max` may be `f32::INFINITY`. The operations below are
/// pure and never repair malformed inputs on their own -- call
/// [`BoxConstraints::normalize`] where repair is wanted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxConstraints {
    pub min_width: f32,
    pub max_width: f32,
    pub min_height: f32,
    pub max_height: f32,
}

impl Default for BoxConstraints {
    fn default() -> Self {
        Self::none()
    }
}

impl BoxConstraints {
    pub fn new(min_width: f32, max_width: f32, min_height: f32, max_height: f32) -> Self {
        Self { min_width, max_width, min_height, max_height }
    }

    /// Both axes forced to exactly `size`.
    pub fn tight(size: Vec2) -> Self {
        Self::new(size.x, size.x, size.y, size.y)
    }

    pub fn tight_wh(w: f32, h: f32) -> Self {
        Self::new(w, w, h, h)
    }

    /// Width forced to `w`, height unbounded.
    pub fn tight_w(w: f32) -> Self {
        Self::new(w, w, 0.0, f32::INFINITY)
    }

    /// Height forced to `h`, width unbounded.
    pub fn tight_h(h: f32) -> Self {
        Self::new(0.0, f32::INFINITY, h, h)
    }

    /// Zero minimums, maximums at `size`.
    pub fn loose(size: Vec2) -> Self {
        Self::new(0.0, size.x, 0.0, size.y)
    }

    /// The fully unconstrained space: `[0, inf)` on both axes.
    pub fn none() -> Self {
        Self::new(0.0, f32::INFINITY, 0.0, f32::INFINITY)
    }

    /// Shrinks both bounds by the given edge insets.
    ///
    /// The resulting minimum floors at zero and the resulting maximum
    /// floors at that adjusted minimum, so the result stays normalized
    /// even when the insets exceed the original bounds.
    pub fn deflate(&self, edges: Insets) -> Self {
        let horizontal = edges.horizontal();
        let vertical = edges.vertical();
        let min_width = (self.min_width - horizontal).max(0.0);
        let min_height = (self.min_height - vertical).max(0.0);
        Self::new(
            min_width,
            (self.max_width - horizontal).max(min_width),
            min_height,
            (self.max_height - vertical).max(min_height),
        )
    }

    /// Drops the minimums, keeping only the upper bounds.
    pub fn loosen(&self) -> Self {
        Self::new(0.0, self.max_width, 0.0, self.max_height)
    }

    /// Clamps this space's bounds into `other`'s range, per axis.
    ///
    /// This is a clamp, not a set intersection: when `self.min` exceeds
    /// `other.max` the resulting minimum is pulled down to `other.max`
    /// rather than left inconsistent.
    pub fn enforce(&self, other: &BoxConstraints) -> Self {
        Self::new(
            self.min_width.clamp(other.min_width, other.max_width),
            self.max_width.clamp(other.min_width, other.max_width),
            self.min_height.clamp(other.min_height, other.max_height),
            self.max_height.clamp(other.min_height, other.max_height),
        )
    }

    /// Forces both axes tight at `(w, h)` clamped into this space.
    pub fn tighten(&self, w: f32, h: f32) -> Self {
        let w = w.clamp(self.min_width, self.max_width);
        let h = h.clamp(self.min_height, self.max_height);
        Self::new(w, w, h, h)
    }

    /// Forces the width tight at `w` clamped into this space.
    pub fn tighten_w(&self, w: f32) -> Self {
        let w = w.clamp(self.min_width, self.max_width);
        Self::new(w, w, self.min_height, self.max_height)
    }

    /// Forces the height tight at `h` clamped into this space.
    pub fn tighten_h(&self, h: f32) -> Self {
        let h = h.clamp(self.min_height, self.max_height);
        Self::new(self.min_width, self.max_width, h, h)
    }

    /// Swaps the two axes.
    pub fn flipped(&self) -> Self {
        Self::new(self.min_height, self.max_height, self.min_width, self.max_width)
    }

    /// Keeps the width bounds, unbinding the height.
    pub fn width_constraints(&self) -> Self {
        Self::new(self.min_width, self.max_width, 0.0, f32::INFINITY)
    }

    /// Keeps the height bounds, unbinding the width.
    pub fn height_constraints(&self) -> Self {
        Self::new(0.0, f32::INFINITY, self.min_height, self.max_height)
    }

    pub fn constrain_width(&self, width: f32) -> f32 {
        width.clamp(self.min_width, self.max_width)
    }

    pub fn constrain_height(&self, height: f32) -> f32 {
        height.clamp(self.min_height, self.max_height)
    }

    /// Clamps `size` into this space, per axis independently.
    pub fn constrain(&self, size: Vec2) -> Vec2 {
        Vec2::new(self.constrain_width(size.x), self.constrain_height(size.y))
    }

    /// Clamps `size` into this space while attempting to keep its aspect
    /// ratio.
    ///
    /// Requires strictly positive starting dimensions; violating that is
    /// a caller bug, not a recoverable error. The four corrections run in
    /// a fixed order (max width, max height, min width, min height), each
    /// recomputing the other dimension from the ratio. Later corrections
    /// may undo earlier ones; the last bound applied wins, and the final
    /// independent `constrain` settles any remainder.
    pub fn constrain_preserving_aspect_ratio(&self, size: Vec2) -> Vec2 {
        if self.is_tight() {
            return self.smallest();
        }
        let mut width = size.x;
        let mut height = size.y;
        assert!(width > 0.0);
        assert!(height > 0.0);
        let aspect_ratio = width / height;
        if width > self.max_width {
            width = self.max_width;
            height = width / aspect_ratio;
        }
        if height > self.max_height {
            height = self.max_height;
            width = height * aspect_ratio;
        }
        if width < self.min_width {
            width = self.min_width;
            height = width / aspect_ratio;
        }
        if height < self.min_height {
            height = self.min_height;
            width = height * aspect_ratio;
        }
        self.constrain(Vec2::new(width, height))
    }

    /// The largest size this space admits.
    pub fn biggest(&self) -> Vec2 {
        Vec2::new(self.max_width, self.max_height)
    }

    /// The smallest size this space admits.
    pub fn smallest(&self) -> Vec2 {
        Vec2::new(self.min_width, self.min_height)
    }

    pub fn has_tight_width(&self) -> bool {
        self.min_width == self.max_width
    }

    pub fn has_tight_height(&self) -> bool {
        self.min_height == self.max_height
    }

    pub fn is_tight(&self) -> bool {
        self.has_tight_width() && self.has_tight_height()
    }

    pub fn has_bounded_width(&self) -> bool {
        self.max_width < f32::INFINITY
    }

    pub fn has_bounded_height(&self) -> bool {
        self.max_height < f32::INFINITY
    }

    pub fn has_infinite_width(&self) -> bool {
        self.max_width >= f32::INFINITY
    }

    pub fn has_infinite_height(&self) -> bool {
        self.max_height >= f32::INFINITY
    }

    pub fn is_normalized(&self) -> bool {
        self.min_width >= 0.0
            && self.min_width <= self.max_width
            && self.min_height >= 0.0
            && self.max_height >= self.min_height
    }

    pub fn is_satisfied_by(&self, size: Vec2) -> bool {
        size.x >= self.min_width
            && size.x <= self.max_width
            && size.y >= self.min_height
            && size.y <= self.max_height
    }

    /// Repairs a malformed space: minimums floor at zero, maximums rise
    /// to at least the floored minimum. Identity on normalized spaces.
    pub fn normalize(&self) -> Self {
        if self.is_normalized() {
            return *self;
        }
        let min_width = self.min_width.max(0.0);
        let min_height = self.min_height.max(0.0);
        Self::new(
            min_width,
            self.max_width.max(min_width),
            min_height,
            self.max_height.max(min_height),
        )
    }
}

impl std::ops::Mul<f32> for BoxConstraints {
    type Output = BoxConstraints;

    fn mul(self, factor: f32) -> BoxConstraints {
        BoxConstraints::new(
            self.min_width * factor,
            self.max_width * factor,
            self.min_height * factor,
            self.max_height * factor,
        )
    }
}

impl std::ops::Div<f32> for BoxConstraints {
    type Output = BoxConstraints;

    fn div(self, factor: f32) -> BoxConstraints {
        BoxConstraints::new(
            self.min_width / factor,
            self.max_width / factor,
            self.min_height / factor,
            self.max_height / factor,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tight_and_loose_constructors() {
        let tight = BoxConstraints::tight(Vec2::new(80.0, 60.0));
        assert!(tight.is_tight());
        assert!(tight.has_tight_width());
        assert!(tight.has_tight_height());
        assert_eq!(tight.smallest(), tight.biggest());

        let loose = BoxConstraints::loose(Vec2::new(80.0, 60.0));
        assert_eq!(loose.smallest(), Vec2::ZERO);
        assert_eq!(loose.biggest(), Vec2::new(80.0, 60.0));
        assert!(!loose.is_tight());

        let none = BoxConstraints::none();
        assert!(none.has_infinite_width());
        assert!(none.has_infinite_height());
        assert!(!none.has_bounded_width());
    }

    #[test]
    fn test_constrain_satisfies_constraints() {
        let cases = [
            BoxConstraints::new(10.0, 100.0, 20.0, 50.0),
            BoxConstraints::tight_wh(40.0, 40.0),
            BoxConstraints::none(),
            BoxConstraints::new(5.0, f32::INFINITY, 0.0, 1.0),
        ];
        let sizes = [
            Vec2::ZERO,
            Vec2::new(1000.0, 1000.0),
            Vec2::new(15.0, 35.0),
            Vec2::new(0.5, 0.5),
        ];
        for c in &cases {
            for s in &sizes {
                let constrained = c.constrain(*s);
                assert!(c.is_satisfied_by(constrained), "{:?} not satisfied by {:?}", c, constrained);
            }
        }
    }

    #[test]
    fn test_enforce_result_fits_other() {
        let a = BoxConstraints::new(0.0, 500.0, 0.0, 500.0);
        let b = BoxConstraints::new(50.0, 100.0, 60.0, 120.0);
        let e = a.enforce(&b);
        assert!(b.is_satisfied_by(e.smallest()));
        assert!(b.is_satisfied_by(e.biggest()));

        // A min above other's max gets pulled down, not left inconsistent.
        let wide = BoxConstraints::new(300.0, 400.0, 0.0, 10.0);
        let narrow = BoxConstraints::new(0.0, 100.0, 0.0, 10.0);
        let e = wide.enforce(&narrow);
        assert_eq!(e.min_width, 100.0);
        assert_eq!(e.max_width, 100.0);
        assert!(e.is_normalized());
    }

    #[test]
    fn test_deflate_stays_normalized() {
        let c = BoxConstraints::new(10.0, 100.0, 10.0, 100.0);
        let d = c.deflate(Insets::all(3.0));
        assert_eq!(d.min_width, 4.0);
        assert_eq!(d.max_width, 94.0);
        assert!(d.is_normalized());

        // Insets larger than the bounds floor everything at zero.
        let d = c.deflate(Insets::all(80.0));
        assert_eq!(d.min_width, 0.0);
        assert_eq!(d.max_width, 0.0);
        assert!(d.is_normalized());
    }

    #[test]
    fn test_tighten_clamps_candidate() {
        let c = BoxConstraints::new(10.0, 100.0, 20.0, 50.0);
        let t = c.tighten(5.0, 500.0);
        assert_eq!(t.min_width, 10.0);
        assert_eq!(t.max_width, 10.0);
        assert_eq!(t.min_height, 50.0);
        assert_eq!(t.max_height, 50.0);

        let tw = c.tighten_w(60.0);
        assert!(tw.has_tight_width());
        assert_eq!(tw.min_width, 60.0);
        assert_eq!(tw.min_height, c.min_height);
        assert_eq!(tw.max_height, c.max_height);

        let th = c.tighten_h(25.0);
        assert!(th.has_tight_height());
        assert_eq!(th.min_height, 25.0);
    }

    #[test]
    fn test_loosen_and_flipped() {
        let c = BoxConstraints::new(10.0, 100.0, 20.0, 50.0);
        let l = c.loosen();
        assert_eq!(l.smallest(), Vec2::ZERO);
        assert_eq!(l.biggest(), c.biggest());

        let f = c.flipped();
        assert_eq!(f.min_width, 20.0);
        assert_eq!(f.max_width, 50.0);
        assert_eq!(f.min_height, 10.0);
        assert_eq!(f.max_height, 100.0);

        assert_eq!(c.width_constraints().max_height, f32::INFINITY);
        assert_eq!(c.height_constraints().max_width, f32::INFINITY);
    }

    #[test]
    fn test_aspect_ratio_width_bound_applied_first() {
        let c = BoxConstraints::new(0.0, 100.0, 0.0, 1000.0);
        let r = c.constrain_preserving_aspect_ratio(Vec2::new(200.0, 100.0));
        assert_eq!(r, Vec2::new(100.0, 50.0));
    }

    #[test]
    fn test_aspect_ratio_last_bound_wins() {
        // Min height correction runs last and overrides the earlier max
        // width correction; the final constrain settles the width.
        let c = BoxConstraints::new(0.0, 100.0, 80.0, 1000.0);
        let r = c.constrain_preserving_aspect_ratio(Vec2::new(200.0, 100.0));
        assert_eq!(r.y, 80.0);
        assert_eq!(r.x, 100.0);
    }

    #[test]
    fn test_aspect_ratio_tight_short_circuits() {
        let c = BoxConstraints::tight_wh(30.0, 40.0);
        let r = c.constrain_preserving_aspect_ratio(Vec2::new(200.0, 100.0));
        assert_eq!(r, Vec2::new(30.0, 40.0));
    }

    #[test]
    fn test_normalize() {
        let ok = BoxConstraints::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(ok.normalize(), ok);

        let bad = BoxConstraints::new(-5.0, 3.0, 10.0, 2.0);
        let n = bad.normalize();
        assert!(n.is_normalized());
        assert_eq!(n.min_width, 0.0);
        assert_eq!(n.max_width, 3.0);
        assert_eq!(n.min_height, 10.0);
        assert_eq!(n.max_height, 10.0);
    }

    #[test]
    fn test_scaling_operators() {
        let c = BoxConstraints::new(10.0, 20.0, 30.0, 40.0);
        let doubled = c * 2.0;
        assert_eq!(doubled.min_width, 20.0);
        assert_eq!(doubled.max_height, 80.0);
        let halved = c / 2.0;
        assert_eq!(halved.min_width, 5.0);
        assert_eq!(halved.max_height, 20.0);
    }
}
