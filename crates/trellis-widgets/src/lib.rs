// crates/trellis-widgets/src/lib.rs
pub mod align;
pub mod constrained;
pub mod fill;
pub mod flex;
pub mod position;
pub mod widget;

pub use align::*;
pub use constrained::*;
pub use fill::*;
pub use flex::*;
pub use position::*;
pub use widget::*;
