// crates/trellis-core/src/lib.rs
pub mod geometry;
pub mod props;

pub use geometry::*;
pub use props::*;
