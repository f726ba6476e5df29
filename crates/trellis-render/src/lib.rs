// crates/trellis-render/src/lib.rs
pub mod context;
pub mod sink;

pub use context::*;
pub use sink::*;
