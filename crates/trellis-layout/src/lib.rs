// crates/trellis-layout/src/lib.rs
pub mod constraints;

pub use constraints::*;
