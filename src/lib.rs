// src/lib.rs
pub use trellis_core::*;
pub use trellis_layout::*;
pub use trellis_render::*;
pub use trellis_widgets::*;
