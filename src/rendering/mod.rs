//! # Rendering Module
//!
//! Viewport computation and the macroquad display that paints it.

pub mod display;
pub mod viewport;

pub use display::*;
pub use viewport::*;
