//! # Floorwalk
//!
//! A small tile-based walkabout: one player moves around a fixed grid made of a
//! two-storey house and its garden, climbing between floors on staircases.
//!
//! ## Architecture Overview
//!
//! - **Layout Store**: immutable per-floor data (obstacles, staircases, spawn
//!   point, outdoor flag), validated once at construction
//! - **Movement Engine**: a pure step function from session state and a
//!   direction to the next session state
//! - **Viewport Renderer**: classifies every cell of a window around the player
//!   into a display category for the host UI to paint
//!
//! The hand-authored house lives in [`generation`]; any other table of floors
//! can be injected instead, which is how the tests build small worlds.

pub mod game;
pub mod generation;
pub mod input;
pub mod rendering;

pub use game::*;
pub use generation::*;
pub use input::*;
pub use rendering::*;

/// Core error type for the Floorwalk engine.
#[derive(thiserror::Error, Debug)]
pub enum FloorwalkError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// A floor identifier that is not registered in the layout store
    #[error("Unregistered floor: {0}")]
    UnknownFloor(FloorId),

    /// A staircase leads nowhere usable
    #[error("Staircase on floor {from} to floor {target} has no destination: {reason}")]
    MissingDestination {
        from: FloorId,
        target: FloorId,
        reason: String,
    },

    /// The layout table breaks an invariant
    #[error("Invalid layout: {0}")]
    InvalidLayout(String),
}

/// Result type used throughout the Floorwalk codebase.
pub type FloorwalkResult<T> = Result<T, FloorwalkError>;

/// Version information for the demo.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build-time configuration constants.
pub mod config {
    /// Grid width in tiles
    pub const GRID_WIDTH: i32 = 60;

    /// Grid height in tiles
    pub const GRID_HEIGHT: i32 = 50;

    /// Left edge of the house footprint
    pub const HOUSE_START_X: i32 = 15;

    /// Top edge of the house footprint
    pub const HOUSE_START_Y: i32 = 10;

    /// House footprint width in tiles
    pub const HOUSE_WIDTH: i32 = 30;

    /// House footprint height in tiles
    pub const HOUSE_HEIGHT: i32 = 24;

    /// Tiles shown on each side of the player
    pub const VIEW_RANGE: i32 = 24;

    /// Cell width in pixels
    pub const CELL_WIDTH: f32 = 18.0;

    /// Cell height in pixels
    pub const CELL_HEIGHT: f32 = 15.0;
}
