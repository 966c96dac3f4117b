//! # Layout Construction
//!
//! Building blocks for authoring floor layouts and the sources a session can
//! take its layout table from.
//!
//! Layouts are assembled from straight wall runs and single obstacles with
//! [`FloorBuilder`], then handed to [`LayoutStore::new`] for validation. A
//! [`LayoutSource`] is anything that can produce a validated store: the
//! hand-authored house in [`house`], or a JSON file on disk.

pub mod house;

pub use house::*;

use crate::{FloorId, FloorLayout, FloorwalkResult, LayoutStore, Position, StairTile, Staircase};
use log::info;
use std::path::PathBuf;

/// Trait for anything that can supply a validated layout store.
pub trait LayoutSource {
    /// Builds and validates the layout store.
    fn load(&self) -> FloorwalkResult<LayoutStore>;

    /// Human-readable name of the source, for logging.
    fn source_name(&self) -> String;
}

/// Layout table read from a JSON file.
#[derive(Debug, Clone)]
pub struct JsonLayoutFile {
    pub path: PathBuf,
}

impl JsonLayoutFile {
    /// Creates a source for the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl LayoutSource for JsonLayoutFile {
    fn load(&self) -> FloorwalkResult<LayoutStore> {
        info!("Loading layouts from {}", self.path.display());
        LayoutStore::load_from_path(&self.path)
    }

    fn source_name(&self) -> String {
        format!("json file {}", self.path.display())
    }
}

/// Incremental builder for a single [`FloorLayout`].
///
/// # Examples
///
/// ```
/// use floorwalk::{FloorBuilder, Position};
///
/// let layout = FloorBuilder::new(Position::new(1, 1))
///     .wall_row(0, 0, 5)
///     .wall_column(0, 0, 5)
///     .obstacle(3, 3)
///     .build();
///
/// assert_eq!(layout.obstacles.len(), 10);
/// assert!(layout.is_obstacle(Position::new(4, 0)));
/// ```
#[derive(Debug, Clone)]
pub struct FloorBuilder {
    layout: FloorLayout,
}

impl FloorBuilder {
    /// Starts an empty indoor floor with the given spawn point.
    pub fn new(player_start: Position) -> Self {
        Self {
            layout: FloorLayout::new(player_start),
        }
    }

    /// Marks the area outside the building footprint as open terrain.
    pub fn outside(mut self) -> Self {
        self.layout.is_outside = true;
        self
    }

    /// Adds a single obstacle.
    pub fn obstacle(mut self, x: i32, y: i32) -> Self {
        self.layout.obstacles.insert(Position::new(x, y));
        self
    }

    /// Adds several single obstacles.
    pub fn obstacles(mut self, cells: &[(i32, i32)]) -> Self {
        self.layout
            .obstacles
            .extend(cells.iter().map(|&(x, y)| Position::new(x, y)));
        self
    }

    /// Adds a horizontal run of `length` obstacles starting at (x, y).
    pub fn wall_row(mut self, x: i32, y: i32, length: i32) -> Self {
        self.layout
            .obstacles
            .extend((0..length).map(|i| Position::new(x + i, y)));
        self
    }

    /// Adds a vertical run of `length` obstacles starting at (x, y).
    pub fn wall_column(mut self, x: i32, y: i32, length: i32) -> Self {
        self.layout
            .obstacles
            .extend((0..length).map(|i| Position::new(x, y + i)));
        self
    }

    /// Appends a staircase; earlier staircases take precedence.
    pub fn staircase(mut self, staircase: Staircase) -> Self {
        self.layout.staircases.push(staircase);
        self
    }

    /// Finishes the floor.
    pub fn build(self) -> FloorLayout {
        self.layout
    }
}

/// A straight flight of stairs: a railing row on `top`, with `depth` rows of
/// walkable steps beneath it, each `width` tiles wide starting at `left`.
pub fn stair_flight(
    left: i32,
    top: i32,
    width: i32,
    depth: i32,
    target_floor: FloorId,
    exit: Position,
) -> Staircase {
    let steps = (0..width)
        .flat_map(|dx| (1..=depth).map(move |dy| StairTile::step(left + dx, top + dy)));
    let railings = (0..width).map(|dx| StairTile::railing(left + dx, top));

    Staircase {
        tiles: steps.chain(railings).collect(),
        target_floor,
        entry: exit,
        exit,
    }
}
