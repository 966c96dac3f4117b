//! # World Representation
//!
//! Static floor layouts and the store that serves them.
//!
//! Everything in this module is immutable once a [`LayoutStore`] has been built.
//! The store validates the whole table up front so that the movement engine
//! can rely on every staircase having somewhere to arrive.

use crate::config::{
    GRID_HEIGHT, GRID_WIDTH, HOUSE_HEIGHT, HOUSE_START_X, HOUSE_START_Y, HOUSE_WIDTH,
};
use crate::{FloorId, FloorwalkError, FloorwalkResult, Position};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

/// An axis-aligned rectangle of tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Creates a rectangle from its top-left corner and size.
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns true if the position lies inside the rectangle.
    pub fn contains(&self, position: Position) -> bool {
        position.x >= self.x
            && position.x < self.x + self.width
            && position.y >= self.y
            && position.y < self.y + self.height
    }
}

/// Grid dimensions and the building footprint used for terrain shading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Grid width in tiles
    pub width: i32,
    /// Grid height in tiles
    pub height: i32,
    /// Rectangle covered by the building
    pub footprint: Rect,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            footprint: Rect::new(HOUSE_START_X, HOUSE_START_Y, HOUSE_WIDTH, HOUSE_HEIGHT),
        }
    }
}

impl GridConfig {
    /// Returns true if the position is on the grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use floorwalk::{GridConfig, Position};
    ///
    /// let grid = GridConfig::default();
    /// assert!(grid.contains(Position::new(0, 0)));
    /// assert!(!grid.contains(Position::new(grid.width, 0)));
    /// ```
    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0 && position.x < self.width && position.y >= 0 && position.y < self.height
    }

    /// Clamps each axis of the position independently onto the grid.
    pub fn clamp(&self, position: Position) -> Position {
        Position::new(
            position.x.clamp(0, self.width - 1),
            position.y.clamp(0, self.height - 1),
        )
    }
}

/// One tile of a staircase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StairTile {
    pub x: i32,
    pub y: i32,
    /// Railings are drawn as part of the staircase but never trigger it
    #[serde(default)]
    pub is_railing: bool,
}

impl StairTile {
    /// Creates a walkable stair tile.
    pub const fn step(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            is_railing: false,
        }
    }

    /// Creates a decorative railing tile.
    pub const fn railing(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            is_railing: true,
        }
    }

    /// Returns the tile coordinates.
    pub const fn position(&self) -> Position {
        Position::new(self.x, self.y)
    }
}

/// A staircase connecting the floor that owns it to `target_floor`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Staircase {
    /// Stair and railing tiles, in authoring order
    pub tiles: Vec<StairTile>,
    /// Floor reached by walking onto a stair tile
    pub target_floor: FloorId,
    /// Where the staircase is entered on this floor
    pub entry: Position,
    /// Where a player arriving on this floor appears
    pub exit: Position,
}

impl Staircase {
    /// Returns true if a non-railing tile of this staircase is at `position`.
    pub fn triggers_at(&self, position: Position) -> bool {
        self.tiles
            .iter()
            .any(|tile| !tile.is_railing && tile.position() == position)
    }

    /// Returns true if a railing tile of this staircase is at `position`.
    pub fn has_railing_at(&self, position: Position) -> bool {
        self.tiles
            .iter()
            .any(|tile| tile.is_railing && tile.position() == position)
    }
}

/// Static layout of a single floor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorLayout {
    /// Impassable cells
    pub obstacles: HashSet<Position>,
    /// Staircases leaving this floor, in resolution order
    pub staircases: Vec<Staircase>,
    /// Where a new session on this floor begins
    pub player_start: Position,
    /// Whether the area around the building is open terrain
    #[serde(default)]
    pub is_outside: bool,
}

impl FloorLayout {
    /// Creates an empty indoor floor with the given spawn point.
    pub fn new(player_start: Position) -> Self {
        Self {
            obstacles: HashSet::new(),
            staircases: Vec::new(),
            player_start,
            is_outside: false,
        }
    }

    /// Returns true if the position is an obstacle on this floor.
    pub fn is_obstacle(&self, position: Position) -> bool {
        self.obstacles.contains(&position)
    }

    /// Finds the first staircase with a non-railing tile at `position`.
    pub fn staircase_at(&self, position: Position) -> Option<&Staircase> {
        self.staircases
            .iter()
            .find(|staircase| staircase.triggers_at(position))
    }

    /// Returns true if any staircase has a railing tile at `position`.
    pub fn has_railing_at(&self, position: Position) -> bool {
        self.staircases
            .iter()
            .any(|staircase| staircase.has_railing_at(position))
    }
}

/// Serializable form of a complete layout table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutTable {
    /// Grid shared by every floor
    #[serde(default)]
    pub grid: GridConfig,
    /// Floors keyed by identifier
    pub floors: BTreeMap<FloorId, FloorLayout>,
}

/// Read-only store of validated floor layouts.
///
/// # Examples
///
/// ```
/// use floorwalk::{FloorId, FloorLayout, GridConfig, LayoutStore, Position};
/// use std::collections::BTreeMap;
///
/// let mut floors = BTreeMap::new();
/// floors.insert(FloorId(1), FloorLayout::new(Position::new(2, 2)));
/// let store = LayoutStore::new(GridConfig::default(), floors).unwrap();
///
/// assert!(store.get_layout(FloorId(1)).is_ok());
/// assert!(store.get_layout(FloorId(9)).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct LayoutStore {
    grid: GridConfig,
    floors: BTreeMap<FloorId, FloorLayout>,
}

impl LayoutStore {
    /// Creates a store after validating every floor and staircase.
    pub fn new(
        grid: GridConfig,
        floors: BTreeMap<FloorId, FloorLayout>,
    ) -> FloorwalkResult<Self> {
        let store = Self { grid, floors };
        store.validate()?;
        debug!("Layout store ready with {} floor(s)", store.floors.len());
        Ok(store)
    }

    /// Creates a store from a deserialized table.
    pub fn from_table(table: LayoutTable) -> FloorwalkResult<Self> {
        Self::new(table.grid, table.floors)
    }

    /// Parses and validates a JSON layout table.
    pub fn from_json(json: &str) -> FloorwalkResult<Self> {
        let table: LayoutTable = serde_json::from_str(json)?;
        Self::from_table(table)
    }

    /// Reads, parses and validates a JSON layout table from disk.
    pub fn load_from_path(path: impl AsRef<Path>) -> FloorwalkResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serializes the store back into a pretty-printed JSON table.
    pub fn to_json(&self) -> FloorwalkResult<String> {
        Ok(serde_json::to_string_pretty(&self.to_table())?)
    }

    /// Returns a serializable copy of the store contents.
    pub fn to_table(&self) -> LayoutTable {
        LayoutTable {
            grid: self.grid,
            floors: self.floors.clone(),
        }
    }

    /// Returns the grid configuration.
    pub fn grid(&self) -> &GridConfig {
        &self.grid
    }

    /// Returns the layout for `floor`.
    pub fn get_layout(&self, floor: FloorId) -> FloorwalkResult<&FloorLayout> {
        self.floors
            .get(&floor)
            .ok_or(FloorwalkError::UnknownFloor(floor))
    }

    /// Returns all registered floor identifiers in ascending order.
    pub fn floor_ids(&self) -> impl Iterator<Item = FloorId> + '_ {
        self.floors.keys().copied()
    }

    /// Returns the lowest registered floor, where sessions begin.
    pub fn first_floor(&self) -> FloorwalkResult<FloorId> {
        self.floor_ids()
            .next()
            .ok_or_else(|| FloorwalkError::InvalidLayout("no floors registered".to_string()))
    }

    /// Resolves where a player leaving `from` via `staircase` appears.
    ///
    /// The arrival point is the exit of the first staircase on the target
    /// floor that leads back to `from`. When none does, the target floor's
    /// first staircase is used.
    pub fn arrival_exit(&self, from: FloorId, staircase: &Staircase) -> FloorwalkResult<Position> {
        let target = staircase.target_floor;
        let destination =
            self.floors
                .get(&target)
                .ok_or_else(|| FloorwalkError::MissingDestination {
                    from,
                    target,
                    reason: "target floor is not registered".to_string(),
                })?;

        destination
            .staircases
            .iter()
            .find(|candidate| candidate.target_floor == from)
            .or_else(|| destination.staircases.first())
            .map(|arrival| arrival.exit)
            .ok_or_else(|| FloorwalkError::MissingDestination {
                from,
                target,
                reason: "target floor has no staircases".to_string(),
            })
    }

    fn validate(&self) -> FloorwalkResult<()> {
        if self.floors.is_empty() {
            return Err(FloorwalkError::InvalidLayout(
                "no floors registered".to_string(),
            ));
        }
        if self.grid.width <= 0 || self.grid.height <= 0 {
            return Err(FloorwalkError::InvalidLayout(format!(
                "grid must be non-empty, got {}x{}",
                self.grid.width, self.grid.height
            )));
        }

        for (&floor, layout) in &self.floors {
            self.check_standable(floor, layout, layout.player_start, "player start")?;

            for staircase in &layout.staircases {
                self.check_standable(floor, layout, staircase.exit, "staircase exit")?;
                self.arrival_exit(floor, staircase)?;
            }

            let stray = layout
                .obstacles
                .iter()
                .filter(|obstacle| !self.grid.contains(**obstacle))
                .count();
            if stray > 0 {
                warn!("Floor {} has {} obstacle(s) outside the grid", floor, stray);
            }
        }

        Ok(())
    }

    fn check_standable(
        &self,
        floor: FloorId,
        layout: &FloorLayout,
        position: Position,
        what: &str,
    ) -> FloorwalkResult<()> {
        if !self.grid.contains(position) {
            return Err(FloorwalkError::InvalidLayout(format!(
                "{} {} on floor {} is outside the grid",
                what, position, floor
            )));
        }
        if layout.is_obstacle(position) {
            return Err(FloorwalkError::InvalidLayout(format!(
                "{} {} on floor {} is an obstacle",
                what, position, floor
            )));
        }
        Ok(())
    }
}
