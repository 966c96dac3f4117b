//! # Viewport
//!
//! Pure computation of the visible window around the player. Nothing here
//! draws; the host UI paints the [`CellKind`] grid however it likes.

use crate::config::VIEW_RANGE;
use crate::{
    FloorId, FloorLayout, FloorwalkResult, GridConfig, LayoutStore, Position, SessionState,
};
use serde::{Deserialize, Serialize};

/// Viewport settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Tiles shown on each side of the player
    pub half_range: i32,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            half_range: VIEW_RANGE,
        }
    }
}

impl ViewConfig {
    /// Creates a view with the given half range.
    pub const fn new(half_range: i32) -> Self {
        Self { half_range }
    }

    /// Side length of the square window, in tiles.
    pub fn size(&self) -> i32 {
        self.half_range.max(0) * 2
    }
}

/// Display category of one viewport cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellKind {
    /// Beyond the edge of the grid
    Void,
    Obstacle,
    Player,
    /// Walkable stair tile
    StairActive,
    Railing,
    /// Open ground outside the building
    Outdoor,
    /// Any other floor tile
    Indoor,
}

impl CellKind {
    /// Single-character representation used by text dumps.
    pub fn glyph(self) -> char {
        match self {
            CellKind::Void => ' ',
            CellKind::Obstacle => '#',
            CellKind::Player => '@',
            CellKind::StairActive => '>',
            CellKind::Railing => '=',
            CellKind::Outdoor => '"',
            CellKind::Indoor => '.',
        }
    }
}

/// Classifies a single grid cell.
///
/// Priority is obstacle, player, walkable stair, railing, then terrain.
pub fn classify_cell(
    grid: &GridConfig,
    layout: &FloorLayout,
    player: Position,
    position: Position,
) -> CellKind {
    if !grid.contains(position) {
        CellKind::Void
    } else if layout.is_obstacle(position) {
        CellKind::Obstacle
    } else if position == player {
        CellKind::Player
    } else if layout.staircase_at(position).is_some() {
        CellKind::StairActive
    } else if layout.has_railing_at(position) {
        CellKind::Railing
    } else if layout.is_outside && !grid.footprint.contains(position) {
        CellKind::Outdoor
    } else {
        CellKind::Indoor
    }
}

/// A classified square window of the current floor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewportFrame {
    /// Floor the window shows
    pub floor: FloorId,
    /// Grid coordinate of the top-left cell
    pub origin: Position,
    /// Side length in cells
    pub size: i32,
    cells: Vec<CellKind>,
}

impl ViewportFrame {
    /// Renders the window around the player for `state`.
    ///
    /// The origin is clamped at zero on both axes, but the far edge is not
    /// clamped, so cells past the grid come back as [`CellKind::Void`].
    pub fn render(
        store: &LayoutStore,
        state: SessionState,
        view: &ViewConfig,
    ) -> FloorwalkResult<Self> {
        let layout = store.get_layout(state.current_floor)?;
        let grid = store.grid();
        let player = state.player_position;
        let size = view.size();
        let origin = Position::new(
            (player.x - view.half_range).max(0),
            (player.y - view.half_range).max(0),
        );

        let mut cells = Vec::with_capacity((size * size) as usize);
        for row in 0..size {
            for col in 0..size {
                let position = Position::new(origin.x + col, origin.y + row);
                cells.push(classify_cell(grid, layout, player, position));
            }
        }

        Ok(Self {
            floor: state.current_floor,
            origin,
            size,
            cells,
        })
    }

    /// Returns the cell at window coordinates (col, row).
    pub fn get(&self, col: i32, row: i32) -> Option<CellKind> {
        if col < 0 || row < 0 || col >= self.size || row >= self.size {
            return None;
        }
        self.cells.get((row * self.size + col) as usize).copied()
    }

    /// Returns the cell showing grid coordinate `position`, if it is in view.
    pub fn cell_at(&self, position: Position) -> Option<CellKind> {
        self.get(position.x - self.origin.x, position.y - self.origin.y)
    }

    /// Returns the grid coordinate shown at window coordinates (col, row).
    pub fn world_position(&self, col: i32, row: i32) -> Position {
        Position::new(self.origin.x + col, self.origin.y + row)
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[CellKind] {
        &self.cells
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[CellKind]> {
        self.cells.chunks(self.size.max(1) as usize)
    }

    /// Renders the frame as text, one line per row.
    pub fn to_ascii(&self) -> String {
        self.rows()
            .map(|row| row.iter().map(|cell| cell.glyph()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Side-channel readout of where the player is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusReadout {
    pub floor: FloorId,
    pub floor_label: String,
    pub position: Position,
}

impl StatusReadout {
    /// Builds the readout for `state`.
    pub fn for_state(store: &LayoutStore, state: SessionState) -> FloorwalkResult<Self> {
        let layout = store.get_layout(state.current_floor)?;
        let floor_label = if layout.is_outside {
            format!("Floor {} & Outside", state.current_floor)
        } else {
            format!("Floor {}", state.current_floor)
        };
        Ok(Self {
            floor: state.current_floor,
            floor_label,
            position: state.player_position,
        })
    }

    /// Coordinates line, e.g. `X: 20, Y: 30`.
    pub fn coordinates(&self) -> String {
        format!("X: {}, Y: {}", self.position.x, self.position.y)
    }
}
