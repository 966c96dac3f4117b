//! # The House
//!
//! The hand-authored two-storey house with its garden. Floor 1 is the ground
//! floor plus the garden around it; floor 2 is the upper storey. Both share a
//! six-wide flight of stairs in the top right quarter of the house.

use crate::config::{HOUSE_HEIGHT, HOUSE_START_X, HOUSE_START_Y, HOUSE_WIDTH};
use crate::{
    stair_flight, FloorBuilder, FloorId, FloorLayout, FloorwalkResult, GridConfig, LayoutSource,
    LayoutStore, LayoutTable, Position,
};
use std::collections::BTreeMap;

const HX: i32 = HOUSE_START_X;
const HY: i32 = HOUSE_START_Y;

/// Ground floor and garden.
pub const GROUND_FLOOR: FloorId = FloorId(1);

/// Upper storey.
pub const UPPER_FLOOR: FloorId = FloorId(2);

/// Source for the built-in house layouts.
#[derive(Debug, Clone, Copy, Default)]
pub struct SeedHouse;

impl LayoutSource for SeedHouse {
    fn load(&self) -> FloorwalkResult<LayoutStore> {
        LayoutStore::from_table(seed_table())
    }

    fn source_name(&self) -> String {
        "built-in house".to_string()
    }
}

/// Returns the validated built-in layout store.
pub fn seed_layouts() -> FloorwalkResult<LayoutStore> {
    SeedHouse.load()
}

/// Returns the built-in layout table before validation.
pub fn seed_table() -> LayoutTable {
    let mut floors = BTreeMap::new();
    floors.insert(GROUND_FLOOR, ground_floor());
    floors.insert(UPPER_FLOOR, upper_floor());
    LayoutTable {
        grid: GridConfig::default(),
        floors,
    }
}

fn ground_floor() -> FloorLayout {
    FloorBuilder::new(Position::new(HX + 5, HY + 20))
        .outside()
        // outer walls, with a doorway in the top wall
        .wall_column(HX, HY, HOUSE_HEIGHT)
        .wall_column(HX + HOUSE_WIDTH - 1, HY, HOUSE_HEIGHT)
        .wall_row(HX, HY, HOUSE_WIDTH - 5)
        .wall_row(HX + 27, HY, 2)
        .wall_row(HX, HY + HOUSE_HEIGHT - 1, HOUSE_WIDTH)
        // rooms
        .wall_row(HX, HY + 6, 22)
        .wall_row(HX, HY + 12, 22)
        .wall_row(HX, HY + 18, 22)
        .wall_column(HX + 22, HY + 6, 4)
        .wall_column(HX + 22, HY + 12, 4)
        .wall_column(HX + 22, HY + 18, 3)
        // stairwell
        .wall_row(HX + 16, HY + 3, 7)
        .obstacles(&[(HX + 22, HY + 1), (HX + 22, HY + 2)])
        // pond
        .wall_row(5, 5, 10)
        .wall_row(5, 8, 10)
        .wall_column(5, 5, 4)
        .wall_column(14, 5, 4)
        // trees
        .obstacles(&[
            (5, 20),
            (8, 22),
            (10, 18),
            (50, 15),
            (52, 20),
            (48, 25),
            (30, 40),
            (35, 42),
            (20, 45),
        ])
        // rocks
        .obstacles(&[(25, 5), (55, 12), (8, 35), (45, 45), (53, 38)])
        .staircase(stair_flight(
            HX + 16,
            HY,
            6,
            2,
            UPPER_FLOOR,
            Position::new(HX + 15, HY + 2),
        ))
        .build()
}

fn upper_floor() -> FloorLayout {
    FloorBuilder::new(Position::new(HX + 18, HY + 4))
        // outer walls
        .wall_column(HX, HY, HOUSE_HEIGHT)
        .wall_column(HX + HOUSE_WIDTH - 1, HY, HOUSE_HEIGHT)
        .wall_row(HX + 1, HY, HOUSE_WIDTH - 2)
        .wall_row(HX + 1, HY + HOUSE_HEIGHT - 1, HOUSE_WIDTH - 2)
        // hallway divider
        .wall_column(HX + 15, HY, 12)
        // east bedroom, entered from the gap in its top wall
        .wall_row(HX + 20, HY + 10, 3)
        .wall_row(HX + 25, HY + 10, 4)
        .wall_column(HX + 20, HY + 11, 10)
        .wall_row(HX + 21, HY + 17, 6)
        // broken walls of the west rooms
        .wall_row(HX + 1, HY + 10, 7)
        .wall_row(HX + 1, HY + 14, 7)
        .wall_row(HX + 10, HY + 10, 7)
        // south hall
        .wall_row(HX + 7, HY + 20, 9)
        .wall_row(HX + 18, HY + 20, 3)
        .wall_column(HX + 7, HY + 15, 6)
        // stairwell
        .wall_row(HX + 15, HY + 3, 7)
        .obstacles(&[(HX + 15, HY + 1), (HX + 15, HY + 2)])
        .staircase(stair_flight(
            HX + 16,
            HY,
            6,
            2,
            GROUND_FLOOR,
            Position::new(HX + 22, HY + 2),
        ))
        .build()
}
