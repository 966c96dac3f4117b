//! Integration tests for the viewport renderer over the built-in house.

use floorwalk::{
    seed_layouts, CellKind, FloorId, FloorLayout, FloorwalkResult, GridConfig, LayoutStore,
    Position, Rect, SessionState, StairTile, Staircase, StatusReadout, ViewConfig, ViewportFrame,
    GROUND_FLOOR, UPPER_FLOOR,
};
use std::collections::BTreeMap;

#[test]
fn test_window_is_always_full_size() -> FloorwalkResult<()> {
    let store = seed_layouts()?;
    let view = ViewConfig::default();
    let corners = [
        Position::new(0, 0),
        Position::new(59, 0),
        Position::new(0, 49),
        Position::new(59, 49),
        Position::new(30, 25),
    ];

    for position in corners {
        let state = SessionState::new(GROUND_FLOOR, position);
        let frame = ViewportFrame::render(&store, state, &view)?;
        assert_eq!(frame.size, 48);
        assert_eq!(frame.cells().len(), 48 * 48);
        assert_eq!(frame.rows().count(), 48);
        assert!(frame.rows().all(|row| row.len() == 48));
    }

    Ok(())
}

#[test]
fn test_origin_clamps_low_but_not_high() -> FloorwalkResult<()> {
    let store = seed_layouts()?;
    let view = ViewConfig::default();

    let top_left = ViewportFrame::render(
        &store,
        SessionState::new(GROUND_FLOOR, Position::new(3, 4)),
        &view,
    )?;
    assert_eq!(top_left.origin, Position::new(0, 0));
    assert!(top_left.cells().iter().all(|cell| *cell != CellKind::Void));

    let bottom_right = ViewportFrame::render(
        &store,
        SessionState::new(GROUND_FLOOR, Position::new(59, 49)),
        &view,
    )?;
    assert_eq!(bottom_right.origin, Position::new(35, 25));
    // columns 25.. and rows 25.. fall past the grid edge
    assert_eq!(bottom_right.get(24, 24), Some(CellKind::Player));
    assert_eq!(bottom_right.get(25, 0), Some(CellKind::Void));
    assert_eq!(bottom_right.get(0, 25), Some(CellKind::Void));
    assert_eq!(bottom_right.get(47, 47), Some(CellKind::Void));
    let void_cells = bottom_right
        .cells()
        .iter()
        .filter(|cell| **cell == CellKind::Void)
        .count();
    assert_eq!(void_cells, 48 * 48 - 25 * 25);

    Ok(())
}

#[test]
fn test_ground_floor_shows_garden_and_house() -> FloorwalkResult<()> {
    let store = seed_layouts()?;
    let frame = ViewportFrame::render(
        &store,
        SessionState::new(GROUND_FLOOR, Position::new(30, 12)),
        &ViewConfig::default(),
    )?;

    assert_eq!(frame.cell_at(Position::new(30, 12)), Some(CellKind::Player));
    assert_eq!(frame.cell_at(Position::new(31, 11)), Some(CellKind::StairActive));
    assert_eq!(frame.cell_at(Position::new(36, 12)), Some(CellKind::StairActive));
    // railings lie under the top wall
    assert_eq!(frame.cell_at(Position::new(31, 10)), Some(CellKind::Obstacle));
    assert_eq!(frame.cell_at(Position::new(40, 10)), Some(CellKind::Indoor));
    assert_eq!(frame.cell_at(Position::new(10, 10)), Some(CellKind::Outdoor));
    assert_eq!(frame.cell_at(Position::new(14, 8)), Some(CellKind::Obstacle));
    assert_eq!(frame.cell_at(Position::new(5, 5)), None);
    assert_eq!(frame.cell_at(Position::new(20, 20)), Some(CellKind::Indoor));

    Ok(())
}

#[test]
fn test_upper_floor_has_no_garden() -> FloorwalkResult<()> {
    let store = seed_layouts()?;
    let frame = ViewportFrame::render(
        &store,
        SessionState::new(UPPER_FLOOR, Position::new(37, 12)),
        &ViewConfig::default(),
    )?;
    assert!(frame.cells().iter().all(|cell| *cell != CellKind::Outdoor));
    assert_eq!(frame.cell_at(Position::new(14, 9)), Some(CellKind::Indoor));
    Ok(())
}

#[test]
fn test_player_is_drawn_exactly_once() -> FloorwalkResult<()> {
    let store = seed_layouts()?;
    for position in [Position::new(20, 30), Position::new(0, 0), Position::new(59, 49)] {
        let frame = ViewportFrame::render(
            &store,
            SessionState::new(GROUND_FLOOR, position),
            &ViewConfig::default(),
        )?;
        let players = frame
            .cells()
            .iter()
            .filter(|cell| **cell == CellKind::Player)
            .count();
        assert_eq!(players, 1, "at {:?}", position);
    }
    Ok(())
}

#[test]
fn test_railing_renders_when_not_covered() -> FloorwalkResult<()> {
    let mut layout = FloorLayout::new(Position::new(0, 0));
    layout.staircases.push(Staircase {
        tiles: vec![StairTile::step(2, 2), StairTile::railing(2, 1)],
        target_floor: FloorId(1),
        entry: Position::new(1, 2),
        exit: Position::new(1, 2),
    });
    let mut floors = BTreeMap::new();
    floors.insert(FloorId(1), layout);
    let grid = GridConfig {
        width: 4,
        height: 4,
        footprint: Rect::new(0, 0, 4, 4),
    };
    let store = LayoutStore::new(grid, floors)?;

    let frame = ViewportFrame::render(
        &store,
        SessionState::new(FloorId(1), Position::new(0, 0)),
        &ViewConfig::new(2),
    )?;
    assert_eq!(frame.cell_at(Position::new(2, 1)), Some(CellKind::Railing));
    assert_eq!(frame.cell_at(Position::new(2, 2)), Some(CellKind::StairActive));
    assert_eq!(frame.cell_at(Position::new(3, 3)), Some(CellKind::Indoor));
    Ok(())
}

#[test]
fn test_status_readout_follows_state() -> FloorwalkResult<()> {
    let store = seed_layouts()?;
    let status = StatusReadout::for_state(
        &store,
        SessionState::new(UPPER_FLOOR, Position::new(33, 14)),
    )?;
    assert_eq!(status.floor, UPPER_FLOOR);
    assert_eq!(status.floor_label, "Floor 2");
    assert_eq!(status.coordinates(), "X: 33, Y: 14");
    Ok(())
}
