//! Integration tests for starting a session from each kind of layout source.

use floorwalk::{
    seed_table, Direction, FloorId, FloorwalkError, FloorwalkResult, JsonLayoutFile, LayoutSource,
    LayoutStore, MoveOutcome, Position, SeedHouse, Session, SessionState, ViewConfig,
};
use std::io::Write;

const TWO_ROOM_TABLE: &str = r#"{
    "grid": {
        "width": 6,
        "height": 4,
        "footprint": { "x": 0, "y": 0, "width": 6, "height": 4 }
    },
    "floors": {
        "1": {
            "obstacles": [{ "x": 3, "y": 0 }, { "x": 3, "y": 1 }],
            "staircases": [{
                "tiles": [{ "x": 5, "y": 0 }],
                "target_floor": 2,
                "entry": { "x": 4, "y": 0 },
                "exit": { "x": 4, "y": 0 }
            }],
            "player_start": { "x": 0, "y": 0 }
        },
        "2": {
            "obstacles": [],
            "staircases": [{
                "tiles": [{ "x": 0, "y": 3 }, { "x": 0, "y": 2, "is_railing": true }],
                "target_floor": 1,
                "entry": { "x": 1, "y": 3 },
                "exit": { "x": 1, "y": 3 }
            }],
            "player_start": { "x": 2, "y": 2 }
        }
    }
}"#;

#[test]
fn test_basic_startup() -> FloorwalkResult<()> {
    let session = Session::new(SeedHouse.load()?)?;

    assert_eq!(
        session.state(),
        SessionState::new(FloorId(1), Position::new(20, 30))
    );
    assert_eq!(session.steps_taken(), 0);
    assert!(session.last_outcome().is_none());

    let status = session.status()?;
    assert_eq!(status.floor_label, "Floor 1 & Outside");
    assert_eq!(status.coordinates(), "X: 20, Y: 30");

    let frame = session.render(&ViewConfig::default())?;
    assert_eq!(frame.cells().len(), 48 * 48);

    Ok(())
}

#[test]
fn test_startup_from_json_file() -> FloorwalkResult<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    file.write_all(TWO_ROOM_TABLE.as_bytes())?;

    let source = JsonLayoutFile::new(file.path());
    assert!(source.source_name().starts_with("json file"));

    let mut session = Session::new(source.load()?)?;
    assert_eq!(
        session.state(),
        SessionState::new(FloorId(1), Position::new(0, 0))
    );

    // east along the top row until the wall
    assert!(matches!(
        session.apply(Direction::East)?,
        MoveOutcome::Moved { .. }
    ));
    assert!(matches!(
        session.apply(Direction::East)?,
        MoveOutcome::Moved { .. }
    ));
    assert_eq!(
        session.apply(Direction::East)?,
        MoveOutcome::Blocked {
            at: Position::new(3, 0)
        }
    );
    assert_eq!(session.steps_taken(), 2);

    Ok(())
}

#[test]
fn test_json_file_round_trip_through_stairs() -> FloorwalkResult<()> {
    let store = LayoutStore::from_json(TWO_ROOM_TABLE)?;
    let mut session = Session::new(store)?;

    // round the wall: down past it, across, and back up to the entry
    for direction in [
        Direction::South,
        Direction::South,
        Direction::East,
        Direction::East,
        Direction::East,
        Direction::East,
        Direction::North,
        Direction::North,
    ] {
        session.apply(direction)?;
    }
    assert_eq!(session.state().player_position, Position::new(4, 0));

    assert_eq!(
        session.apply(Direction::East)?,
        MoveOutcome::FloorChanged {
            from: FloorId(1),
            to: FloorId(2)
        }
    );
    assert_eq!(
        session.state(),
        SessionState::new(FloorId(2), Position::new(1, 3))
    );

    assert_eq!(
        session.apply(Direction::West)?,
        MoveOutcome::FloorChanged {
            from: FloorId(2),
            to: FloorId(1)
        }
    );
    assert_eq!(
        session.state(),
        SessionState::new(FloorId(1), Position::new(4, 0))
    );

    Ok(())
}

#[test]
fn test_dumped_seed_loads_back_identically() -> FloorwalkResult<()> {
    let store = LayoutStore::from_table(seed_table())?;
    let json = store.to_json()?;
    let reloaded = LayoutStore::from_json(&json)?;

    assert_eq!(reloaded.to_table(), store.to_table());
    assert_eq!(
        reloaded.floor_ids().collect::<Vec<_>>(),
        vec![FloorId(1), FloorId(2)]
    );

    Ok(())
}

#[test]
fn test_missing_file_fails_to_start() {
    let dir = tempfile::tempdir().unwrap();
    let source = JsonLayoutFile::new(dir.path().join("nowhere.json"));
    assert!(matches!(source.load(), Err(FloorwalkError::Io(_))));
}

#[test]
fn test_malformed_json_fails_to_start() {
    let result = LayoutStore::from_json("{ \"floors\": [1, 2, 3] }");
    assert!(matches!(result, Err(FloorwalkError::Serde(_))));
}

#[test]
fn test_unknown_floor_lookup() -> FloorwalkResult<()> {
    let store = LayoutStore::from_json(TWO_ROOM_TABLE)?;
    assert!(matches!(
        store.get_layout(FloorId(7)),
        Err(FloorwalkError::UnknownFloor(FloorId(7)))
    ));
    Ok(())
}
