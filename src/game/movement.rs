//! # Movement Engine
//!
//! The step function that turns one directional input into the next session
//! state. Processing order:
//!
//! 1. Clamp the candidate cell onto the grid
//! 2. Reject the move if the candidate is an obstacle
//! 3. Take the first staircase with a walkable tile on the candidate
//! 4. Otherwise commit the candidate, unless clamping left it in place

use crate::{Direction, FloorId, FloorwalkResult, LayoutStore, Position, SessionState};
use log::{debug, info};

/// What a single step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The player moved to a new cell on the same floor
    Moved { from: Position, to: Position },
    /// The move hit an obstacle or the grid edge
    Blocked { at: Position },
    /// The player walked onto a staircase and arrived on another floor
    FloorChanged { from: FloorId, to: FloorId },
}

/// A resolved step: the next state and how it was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResolution {
    pub state: SessionState,
    pub outcome: MoveOutcome,
}

/// Advances the session by one step in `direction`.
///
/// # Examples
///
/// ```
/// use floorwalk::{seed_layouts, step, Direction, Position, SessionState};
///
/// let store = seed_layouts().unwrap();
/// let start = SessionState::start(&store).unwrap();
/// let next = step(&store, start, Direction::North).unwrap();
/// assert_eq!(next.player_position, Position::new(20, 29));
/// ```
pub fn step(
    store: &LayoutStore,
    state: SessionState,
    direction: Direction,
) -> FloorwalkResult<SessionState> {
    resolve_move(store, state, direction).map(|resolution| resolution.state)
}

/// Advances the session by one step and reports what happened.
pub fn resolve_move(
    store: &LayoutStore,
    state: SessionState,
    direction: Direction,
) -> FloorwalkResult<MoveResolution> {
    let current = state.player_position;
    let candidate = store.grid().clamp(current.offset(direction));
    let layout = store.get_layout(state.current_floor)?;

    if layout.is_obstacle(candidate) {
        debug!(
            "Move {:?} from {} blocked on floor {}",
            direction, current, state.current_floor
        );
        return Ok(MoveResolution {
            state,
            outcome: MoveOutcome::Blocked { at: candidate },
        });
    }

    if let Some(staircase) = layout.staircase_at(candidate) {
        let arrival = store.arrival_exit(state.current_floor, staircase)?;
        info!(
            "Took stairs from floor {} to floor {}, arriving at {}",
            state.current_floor, staircase.target_floor, arrival
        );
        return Ok(MoveResolution {
            state: SessionState::new(staircase.target_floor, arrival),
            outcome: MoveOutcome::FloorChanged {
                from: state.current_floor,
                to: staircase.target_floor,
            },
        });
    }

    if candidate == current {
        debug!("Move {:?} from {} stopped at the grid edge", direction, current);
        return Ok(MoveResolution {
            state,
            outcome: MoveOutcome::Blocked { at: candidate },
        });
    }

    debug!("Moved {:?} from {} to {}", direction, current, candidate);
    Ok(MoveResolution {
        state: SessionState::new(state.current_floor, candidate),
        outcome: MoveOutcome::Moved {
            from: current,
            to: candidate,
        },
    })
}
