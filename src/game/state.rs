//! # Session State Module
//!
//! The one piece of mutable state in the demo and the session that owns it.
//!
//! [`SessionState`] is a plain value: the movement engine takes one and returns
//! the next. [`Session`] holds the layout store alongside the current value and
//! swaps in the new state whole after every accepted input.

use crate::{
    resolve_move, Direction, FloorId, FloorwalkResult, LayoutStore, MoveOutcome, Position,
    StatusReadout, ViewConfig, ViewportFrame,
};
use log::info;
use serde::{Deserialize, Serialize};

/// Current floor and player position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionState {
    /// Floor the player is on
    pub current_floor: FloorId,
    /// Player cell on that floor
    pub player_position: Position,
}

impl SessionState {
    /// Creates a state from its parts.
    pub const fn new(current_floor: FloorId, player_position: Position) -> Self {
        Self {
            current_floor,
            player_position,
        }
    }

    /// Returns the starting state: the lowest registered floor at its spawn point.
    pub fn start(store: &LayoutStore) -> FloorwalkResult<Self> {
        let floor = store.first_floor()?;
        Self::spawn_on(store, floor)
    }

    /// Returns a state at the spawn point of `floor`.
    pub fn spawn_on(store: &LayoutStore, floor: FloorId) -> FloorwalkResult<Self> {
        let layout = store.get_layout(floor)?;
        Ok(Self::new(floor, layout.player_start))
    }
}

/// A running walkabout: the layout store plus the current state.
///
/// # Examples
///
/// ```
/// use floorwalk::{seed_layouts, Direction, FloorId, Session};
///
/// let mut session = Session::new(seed_layouts().unwrap()).unwrap();
/// assert_eq!(session.state().current_floor, FloorId(1));
///
/// session.apply(Direction::East).unwrap();
/// assert_eq!(session.steps_taken(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    store: LayoutStore,
    state: SessionState,
    steps_taken: u64,
    last_outcome: Option<MoveOutcome>,
}

impl Session {
    /// Starts a session at the spawn point of the lowest floor.
    pub fn new(store: LayoutStore) -> FloorwalkResult<Self> {
        let state = SessionState::start(&store)?;
        info!(
            "Session started on floor {} at {}",
            state.current_floor, state.player_position
        );
        Ok(Self {
            store,
            state,
            steps_taken: 0,
            last_outcome: None,
        })
    }

    /// Returns the current state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Returns the layout store.
    pub fn store(&self) -> &LayoutStore {
        &self.store
    }

    /// Number of inputs that moved the player or changed floor.
    pub fn steps_taken(&self) -> u64 {
        self.steps_taken
    }

    /// Outcome of the most recent input, if any.
    pub fn last_outcome(&self) -> Option<MoveOutcome> {
        self.last_outcome
    }

    /// Applies one directional input and commits the resulting state.
    ///
    /// On error the current state is left untouched.
    pub fn apply(&mut self, direction: Direction) -> FloorwalkResult<MoveOutcome> {
        let resolution = resolve_move(&self.store, self.state, direction)?;
        self.state = resolution.state;
        if !matches!(resolution.outcome, MoveOutcome::Blocked { .. }) {
            self.steps_taken += 1;
        }
        self.last_outcome = Some(resolution.outcome);
        Ok(resolution.outcome)
    }

    /// Renders the viewport around the player.
    pub fn render(&self, view: &ViewConfig) -> FloorwalkResult<ViewportFrame> {
        ViewportFrame::render(&self.store, self.state, view)
    }

    /// Returns the status readout for the current state.
    pub fn status(&self) -> FloorwalkResult<StatusReadout> {
        StatusReadout::for_state(&self.store, self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed_layouts;

    #[test]
    fn test_session_starts_at_seed_spawn() {
        let session = Session::new(seed_layouts().unwrap()).unwrap();
        assert_eq!(
            session.state(),
            SessionState::new(FloorId(1), Position::new(20, 30))
        );
        assert_eq!(session.steps_taken(), 0);
        assert!(session.last_outcome().is_none());
    }

    #[test]
    fn test_spawn_on_second_floor() {
        let store = seed_layouts().unwrap();
        let state = SessionState::spawn_on(&store, FloorId(2)).unwrap();
        assert_eq!(state.player_position, Position::new(33, 14));
        assert!(SessionState::spawn_on(&store, FloorId(5)).is_err());
    }

    #[test]
    fn test_blocked_moves_are_not_counted() {
        let mut session = Session::new(seed_layouts().unwrap()).unwrap();
        let outcome = session.apply(Direction::North).unwrap();
        assert!(matches!(outcome, MoveOutcome::Moved { .. }));

        // (20, 28) is the lower interior wall
        let outcome = session.apply(Direction::North).unwrap();
        assert!(matches!(outcome, MoveOutcome::Blocked { .. }));
        assert_eq!(session.steps_taken(), 1);
        assert_eq!(session.state().player_position, Position::new(20, 29));
        assert_eq!(session.last_outcome(), Some(outcome));
    }
}
