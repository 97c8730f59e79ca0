//! Validated game operations layered over the raw board state.

use log::debug;

use crate::board::{BoardState, Cell, Wall, WallOrientation};
use crate::common::{MoveRecord, PlayerId, QuoridorError};

/// A running game: its server-side identifier plus the local board state.
///
/// The two request methods are the only mutations the engine performs on a
/// live game; everything else is a side-effect-free query. After every
/// successful request the network layer reads [`last_move`] to forward the
/// move to the remote server, and callers poll [`winner`].
///
/// [`last_move`]: Game::last_move
/// [`winner`]: Game::winner
#[derive(Debug, Clone)]
pub struct Game {
    id: String,
    state: BoardState,
}

impl Game {
    /// Fresh game with pawns on their starting cells.
    pub fn new(id: &str, player_one_name: &str, player_two_name: &str) -> Self {
        Self {
            id: id.to_owned(),
            state: BoardState::new(player_one_name, player_two_name),
        }
    }

    /// Rebuild a game from a server snapshot in the wire JSON schema.
    pub fn from_snapshot(id: &str, snapshot: &str) -> Result<Self, QuoridorError> {
        Ok(Self {
            id: id.to_owned(),
            state: BoardState::from_json(snapshot)?,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn set_id(&mut self, id: &str) {
        self.id = id.to_owned();
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// Raw mutable access, for callers that apply server-authoritative
    /// updates without re-validating them.
    pub fn state_mut(&mut self) -> &mut BoardState {
        &mut self.state
    }

    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.state.last_move()
    }

    /// Move the player's pawn to (x, y).
    ///
    /// Fails with [`QuoridorError::IllegalMove`] when the destination is not
    /// among the player's legal destinations; the state is unchanged on
    /// failure.
    pub fn request_move(&mut self, player: PlayerId, x: u8, y: u8) -> Result<(), QuoridorError> {
        let destination = Cell::new(x, y);
        if !self
            .state
            .legal_destinations(player, None)
            .contains(&destination)
        {
            return Err(QuoridorError::IllegalMove { x, y });
        }
        self.state.move_player(player, x, y);
        debug!(
            "game {}: player {} moved to ({}, {})",
            self.id,
            player.number(),
            x,
            y
        );
        Ok(())
    }

    /// Place a wall for the player at anchor (x, y).
    ///
    /// Fails with [`QuoridorError::IllegalWallPlacement`] when the player has
    /// no walls left, the wall overlaps or crosses an existing wall, or the
    /// placement would leave either player without a path to its goal row.
    /// The state is unchanged on failure.
    pub fn request_wall_placement(
        &mut self,
        player: PlayerId,
        orientation: WallOrientation,
        x: u8,
        y: u8,
    ) -> Result<(), QuoridorError> {
        if self.state.player(player).walls_left == 0 {
            return Err(QuoridorError::IllegalWallPlacement { x, y });
        }
        let wall = Wall { orientation, x, y };
        if !self.state.is_wall_placement_legal(wall)? {
            return Err(QuoridorError::IllegalWallPlacement { x, y });
        }
        self.state.place_wall(player, wall);
        debug!(
            "game {}: player {} placed a {} wall at ({}, {})",
            self.id,
            player.number(),
            orientation,
            x,
            y
        );
        Ok(())
    }

    /// The winner, if a pawn stands on its goal row. Pure query; callers
    /// poll it after every successful request.
    pub fn winner(&self) -> Option<PlayerId> {
        self.state.winner()
    }

    /// Legal destinations for the player's pawn from its actual cell.
    pub fn legal_destinations(&self, player: PlayerId) -> Vec<Cell> {
        self.state.legal_destinations(player, None)
    }

    /// Shortest path to the player's goal row, e.g. for hint display.
    pub fn shortest_path_to_victory(&self, player: PlayerId) -> Option<Vec<Cell>> {
        self.state.shortest_path_to_victory(player)
    }
}
