//! Player identity, move records, and the error taxonomy.

use crate::board::WallOrientation;
use crate::config::BOARD_SIZE;

/// Identifies one of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    pub fn opponent(self) -> Self {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// Row this player must reach to win.
    pub fn goal_row(self) -> u8 {
        match self {
            PlayerId::One => BOARD_SIZE,
            PlayerId::Two => 1,
        }
    }

    /// Index into the two-element player array (and the wire `joueurs` list).
    pub fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    /// Player number as shown to humans and logs (1 or 2).
    pub fn number(self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }
}

/// Kind of the last applied move, in the encoding the remote server expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    /// Pawn displacement.
    Displacement,
    /// Horizontal wall placement.
    WallHorizontal,
    /// Vertical wall placement.
    WallVertical,
}

impl MoveKind {
    /// Wire code sent to the "apply move" endpoint.
    pub fn code(self) -> &'static str {
        match self {
            MoveKind::Displacement => "D",
            MoveKind::WallHorizontal => "MH",
            MoveKind::WallVertical => "MV",
        }
    }
}

/// The most recent applied move, held in the exact encoding the server
/// consumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub kind: MoveKind,
    /// Literally `"(x, y)"`, with the space after the comma.
    pub coordinates: String,
}

impl MoveRecord {
    pub(crate) fn new(kind: MoveKind, x: u8, y: u8) -> Self {
        Self {
            kind,
            coordinates: format!("({}, {})", x, y),
        }
    }
}

/// Errors reported by the engine. All are synchronous; the game state is
/// left untouched by a failed operation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuoridorError {
    /// Requested pawn destination is not among the legal destinations.
    #[error("invalid movement request at ({x}, {y})")]
    IllegalMove { x: u8, y: u8 },
    /// Requested wall overlaps another wall, would seal a player in, or the
    /// player has no walls left.
    #[error("invalid wall placement request at ({x}, {y})")]
    IllegalWallPlacement { x: u8, y: u8 },
    /// A snapshot could not be reconstructed. Nothing was applied.
    #[error("malformed game state: {0}")]
    MalformedState(String),
    /// Caller passed a wall anchor outside its legal coordinate range.
    #[error("{orientation} wall anchor ({x}, {y}) is out of range")]
    WallAnchorOutOfRange {
        orientation: WallOrientation,
        x: u8,
        y: u8,
    },
}
