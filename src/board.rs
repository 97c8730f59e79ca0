//! Board state storage: pawns, wall lists, and the last-move record.

use core::fmt;

use crate::common::{MoveKind, MoveRecord, PlayerId};
use crate::config::{BOARD_SIZE, PLAYER_ONE_START, PLAYER_TWO_START, STARTING_WALLS};

/// One of the 81 discrete positions a pawn can occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: u8,
    pub y: u8,
}

impl Cell {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Whether the cell lies within the 9x9 board.
    pub fn is_on_board(&self) -> bool {
        (1..=BOARD_SIZE).contains(&self.x) && (1..=BOARD_SIZE).contains(&self.y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Orientation of a wall segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WallOrientation {
    Horizontal,
    Vertical,
}

impl fmt::Display for WallOrientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WallOrientation::Horizontal => write!(f, "horizontal"),
            WallOrientation::Vertical => write!(f, "vertical"),
        }
    }
}

/// A two-cell wall segment addressed by its anchor coordinate.
///
/// A horizontal wall at (x, y) blocks vertical movement between rows y-1
/// and y across columns x and x+1; a vertical wall at (x, y) blocks
/// horizontal movement between columns x-1 and x across rows y and y+1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Wall {
    pub orientation: WallOrientation,
    pub x: u8,
    pub y: u8,
}

impl Wall {
    pub const fn horizontal(x: u8, y: u8) -> Self {
        Self {
            orientation: WallOrientation::Horizontal,
            x,
            y,
        }
    }

    pub const fn vertical(x: u8, y: u8) -> Self {
        Self {
            orientation: WallOrientation::Vertical,
            x,
            y,
        }
    }

    /// Whether the anchor lies in the legal placement domain: the two-cell
    /// span must fit on the grid, so the cross axis stops one short of the
    /// board edge.
    pub fn is_anchor_in_range(&self) -> bool {
        match self.orientation {
            WallOrientation::Horizontal => {
                (1..BOARD_SIZE).contains(&self.x) && (2..=BOARD_SIZE).contains(&self.y)
            }
            WallOrientation::Vertical => {
                (2..=BOARD_SIZE).contains(&self.x) && (1..BOARD_SIZE).contains(&self.y)
            }
        }
    }
}

/// One player's pawn position, wall budget, and display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub position: Cell,
    pub walls_left: u8,
}

/// Full game state. `Clone` yields the deep copy used for speculative wall
/// evaluation, so the live state never sees a hypothetical mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    pub(crate) players: [Player; 2],
    pub(crate) horizontal_walls: Vec<(u8, u8)>,
    pub(crate) vertical_walls: Vec<(u8, u8)>,
    pub(crate) last_move: Option<MoveRecord>,
}

impl BoardState {
    /// Fresh game: pawns on their starting cells, full wall budgets, no
    /// walls placed.
    pub fn new(player_one_name: &str, player_two_name: &str) -> Self {
        Self {
            players: [
                Player {
                    name: player_one_name.to_owned(),
                    position: PLAYER_ONE_START,
                    walls_left: STARTING_WALLS,
                },
                Player {
                    name: player_two_name.to_owned(),
                    position: PLAYER_TWO_START,
                    walls_left: STARTING_WALLS,
                },
            ],
            horizontal_walls: Vec::new(),
            vertical_walls: Vec::new(),
            last_move: None,
        }
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// Placed horizontal walls, in insertion order.
    pub fn horizontal_walls(&self) -> &[(u8, u8)] {
        &self.horizontal_walls
    }

    /// Placed vertical walls, in insertion order.
    pub fn vertical_walls(&self) -> &[(u8, u8)] {
        &self.vertical_walls
    }

    /// The last applied move in its wire encoding, if any move was applied.
    pub fn last_move(&self) -> Option<&MoveRecord> {
        self.last_move.as_ref()
    }

    /// Whether a horizontal wall is anchored at exactly (x, y).
    pub fn has_horizontal_wall(&self, x: u8, y: u8) -> bool {
        self.horizontal_walls.iter().any(|&(wx, wy)| wx == x && wy == y)
    }

    /// Whether a vertical wall is anchored at exactly (x, y).
    pub fn has_vertical_wall(&self, x: u8, y: u8) -> bool {
        self.vertical_walls.iter().any(|&(wx, wy)| wx == x && wy == y)
    }

    /// Move a pawn without any legality check and record the move as a
    /// displacement. Validated callers live in [`crate::Game`].
    pub fn move_player(&mut self, player: PlayerId, x: u8, y: u8) {
        self.players[player.index()].position = Cell::new(x, y);
        self.last_move = Some(MoveRecord::new(MoveKind::Displacement, x, y));
    }

    /// Add a wall without any legality check, spend one wall from the
    /// player's budget, and record the move.
    pub fn place_wall(&mut self, player: PlayerId, wall: Wall) {
        self.add_wall(wall);
        let budget = &mut self.players[player.index()].walls_left;
        *budget = budget.saturating_sub(1);
        let kind = match wall.orientation {
            WallOrientation::Horizontal => MoveKind::WallHorizontal,
            WallOrientation::Vertical => MoveKind::WallVertical,
        };
        self.last_move = Some(MoveRecord::new(kind, wall.x, wall.y));
    }

    /// Append a wall to the matching list. Used by [`place_wall`] and by the
    /// wall validator's speculative copies.
    ///
    /// [`place_wall`]: BoardState::place_wall
    pub(crate) fn add_wall(&mut self, wall: Wall) {
        match wall.orientation {
            WallOrientation::Horizontal => self.horizontal_walls.push((wall.x, wall.y)),
            WallOrientation::Vertical => self.vertical_walls.push((wall.x, wall.y)),
        }
    }

    /// The winner, if a pawn stands on its goal row.
    pub fn winner(&self) -> Option<PlayerId> {
        if self.players[PlayerId::One.index()].position.y == PlayerId::One.goal_row() {
            return Some(PlayerId::One);
        }
        if self.players[PlayerId::Two.index()].position.y == PlayerId::Two.goal_row() {
            return Some(PlayerId::Two);
        }
        None
    }
}
