//! Legal pawn-move enumeration, including jump resolution.

use crate::board::{BoardState, Cell};
use crate::common::PlayerId;
use crate::config::BOARD_SIZE;

/// The four orthogonal pawn directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Up,
    Down,
    Left,
    Right,
}

const DIRECTIONS: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

impl Direction {
    /// Neighbor of `cell` one step away, or `None` at the board edge.
    fn step(self, cell: Cell) -> Option<Cell> {
        match self {
            Direction::Up if cell.y < BOARD_SIZE => Some(Cell::new(cell.x, cell.y + 1)),
            Direction::Down if cell.y > 1 => Some(Cell::new(cell.x, cell.y - 1)),
            Direction::Left if cell.x > 1 => Some(Cell::new(cell.x - 1, cell.y)),
            Direction::Right if cell.x < BOARD_SIZE => Some(Cell::new(cell.x + 1, cell.y)),
            _ => None,
        }
    }
}

impl BoardState {
    /// Every cell the player may move its pawn to.
    ///
    /// With `virtual_position` the query evaluates as though the player's
    /// pawn stood on that cell instead of its real one; the path finder uses
    /// this to probe hypothetical positions without touching the state. The
    /// result never contains duplicates, the opposing pawn's cell, or a cell
    /// off the board.
    pub fn legal_destinations(
        &self,
        player: PlayerId,
        virtual_position: Option<Cell>,
    ) -> Vec<Cell> {
        let mover = virtual_position.unwrap_or(self.player(player).position);
        let opponent = self.player(player.opponent()).position;
        self.destinations_from(mover, opponent, true)
    }

    /// Moves available from `from` with the opposing pawn on `opponent`.
    ///
    /// When the neighbor in some direction is the opposing pawn, the mover
    /// jumps: if the straight-through cell is among the opponent's own moves
    /// it is the only jump destination, otherwise the straight jump is
    /// barred by a wall or the board edge and every move the opponent could
    /// make becomes available instead. That nested enumeration runs with
    /// `allow_jump` off, which terminates the recursion and keeps the
    /// mover's occupied cell out of the opponent's options.
    fn destinations_from(&self, from: Cell, opponent: Cell, allow_jump: bool) -> Vec<Cell> {
        let mut destinations = Vec::new();
        for direction in DIRECTIONS {
            let Some(neighbor) = direction.step(from) else {
                continue;
            };
            if self.is_step_blocked(from, direction) {
                continue;
            }
            if neighbor != opponent {
                destinations.push(neighbor);
            } else if allow_jump {
                let opponent_moves = self.destinations_from(opponent, from, false);
                match direction.step(opponent) {
                    Some(straight) if opponent_moves.contains(&straight) => {
                        destinations.push(straight)
                    }
                    _ => destinations.extend(opponent_moves),
                }
            }
        }
        destinations
    }

    /// Wall occupancy between `from` and its neighbor in `direction`.
    ///
    /// A horizontal wall anchored at (x, y) spans columns x and x+1 on the
    /// line between rows y-1 and y; a vertical wall anchored at (x, y)
    /// spans rows y and y+1 on the line between columns x-1 and x.
    fn is_step_blocked(&self, from: Cell, direction: Direction) -> bool {
        let Cell { x, y } = from;
        match direction {
            Direction::Up => {
                self.has_horizontal_wall(x - 1, y + 1) || self.has_horizontal_wall(x, y + 1)
            }
            Direction::Down => self.has_horizontal_wall(x - 1, y) || self.has_horizontal_wall(x, y),
            Direction::Left => self.has_vertical_wall(x, y) || self.has_vertical_wall(x, y - 1),
            Direction::Right => {
                self.has_vertical_wall(x + 1, y) || self.has_vertical_wall(x + 1, y - 1)
            }
        }
    }
}
