use crate::board::Cell;

/// Number of cells along each edge of the board.
pub const BOARD_SIZE: u8 = 9;
/// Wall budget each player starts the game with.
pub const STARTING_WALLS: u8 = 10;
/// Player one starts at the bottom center and races toward y = 9.
pub const PLAYER_ONE_START: Cell = Cell::new(5, 1);
/// Player two starts at the top center and races toward y = 1.
pub const PLAYER_TWO_START: Cell = Cell::new(5, 9);
