//! Shortest-path search from a pawn to its goal row.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use crate::board::{BoardState, Cell};
use crate::common::PlayerId;

impl BoardState {
    /// Shortest sequence of pawn moves from the player's current cell to
    /// any cell on its goal row, or `None` when the current walls leave the
    /// player no path at all.
    ///
    /// The returned path excludes the starting cell and includes the goal
    /// cell; a pawn already standing on its goal row yields an empty path.
    /// A* over cells: g counts moves, h is the vertical distance to the
    /// goal row (admissible, each move changes y by at most one), and
    /// successors come from [`legal_destinations`] probed with a virtual
    /// position, so the search never mutates the state.
    ///
    /// [`legal_destinations`]: BoardState::legal_destinations
    pub fn shortest_path_to_victory(&self, player: PlayerId) -> Option<Vec<Cell>> {
        let start = self.player(player).position;
        let goal_row = player.goal_row();
        let h = |cell: Cell| u16::from(goal_row.abs_diff(cell.y));

        // Frontier keyed by (f, g, x, y); the trailing coordinates only make
        // the ordering total so ties pop deterministically.
        let mut open = BinaryHeap::new();
        let mut best_g: HashMap<Cell, u16> = HashMap::new();
        let mut came_from: HashMap<Cell, Cell> = HashMap::new();

        open.push(Reverse((h(start), 0u16, start.x, start.y)));
        best_g.insert(start, 0);

        while let Some(Reverse((_, g, x, y))) = open.pop() {
            let cell = Cell::new(x, y);
            // Stale frontier entry, a cheaper route to this cell was found.
            if best_g.get(&cell).is_some_and(|&known| g > known) {
                continue;
            }
            if cell.y == goal_row {
                let mut path = Vec::new();
                let mut current = cell;
                while current != start {
                    path.push(current);
                    current = came_from[&current];
                }
                path.reverse();
                return Some(path);
            }
            for successor in self.legal_destinations(player, Some(cell)) {
                let g_next = g + 1;
                if best_g.get(&successor).map_or(true, |&known| g_next < known) {
                    best_g.insert(successor, g_next);
                    came_from.insert(successor, cell);
                    open.push(Reverse((
                        g_next + h(successor),
                        g_next,
                        successor.x,
                        successor.y,
                    )));
                }
            }
        }

        None
    }
}
