//! Wall-placement legality: geometric overlap and the path-existence rule.

use crate::board::{BoardState, Wall, WallOrientation};
use crate::common::{PlayerId, QuoridorError};
use crate::config::BOARD_SIZE;

impl BoardState {
    /// Whether the candidate wall may be placed right now.
    ///
    /// Legal means the wall neither overlaps nor crosses an existing wall,
    /// and after placing it both players would still have a path to their
    /// goal row. `Ok(false)` is a normal legality verdict; an anchor outside
    /// its coordinate range is a caller contract violation reported as
    /// [`QuoridorError::WallAnchorOutOfRange`] instead.
    pub fn is_wall_placement_legal(&self, wall: Wall) -> Result<bool, QuoridorError> {
        if !wall.is_anchor_in_range() {
            return Err(QuoridorError::WallAnchorOutOfRange {
                orientation: wall.orientation,
                x: wall.x,
                y: wall.y,
            });
        }
        if self.overlaps_existing_wall(wall) {
            return Ok(false);
        }
        Ok(self.leaves_paths_open(wall))
    }

    /// Every in-range anchor the validator currently rejects for this
    /// orientation. Meant for pre-filtering placement previews.
    pub fn invalid_wall_coordinates(&self, orientation: WallOrientation) -> Vec<(u8, u8)> {
        let mut invalid = Vec::new();
        for x in 1..=BOARD_SIZE {
            for y in 1..=BOARD_SIZE {
                let wall = Wall { orientation, x, y };
                if !wall.is_anchor_in_range() {
                    continue;
                }
                if matches!(self.is_wall_placement_legal(wall), Ok(false)) {
                    invalid.push((x, y));
                }
            }
        }
        invalid
    }

    /// Direct overlap, shared endpoint along the same grid line, or a cross
    /// through the same intersection as an existing wall.
    fn overlaps_existing_wall(&self, wall: Wall) -> bool {
        let Wall { x, y, .. } = wall;
        match wall.orientation {
            WallOrientation::Horizontal => {
                self.has_horizontal_wall(x - 1, y)
                    || self.has_horizontal_wall(x, y)
                    || self.has_horizontal_wall(x + 1, y)
                    || self.has_vertical_wall(x + 1, y - 1)
            }
            WallOrientation::Vertical => {
                self.has_vertical_wall(x, y - 1)
                    || self.has_vertical_wall(x, y)
                    || self.has_vertical_wall(x, y + 1)
                    || self.has_horizontal_wall(x - 1, y + 1)
            }
        }
    }

    /// Path-existence rule: apply the candidate to a deep copy and require a
    /// path to victory for both players. The live state is never touched.
    fn leaves_paths_open(&self, wall: Wall) -> bool {
        let mut preview = self.clone();
        preview.add_wall(wall);
        preview.shortest_path_to_victory(PlayerId::One).is_some()
            && preview.shortest_path_to_victory(PlayerId::Two).is_some()
    }
}
