use std::collections::HashSet;

use crate::{Board, Orientation, Position, Wall};

/// A wall meant to slow down an opponent, together with the cell of the
/// opponent's path it was placed next to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Blockade {
    pub wall: Wall,
    pub blocked_cell: Position,
}

impl Board {
    /// Looks for a wall that cuts into the opponent's path without touching ours.
    ///
    /// The first cell of the opponent's path that is not on our own path (and is
    /// not a wall) is picked. The wall is placed beside that cell, across the
    /// opponent's direction of travel: left or right of it when moving
    /// vertically, above or below it when moving horizontally.
    ///
    /// This is a heuristic. The returned wall is on the board, but it is not
    /// checked whether it may be placed there, or whether it actually makes the
    /// opponent's path longer.
    pub fn find_blockade(&self, opponent_path: &[Position], own_path: &[Position]) -> Option<Blockade> {
        let own_cells: HashSet<Position> = own_path.iter().skip(1).copied().collect();

        for step in opponent_path.windows(2) {
            let (previous, current) = (step[0], step[1]);
            if own_cells.contains(&current) {
                continue;
            }
            match self.cell(current) {
                Some(cell) if !cell.is_wall() => {}
                _ => continue,
            }

            let candidates = if previous.direction_to(current).is_vertical() {
                [
                    Wall::new(current.x - 1, current.y, Orientation::Horizontal),
                    Wall::new(current.x + 1, current.y, Orientation::Horizontal),
                ]
            } else {
                [
                    Wall::new(current.x, current.y - 1, Orientation::Vertical),
                    Wall::new(current.x, current.y + 1, Orientation::Vertical),
                ]
            };
            if let Some(wall) = candidates
                .into_iter()
                .find(|wall| self.contains(wall.anchor()))
            {
                return Some(Blockade {
                    wall,
                    blocked_cell: current,
                });
            }
        }
        None
    }
}
