use serde::{Deserialize, Serialize};

use crate::Position;

/// The edge of the board a player has to reach.
///
/// Any cell in the given column (or row) wins the game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    Column(i32),
    Row(i32),
}

impl Goal {
    pub fn is_reached_at(self, position: Position) -> bool {
        match self {
            Goal::Column(x) => position.x == x,
            Goal::Row(y) => position.y == y,
        }
    }

    /// The number of steps from `position` to the goal line on an empty board.
    pub fn distance_from(self, position: Position) -> u32 {
        match self {
            Goal::Column(x) => position.x.abs_diff(x),
            Goal::Row(y) => position.y.abs_diff(y),
        }
    }
}

/// The state of a single player during one game.
///
/// Position and remaining walls are overwritten from the turn input every turn.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub id: usize,
    pub position: Position,
    pub walls_left: u32,
    pub goal: Goal,
    /// Cleared once the player is eliminated. Such a player has no path and
    /// stands on no cell.
    pub in_game: bool,
}

impl Player {
    pub fn new(id: usize, goal: Goal) -> Self {
        Self {
            id,
            position: Position::new(0, 0),
            walls_left: 0,
            goal,
            in_game: true,
        }
    }

    pub fn has_reached_goal(&self) -> bool {
        self.goal.is_reached_at(self.position)
    }

    pub(crate) fn update(&mut self, position: Position, walls_left: u32) {
        self.position = position;
        self.walls_left = walls_left;
        self.in_game = true;
    }

    pub(crate) fn leave(&mut self) {
        self.walls_left = 0;
        self.in_game = false;
    }
}
