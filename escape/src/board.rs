mod blocking;
mod pathfinding;

pub use blocking::*;
pub use pathfinding::*;

use serde::{Deserialize, Serialize};

use crate::{Cell, Goal, InputError, Player, Position, NEIGHBOUR_OFFSETS};

pub const MIN_PLAYERS: usize = 2;
pub const MAX_PLAYERS: usize = 4;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    #[serde(rename = "H")]
    Horizontal,
    #[serde(rename = "V")]
    Vertical,
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Orientation::Horizontal => write!(f, "H"),
            Orientation::Vertical => write!(f, "V"),
        }
    }
}

/// A wall placement, identified by its anchor cell.
///
/// A wall covers the anchor cell plus the cell to the right of it (horizontal)
/// or below it (vertical), if that cell is on the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Wall {
    pub x: i32,
    pub y: i32,
    pub orientation: Orientation,
}

impl Wall {
    pub fn new(x: i32, y: i32, orientation: Orientation) -> Self {
        Self { x, y, orientation }
    }

    pub fn anchor(&self) -> Position {
        Position::new(self.x, self.y)
    }

    /// The anchor and the second covered cell. The second one may lie outside the board.
    pub fn cells(&self) -> [Position; 2] {
        let anchor = self.anchor();
        match self.orientation {
            Orientation::Horizontal => [anchor, anchor.offset(1, 0)],
            Orientation::Vertical => [anchor, anchor.offset(0, 1)],
        }
    }
}

/// Formats the wall the way it is sent to the game, e.g. `3 4 H`.
impl std::fmt::Display for Wall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.orientation)
    }
}

/// The goal lines in the order in which they are assigned to players.
pub fn standard_goals(width: i32, height: i32) -> [Goal; MAX_PLAYERS] {
    [
        Goal::Column(width - 1),
        Goal::Column(0),
        Goal::Row(height - 1),
        Goal::Row(0),
    ]
}

/// The full game state as seen by the engine.
///
/// The dimensions and the number of players are fixed when the board is created.
#[derive(Clone, Debug)]
pub struct Board {
    width: i32,
    height: i32,
    /// Row-major, `width * height` entries.
    cells: Vec<Cell>,
    /// Indexed by player id.
    players: Vec<Player>,
}

impl Board {
    /// Creates an empty board where the players get their goals from [`standard_goals()`].
    pub fn new(width: i32, height: i32, player_count: usize) -> Result<Self, InputError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
            return Err(InputError::UnsupportedPlayerCount(player_count));
        }
        Self::with_goals(
            width,
            height,
            &standard_goals(width, height)[..player_count],
        )
    }

    /// Creates an empty board with one player per goal.
    pub fn with_goals(width: i32, height: i32, goals: &[Goal]) -> Result<Self, InputError> {
        if width <= 0 || height <= 0 {
            return Err(InputError::InvalidDimensions { width, height });
        }
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&goals.len()) {
            return Err(InputError::UnsupportedPlayerCount(goals.len()));
        }

        let mut players = Vec::with_capacity(goals.len());
        for (id, &goal) in goals.iter().enumerate() {
            let on_board = match goal {
                Goal::Column(x) => (0..width).contains(&x),
                Goal::Row(y) => (0..height).contains(&y),
            };
            if !on_board {
                return Err(InputError::GoalOutOfBounds {
                    player_id: id,
                    goal,
                });
            }
            players.push(Player::new(id, goal));
        }

        let cells = (0..height)
            .flat_map(|y| (0..width).map(move |x| Cell::new(Position::new(x, y))))
            .collect();

        Ok(Self {
            width,
            height,
            cells,
            players,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: usize) -> Option<&Player> {
        self.players.get(id)
    }

    pub fn contains(&self, position: Position) -> bool {
        (0..self.width).contains(&position.x) && (0..self.height).contains(&position.y)
    }

    pub fn cell(&self, position: Position) -> Option<&Cell> {
        if self.contains(position) {
            Some(&self.cells[self.index(position)])
        } else {
            None
        }
    }

    /// Iterates over the cells of the board in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// The on-board neighbours of a position, in search order.
    pub fn neighbours(&self, position: Position) -> impl Iterator<Item = Position> + '_ {
        NEIGHBOUR_OFFSETS
            .into_iter()
            .map(move |(dx, dy)| position.offset(dx, dy))
            .filter(move |&neighbour| self.contains(neighbour))
    }

    /// Moves a player and overwrites the number of walls they have left.
    ///
    /// Calling this repeatedly with the same arguments has the same effect as calling it once.
    pub fn update_player(
        &mut self,
        id: usize,
        x: i32,
        y: i32,
        walls_left: u32,
    ) -> Result<(), InputError> {
        let position = Position::new(x, y);
        if !self.contains(position) {
            return Err(InputError::OutOfBounds { x, y });
        }
        let previous = self
            .players
            .get(id)
            .ok_or(InputError::UnknownPlayer(id))?
            .position;

        // The player may not be registered on its previous cell yet (e.g. on the
        // first turn), in which case there is nothing to remove.
        let previous_idx = self.index(previous);
        self.cells[previous_idx].remove_occupant(id);

        self.players[id].update(position, walls_left);
        let idx = self.index(position);
        self.cells[idx].add_occupant(id);
        Ok(())
    }

    /// Takes a player off the board for the rest of the game.
    pub fn eliminate_player(&mut self, id: usize) -> Result<(), InputError> {
        let previous = self
            .players
            .get(id)
            .ok_or(InputError::UnknownPlayer(id))?
            .position;
        let previous_idx = self.index(previous);
        self.cells[previous_idx].remove_occupant(id);
        self.players[id].leave();
        Ok(())
    }

    /// Marks the cells covered by the wall.
    ///
    /// Whether the wall may legally be placed there is not checked. Adding a
    /// wall that already exists changes nothing.
    pub fn add_wall(&mut self, wall: Wall) -> Result<(), InputError> {
        let anchor = wall.anchor();
        if !self.contains(anchor) {
            return Err(InputError::OutOfBounds {
                x: wall.x,
                y: wall.y,
            });
        }
        // Only computed for anchors on the board, where it can't overflow.
        let [_, second] = wall.cells();
        let idx = self.index(anchor);
        self.cells[idx].set_wall();
        if self.contains(second) {
            let idx = self.index(second);
            self.cells[idx].set_wall();
        }
        Ok(())
    }

    // Only valid for positions on the board.
    fn index(&self, position: Position) -> usize {
        (position.y * self.width + position.x) as usize
    }
}
