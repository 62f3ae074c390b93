use serde::{Deserialize, Serialize};

/// The offsets of the four neighbours of a cell, in the order in which
/// path searches visit them.
pub const NEIGHBOUR_OFFSETS: [(i32, i32); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// A coordinate on the board.
///
/// `x` grows to the right and `y` grows downwards, so `(0, 0)` is the
/// top-left corner.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    pub fn manhattan_distance(self, other: Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    pub fn is_adjacent_to(self, other: Position) -> bool {
        self.manhattan_distance(other) == 1
    }

    /// The direction to take to get from `self` to `to`.
    ///
    /// The x axis is compared first, so for cells that differ on both axes
    /// the horizontal direction wins. Identical positions yield [`Direction::Up`].
    pub fn direction_to(self, to: Position) -> Direction {
        if to.x > self.x {
            Direction::Right
        } else if to.x < self.x {
            Direction::Left
        } else if to.y > self.y {
            Direction::Down
        } else {
            Direction::Up
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A single step a player can take.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Right,
    Left,
    Down,
    Up,
}

impl Direction {
    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Right => write!(f, "RIGHT"),
            Direction::Left => write!(f, "LEFT"),
            Direction::Down => write!(f, "DOWN"),
            Direction::Up => write!(f, "UP"),
        }
    }
}

/// One cell of the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    position: Position,
    /// Once set, this is never cleared again.
    is_wall: bool,
    /// Ids of the players standing on this cell.
    ///
    /// Normally there is at most one, but nothing prevents several players from
    /// being recorded here while the board is being updated.
    occupants: Vec<usize>,
}

impl Cell {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            is_wall: false,
            occupants: Vec::new(),
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn is_wall(&self) -> bool {
        self.is_wall
    }

    pub fn occupants(&self) -> &[usize] {
        &self.occupants
    }

    /// A cell is free if it is neither a wall nor occupied by a player.
    pub fn is_free(&self) -> bool {
        !self.is_wall && self.occupants.is_empty()
    }

    /// See [`Position::direction_to()`].
    pub fn direction_to(&self, other: &Cell) -> Direction {
        self.position.direction_to(other.position)
    }

    pub fn manhattan_distance(&self, other: &Cell) -> u32 {
        self.position.manhattan_distance(other.position)
    }

    pub(crate) fn set_wall(&mut self) {
        self.is_wall = true;
    }

    pub(crate) fn add_occupant(&mut self, player_id: usize) {
        self.occupants.push(player_id);
    }

    /// Removes the first reference to this player, if there is one.
    pub(crate) fn remove_occupant(&mut self, player_id: usize) -> bool {
        match self.occupants.iter().position(|&id| id == player_id) {
            Some(idx) => {
                self.occupants.remove(idx);
                true
            }
            None => false,
        }
    }
}
