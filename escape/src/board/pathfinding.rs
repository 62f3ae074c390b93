use std::collections::{HashMap, VecDeque};
use std::str::FromStr;

use tracing::trace;

use crate::{Board, Cell, Position};

/// A sequence of adjacent positions, from a player's position (inclusive)
/// to a cell on their goal line (inclusive).
pub type Path = Vec<Position>;

/// Which cells a path search may not step onto.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Obstacles {
    /// Walls and cells occupied by other players.
    #[default]
    WallsAndPlayers,
    /// Only walls. Other players are assumed to move out of the way.
    WallsOnly,
}

impl Obstacles {
    pub fn blocks(self, cell: &Cell) -> bool {
        match self {
            Obstacles::WallsAndPlayers => !cell.is_free(),
            Obstacles::WallsOnly => cell.is_wall(),
        }
    }
}

impl FromStr for Obstacles {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "walls-and-players" => Ok(Obstacles::WallsAndPlayers),
            "walls-only" => Ok(Obstacles::WallsOnly),
            other => Err(format!(
                "unknown obstacle policy '{}', expected 'walls-and-players' or 'walls-only'",
                other
            )),
        }
    }
}

impl std::fmt::Display for Obstacles {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Obstacles::WallsAndPlayers => write!(f, "walls-and-players"),
            Obstacles::WallsOnly => write!(f, "walls-only"),
        }
    }
}

impl Board {
    /// The shortest path of a player to their goal line, where walls and other
    /// players block the way.
    pub fn shortest_path(&self, id: usize) -> Option<Path> {
        self.shortest_path_with(id, Obstacles::default())
    }

    /// Breadth-first search from the player's position to the nearest cell on
    /// their goal line.
    ///
    /// Neighbours are expanded in the order given by [`NEIGHBOUR_OFFSETS`](crate::NEIGHBOUR_OFFSETS),
    /// so among several goal cells at the same distance, the result is always
    /// the same. The player's own cell is the root of the search no matter what
    /// else is on it.
    ///
    /// Returns `None` for unknown or eliminated players and when the goal can't
    /// be reached.
    pub fn shortest_path_with(&self, id: usize, obstacles: Obstacles) -> Option<Path> {
        let player = self.player(id).filter(|player| player.in_game)?;
        let start = player.position;

        let mut frontier = VecDeque::from([start]);
        // Maps every discovered position to the position it was reached from.
        let mut came_from: HashMap<Position, Option<Position>> = HashMap::from([(start, None)]);

        while let Some(current) = frontier.pop_front() {
            if player.goal.is_reached_at(current) {
                return Some(reconstruct_path(&came_from, current));
            }

            for neighbour in self.neighbours(current) {
                if came_from.contains_key(&neighbour) {
                    continue;
                }
                match self.cell(neighbour) {
                    Some(cell) if !obstacles.blocks(cell) => {
                        came_from.insert(neighbour, Some(current));
                        frontier.push_back(neighbour);
                    }
                    _ => {}
                }
            }
        }

        trace!(player = id, visited = came_from.len(), "No path to goal");
        None
    }
}

fn reconstruct_path(came_from: &HashMap<Position, Option<Position>>, end: Position) -> Path {
    let mut path = vec![end];
    let mut current = end;
    while let Some(&Some(previous)) = came_from.get(&current) {
        path.push(previous);
        current = previous;
    }
    path.reverse();
    path
}
