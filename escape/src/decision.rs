use tracing::debug;

use crate::{Action, Blockade, Board, Direction, InputError, Obstacles, Path, Position};

/// The shortest paths of all players for one turn, from the point of view of
/// the acting player.
///
/// Created by [`Board::plan_turn()`]. The action for the turn is picked by
/// [`TurnPlan::decide()`].
pub struct TurnPlan<'a> {
    /// The plan borrows the board, so it can't outlive the turn it was computed for.
    board: &'a Board,
    acting_player: usize,
    obstacles: Obstacles,
    /// Indexed by player id. `None` if the player can't reach their goal.
    paths: Vec<Option<Path>>,
}

impl Board {
    /// Computes the shortest path of every player.
    pub fn plan_turn(
        &self,
        acting_player: usize,
        obstacles: Obstacles,
    ) -> Result<TurnPlan<'_>, InputError> {
        if self.player(acting_player).is_none() {
            return Err(InputError::UnknownPlayer(acting_player));
        }
        let paths = (0..self.players().len())
            .map(|id| self.shortest_path_with(id, obstacles))
            .collect();
        Ok(TurnPlan {
            board: self,
            acting_player,
            obstacles,
            paths,
        })
    }
}

// A missing path counts as infinitely long.
fn path_len(path: &Option<Path>) -> usize {
    path.as_ref().map_or(usize::MAX, Vec::len)
}

impl TurnPlan<'_> {
    pub fn acting_player(&self) -> usize {
        self.acting_player
    }

    pub fn paths(&self) -> &[Option<Path>] {
        &self.paths
    }

    pub fn own_path(&self) -> Option<&[Position]> {
        self.paths[self.acting_player].as_deref()
    }

    /// The opponent we should try to slow down, if any.
    ///
    /// An opponent qualifies if their path is shorter than ours, or equally long
    /// while they move before us (i.e. they have a lower id). If several
    /// opponents qualify, the one with the highest id is picked.
    pub fn block_target(&self) -> Option<usize> {
        let own_len = path_len(&self.paths[self.acting_player]);
        let mut target = None;
        for (id, path) in self.paths.iter().enumerate() {
            if id == self.acting_player {
                continue;
            }
            let Some(path) = path else {
                continue;
            };
            if path.len() < own_len || (path.len() == own_len && id < self.acting_player) {
                target = Some(id);
            }
        }
        target
    }

    /// A wall against the [block target](Self::block_target), as long as we have walls left.
    pub fn blockade(&self) -> Option<Blockade> {
        let target = self.block_target()?;
        let walls_left = self.board.player(self.acting_player)?.walls_left;
        if walls_left == 0 {
            debug!(opponent = target, "Out of walls, can't block");
            return None;
        }
        let opponent_path = self.paths[target].as_deref()?;
        let blockade = self
            .board
            .find_blockade(opponent_path, self.own_path().unwrap_or(&[]));
        debug!(opponent = target, ?blockade, "Tried to block opponent");
        blockade
    }

    /// The first step along our own path.
    ///
    /// When there is no such step, because we are already on the goal line or
    /// can't reach it, this is the first neighbouring cell we may step onto.
    pub fn next_step(&self) -> Option<Direction> {
        let player = self.board.player(self.acting_player)?;
        if !player.in_game {
            return None;
        }
        let position = player.position;
        let next = match self.own_path() {
            Some(&[_, next, ..]) => next,
            _ => {
                debug!(
                    player = self.acting_player,
                    at_goal = player.has_reached_goal(),
                    "No path to follow, stepping aside"
                );
                self.board.neighbours(position).find(|&neighbour| {
                    self.board
                        .cell(neighbour)
                        .is_some_and(|cell| !self.obstacles.blocks(cell))
                })?
            }
        };
        Some(position.direction_to(next))
    }

    /// Block the most dangerous opponent if possible, otherwise advance one step.
    ///
    /// Returns `None` only if there is nowhere to go.
    pub fn decide(&self) -> Option<Action> {
        match self.blockade() {
            Some(Blockade { wall, .. }) => Some(Action::PlaceWall(wall)),
            None => self.next_step().map(Action::Move),
        }
    }
}
