use anyhow::Context;
use escape::{Action, Board, GameSetup, Obstacles, TurnInput};
use escape_bot_utils::Bot;
use tracing::{debug, info, trace};

/// Runs for its goal along the shortest path, and walls off any opponent
/// that would get to their goal first.
pub struct BlockerBot {
    obstacles: Obstacles,
    game: Option<Game>,
}

struct Game {
    board: Board,
    my_id: usize,
}

impl BlockerBot {
    pub fn new(obstacles: Obstacles) -> Self {
        Self {
            obstacles,
            game: None,
        }
    }
}

impl Bot for BlockerBot {
    fn new_game(&mut self, setup: GameSetup) -> anyhow::Result<()> {
        let board = Board::new(setup.width, setup.height, setup.player_count)?;
        info!(
            width = setup.width,
            height = setup.height,
            players = setup.player_count,
            my_id = setup.my_id,
            obstacles = %self.obstacles,
            "New game"
        );
        self.game = Some(Game {
            board,
            my_id: setup.my_id,
        });
        Ok(())
    }

    fn play_turn(&mut self, turn: &TurnInput) -> anyhow::Result<Option<Action>> {
        let game = self
            .game
            .as_mut()
            .context("Received a turn before the game was set up")?;
        game.board.apply_turn(turn)?;
        trace!("Board:\n{}", game.board);

        let plan = game.board.plan_turn(game.my_id, self.obstacles)?;
        for (player, path) in game.board.players().iter().zip(plan.paths()) {
            match path {
                Some(path) => debug!(
                    player = player.id,
                    length = path.len(),
                    detour = path.len() as u32 - 1 - player.goal.distance_from(player.position),
                    "Shortest path"
                ),
                None if !player.in_game => debug!(player = player.id, "Out of the game"),
                None => debug!(player = player.id, "No path to goal"),
            }
        }

        let action = plan.decide();
        if let Some(action) = action {
            info!(%action, "Chosen action");
        }
        Ok(action)
    }
}
