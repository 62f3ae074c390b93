mod recording;
pub use recording::*;

use std::io::{BufRead, Write};

use escape::{Action, Direction, GameSetup, TurnInput, TurnReader};
use tracing::warn;

/// Sent when a bot has no action for a turn, since the game requires an answer.
pub const PLACEHOLDER_ACTION: Action = Action::Move(Direction::Up);

/// A trait to simplify writing bots.
pub trait Bot {
    fn new_game(&mut self, setup: GameSetup) -> anyhow::Result<()>;
    fn play_turn(&mut self, turn: &TurnInput) -> anyhow::Result<Option<Action>>;

    fn run(&mut self) -> anyhow::Result<()> {
        // Communication happens through stdin/stdout.
        // Stderr can be used for logging.
        let stdin = std::io::stdin().lock();
        let stdout = std::io::stdout().lock();
        self.run_with(stdin, stdout)
    }

    /// Plays one game, reading the game's input from `input` and answering on `output`.
    fn run_with<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> anyhow::Result<()> {
        let mut reader = TurnReader::new(input);
        let Some(setup) = reader.read_setup()? else {
            // 0 bytes read means EOF - the game has exited.
            return Ok(());
        };
        self.new_game(setup)?;

        while let Some(turn) = reader.read_turn(setup.player_count)? {
            let action = match self.play_turn(&turn)? {
                Some(action) => action,
                None => {
                    warn!("No action available, answering with {}", PLACEHOLDER_ACTION);
                    PLACEHOLDER_ACTION
                }
            };
            writeln!(output, "{}", action)?;
            output.flush()?;
        }
        Ok(())
    }
}
