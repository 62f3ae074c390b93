use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Context;
use escape::{Action, GameSetup, TurnInput};
use serde::Serialize;

use crate::Bot;

/// One line of a recording.
#[derive(Serialize)]
#[serde(tag = "type")]
enum Record<'a> {
    Setup {
        setup: &'a GameSetup,
    },
    Turn {
        turn: usize,
        input: &'a TurnInput,
        action: Option<&'a Action>,
    },
}

/// Writes the course of a game as JSON lines, one per setup and turn.
pub struct Recorder<W: Write = BufWriter<File>> {
    writer: W,
    turn: usize,
}

impl Recorder {
    pub fn create(path: &Path) -> anyhow::Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("Could not create recording '{}'", path.display()))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> Recorder<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, turn: 0 }
    }

    pub fn record_setup(&mut self, setup: &GameSetup) -> anyhow::Result<()> {
        self.turn = 0;
        self.write(&Record::Setup { setup })
    }

    pub fn record_turn(&mut self, input: &TurnInput, action: Option<&Action>) -> anyhow::Result<()> {
        self.turn += 1;
        self.write(&Record::Turn {
            turn: self.turn,
            input,
            action,
        })
    }

    // Flushes after every line, so that the recording is complete even if the
    // game kills the bot.
    fn write(&mut self, record: &Record) -> anyhow::Result<()> {
        serde_json::to_writer(&mut self.writer, record)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Records everything your bot sees and does.
pub struct RecordingWrapper<T, W: Write = BufWriter<File>> {
    bot: T,
    recorder: Recorder<W>,
}

impl<T, W: Write> RecordingWrapper<T, W> {
    pub fn new(bot: T, recorder: Recorder<W>) -> Self {
        Self { bot, recorder }
    }
}

impl<T: Bot, W: Write> Bot for RecordingWrapper<T, W> {
    fn new_game(&mut self, setup: GameSetup) -> anyhow::Result<()> {
        self.recorder.record_setup(&setup)?;
        self.bot.new_game(setup)
    }

    fn play_turn(&mut self, turn: &TurnInput) -> anyhow::Result<Option<Action>> {
        let action = self.bot.play_turn(turn)?;
        self.recorder.record_turn(turn, action.as_ref())?;
        Ok(action)
    }
}
