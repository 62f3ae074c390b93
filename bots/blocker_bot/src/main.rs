mod blocker;

use std::path::PathBuf;

use blocker::BlockerBot;
use clap::Parser;
use escape::Obstacles;
use escape_bot_utils::{Bot, Recorder, RecordingWrapper};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
struct Args {
    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,

    /// What blocks a path, either "walls-and-players" or "walls-only"
    #[arg(short, long, default_value_t = Obstacles::WallsAndPlayers)]
    obstacles: Obstacles,

    /// Record every turn as a line of JSON into this file
    #[arg(short, long)]
    record_turns_to: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    initialize_logging(args.log_level);

    let bot = BlockerBot::new(args.obstacles);
    if let Some(path) = args.record_turns_to {
        let mut recording_bot = RecordingWrapper::new(bot, Recorder::create(&path)?);
        recording_bot.run()
    } else {
        let mut bot = bot;
        bot.run()
    }
}

// Stdout is reserved for talking to the game, so everything is logged to stderr.
fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}
