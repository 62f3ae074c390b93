use crate::Goal;

/// The error type for turn input that cannot be applied to a [`Board`](crate::Board).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputError {
    MalformedLine {
        line: String,
        expected: &'static str,
    },
    InvalidOrientation(String),
    InvalidDimensions {
        width: i32,
        height: i32,
    },
    UnsupportedPlayerCount(usize),
    PlayerCountMismatch {
        expected: usize,
        actual: usize,
    },
    UnknownPlayer(usize),
    OutOfBounds {
        x: i32,
        y: i32,
    },
    GoalOutOfBounds {
        player_id: usize,
        goal: Goal,
    },
    NegativeWallCount {
        player_id: usize,
        walls_left: i32,
    },
}

impl std::error::Error for InputError {}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::MalformedLine { line, expected } => {
                write!(f, "Expected {}, but got the line '{}'", expected, line)
            }
            InputError::InvalidOrientation(orientation) => write!(
                f,
                "'{}' is not a wall orientation, expected 'H' or 'V'",
                orientation
            ),
            InputError::InvalidDimensions { width, height } => {
                write!(f, "A board of size {}x{} has no cells", width, height)
            }
            InputError::UnsupportedPlayerCount(count) => write!(
                f,
                "The game is played by 2 to 4 players, but {} were announced",
                count
            ),
            InputError::PlayerCountMismatch { expected, actual } => write!(
                f,
                "Expected the state of {} players, but got {}",
                expected, actual
            ),
            InputError::UnknownPlayer(id) => write!(f, "There is no player with id {}", id),
            InputError::OutOfBounds { x, y } => {
                write!(f, "The coordinate ({}, {}) is outside of the board", x, y)
            }
            InputError::GoalOutOfBounds { player_id, goal } => write!(
                f,
                "The goal {:?} of player {} is outside of the board",
                goal, player_id
            ),
            InputError::NegativeWallCount {
                player_id,
                walls_left,
            } => write!(
                f,
                "Player {} is still in the game, but has {} walls left",
                player_id, walls_left
            ),
        }
    }
}
