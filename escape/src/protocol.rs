use std::io::BufRead;
use std::str::FromStr;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::{Board, Direction, InputError, Orientation, Wall};

/// The first line sent by the game: `width height player_count my_id`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSetup {
    pub width: i32,
    pub height: i32,
    pub player_count: usize,
    /// The id of the player this engine is playing.
    pub my_id: usize,
}

/// The state of one player at the start of a turn: `x y walls_left`.
///
/// A player that is out of the game is sent as `-1 -1 -1`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerUpdate {
    pub x: i32,
    pub y: i32,
    pub walls_left: i32,
}

impl PlayerUpdate {
    pub const ELIMINATED: PlayerUpdate = PlayerUpdate {
        x: -1,
        y: -1,
        walls_left: -1,
    };

    pub fn is_eliminated(&self) -> bool {
        *self == Self::ELIMINATED
    }
}

/// Everything the game sends at the start of a turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnInput {
    /// One entry per player, ordered by id.
    pub players: Vec<PlayerUpdate>,
    /// All walls on the board, including the ones from earlier turns.
    pub walls: Vec<Wall>,
}

/// What to do in a turn.
///
/// The [`Display`](std::fmt::Display) impl produces the line the game expects,
/// i.e. `x y H`/`x y V` or one of `UP`, `DOWN`, `LEFT`, `RIGHT`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Action {
    PlaceWall(Wall),
    Move(Direction),
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::PlaceWall(wall) => write!(f, "{}", wall),
            Action::Move(direction) => write!(f, "{}", direction),
        }
    }
}

fn split_fields<'a, const N: usize>(
    line: &'a str,
    expected: &'static str,
) -> Result<[&'a str; N], InputError> {
    let malformed = || InputError::MalformedLine {
        line: String::from(line),
        expected,
    };
    let fields: Vec<&str> = line.split_whitespace().collect();
    fields.try_into().map_err(|_| malformed())
}

fn parse_field<T: FromStr>(
    field: &str,
    line: &str,
    expected: &'static str,
) -> Result<T, InputError> {
    field.parse().map_err(|_| InputError::MalformedLine {
        line: String::from(line),
        expected,
    })
}

impl FromStr for GameSetup {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const EXPECTED: &str = "'width height player_count my_id'";
        let [width, height, player_count, my_id] = split_fields::<4>(s, EXPECTED)?;
        let setup = GameSetup {
            width: parse_field(width, s, EXPECTED)?,
            height: parse_field(height, s, EXPECTED)?,
            player_count: parse_field(player_count, s, EXPECTED)?,
            my_id: parse_field(my_id, s, EXPECTED)?,
        };
        if setup.my_id >= setup.player_count {
            return Err(InputError::UnknownPlayer(setup.my_id));
        }
        Ok(setup)
    }
}

impl FromStr for PlayerUpdate {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const EXPECTED: &str = "'x y walls_left'";
        let [x, y, walls_left] = split_fields::<3>(s, EXPECTED)?;
        Ok(PlayerUpdate {
            x: parse_field(x, s, EXPECTED)?,
            y: parse_field(y, s, EXPECTED)?,
            walls_left: parse_field(walls_left, s, EXPECTED)?,
        })
    }
}

impl FromStr for Orientation {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "H" => Ok(Orientation::Horizontal),
            "V" => Ok(Orientation::Vertical),
            other => Err(InputError::InvalidOrientation(String::from(other))),
        }
    }
}

impl FromStr for Wall {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const EXPECTED: &str = "'x y orientation'";
        let [x, y, orientation] = split_fields::<3>(s, EXPECTED)?;
        Ok(Wall {
            x: parse_field(x, s, EXPECTED)?,
            y: parse_field(y, s, EXPECTED)?,
            orientation: orientation.parse()?,
        })
    }
}

impl Board {
    /// Overwrites the players' state and adds the walls from the turn input.
    ///
    /// Players sent as [`PlayerUpdate::ELIMINATED`] are taken off the board.
    pub fn apply_turn(&mut self, turn: &TurnInput) -> Result<(), InputError> {
        if turn.players.len() != self.players().len() {
            return Err(InputError::PlayerCountMismatch {
                expected: self.players().len(),
                actual: turn.players.len(),
            });
        }
        for (id, update) in turn.players.iter().enumerate() {
            if update.is_eliminated() {
                self.eliminate_player(id)?;
                continue;
            }
            let walls_left =
                u32::try_from(update.walls_left).map_err(|_| InputError::NegativeWallCount {
                    player_id: id,
                    walls_left: update.walls_left,
                })?;
            self.update_player(id, update.x, update.y, walls_left)?;
        }
        for &wall in &turn.walls {
            self.add_wall(wall)?;
        }
        Ok(())
    }
}

/// Reads the game's input line by line.
pub struct TurnReader<R> {
    reader: R,
    // A re-usable buffer for the current line.
    buf: String,
}

impl<R: BufRead> TurnReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
        }
    }

    fn next_line(&mut self) -> anyhow::Result<Option<&str>> {
        self.buf.clear(); // because read_line() appends to the buffer
        let num_bytes_read = self.reader.read_line(&mut self.buf)?;
        if num_bytes_read == 0 {
            return Ok(None);
        }
        Ok(Some(self.buf.trim_end()))
    }

    fn expect_line(&mut self, what: &str) -> anyhow::Result<&str> {
        self.next_line()?
            .with_context(|| format!("Input ended while waiting for {}", what))
    }

    /// Reads the setup line. Returns `None` if the input is empty.
    pub fn read_setup(&mut self) -> anyhow::Result<Option<GameSetup>> {
        match self.next_line()? {
            Some(line) => Ok(Some(line.parse()?)),
            None => Ok(None),
        }
    }

    /// Reads the input for one turn. Returns `None` if the game is over, i.e.
    /// the input ended before the turn started.
    pub fn read_turn(&mut self, player_count: usize) -> anyhow::Result<Option<TurnInput>> {
        let mut players = Vec::with_capacity(player_count);
        match self.next_line()? {
            Some(line) => players.push(line.parse::<PlayerUpdate>()?),
            None => return Ok(None),
        }
        for _ in 1..player_count {
            players.push(self.expect_line("a player's state")?.parse::<PlayerUpdate>()?);
        }

        let line = self.expect_line("the number of walls")?;
        let wall_count: usize = parse_field(line.trim(), line, "the number of walls")?;
        let mut walls = Vec::with_capacity(wall_count);
        for _ in 0..wall_count {
            walls.push(self.expect_line("a wall")?.parse::<Wall>()?);
        }

        Ok(Some(TurnInput { players, walls }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Goal, Position};

    const TWO_TURNS: &str = "9 9 2 0\n\
                             4 8 10\n\
                             4 0 10\n\
                             0\n\
                             4 7 10\n\
                             4 0 9\n\
                             1\n\
                             3 4 H\n";

    #[test]
    fn read_a_game() {
        let mut reader = TurnReader::new(TWO_TURNS.as_bytes());
        let setup = reader.read_setup().unwrap().unwrap();
        assert_eq!(
            setup,
            GameSetup {
                width: 9,
                height: 9,
                player_count: 2,
                my_id: 0
            }
        );

        let first = reader.read_turn(2).unwrap().unwrap();
        assert_eq!(
            first.players,
            vec![
                PlayerUpdate {
                    x: 4,
                    y: 8,
                    walls_left: 10
                },
                PlayerUpdate {
                    x: 4,
                    y: 0,
                    walls_left: 10
                }
            ]
        );
        assert!(first.walls.is_empty());

        let second = reader.read_turn(2).unwrap().unwrap();
        assert_eq!(second.walls, vec![Wall::new(3, 4, Orientation::Horizontal)]);
        assert_eq!(second.players[1].walls_left, 9);

        assert_eq!(reader.read_turn(2).unwrap(), None);
    }

    #[test]
    fn empty_input_has_no_setup() {
        let mut reader = TurnReader::new("".as_bytes());
        assert_eq!(reader.read_setup().unwrap(), None);
    }

    #[test]
    fn truncated_turn_is_an_error() {
        let mut reader = TurnReader::new("4 8 10\n4 0 10\n1\n".as_bytes());
        let err = reader.read_turn(2).unwrap_err();
        assert_eq!(err.to_string(), "Input ended while waiting for a wall");
    }

    #[test]
    fn malformed_lines_are_rejected() {
        assert_eq!(
            "9 9 2".parse::<GameSetup>(),
            Err(InputError::MalformedLine {
                line: String::from("9 9 2"),
                expected: "'width height player_count my_id'"
            })
        );
        assert_eq!(
            "9 9 2 2".parse::<GameSetup>(),
            Err(InputError::UnknownPlayer(2))
        );
        assert!(matches!(
            "-1 -1".parse::<PlayerUpdate>(),
            Err(InputError::MalformedLine { .. })
        ));
        assert_eq!(
            "3 4 D".parse::<Wall>(),
            Err(InputError::InvalidOrientation(String::from("D")))
        );
        assert!(matches!(
            "3 x V".parse::<Wall>(),
            Err(InputError::MalformedLine { .. })
        ));

        let mut reader = TurnReader::new("4 8 10\n4 0 10\nmany\n".as_bytes());
        let err = reader.read_turn(2).unwrap_err();
        assert_eq!(
            err.downcast_ref::<InputError>(),
            Some(&InputError::MalformedLine {
                line: String::from("many"),
                expected: "the number of walls"
            })
        );
    }

    #[test]
    fn apply_turn_updates_players_and_walls() {
        let mut board = Board::new(9, 9, 2).unwrap();
        let turn = TurnInput {
            players: vec![
                PlayerUpdate {
                    x: 0,
                    y: 4,
                    walls_left: 10,
                },
                PlayerUpdate {
                    x: 8,
                    y: 4,
                    walls_left: 7,
                },
            ],
            walls: vec![Wall::new(4, 3, Orientation::Vertical)],
        };
        board.apply_turn(&turn).unwrap();
        // Walls are sent again every turn
        board.apply_turn(&turn).unwrap();

        assert_eq!(board.player(1).unwrap().position, Position::new(8, 4));
        assert_eq!(board.player(1).unwrap().walls_left, 7);
        assert_eq!(board.player(1).unwrap().goal, Goal::Column(0));
        assert!(board.cell(Position::new(4, 3)).unwrap().is_wall());
        assert!(board.cell(Position::new(4, 4)).unwrap().is_wall());
        assert_eq!(board.cells().filter(|cell| cell.is_wall()).count(), 2);
        assert_eq!(board.cell(Position::new(0, 4)).unwrap().occupants(), &[0]);
    }

    #[test]
    fn eliminated_players_leave_the_board() {
        let mut board = Board::new(9, 9, 3).unwrap();
        let mut reader = TurnReader::new("0 4 10\n8 4 10\n4 8 10\n0\n".as_bytes());
        board.apply_turn(&reader.read_turn(3).unwrap().unwrap()).unwrap();

        let mut reader = TurnReader::new("1 4 10\n8 4 10\n-1 -1 -1\n0\n".as_bytes());
        let turn = reader.read_turn(3).unwrap().unwrap();
        assert!(turn.players[2].is_eliminated());
        board.apply_turn(&turn).unwrap();

        assert!(!board.player(2).unwrap().in_game);
        assert!(board.cell(Position::new(4, 8)).unwrap().is_free());
        assert_eq!(board.cells().filter(|cell| !cell.is_free()).count(), 2);
        assert_eq!(board.shortest_path(2), None);
    }

    #[test]
    fn negative_wall_counts_are_rejected() {
        let mut board = Board::new(9, 9, 2).unwrap();
        let turn = TurnInput {
            players: vec![
                PlayerUpdate {
                    x: 0,
                    y: 4,
                    walls_left: 10,
                },
                PlayerUpdate {
                    x: 8,
                    y: 4,
                    walls_left: -2,
                },
            ],
            walls: vec![],
        };
        assert_eq!(
            board.apply_turn(&turn),
            Err(InputError::NegativeWallCount {
                player_id: 1,
                walls_left: -2
            })
        );
    }

    #[test]
    fn apply_turn_checks_the_number_of_players() {
        let mut board = Board::new(9, 9, 3).unwrap();
        let turn = TurnInput {
            players: vec![PlayerUpdate {
                x: 0,
                y: 4,
                walls_left: 6,
            }],
            walls: vec![],
        };
        assert_eq!(
            board.apply_turn(&turn),
            Err(InputError::PlayerCountMismatch {
                expected: 3,
                actual: 1
            })
        );
    }

    #[test]
    fn actions_render_as_game_output() {
        assert_eq!(Action::Move(Direction::Left).to_string(), "LEFT");
        assert_eq!(Action::Move(Direction::Down).to_string(), "DOWN");
        assert_eq!(
            Action::PlaceWall(Wall::new(7, 1, Orientation::Vertical)).to_string(),
            "7 1 V"
        );
    }

    #[test]
    fn actions_serialize_for_recordings() {
        let json = serde_json::to_string(&Action::Move(Direction::Up)).unwrap();
        assert_eq!(json, r#"{"Move":"UP"}"#);
        let json =
            serde_json::to_string(&Action::PlaceWall(Wall::new(1, 3, Orientation::Horizontal)))
                .unwrap();
        assert_eq!(
            json,
            r#"{"PlaceWall":{"x":1,"y":3,"orientation":"H"}}"#
        );
    }
}
