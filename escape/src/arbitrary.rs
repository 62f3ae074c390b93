use quickcheck::{Arbitrary, Gen};

use crate::{Board, Orientation, Wall};

// Between 2 and 9 cells, so that there is always room for a wall next to a path.
fn dimension(g: &mut Gen) -> i32 {
    i32::from(u8::arbitrary(g) % 8) + 2
}

fn coordinate(g: &mut Gen, size: i32) -> i32 {
    i32::from(u8::arbitrary(g)) % size
}

fn board_with_players(g: &mut Gen) -> (Board, usize) {
    let width = dimension(g);
    let height = dimension(g);
    let player_count = usize::from(u8::arbitrary(g) % 3) + 2;
    let mut board = Board::new(width, height, player_count).unwrap();
    for id in 0..player_count {
        let x = coordinate(g, width);
        let y = coordinate(g, height);
        let walls_left = u32::from(u8::arbitrary(g) % 11);
        board.update_player(id, x, y, walls_left).unwrap();
    }
    (board, player_count)
}

fn arbitrary_wall(g: &mut Gen, board: &Board) -> Wall {
    Wall {
        x: coordinate(g, board.width()),
        y: coordinate(g, board.height()),
        orientation: *g
            .choose(&[Orientation::Horizontal, Orientation::Vertical])
            .unwrap(),
    }
}

/// A board with 2 to 4 players on it, and no walls.
#[derive(Clone, Debug)]
pub struct OpenBoard {
    pub board: Board,
    pub player_count: usize,
}

impl Arbitrary for OpenBoard {
    fn arbitrary(g: &mut Gen) -> Self {
        let (board, player_count) = board_with_players(g);
        OpenBoard {
            board,
            player_count,
        }
    }
}

/// A board with 2 to 4 players and some walls, which may well cut players off
/// from their goal.
#[derive(Clone, Debug)]
pub struct WalledBoard {
    pub board: Board,
    pub player_count: usize,
}

impl Arbitrary for WalledBoard {
    fn arbitrary(g: &mut Gen) -> Self {
        let (mut board, player_count) = board_with_players(g);
        let num_walls = u8::arbitrary(g) % 12;
        for _ in 0..num_walls {
            let wall = arbitrary_wall(g, &board);
            board.add_wall(wall).unwrap();
        }
        WalledBoard {
            board,
            player_count,
        }
    }
}

/// A wall that fits on the board it is going to be placed on.
#[derive(Clone, Debug)]
pub struct WallPlacement {
    pub board: Board,
    pub wall: Wall,
}

impl Arbitrary for WallPlacement {
    fn arbitrary(g: &mut Gen) -> Self {
        let WalledBoard { board, .. } = WalledBoard::arbitrary(g);
        let wall = arbitrary_wall(g, &board);
        WallPlacement { board, wall }
    }
}
