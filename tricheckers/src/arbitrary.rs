use crate::{Board, Cell, Color, BOARD_SIZE};

impl quickcheck::Arbitrary for Color {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(&[Color::Red, Color::Blue, Color::Green]).unwrap()
    }
}

/// A sparse board, with about one in eight squares occupied by a random color.
impl quickcheck::Arbitrary for Board {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let mut board = Board::empty();
        for i in 0..BOARD_SIZE {
            for j in 0..BOARD_SIZE {
                if u8::arbitrary(g) % 8 == 0 {
                    board.set(i, j, Cell::Occupied(Color::arbitrary(g)));
                }
            }
        }
        board
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        // Remove one piece at a time
        let board = self.clone();
        let occupied: Vec<(i8, i8)> = board
            .squares()
            .filter(|(_, _, cell)| !cell.is_empty())
            .map(|(i, j, _)| (i, j))
            .collect();
        Box::new(occupied.into_iter().map(move |(i, j)| {
            let mut smaller = board.clone();
            smaller.set(i, j, Cell::Empty);
            smaller
        }))
    }
}
