use std::str::FromStr;

use crate::{Board, Cell, Color, ParseBoardError, BOARD_SIZE};

const EMPTY_SYMBOL: char = '.';

impl std::fmt::Display for Board {
    /// Draws the board in a box, with the row and column indices (mod 10) on the sides.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "    ")?;
        for j in 0..BOARD_SIZE {
            write!(f, " {}", j % 10)?;
        }
        write!(f, "\n   ╭")?;
        for _ in 0..BOARD_SIZE {
            write!(f, "──")?;
        }
        writeln!(f, "─╮")?;
        for i in 0..BOARD_SIZE {
            write!(f, "{:>2} │", i)?;
            for j in 0..BOARD_SIZE {
                let symbol = self.get(i, j).color().map_or(EMPTY_SYMBOL, Color::letter);
                write!(f, " {}", symbol)?;
            }
            writeln!(f, " │")?;
        }
        write!(f, "   ╰")?;
        for _ in 0..BOARD_SIZE {
            write!(f, "──")?;
        }
        write!(f, "─╯")
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses one line per row, using `R`, `B`, `G` for pieces and `.` for
    /// empty squares. Whitespace inside a line and blank lines are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<Vec<char>> = s
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();
        if rows.len() != BOARD_SIZE as usize {
            return Err(ParseBoardError::WrongRowCount { found: rows.len() });
        }

        let mut board = Board::empty();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != BOARD_SIZE as usize {
                return Err(ParseBoardError::WrongRowLength {
                    row: i,
                    found: row.len(),
                });
            }
            for (j, &symbol) in row.iter().enumerate() {
                let cell = match symbol {
                    EMPTY_SYMBOL => Cell::Empty,
                    _ => Cell::Occupied(Color::from_letter(symbol).ok_or(
                        ParseBoardError::UnknownSymbol {
                            row: i,
                            col: j,
                            symbol,
                        },
                    )?),
                };
                board.set(i as i8, j as i8, cell);
            }
        }
        Ok(board)
    }
}
