use serde::{Deserialize, Serialize};

pub const BOARD_SIZE: i8 = 15;

/// The three sides, in turn order.
pub const ROTATION: [Color; 3] = [Color::Red, Color::Blue, Color::Green];

/// The color of a piece, which is also the identity of the player owning it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// Starts in the bottom-left corner and moves upward.
    Red,
    /// Starts in the bottom-right corner and moves upward.
    Blue,
    /// Starts at the top center and moves downward.
    Green,
}

impl Color {
    /// The single-letter code used when rendering or parsing a board.
    pub fn letter(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Blue => 'B',
            Color::Green => 'G',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'R' => Some(Color::Red),
            'B' => Some(Color::Blue),
            'G' => Some(Color::Green),
            _ => None,
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
        };
        f.write_str(name)
    }
}

/// The content of a single square.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Color),
}

impl Cell {
    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(color) => Some(color),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Option<Color>> for Cell {
    fn from(color: Option<Color>) -> Self {
        color.map_or(Cell::Empty, Cell::Occupied)
    }
}

/// The 15 x 15 playing field.
///
/// Coordinates are `(i, j)` pairs, where `i` is the row (growing downward)
/// and `j` the column (growing rightward). Both are in `0..BOARD_SIZE`.
///
/// The board is a plain value: it is created once per game and then mutated
/// in place by [`apply()`](crate::apply) and [`undo()`](crate::undo).
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl Board {
    /// A board without any pieces on it.
    pub fn empty() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE as usize]; BOARD_SIZE as usize],
        }
    }

    /// The starting position: a 2 x 3 block of red pieces in the bottom-left
    /// corner, a 2 x 3 block of blue pieces in the bottom-right corner, and a
    /// 2 x 3 block of green pieces at the top center.
    pub fn initialize() -> Self {
        let mut board = Self::empty();
        for i in 13..15 {
            for j in 0..3 {
                board.set(i, j, Cell::Occupied(Color::Red));
            }
            for j in 12..15 {
                board.set(i, j, Cell::Occupied(Color::Blue));
            }
        }
        for i in 0..2 {
            for j in 6..9 {
                board.set(i, j, Cell::Occupied(Color::Green));
            }
        }
        board
    }

    pub fn is_in_bounds(i: i8, j: i8) -> bool {
        (0..BOARD_SIZE).contains(&i) && (0..BOARD_SIZE).contains(&j)
    }

    /// Panics if the coordinates are out of bounds.
    pub fn get(&self, i: i8, j: i8) -> Cell {
        assert!(Self::is_in_bounds(i, j), "({}, {}) is off the board", i, j);
        self.cells[i as usize][j as usize]
    }

    /// Panics if the coordinates are out of bounds.
    pub fn set(&mut self, i: i8, j: i8, cell: Cell) {
        assert!(Self::is_in_bounds(i, j), "({}, {}) is off the board", i, j);
        self.cells[i as usize][j as usize] = cell;
    }

    /// Iterates over all squares in row-major order.
    pub fn squares(&self) -> impl Iterator<Item = (i8, i8, Cell)> + '_ {
        self.cells.iter().enumerate().flat_map(|(i, row)| {
            row.iter()
                .enumerate()
                .map(move |(j, &cell)| (i as i8, j as i8, cell))
        })
    }

    /// The number of pieces of the given color.
    pub fn count(&self, color: Color) -> usize {
        self.squares()
            .filter(|&(_, _, cell)| cell == Cell::Occupied(color))
            .count()
    }

    /// The colors that still have at least one piece, in turn order.
    pub fn colors_remaining(&self) -> Vec<Color> {
        ROTATION
            .into_iter()
            .filter(|&color| self.count(color) > 0)
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_layout() {
        let board = Board::initialize();
        for color in ROTATION {
            assert_eq!(board.count(color), 6);
        }
        assert_eq!(board.squares().filter(|(_, _, c)| c.is_empty()).count(), 225 - 18);

        assert_eq!(board.get(13, 0), Cell::Occupied(Color::Red));
        assert_eq!(board.get(14, 2), Cell::Occupied(Color::Red));
        assert_eq!(board.get(13, 12), Cell::Occupied(Color::Blue));
        assert_eq!(board.get(14, 14), Cell::Occupied(Color::Blue));
        assert_eq!(board.get(0, 6), Cell::Occupied(Color::Green));
        assert_eq!(board.get(1, 8), Cell::Occupied(Color::Green));

        assert_eq!(board.get(12, 0), Cell::Empty);
        assert_eq!(board.get(13, 3), Cell::Empty);
        assert_eq!(board.get(2, 7), Cell::Empty);
        assert_eq!(board.get(0, 5), Cell::Empty);
    }

    #[test]
    fn get_and_set() {
        let mut board = Board::empty();
        board.set(7, 3, Cell::Occupied(Color::Blue));
        assert_eq!(board.get(7, 3), Cell::Occupied(Color::Blue));
        assert_eq!(board.get(7, 3).color(), Some(Color::Blue));
        assert_eq!(board.colors_remaining(), vec![Color::Blue]);
        board.set(7, 3, Cell::Empty);
        assert!(board.colors_remaining().is_empty());
    }

    #[test]
    #[should_panic]
    fn get_out_of_bounds_panics() {
        Board::empty().get(15, 0);
    }

    #[test]
    fn bounds() {
        assert!(Board::is_in_bounds(0, 0));
        assert!(Board::is_in_bounds(14, 14));
        assert!(!Board::is_in_bounds(-1, 3));
        assert!(!Board::is_in_bounds(3, 15));
    }

    #[test]
    fn cell_from_option() {
        assert_eq!(Cell::from(None), Cell::Empty);
        assert_eq!(Cell::from(Some(Color::Green)), Cell::Occupied(Color::Green));
    }
}
