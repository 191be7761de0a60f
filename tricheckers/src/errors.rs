use crate::Move;

/// The error type for [`apply()`](crate::apply) and [`undo()`](crate::undo),
/// i.e. a move that is not a well-formed simple step or jump.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMoveShape {
    OutOfBounds,
    NotDiagonal,
    TooFar,
    EmptyOrigin,
    OccupiedDestination,
    EmptyMidpoint,
    CaptureOnSimpleStep,
}

impl std::error::Error for InvalidMoveShape {}

impl std::fmt::Display for InvalidMoveShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidMoveShape::OutOfBounds => {
                write!(f, "Move starts or ends outside of the board")
            }
            InvalidMoveShape::NotDiagonal => write!(f, "Move is not diagonal"),
            InvalidMoveShape::TooFar => {
                write!(f, "Move covers more than two diagonal squares")
            }
            InvalidMoveShape::EmptyOrigin => write!(f, "There is no piece to move"),
            InvalidMoveShape::OccupiedDestination => {
                write!(f, "The destination square is already occupied")
            }
            InvalidMoveShape::EmptyMidpoint => {
                write!(f, "Jump does not pass over a piece")
            }
            InvalidMoveShape::CaptureOnSimpleStep => {
                write!(f, "A simple step cannot have captured a piece")
            }
        }
    }
}

/// The error type for [`search()`](crate::search) and [`minimax()`](crate::minimax).
#[derive(Debug)]
pub enum SearchError {
    InvalidDepth { depth: i32 },
    InvalidMove { mv: Move, err: InvalidMoveShape },
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SearchError::InvalidMove { err, .. } => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchError::InvalidDepth { depth } => {
                write!(f, "Search depth must not be negative, got {}", depth)
            }
            SearchError::InvalidMove { mv, .. } => {
                write!(f, "Could not explore the move {}", mv)
            }
        }
    }
}

/// The error type for parsing a [`Board`](crate::Board) from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseBoardError {
    WrongRowCount { found: usize },
    WrongRowLength { row: usize, found: usize },
    UnknownSymbol { row: usize, col: usize, symbol: char },
}

impl std::error::Error for ParseBoardError {}

impl std::fmt::Display for ParseBoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseBoardError::WrongRowCount { found } => write!(
                f,
                "Expected {} rows, found {}",
                crate::BOARD_SIZE,
                found
            ),
            ParseBoardError::WrongRowLength { row, found } => write!(
                f,
                "Expected {} squares in row {}, found {}",
                crate::BOARD_SIZE,
                row,
                found
            ),
            ParseBoardError::UnknownSymbol { row, col, symbol } => write!(
                f,
                "Unknown symbol '{}' at ({}, {})",
                symbol, row, col
            ),
        }
    }
}
