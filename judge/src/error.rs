use tricheckers::{Color, InvalidMoveShape, Move};

#[derive(Debug)]
/// Error type for one turn.
pub enum IllegalMove {
    NotAmongLegalMoves { color: Color, mv: Move },
    InvalidMoveShape { mv: Move, err: InvalidMoveShape },
}

impl std::error::Error for IllegalMove {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IllegalMove::InvalidMoveShape { err, .. } => Some(err),
            _ => None,
        }
    }
}

impl std::fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalMove::NotAmongLegalMoves { color, mv } => {
                write!(f, "The move {} is not a legal move for {}", mv, color)
            }
            IllegalMove::InvalidMoveShape { mv, .. } => {
                write!(f, "The move {} could not be applied", mv)
            }
        }
    }
}
