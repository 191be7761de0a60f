use std::ops::{Deref, DerefMut};

use serde::{Deserialize, Serialize};

use crate::{Board, Cell, Color, InvalidMoveShape};

/// Moving a piece from one square to another.
///
/// A move is either a simple step to a diagonally adjacent square, or a jump
/// two squares along a diagonal that captures the piece in between.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: (i8, i8),
    pub to: (i8, i8),
}

impl Move {
    pub fn new(from: (i8, i8), to: (i8, i8)) -> Self {
        Self { from, to }
    }

    pub fn is_jump(&self) -> bool {
        (self.to.0 - self.from.0).abs() == 2
    }

    /// The square that is jumped over. Only meaningful for jumps.
    pub fn midpoint(&self) -> (i8, i8) {
        (
            (self.from.0 + self.to.0) / 2,
            (self.from.1 + self.to.1) / 2,
        )
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}) -> ({}, {})",
            self.from.0, self.from.1, self.to.0, self.to.1
        )
    }
}

impl Color {
    /// The two diagonals along which pieces of this color may move.
    ///
    /// Red and Blue start at the bottom and only move up, Green starts at
    /// the top and only moves down.
    pub fn directions(self) -> [(i8, i8); 2] {
        match self {
            Color::Red | Color::Blue => [(-1, -1), (-1, 1)],
            Color::Green => [(1, -1), (1, 1)],
        }
    }
}

/// All legal moves for `color`.
///
/// Squares are scanned in row-major order and each piece's directions in the
/// order of [`Color::directions()`]. Capturing is optional, so simple steps
/// and jumps are both listed. The order is stable, and the search relies on
/// it for tie-breaking.
pub fn legal_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut moves = Vec::new();
    for (i, j, cell) in board.squares() {
        if cell != Cell::Occupied(color) {
            continue;
        }
        for (di, dj) in color.directions() {
            let (step_i, step_j) = (i + di, j + dj);
            if !Board::is_in_bounds(step_i, step_j) {
                continue;
            }
            match board.get(step_i, step_j) {
                Cell::Empty => moves.push(Move::new((i, j), (step_i, step_j))),
                Cell::Occupied(other) if other != color => {
                    let (jump_i, jump_j) = (step_i + di, step_j + dj);
                    if Board::is_in_bounds(jump_i, jump_j) && board.get(jump_i, jump_j).is_empty()
                    {
                        moves.push(Move::new((i, j), (jump_i, jump_j)));
                    }
                }
                Cell::Occupied(_) => (),
            }
        }
    }
    moves
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Shape {
    Step,
    Jump { over: (i8, i8) },
}

fn shape_of(mv: Move) -> Result<Shape, InvalidMoveShape> {
    let Move {
        from: (from_i, from_j),
        to: (to_i, to_j),
    } = mv;
    if !Board::is_in_bounds(from_i, from_j) || !Board::is_in_bounds(to_i, to_j) {
        return Err(InvalidMoveShape::OutOfBounds);
    }
    let (di, dj) = (to_i - from_i, to_j - from_j);
    if di == 0 || di.abs() != dj.abs() {
        return Err(InvalidMoveShape::NotDiagonal);
    }
    match di.abs() {
        1 => Ok(Shape::Step),
        2 => Ok(Shape::Jump {
            over: mv.midpoint(),
        }),
        _ => Err(InvalidMoveShape::TooFar),
    }
}

/// What [`apply_checked()`] did, i.e. everything needed to revert it.
#[derive(Clone, Copy, Debug)]
struct Applied {
    shape: Shape,
    mover: Color,
    captured: Option<Color>,
}

fn apply_checked(board: &mut Board, mv: Move) -> Result<Applied, InvalidMoveShape> {
    let shape = shape_of(mv)?;
    let (from_i, from_j) = mv.from;
    let (to_i, to_j) = mv.to;

    let mover = board
        .get(from_i, from_j)
        .color()
        .ok_or(InvalidMoveShape::EmptyOrigin)?;
    if !board.get(to_i, to_j).is_empty() {
        return Err(InvalidMoveShape::OccupiedDestination);
    }
    let captured = match shape {
        Shape::Step => None,
        Shape::Jump { over: (i, j) } => {
            let captured = board.get(i, j).color().ok_or(InvalidMoveShape::EmptyMidpoint)?;
            board.set(i, j, Cell::Empty);
            Some(captured)
        }
    };
    board.set(from_i, from_j, Cell::Empty);
    board.set(to_i, to_j, Cell::Occupied(mover));

    Ok(Applied {
        shape,
        mover,
        captured,
    })
}

fn revert(board: &mut Board, mv: Move, shape: Shape, mover: Color, captured: Option<Color>) {
    board.set(mv.from.0, mv.from.1, Cell::Occupied(mover));
    board.set(mv.to.0, mv.to.1, Cell::Empty);
    if let (Shape::Jump { over: (i, j) }, Some(color)) = (shape, captured) {
        board.set(i, j, Cell::Occupied(color));
    }
}

/// Moves a piece, removing the jumped-over piece if `mv` is a jump.
///
/// Returns the color of the captured piece, or `None` for a simple step.
/// On error, the board is left untouched.
///
/// This checks that the move is well-formed, but not that it follows the
/// movement rules of the piece's color. Use [`legal_moves()`] for that.
pub fn apply(board: &mut Board, mv: Move) -> Result<Option<Color>, InvalidMoveShape> {
    apply_checked(board, mv).map(|applied| applied.captured)
}

/// Reverts [`apply()`].
///
/// `mover` and `captured` must be the color of the moved piece and the value
/// returned by `apply()` for the same move; this is a structural inverse, not
/// a snapshot restore.
pub fn undo(
    board: &mut Board,
    mv: Move,
    mover: Color,
    captured: Option<Color>,
) -> Result<(), InvalidMoveShape> {
    let shape = shape_of(mv)?;
    if shape == Shape::Step && captured.is_some() {
        return Err(InvalidMoveShape::CaptureOnSimpleStep);
    }
    revert(board, mv, shape, mover, captured);
    Ok(())
}

/// A move that is applied for as long as this guard lives.
///
/// Dropping the guard undoes the move, so the board is restored on every
/// exit path of the scope that created it. The board stays reachable through
/// the guard, which allows speculative moves to be stacked.
pub struct Speculation<'a> {
    board: &'a mut Board,
    mv: Move,
    applied: Applied,
}

impl<'a> Speculation<'a> {
    pub fn apply(board: &'a mut Board, mv: Move) -> Result<Self, InvalidMoveShape> {
        let applied = apply_checked(board, mv)?;
        Ok(Self { board, mv, applied })
    }

    pub fn mover(&self) -> Color {
        self.applied.mover
    }

    pub fn captured(&self) -> Option<Color> {
        self.applied.captured
    }
}

impl Deref for Speculation<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl DerefMut for Speculation<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for Speculation<'_> {
    fn drop(&mut self) {
        let Applied {
            shape,
            mover,
            captured,
        } = self.applied;
        revert(self.board, self.mv, shape, mover, captured);
    }
}
