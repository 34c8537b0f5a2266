//! Move validation and execution

use crate::attack::AttackOracle;
use crate::board::Board;
use crate::castling::{self, Squares};
use crate::geometry;
use crate::rules;
use crate::types::{CastlingSide, Color, Coord, Figure, Piece};

use std::fmt;

use thiserror::Error;

/// Reason why the move or the activation was rejected
#[derive(Debug, Copy, Clone, Error, Eq, PartialEq, Hash)]
pub enum ValidateError {
    /// No figure is selected
    #[error("no figure is selected")]
    NoSelection,
    /// Source square is empty
    #[error("source square is empty")]
    EmptySource,
    /// Figure on the source square belongs to the side which doesn't move now
    #[error("figure belongs to the wrong side")]
    WrongSide,
    /// Move breaks the rules of the figure
    #[error("move is not legal")]
    NotLegal,
    /// Destination square holds a figure of the same color
    #[error("destination holds own figure")]
    OwnPiece,
    /// Game is already finished
    #[error("game is over")]
    GameOver,
    /// Promotion must be resolved first
    #[error("promotion is pending")]
    PromotionPending,
}

/// Kind of a validated move
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// Any move of a single figure, possibly with capture
    Simple,
    /// Castling to the given side
    Castling(CastlingSide),
}

/// Validated chess move
///
/// The only way to obtain a `Move` is [`Move::new()`], which checks the move against the board.
/// So, each `Move` was legal in the position it was created from.
///
/// # Example
///
/// ```
/// # use tabula::{Board, Color, Coord, moves::{Move, MoveKind, ValidateError}, attack::NeverAttacked};
/// # use std::str::FromStr;
/// #
/// let b = Board::initial();
/// let e2 = Coord::from_str("e2").unwrap();
/// let e4 = Coord::from_str("e4").unwrap();
/// let e5 = Coord::from_str("e5").unwrap();
///
/// let mv = Move::new(&b, Color::White, e2, e4, &NeverAttacked).unwrap();
/// assert_eq!(mv.kind(), MoveKind::Simple);
/// assert_eq!(
///     Move::new(&b, Color::White, e2, e5, &NeverAttacked),
///     Err(ValidateError::NotLegal),
/// );
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Move {
    kind: MoveKind,
    src: Coord,
    dst: Coord,
    side: Color,
}

impl Move {
    /// Validates the move from `src` to `dst` for side `side` and creates it
    ///
    /// The move is accepted if the rule of the figure on `src` allows it, or if it's an allowed
    /// castling. Then, the destination must not hold a figure of the same color.
    pub fn new<A: AttackOracle>(
        b: &Board,
        side: Color,
        src: Coord,
        dst: Coord,
        oracle: &A,
    ) -> Result<Move, ValidateError> {
        let figure = b.get(src).ok_or(ValidateError::EmptySource)?;
        if figure.color != side {
            return Err(ValidateError::WrongSide);
        }

        let kind = if rules::is_valid(b, src, dst) {
            MoveKind::Simple
        } else {
            match castling::detect(b, src, dst) {
                Some((color, s)) if castling::is_allowed(b, color, s, oracle) => {
                    MoveKind::Castling(s)
                }
                _ => return Err(ValidateError::NotLegal),
            }
        };

        if b.get(dst).map_or(false, |f| f.color == side) {
            return Err(ValidateError::OwnPiece);
        }

        Ok(Move {
            kind,
            src,
            dst,
            side,
        })
    }

    #[inline]
    pub fn kind(&self) -> MoveKind {
        self.kind
    }

    #[inline]
    pub fn src(&self) -> Coord {
        self.src
    }

    #[inline]
    pub fn dst(&self) -> Coord {
        self.dst
    }

    #[inline]
    pub fn side(&self) -> Color {
        self.side
    }

    /// Returns `true` if the move brings a pawn to the last rank of board `b`
    pub fn is_promote(&self, b: &Board) -> bool {
        self.kind == MoveKind::Simple
            && b.get(self.src)
                .map_or(false, |f| is_promote_at(f, self.dst))
    }
}

fn is_promote_at(f: Figure, dst: Coord) -> bool {
    f.piece == Piece::Pawn && dst.rank() == geometry::promote_dst_rank(f.color)
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self.kind {
            MoveKind::Simple => write!(f, "{}{}", self.src, self.dst),
            MoveKind::Castling(s) => write!(f, "{}", s),
        }
    }
}

/// Changes made to the board by a move
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Effect {
    /// Figure removed from the destination square
    pub captured: Option<Figure>,
    /// Squares of castling, if the move was castling
    pub castling: Option<Squares>,
    /// Whether the moved figure is a pawn which reached the last rank
    pub promote: bool,
}

/// Makes move `mv` on board `b`
///
/// The move must be created from the same board, otherwise the result is unspecified (though
/// still memory-safe).
pub fn make_move(b: &mut Board, mv: Move) -> Effect {
    if let MoveKind::Castling(s) = mv.kind {
        let sq = castling::perform(b, mv.side, s);
        return Effect {
            captured: None,
            castling: Some(sq),
            promote: false,
        };
    }

    let figure = b.remove(mv.src).map(|f| f.with_moved(true));
    let captured = b.get(mv.dst);
    b.put(mv.dst, figure);

    let promote = figure.map_or(false, |f| is_promote_at(f, mv.dst));
    Effect {
        captured,
        castling: None,
        promote,
    }
}
