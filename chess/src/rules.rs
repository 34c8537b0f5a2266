//! Geometric rules of the pieces
//!
//! Every predicate here looks only at the board and the pair of squares, and never changes
//! anything. The predicates don't care about whose turn it is and, except for pawns, about what
//! stands on the destination square: these checks are done by [`moves`](crate::moves).
//!
//! Castling is not covered here, see [`castling`](crate::castling).

use crate::attack;
use crate::between;
use crate::board::Board;
use crate::geometry;
use crate::types::{Coord, Piece};

/// Returns `true` if the pawn standing on `src` may go to `dst`
///
/// The pawn may advance one square onto an empty square, advance two squares from its starting
/// rank if both squares are empty, or capture an opponent figure diagonally. There is no en
/// passant. The starting rank is checked literally, so the pawn doesn't need to be unmoved.
///
/// Returns `false` if `src` doesn't hold a pawn.
pub fn is_pawn_valid(b: &Board, src: Coord, dst: Coord) -> bool {
    let color = match b.get(src) {
        Some(f) if f.piece == Piece::Pawn => f.color,
        _ => return false,
    };
    let fwd = geometry::pawn_forward_delta(color);

    if attack::pawn(color, src).has(dst) {
        return b.get(dst).map_or(false, |f| f.color != color);
    }
    if src.col() != dst.col() {
        return false;
    }
    let single = match src.try_shift(fwd, 0) {
        Some(c) => c,
        None => return false,
    };
    if dst == single {
        return b.is_empty(dst);
    }
    if src.rank() != geometry::double_move_src_rank(color) {
        return false;
    }
    match single.try_shift(fwd, 0) {
        Some(double) => dst == double && b.is_empty(single) && b.is_empty(double),
        None => false,
    }
}

/// Returns `true` if `src` and `dst` share a row or a column and nothing stands between them
#[inline]
pub fn is_rook_valid(b: &Board, src: Coord, dst: Coord) -> bool {
    between::is_rook_valid(src, dst) && (between::rook_strict(src, dst) & b.occupied()).is_empty()
}

#[inline]
pub fn is_knight_valid(_b: &Board, src: Coord, dst: Coord) -> bool {
    attack::knight(src).has(dst)
}

/// Returns `true` if `src` and `dst` share a diagonal and nothing stands between them
#[inline]
pub fn is_bishop_valid(b: &Board, src: Coord, dst: Coord) -> bool {
    between::is_bishop_valid(src, dst)
        && (between::bishop_strict(src, dst) & b.occupied()).is_empty()
}

#[inline]
pub fn is_queen_valid(b: &Board, src: Coord, dst: Coord) -> bool {
    is_rook_valid(b, src, dst) || is_bishop_valid(b, src, dst)
}

/// Returns `true` if `dst` is at most one square away from `src` in each direction
///
/// Note that `src == dst` satisfies this rule.
#[inline]
pub fn is_king_valid(_b: &Board, src: Coord, dst: Coord) -> bool {
    src == dst || attack::king(src).has(dst)
}

/// Checks the rule of the figure standing on `src`
///
/// Returns `false` if `src` is empty.
pub fn is_valid(b: &Board, src: Coord, dst: Coord) -> bool {
    let piece = match b.get(src) {
        Some(f) => f.piece,
        None => return false,
    };
    match piece {
        Piece::Pawn => is_pawn_valid(b, src, dst),
        Piece::King => is_king_valid(b, src, dst),
        Piece::Knight => is_knight_valid(b, src, dst),
        Piece::Bishop => is_bishop_valid(b, src, dst),
        Piece::Rook => is_rook_valid(b, src, dst),
        Piece::Queen => is_queen_valid(b, src, dst),
    }
}
