//! Castling eligibility and execution

use crate::attack::AttackOracle;
use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::geometry;
use crate::types::{CastlingSide, Color, Coord, Figure, Piece};

/// Squares which must be empty and safe to castle
///
/// For the king side, these are the squares on files `f` and `g`, for the queen side, these are
/// the squares on files `b`, `c` and `d`.
#[inline]
pub const fn pass(c: Color, s: CastlingSide) -> Bitboard {
    let x = match s {
        CastlingSide::King => 0x60,
        CastlingSide::Queen => 0x0e,
    };
    Bitboard::from_raw(match c {
        Color::White => x << 56,
        Color::Black => x,
    })
}

/// Source and destination squares of both figures participating in castling
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Squares {
    pub king_src: Coord,
    pub king_dst: Coord,
    pub rook_src: Coord,
    pub rook_dst: Coord,
}

impl Squares {
    pub const fn new(c: Color, s: CastlingSide) -> Squares {
        let rank = geometry::castling_rank(c);
        Squares {
            king_src: Coord::from_parts(geometry::KING_SRC_FILE, rank),
            king_dst: Coord::from_parts(geometry::king_dst_file(s), rank),
            rook_src: Coord::from_parts(geometry::rook_src_file(s), rank),
            rook_dst: Coord::from_parts(geometry::rook_dst_file(s), rank),
        }
    }
}

/// Recognizes the king move from `src` to `dst` as castling
///
/// Only the geometry is checked here: `src` must hold a king standing on its initial square,
/// and `dst` must be two files away on the same rank. Use [`is_allowed`] to check whether such
/// castling may actually happen.
pub fn detect(b: &Board, src: Coord, dst: Coord) -> Option<(Color, CastlingSide)> {
    let king = match b.get(src) {
        Some(f) if f.piece == Piece::King => f,
        _ => return None,
    };
    [CastlingSide::King, CastlingSide::Queen]
        .into_iter()
        .find(|&side| {
            let sq = Squares::new(king.color, side);
            sq.king_src == src && sq.king_dst == dst
        })
        .map(|side| (king.color, side))
}

#[inline]
fn is_unmoved(b: &Board, coord: Coord, c: Color, p: Piece) -> bool {
    b.get(coord).map_or(false, |f| f.is(c, p) && !f.moved)
}

/// Returns `true` if side `c` may castle to side `s`
///
/// Both the king and the rook must stand on their initial squares and must have never moved.
/// All the squares between them must be empty, and none of them may be attacked by the
/// opponent, as reported by `oracle`.
pub fn is_allowed<A: AttackOracle>(b: &Board, c: Color, s: CastlingSide, oracle: &A) -> bool {
    let sq = Squares::new(c, s);
    if !is_unmoved(b, sq.king_src, c, Piece::King) || !is_unmoved(b, sq.rook_src, c, Piece::Rook)
    {
        return false;
    }
    let pass = pass(c, s);
    if (pass & b.occupied()).is_nonempty() {
        return false;
    }
    pass.into_iter().all(|coord| !oracle.is_square_attacked(b, coord, c.inv()))
}

/// Performs castling for side `c` to side `s` on board `b`
///
/// Both the king and the rook are marked as moved. The move is not validated, so you must
/// check it with [`is_allowed`] first.
pub fn perform(b: &mut Board, c: Color, s: CastlingSide) -> Squares {
    let sq = Squares::new(c, s);
    let moved = |f: Option<Figure>| f.map(|f| f.with_moved(true));
    let king = b.remove(sq.king_src);
    let rook = b.remove(sq.rook_src);
    b.put(sq.king_dst, moved(king));
    b.put(sq.rook_dst, moved(rook));
    sq
}
