//! Near attacks and the attacked-square seam

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::types::{Color, Coord};

const KING_DELTAS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const WHITE_PAWN_DELTAS: [(isize, isize); 2] = [(-1, -1), (-1, 1)];
const BLACK_PAWN_DELTAS: [(isize, isize); 2] = [(1, -1), (1, 1)];

const fn gen_near(deltas: &[(isize, isize)]) -> [Bitboard; 64] {
    let mut res = [Bitboard::EMPTY; 64];
    let mut idx = 0;
    while idx < 64 {
        let mut acc = 0_u64;
        let mut d = 0;
        while d < deltas.len() {
            let (dr, dc) = deltas[d];
            let row = (idx / 8) as isize + dr;
            let col = (idx % 8) as isize + dc;
            if row >= 0 && row < 8 && col >= 0 && col < 8 {
                acc |= 1_u64 << ((row * 8 + col) as u32);
            }
            d += 1;
        }
        res[idx] = Bitboard::from_raw(acc);
        idx += 1;
    }
    res
}

static KING_ATTACKS: [Bitboard; 64] = gen_near(&KING_DELTAS);
static KNIGHT_ATTACKS: [Bitboard; 64] = gen_near(&KNIGHT_DELTAS);
static WHITE_PAWN_ATTACKS: [Bitboard; 64] = gen_near(&WHITE_PAWN_DELTAS);
static BLACK_PAWN_ATTACKS: [Bitboard; 64] = gen_near(&BLACK_PAWN_DELTAS);

#[inline]
pub fn king(coord: Coord) -> Bitboard {
    KING_ATTACKS[coord.index()]
}

#[inline]
pub fn knight(coord: Coord) -> Bitboard {
    KNIGHT_ATTACKS[coord.index()]
}

/// Squares a pawn of color `color` standing on `coord` may capture on
#[inline]
pub fn pawn(color: Color, coord: Coord) -> Bitboard {
    match color {
        Color::White => WHITE_PAWN_ATTACKS[coord.index()],
        Color::Black => BLACK_PAWN_ATTACKS[coord.index()],
    }
}

/// Decides whether a square is attacked
///
/// This is the only place where the engine asks about attacks. It is consulted when checking
/// whether the king may castle through the squares between the king and the rook.
pub trait AttackOracle {
    /// Returns `true` if the square `coord` on board `b` is attacked by the figures of color `by`
    fn is_square_attacked(&self, b: &Board, coord: Coord, by: Color) -> bool;
}

/// Attack oracle which considers every square safe
///
/// The engine doesn't detect checks, so this is the oracle used by [`Game`](crate::game::Game).
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct NeverAttacked;

impl AttackOracle for NeverAttacked {
    #[inline]
    fn is_square_attacked(&self, _b: &Board, _coord: Coord, _by: Color) -> bool {
        false
    }
}

impl<A: AttackOracle + ?Sized> AttackOracle for &A {
    #[inline]
    fn is_square_attacked(&self, b: &Board, coord: Coord, by: Color) -> bool {
        (**self).is_square_attacked(b, coord, by)
    }
}
