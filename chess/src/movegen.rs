//! Listing squares a figure may go to

use crate::attack::{self, AttackOracle};
use crate::between;
use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::castling::Squares;
use crate::moves::Move;
use crate::types::{CastlingSide, Coord, Figure, Piece};

use arrayvec::ArrayVec;
use std::ops::{Deref, DerefMut};
use std::slice;

/// List of destination squares
#[derive(Default, Debug, Clone, Eq, PartialEq)]
pub struct DestList(ArrayVec<Coord, 64>);

impl Deref for DestList {
    type Target = ArrayVec<Coord, 64>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for DestList {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<'a> IntoIterator for &'a DestList {
    type Item = &'a Coord;
    type IntoIter = slice::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for DestList {
    type Item = Coord;
    type IntoIter = arrayvec::IntoIter<Coord, 64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl DestList {
    pub fn new() -> DestList {
        DestList(ArrayVec::new())
    }

    /// Returns the destinations as a bitboard
    pub fn as_bitboard(&self) -> Bitboard {
        self.0.iter().copied().collect()
    }
}

fn pawn_pushes(f: Figure, src: Coord) -> Bitboard {
    let fwd = crate::geometry::pawn_forward_delta(f.color);
    [src.try_shift(fwd, 0), src.try_shift(2 * fwd, 0)]
        .into_iter()
        .flatten()
        .collect()
}

fn castling_dsts(f: Figure, src: Coord) -> Bitboard {
    [CastlingSide::King, CastlingSide::Queen]
        .into_iter()
        .map(|s| Squares::new(f.color, s))
        .filter(|sq| sq.king_src == src)
        .map(|sq| sq.king_dst)
        .collect()
}

fn candidates(f: Figure, src: Coord) -> Bitboard {
    match f.piece {
        Piece::Pawn => attack::pawn(f.color, src) | pawn_pushes(f, src),
        Piece::King => attack::king(src) | castling_dsts(f, src),
        Piece::Knight => attack::knight(src),
        Piece::Bishop => between::bishop_rays(src),
        Piece::Rook => between::rook_rays(src),
        Piece::Queen => between::bishop_rays(src) | between::rook_rays(src),
    }
}

/// Lists all the squares the figure on `src` may go to
///
/// A square is listed iff [`Move::new()`] would accept the move there for the side owning the
/// figure. Returns an empty list if `src` is empty.
///
/// # Example
///
/// ```
/// # use tabula::{Board, Coord, movegen, attack::NeverAttacked};
/// # use std::str::FromStr;
/// #
/// let b = Board::initial();
/// let dsts = movegen::destinations(&b, Coord::from_str("g1").unwrap(), &NeverAttacked);
/// let names: Vec<_> = dsts.iter().map(|c| c.to_string()).collect();
/// assert_eq!(names, vec!["f3", "h3"]);
/// ```
pub fn destinations<A: AttackOracle>(b: &Board, src: Coord, oracle: &A) -> DestList {
    let mut res = DestList::new();
    let f = match b.get(src) {
        Some(f) => f,
        None => return res,
    };
    for dst in candidates(f, src) & !b.color(f.color) {
        if Move::new(b, f.color, src, dst, oracle).is_ok() {
            res.push(dst);
        }
    }
    res
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attack::NeverAttacked;
    use crate::types::Color;
    use std::str::FromStr;

    fn c(s: &str) -> Coord {
        Coord::from_str(s).unwrap()
    }

    fn names(b: &Board, src: &str) -> Vec<String> {
        let mut res: Vec<_> = destinations(b, c(src), &NeverAttacked)
            .iter()
            .map(|c| c.to_string())
            .collect();
        res.sort();
        res
    }

    #[test]
    fn test_initial() {
        let b = Board::initial();
        assert_eq!(names(&b, "e2"), vec!["e3", "e4"]);
        assert_eq!(names(&b, "b8"), vec!["a6", "c6"]);
        assert!(names(&b, "a1").is_empty());
        assert!(names(&b, "e1").is_empty());
        assert!(names(&b, "e4").is_empty());

        let total: usize = Coord::iter()
            .filter(|&sq| b.get(sq).map_or(false, |f| f.color == Color::White))
            .map(|sq| destinations(&b, sq, &NeverAttacked).len())
            .sum();
        assert_eq!(total, 20);
    }

    #[test]
    fn test_sliders() {
        let b = Board::from_layout("4k3/8/8/8/3Q4/8/5p2/R3K3").unwrap();
        assert_eq!(destinations(&b, c("d4"), &NeverAttacked).len(), 25);
        assert_eq!(
            names(&b, "a1"),
            vec!["a2", "a3", "a4", "a5", "a6", "a7", "a8", "b1", "c1", "d1"]
        );
    }

    #[test]
    fn test_king_with_castling() {
        let b = Board::from_layout("r3k2r/8/8/8/8/8/8/R3K2R").unwrap();
        assert_eq!(names(&b, "e1"), vec!["c1", "d1", "d2", "e2", "f1", "f2", "g1"]);
        assert_eq!(names(&b, "e8"), vec!["c8", "d7", "d8", "e7", "f7", "f8", "g8"]);
    }

    #[test]
    fn test_pawns() {
        let b = Board::from_layout("4k3/8/8/8/8/3p1n2/4P3/4K3").unwrap();
        assert_eq!(names(&b, "e2"), vec!["d3", "e3", "e4", "f3"]);
        assert_eq!(names(&b, "d3"), vec!["d2", "e2"]);
    }

    #[test]
    fn test_matches_validation() {
        let layouts = [
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
            "r3k2r/pp3ppp/2n1b3/3q4/3P4/2N1B3/PP3PPP/R3K2R",
            "1rq1r1k1/1p3ppp/pB3n2/3ppP2/Pbb1P3/1PN2B2/2P2QPP/R1R4K",
        ];
        for layout in layouts {
            let b = Board::from_layout(layout).unwrap();
            for src in Coord::iter() {
                let f = match b.get(src) {
                    Some(f) => f,
                    None => continue,
                };
                let dsts = destinations(&b, src, &NeverAttacked).as_bitboard();
                for dst in Coord::iter() {
                    assert_eq!(
                        dsts.has(dst),
                        Move::new(&b, f.color, src, dst, &NeverAttacked).is_ok(),
                        "{}: {}{}",
                        layout,
                        src,
                        dst
                    );
                }
            }
        }
    }
}
