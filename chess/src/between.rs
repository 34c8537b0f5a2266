use crate::bitboard::Bitboard;
use crate::types::Coord;

const ROOK_DIRS_GT: [(isize, isize); 2] = [(1, 0), (0, 1)];
const ROOK_DIRS_LT: [(isize, isize); 2] = [(-1, 0), (0, -1)];
const BISHOP_DIRS_GT: [(isize, isize); 2] = [(1, 1), (1, -1)];
const BISHOP_DIRS_LT: [(isize, isize); 2] = [(-1, -1), (-1, 1)];

const fn gen_rays(dirs: &[(isize, isize)]) -> [Bitboard; 64] {
    let mut res = [Bitboard::EMPTY; 64];
    let mut idx = 0;
    while idx < 64 {
        let mut acc = 0_u64;
        let mut d = 0;
        while d < dirs.len() {
            let (dr, dc) = dirs[d];
            let mut row = (idx / 8) as isize + dr;
            let mut col = (idx % 8) as isize + dc;
            while row >= 0 && row < 8 && col >= 0 && col < 8 {
                acc |= 1_u64 << ((row * 8 + col) as u32);
                row += dr;
                col += dc;
            }
            d += 1;
        }
        res[idx] = Bitboard::from_raw(acc);
        idx += 1;
    }
    res
}

const fn merge(a: [Bitboard; 64], b: [Bitboard; 64]) -> [Bitboard; 64] {
    let mut res = [Bitboard::EMPTY; 64];
    let mut idx = 0;
    while idx < 64 {
        res[idx] = Bitboard::from_raw(a[idx].as_raw() | b[idx].as_raw());
        idx += 1;
    }
    res
}

static ROOK_GT: [Bitboard; 64] = gen_rays(&ROOK_DIRS_GT);
static ROOK_LT: [Bitboard; 64] = gen_rays(&ROOK_DIRS_LT);
static ROOK_NE: [Bitboard; 64] = merge(gen_rays(&ROOK_DIRS_GT), gen_rays(&ROOK_DIRS_LT));
static BISHOP_GT: [Bitboard; 64] = gen_rays(&BISHOP_DIRS_GT);
static BISHOP_LT: [Bitboard; 64] = gen_rays(&BISHOP_DIRS_LT);
static BISHOP_NE: [Bitboard; 64] = merge(gen_rays(&BISHOP_DIRS_GT), gen_rays(&BISHOP_DIRS_LT));

#[inline]
fn sort(src: Coord, dst: Coord) -> (Coord, Coord) {
    if src.index() < dst.index() {
        (src, dst)
    } else {
        (dst, src)
    }
}

/// Squares strictly between `src` and `dst`, which must lie on the same diagonal
#[inline]
pub fn bishop_strict(src: Coord, dst: Coord) -> Bitboard {
    let (src, dst) = sort(src, dst);
    BISHOP_GT[src.index()] & BISHOP_LT[dst.index()]
}

/// Squares strictly between `src` and `dst`, which must lie on the same row or column
#[inline]
pub fn rook_strict(src: Coord, dst: Coord) -> Bitboard {
    let (src, dst) = sort(src, dst);
    ROOK_GT[src.index()] & ROOK_LT[dst.index()]
}

/// All the squares on the same diagonals with `c`, except `c` itself
#[inline]
pub fn bishop_rays(c: Coord) -> Bitboard {
    BISHOP_NE[c.index()]
}

/// All the squares on the same row and column with `c`, except `c` itself
#[inline]
pub fn rook_rays(c: Coord) -> Bitboard {
    ROOK_NE[c.index()]
}

#[inline]
pub fn is_bishop_valid(src: Coord, dst: Coord) -> bool {
    BISHOP_NE[src.index()].has(dst)
}

#[inline]
pub fn is_rook_valid(src: Coord, dst: Coord) -> bool {
    ROOK_NE[src.index()].has(dst)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Coord, File, Rank};

    fn sq(file: File, rank: Rank) -> Coord {
        Coord::from_parts(file, rank)
    }

    #[test]
    fn test_bishop() {
        let b4 = sq(File::B, Rank::R4);
        let e7 = sq(File::E, Rank::R7);
        let res = Bitboard::EMPTY
            .with(sq(File::C, Rank::R5))
            .with(sq(File::D, Rank::R6));
        assert_eq!(bishop_strict(b4, e7), res);
        assert_eq!(bishop_strict(e7, b4), res);

        let f3 = sq(File::F, Rank::R3);
        let c6 = sq(File::C, Rank::R6);
        let res = Bitboard::EMPTY
            .with(sq(File::E, Rank::R4))
            .with(sq(File::D, Rank::R5));
        assert_eq!(bishop_strict(f3, c6), res);
        assert_eq!(bishop_strict(c6, f3), res);

        let c1 = sq(File::C, Rank::R1);
        let d2 = sq(File::D, Rank::R2);
        assert_eq!(bishop_strict(c1, d2), Bitboard::EMPTY);
    }

    #[test]
    fn test_rook() {
        let b4 = sq(File::B, Rank::R4);
        let e4 = sq(File::E, Rank::R4);
        let res = Bitboard::EMPTY
            .with(sq(File::C, Rank::R4))
            .with(sq(File::D, Rank::R4));
        assert_eq!(rook_strict(b4, e4), res);
        assert_eq!(rook_strict(e4, b4), res);

        let d3 = sq(File::D, Rank::R3);
        let d6 = sq(File::D, Rank::R6);
        let res = Bitboard::EMPTY
            .with(sq(File::D, Rank::R4))
            .with(sq(File::D, Rank::R5));
        assert_eq!(rook_strict(d3, d6), res);
        assert_eq!(rook_strict(d6, d3), res);

        let a1 = sq(File::A, Rank::R1);
        let a8 = sq(File::A, Rank::R8);
        assert_eq!(rook_strict(a1, a8).popcount(), 6);
    }

    #[test]
    fn test_valid() {
        let d4 = sq(File::D, Rank::R4);
        assert!(is_rook_valid(d4, sq(File::D, Rank::R8)));
        assert!(is_rook_valid(d4, sq(File::A, Rank::R4)));
        assert!(!is_rook_valid(d4, sq(File::E, Rank::R5)));
        assert!(!is_rook_valid(d4, d4));
        assert!(is_bishop_valid(d4, sq(File::H, Rank::R8)));
        assert!(is_bishop_valid(d4, sq(File::A, Rank::R1)));
        assert!(is_bishop_valid(d4, sq(File::G, Rank::R1)));
        assert!(!is_bishop_valid(d4, sq(File::D, Rank::R5)));
        assert!(!is_bishop_valid(d4, d4));
        assert_eq!(rook_rays(d4).popcount(), 14);
        assert_eq!(bishop_rays(d4).popcount(), 13);
    }
}
