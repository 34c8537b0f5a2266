use std::fmt::{self, Display};
use std::hint;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum CoordParseError {
    #[error("unexpected file char {0:?}")]
    UnexpectedFileChar(char),
    #[error("unexpected rank char {0:?}")]
    UnexpectedRankChar(char),
    #[error("invalid string length")]
    BadLength,
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum FigureParseError {
    #[error("unexpected figure char {0:?}")]
    UnexpectedChar(char),
    #[error("invalid string length")]
    BadLength,
}

/// Board column, `A` is column 0
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[repr(u8)]
pub enum File {
    A = 0,
    B = 1,
    C = 2,
    D = 3,
    E = 4,
    F = 5,
    G = 6,
    H = 7,
}

impl File {
    pub const fn index(&self) -> usize {
        *self as u8 as usize
    }

    pub const unsafe fn from_index_unchecked(val: usize) -> Self {
        match val {
            0 => File::A,
            1 => File::B,
            2 => File::C,
            3 => File::D,
            4 => File::E,
            5 => File::F,
            6 => File::G,
            7 => File::H,
            _ => hint::unreachable_unchecked(),
        }
    }

    pub const fn from_index(val: usize) -> Self {
        assert!(val < 8, "file index must be between 0 and 7");
        unsafe { Self::from_index_unchecked(val) }
    }

    pub fn iter() -> impl Iterator<Item = Self> {
        (0..8).map(|x| unsafe { Self::from_index_unchecked(x) })
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'a'..='h' => Some(Self::from_index((u32::from(c) - u32::from('a')) as usize)),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        (b'a' + *self as u8) as char
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", self.as_char())
    }
}

/// Board row
///
/// Ranks are numbered from the far side of the board: [`Rank::R8`] (Black's home rank)
/// is row 0, and [`Rank::R1`] (White's home rank) is row 7.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[repr(u8)]
pub enum Rank {
    R8 = 0,
    R7 = 1,
    R6 = 2,
    R5 = 3,
    R4 = 4,
    R3 = 5,
    R2 = 6,
    R1 = 7,
}

impl Rank {
    pub const fn index(&self) -> usize {
        *self as u8 as usize
    }

    pub const unsafe fn from_index_unchecked(val: usize) -> Self {
        match val {
            0 => Rank::R8,
            1 => Rank::R7,
            2 => Rank::R6,
            3 => Rank::R5,
            4 => Rank::R4,
            5 => Rank::R3,
            6 => Rank::R2,
            7 => Rank::R1,
            _ => hint::unreachable_unchecked(),
        }
    }

    pub const fn from_index(val: usize) -> Self {
        assert!(val < 8, "rank index must be between 0 and 7");
        unsafe { Self::from_index_unchecked(val) }
    }

    pub fn iter() -> impl Iterator<Item = Self> {
        (0..8).map(|x| unsafe { Self::from_index_unchecked(x) })
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '1'..='8' => Some(Self::from_index((u32::from('8') - u32::from(c)) as usize)),
            _ => None,
        }
    }

    pub fn as_char(&self) -> char {
        (b'8' - *self as u8) as char
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", self.as_char())
    }
}

/// Square on the board
///
/// A square can be addressed either by `(row, col)` pair, as the board UI does, or by
/// [`File`] and [`Rank`]. Row 0 is the far rank (rank 8), column 0 is file `a`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coord(u8);

impl Coord {
    pub const fn from_index(val: usize) -> Coord {
        assert!(val < 64, "coord must be between 0 and 63");
        Coord(val as u8)
    }

    pub const fn from_parts(file: File, rank: Rank) -> Coord {
        Coord(((rank as u8) << 3) | file as u8)
    }

    pub const fn from_row_col(row: usize, col: usize) -> Coord {
        Coord::from_parts(File::from_index(col), Rank::from_index(row))
    }

    pub fn try_from_row_col(row: usize, col: usize) -> Option<Coord> {
        if row >= 8 || col >= 8 {
            return None;
        }
        Some(Coord::from_row_col(row, col))
    }

    pub const fn file(&self) -> File {
        unsafe { File::from_index_unchecked((self.0 & 7) as usize) }
    }

    pub const fn rank(&self) -> Rank {
        unsafe { Rank::from_index_unchecked((self.0 >> 3) as usize) }
    }

    #[inline]
    pub const fn row(&self) -> usize {
        self.rank().index()
    }

    #[inline]
    pub const fn col(&self) -> usize {
        self.file().index()
    }

    pub const fn index(&self) -> usize {
        self.0 as usize
    }

    /// Returns the square shifted by `delta_row` rows and `delta_col` columns, or `None`
    /// if it falls off the board
    pub fn try_shift(self, delta_row: isize, delta_col: isize) -> Option<Coord> {
        let new_row = self.row().wrapping_add(delta_row as usize);
        let new_col = self.col().wrapping_add(delta_col as usize);
        Coord::try_from_row_col(new_row, new_col)
    }

    pub fn iter() -> impl Iterator<Item = Self> {
        (0_u8..64_u8).map(Coord)
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        if self.0 < 64 {
            return write!(f, "Coord({})", self);
        }
        write!(f, "Coord(?{:?})", self.0)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}{}", self.file().as_char(), self.rank().as_char())
    }
}

impl FromStr for Coord {
    type Err = CoordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 2 {
            return Err(CoordParseError::BadLength);
        }
        let bytes = s.as_bytes();
        let (file_ch, rank_ch) = (bytes[0] as char, bytes[1] as char);
        Ok(Coord::from_parts(
            File::from_char(file_ch).ok_or(CoordParseError::UnexpectedFileChar(file_ch))?,
            Rank::from_char(rank_ch).ok_or(CoordParseError::UnexpectedRankChar(rank_ch))?,
        ))
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    White = 0,
    Black = 1,
}

impl Color {
    pub const fn inv(&self) -> Color {
        match *self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    pub fn as_char(&self) -> char {
        match *self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }

    pub fn name(&self) -> &'static str {
        match *self {
            Color::White => "White",
            Color::Black => "Black",
        }
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", self.as_char())
    }
}

/// Kind of a chess piece, without color
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Piece {
    Pawn = 0,
    King = 1,
    Knight = 2,
    Bishop = 3,
    Rook = 4,
    Queen = 5,
}

impl Piece {
    pub fn iter() -> impl Iterator<Item = Self> {
        [
            Piece::Pawn,
            Piece::King,
            Piece::Knight,
            Piece::Bishop,
            Piece::Rook,
            Piece::Queen,
        ]
        .into_iter()
    }

    /// Returns `true` if a pawn may be promoted to this piece
    pub const fn is_promote_target(&self) -> bool {
        matches!(
            *self,
            Piece::Knight | Piece::Bishop | Piece::Rook | Piece::Queen
        )
    }

    pub fn as_char(&self) -> char {
        b"pknbrq"[*self as usize] as char
    }

    pub fn from_char(c: char) -> Option<Piece> {
        match c.to_ascii_lowercase() {
            'p' => Some(Piece::Pawn),
            'k' => Some(Piece::King),
            'n' => Some(Piece::Knight),
            'b' => Some(Piece::Bishop),
            'r' => Some(Piece::Rook),
            'q' => Some(Piece::Queen),
            _ => None,
        }
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", self.as_char())
    }
}

/// Piece standing on the board
///
/// Unlike the board symbols, the color is stored explicitly. `moved` is set once the
/// figure leaves its square for the first time and is used for castling only.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Figure {
    pub piece: Piece,
    pub color: Color,
    pub moved: bool,
}

impl Figure {
    pub const fn new(color: Color, piece: Piece) -> Figure {
        Figure {
            piece,
            color,
            moved: false,
        }
    }

    pub const fn with_moved(self, moved: bool) -> Figure {
        Figure { moved, ..self }
    }

    pub const fn is(&self, color: Color, piece: Piece) -> bool {
        self.color as u8 == color as u8 && self.piece as u8 == piece as u8
    }

    /// Returns the symbol of the figure, uppercase for White
    pub fn as_char(&self) -> char {
        let c = self.piece.as_char();
        match self.color {
            Color::White => c.to_ascii_uppercase(),
            Color::Black => c,
        }
    }

    pub fn as_utf8_char(&self) -> char {
        let idx = self.piece as usize;
        match self.color {
            Color::White => ['♙', '♔', '♘', '♗', '♖', '♕'][idx],
            Color::Black => ['♟', '♚', '♞', '♝', '♜', '♛'][idx],
        }
    }

    pub fn from_char(c: char) -> Option<Figure> {
        let piece = Piece::from_char(c)?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Figure::new(color, piece))
    }
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", self.as_char())
    }
}

impl FromStr for Figure {
    type Err = FigureParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 1 {
            return Err(FigureParseError::BadLength);
        }
        let ch = s.as_bytes()[0] as char;
        Figure::from_char(ch).ok_or(FigureParseError::UnexpectedChar(ch))
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CastlingSide {
    Queen = 0,
    King = 1,
}

impl fmt::Display for CastlingSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match *self {
            CastlingSide::Queen => write!(f, "O-O-O"),
            CastlingSide::King => write!(f, "O-O"),
        }
    }
}

/// Result of a finished game
///
/// The only way to finish the game is to capture the opponent's king, so there are no draws.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Outcome {
    pub winner: Color,
}

impl Outcome {
    pub const fn win(winner: Color) -> Outcome {
        Outcome { winner }
    }

    pub const fn loser(&self) -> Color {
        self.winner.inv()
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{} wins by king capture", self.winner.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome() {
        let o = Outcome::win(Color::Black);
        assert_eq!(o.loser(), Color::White);
        assert_eq!(o.to_string(), "Black wins by king capture");
    }

    #[test]
    fn test_file() {
        for (idx, file) in File::iter().enumerate() {
            assert_eq!(file.index(), idx);
            assert_eq!(File::from_index(idx), file);
            assert_eq!(File::from_char(file.as_char()), Some(file));
        }
    }

    #[test]
    fn test_rank() {
        for (idx, rank) in Rank::iter().enumerate() {
            assert_eq!(rank.index(), idx);
            assert_eq!(Rank::from_index(idx), rank);
            assert_eq!(Rank::from_char(rank.as_char()), Some(rank));
        }
    }

    #[test]
    fn test_coord() {
        let mut coords = Vec::new();
        for rank in Rank::iter() {
            for file in File::iter() {
                let coord = Coord::from_parts(file, rank);
                assert_eq!(coord.file(), file);
                assert_eq!(coord.rank(), rank);
                assert_eq!(Coord::from_row_col(rank.index(), file.index()), coord);
                coords.push(coord);
            }
        }
        assert_eq!(coords, Coord::iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_row_col() {
        let e2 = Coord::from_parts(File::E, Rank::R2);
        assert_eq!((e2.row(), e2.col()), (6, 4));
        let a8 = Coord::from_parts(File::A, Rank::R8);
        assert_eq!((a8.row(), a8.col()), (0, 0));

        assert_eq!(Coord::try_from_row_col(8, 0), None);
        assert_eq!(Coord::try_from_row_col(0, 8), None);
        assert_eq!(e2.try_shift(-2, 0), Some(Coord::from_row_col(4, 4)));
        assert_eq!(a8.try_shift(-1, 0), None);
        assert_eq!(a8.try_shift(0, -1), None);
        assert_eq!(a8.try_shift(7, 7), Some(Coord::from_row_col(7, 7)));
    }

    #[test]
    fn test_figure() {
        for color in [Color::White, Color::Black] {
            for piece in Piece::iter() {
                let figure = Figure::new(color, piece);
                assert!(figure.is(color, piece));
                assert!(!figure.moved);
                assert_eq!(Figure::from_char(figure.as_char()), Some(figure));
            }
        }
        assert_eq!(
            Figure::from_char('K'),
            Some(Figure::new(Color::White, Piece::King))
        );
        assert_eq!(
            Figure::from_char('n'),
            Some(Figure::new(Color::Black, Piece::Knight))
        );
        assert_eq!(Figure::from_char('x'), None);
        assert_eq!(Figure::new(Color::Black, Piece::Queen).as_utf8_char(), '♛');
        assert!(Figure::new(Color::White, Piece::Rook).with_moved(true).moved);
    }

    #[test]
    fn test_promote_target() {
        assert!(!Piece::Pawn.is_promote_target());
        assert!(!Piece::King.is_promote_target());
        assert!(Piece::Queen.is_promote_target());
        assert!(Piece::Knight.is_promote_target());
    }

    #[test]
    fn test_coord_str() {
        assert_eq!(
            Coord::from_parts(File::B, Rank::R4).to_string(),
            "b4".to_string()
        );
        assert_eq!(
            Coord::from_str("a1"),
            Ok(Coord::from_parts(File::A, Rank::R1))
        );
        assert_eq!(
            Coord::from_str("e2"),
            Ok(Coord::from_row_col(6, 4))
        );
        assert_eq!(
            Coord::from_str("h9"),
            Err(CoordParseError::UnexpectedRankChar('9'))
        );
        assert_eq!(
            Coord::from_str("i4"),
            Err(CoordParseError::UnexpectedFileChar('i'))
        );
        assert_eq!(Coord::from_str("e22"), Err(CoordParseError::BadLength));
    }

    #[test]
    fn test_figure_str() {
        assert_eq!(
            Figure::from_str("q"),
            Ok(Figure::new(Color::Black, Piece::Queen))
        );
        assert_eq!(Figure::from_str("."), Err(FigureParseError::UnexpectedChar('.')));
        assert_eq!(Figure::from_str("QQ"), Err(FigureParseError::BadLength));
    }
}
