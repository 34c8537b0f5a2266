//! Board and related things

use crate::bitboard::Bitboard;
use crate::types::{Color, Coord, Figure, File, Piece, Rank};

use std::fmt::{self, Display};
use std::str::FromStr;

use thiserror::Error;

/// Error parsing a board layout (i.e. the first part of FEN)
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum LayoutParseError {
    /// Rank is too large
    #[error("too many items in rank {0}")]
    RankOverflow(Rank),
    /// Rank is too small
    #[error("not enough items in rank {0}")]
    RankUnderflow(Rank),
    /// Too many ranks
    #[error("too many ranks")]
    Overflow,
    /// Not enough ranks
    #[error("not enough ranks")]
    Underflow,
    /// Unexpected character
    #[error("unexpected char {0:?}")]
    UnexpectedChar(char),
}

/// Chess board
///
/// The board owns the contents of all 64 squares. Each square is either empty or holds exactly
/// one [`Figure`]. The board performs no validation at all: it is a plain container, and all the
/// rules of chess live in [`rules`](crate::rules), [`castling`](crate::castling) and
/// [`game`](crate::game).
///
/// Alongside with the cells, the board keeps the occupancy bitboards for both colors, so the
/// path checks for sliding pieces are cheap.
///
/// # Example
///
/// ```
/// # use tabula::{Board, Coord, Color, Piece, Figure};
/// #
/// let mut board = Board::initial();
/// let e2 = Coord::from_row_col(6, 4);
/// let e4 = Coord::from_row_col(4, 4);
/// board.relocate(e2, e4);
/// assert!(board.is_empty(e2));
/// assert_eq!(board.get(e4).map(|f| f.piece), Some(Piece::Pawn));
/// assert_eq!(
///     board.as_layout(),
///     "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR",
/// );
/// ```
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Board {
    cells: [Option<Figure>; 64],
    white: Bitboard,
    black: Bitboard,
}

impl Board {
    /// Returns a board without any figures
    #[inline]
    pub const fn empty() -> Board {
        Board {
            cells: [None; 64],
            white: Bitboard::EMPTY,
            black: Bitboard::EMPTY,
        }
    }

    /// Returns a board with the initial position
    pub fn initial() -> Board {
        let mut res = Board::empty();
        for file in File::iter() {
            res.put2(file, Rank::R2, Some(Figure::new(Color::White, Piece::Pawn)));
            res.put2(file, Rank::R7, Some(Figure::new(Color::Black, Piece::Pawn)));
        }
        for (color, rank) in [(Color::White, Rank::R1), (Color::Black, Rank::R8)] {
            res.put2(File::A, rank, Some(Figure::new(color, Piece::Rook)));
            res.put2(File::B, rank, Some(Figure::new(color, Piece::Knight)));
            res.put2(File::C, rank, Some(Figure::new(color, Piece::Bishop)));
            res.put2(File::D, rank, Some(Figure::new(color, Piece::Queen)));
            res.put2(File::E, rank, Some(Figure::new(color, Piece::King)));
            res.put2(File::F, rank, Some(Figure::new(color, Piece::Bishop)));
            res.put2(File::G, rank, Some(Figure::new(color, Piece::Knight)));
            res.put2(File::H, rank, Some(Figure::new(color, Piece::Rook)));
        }
        res
    }

    /// Parses a board from the layout string
    ///
    /// The layout is the first part of FEN, e.g. `"rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR"`.
    /// All the figures on the parsed board are considered unmoved.
    ///
    /// Does the same as [`Board::from_str`].
    #[inline]
    pub fn from_layout(s: &str) -> Result<Board, LayoutParseError> {
        Board::from_str(s)
    }

    /// Returns the contents of the square with coordinate `c`
    #[inline]
    pub fn get(&self, c: Coord) -> Option<Figure> {
        self.cells[c.index()]
    }

    /// Returns the contents of the square with file `file` and rank `rank`
    #[inline]
    pub fn get2(&self, file: File, rank: Rank) -> Option<Figure> {
        self.get(Coord::from_parts(file, rank))
    }

    /// Returns `true` if the square with coordinate `c` holds no figure
    #[inline]
    pub fn is_empty(&self, c: Coord) -> bool {
        !self.occupied().has(c)
    }

    /// Puts `figure` to the square with coordinate `c`, replacing its previous contents
    pub fn put(&mut self, c: Coord, figure: Option<Figure>) {
        self.white.unset(c);
        self.black.unset(c);
        if let Some(f) = figure {
            self.color_mut(f.color).set(c);
        }
        self.cells[c.index()] = figure;
    }

    /// Puts `figure` to the square with file `file` and rank `rank`
    #[inline]
    pub fn put2(&mut self, file: File, rank: Rank, figure: Option<Figure>) {
        self.put(Coord::from_parts(file, rank), figure);
    }

    /// Clears the square with coordinate `c` and returns its previous contents
    pub fn remove(&mut self, c: Coord) -> Option<Figure> {
        let old = self.get(c);
        self.put(c, None);
        old
    }

    /// Moves the figure from `src` to `dst`
    ///
    /// Whatever stood on `dst` is dropped from the board and returned. The moved figure keeps
    /// its `moved` flag as is. If `src` is empty, `dst` becomes empty as well.
    pub fn relocate(&mut self, src: Coord, dst: Coord) -> Option<Figure> {
        if src == dst {
            return None;
        }
        let figure = self.remove(src);
        let old = self.get(dst);
        self.put(dst, figure);
        old
    }

    /// Returns the bitboard over all the figures with color `c`
    #[inline]
    pub fn color(&self, c: Color) -> Bitboard {
        match c {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    #[inline]
    fn color_mut(&mut self, c: Color) -> &mut Bitboard {
        match c {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }

    /// Returns the bitboard over all the occupied squares
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.white | self.black
    }

    /// Returns the bitboard over all the figures of color `c` and kind `p`
    pub fn piece2(&self, c: Color, p: Piece) -> Bitboard {
        self.color(c)
            .into_iter()
            .filter(|&coord| self.get(coord).map_or(false, |f| f.piece == p))
            .collect()
    }

    /// Returns the position of the king of color `c`
    ///
    /// Returns `None` if the king was captured.
    pub fn king_pos(&self, c: Color) -> Option<Coord> {
        self.piece2(c, Piece::King).into_iter().next()
    }

    /// Iterates over all the figures on the board together with their squares
    pub fn figures(&self) -> impl Iterator<Item = (Coord, Figure)> + '_ {
        self.occupied()
            .into_iter()
            .filter_map(move |c| self.get(c).map(|f| (c, f)))
    }

    /// Wraps the board to allow pretty-printing with the given style `style`
    ///
    /// The resulting wrapper implements [`fmt::Display`], so can be used with
    /// `write!()`, `println!()`, or `ToString::to_string`.
    ///
    /// # Example
    ///
    /// ```
    /// # use tabula::{Board, Color, board::PrettyStyle};
    /// #
    /// let b = Board::initial();
    ///
    /// let res = r#"
    /// 8|rnbqkbnr
    /// 7|pppppppp
    /// 6|........
    /// 5|........
    /// 4|........
    /// 3|........
    /// 2|PPPPPPPP
    /// 1|RNBQKBNR
    /// -+--------
    /// W|abcdefgh
    /// "#;
    /// assert_eq!(
    ///     b.pretty(PrettyStyle::Ascii).side(Color::White).to_string().trim(),
    ///     res.trim(),
    /// );
    /// ```
    #[inline]
    pub fn pretty(&self, style: PrettyStyle) -> Pretty<'_> {
        Pretty {
            board: self,
            style,
            side: None,
        }
    }

    /// Converts the board into a layout string
    ///
    /// Does the same as `Board::to_string()`.
    #[inline]
    pub fn as_layout(&self) -> String {
        self.to_string()
    }
}

impl Default for Board {
    #[inline]
    fn default() -> Board {
        Board::empty()
    }
}

/// Style for [`Board::pretty()`]
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum PrettyStyle {
    /// Print pieces and frames as ASCII characters
    Ascii,
    /// Print pieces and frames as fancy Unicode characters
    Utf8,
}

/// Wrapper to pretty-print the board
///
/// See docs for [`Board::pretty()`] for more details.
pub struct Pretty<'a> {
    board: &'a Board,
    style: PrettyStyle,
    side: Option<Color>,
}

impl<'a> Pretty<'a> {
    /// Shows the side to move in the corner of the diagram
    pub fn side(mut self, side: Color) -> Self {
        self.side = Some(side);
        self
    }
}

impl FromStr for Board {
    type Err = LayoutParseError;

    fn from_str(s: &str) -> Result<Board, Self::Err> {
        type Error = LayoutParseError;

        let mut file = 0_usize;
        let mut rank = 0_usize;
        let mut res = Board::empty();
        for b in s.bytes() {
            match b {
                b'1'..=b'8' => {
                    let add = (b - b'0') as usize;
                    if file + add > 8 {
                        return Err(Error::RankOverflow(Rank::from_index(rank)));
                    }
                    file += add;
                }
                b'/' => {
                    if file < 8 {
                        return Err(Error::RankUnderflow(Rank::from_index(rank)));
                    }
                    rank += 1;
                    file = 0;
                    if rank >= 8 {
                        return Err(Error::Overflow);
                    }
                }
                _ => {
                    if file >= 8 {
                        return Err(Error::RankOverflow(Rank::from_index(rank)));
                    }
                    let figure =
                        Figure::from_char(b as char).ok_or(Error::UnexpectedChar(b as char))?;
                    res.put(Coord::from_row_col(rank, file), Some(figure));
                    file += 1;
                }
            };
        }

        if file < 8 {
            return Err(Error::RankUnderflow(Rank::from_index(rank)));
        }
        if rank < 7 {
            return Err(Error::Underflow);
        }

        Ok(res)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        for rank in Rank::iter() {
            if rank.index() != 0 {
                write!(f, "/")?;
            }
            let mut empty = 0;
            for file in File::iter() {
                let figure = match self.get2(file, rank) {
                    Some(figure) => figure,
                    None => {
                        empty += 1;
                        continue;
                    }
                };
                if empty != 0 {
                    write!(f, "{}", (b'0' + empty) as char)?;
                    empty = 0;
                }
                write!(f, "{}", figure)?;
            }
            if empty != 0 {
                write!(f, "{}", (b'0' + empty) as char)?;
            }
        }
        Ok(())
    }
}

trait StyleTable {
    const HORZ_FRAME: char;
    const VERT_FRAME: char;
    const ANGLE_FRAME: char;
    const EMPTY_CELL: char;
    const WHITE_INDICATOR: char;
    const BLACK_INDICATOR: char;

    fn cell(c: Figure) -> char;

    fn indicator(c: Option<Color>) -> char {
        match c {
            Some(Color::White) => Self::WHITE_INDICATOR,
            Some(Color::Black) => Self::BLACK_INDICATOR,
            None => Self::HORZ_FRAME,
        }
    }

    fn fmt(b: &Board, side: Option<Color>, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        for rank in Rank::iter() {
            write!(f, "{}{}", rank, Self::VERT_FRAME)?;
            for file in File::iter() {
                let c = b.get2(file, rank).map_or(Self::EMPTY_CELL, Self::cell);
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "{}{}", Self::HORZ_FRAME, Self::ANGLE_FRAME)?;
        for _ in File::iter() {
            write!(f, "{}", Self::HORZ_FRAME)?;
        }
        writeln!(f)?;
        write!(f, "{}{}", Self::indicator(side), Self::VERT_FRAME)?;
        for file in File::iter() {
            write!(f, "{}", file)?;
        }
        writeln!(f)?;
        Ok(())
    }
}

struct AsciiStyleTable;
struct Utf8StyleTable;

impl StyleTable for AsciiStyleTable {
    const HORZ_FRAME: char = '-';
    const VERT_FRAME: char = '|';
    const ANGLE_FRAME: char = '+';
    const EMPTY_CELL: char = '.';
    const WHITE_INDICATOR: char = 'W';
    const BLACK_INDICATOR: char = 'B';

    fn cell(c: Figure) -> char {
        c.as_char()
    }
}

impl StyleTable for Utf8StyleTable {
    const HORZ_FRAME: char = '─';
    const VERT_FRAME: char = '│';
    const ANGLE_FRAME: char = '┼';
    const EMPTY_CELL: char = '.';
    const WHITE_INDICATOR: char = '○';
    const BLACK_INDICATOR: char = '●';

    fn cell(c: Figure) -> char {
        c.as_utf8_char()
    }
}

impl<'a> Display for Pretty<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match self.style {
            PrettyStyle::Ascii => AsciiStyleTable::fmt(self.board, self.side, f),
            PrettyStyle::Utf8 => Utf8StyleTable::fmt(self.board, self.side, f),
        }
    }
}
