//! Game session driven by square activations

use crate::attack::{AttackOracle, NeverAttacked};
use crate::board::{Board, Pretty, PrettyStyle};
use crate::movegen::{self, DestList};
use crate::moves::{self, Move, MoveKind, ValidateError};
use crate::types::{CastlingSide, Color, Coord, Figure, Outcome, Piece};

use arrayvec::ArrayVec;
use log::{debug, trace};
use std::fmt;
use thiserror::Error;

/// Error resolving a pending promotion
#[derive(Debug, Copy, Clone, Error, Eq, PartialEq)]
pub enum PromotionError {
    /// No promotion is pending
    #[error("no promotion is pending")]
    NotPending,
    /// Promotion is pending on another square
    #[error("promotion is pending on {0}")]
    WrongSquare(Coord),
    /// Pawn cannot be promoted to this piece
    #[error("cannot promote to {0}")]
    BadPiece(Piece),
}

/// How the pending promotion affects other input
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PromotionPolicy {
    /// Reject every activation until the promotion is resolved
    #[default]
    Block,
    /// Accept activations as usual and keep the promotion pending
    ///
    /// The promoting move itself still doesn't pass the turn to the opponent.
    Lenient,
}

/// Something that happened in the game, to be shown to the user
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Event {
    /// Figure on `at` is selected
    Selected { at: Coord },
    /// Figure moved from `src` to `dst`
    Moved { src: Coord, dst: Coord },
    /// `figure` was removed from `at`
    Captured { at: Coord, figure: Figure },
    /// Pawn on `at` awaits the promotion choice
    PromotionRequired { at: Coord },
    /// Pawn on `at` was replaced with `figure`
    Promoted { at: Coord, figure: Figure },
    /// King and rook moved during castling
    Castled {
        side: CastlingSide,
        king_src: Coord,
        king_dst: Coord,
        rook_src: Coord,
        rook_dst: Coord,
    },
    /// Side `side` moves now
    TurnChanged { side: Color },
    /// The king of the loser was captured
    GameEnded { winner: Color },
    /// Activation was rejected and nothing changed, except that the selection is cleared
    Rejected { reason: ValidateError },
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        match *self {
            Event::Selected { at } => write!(f, "selected {}", at),
            Event::Moved { src, dst } => write!(f, "moved {} -> {}", src, dst),
            Event::Captured { at, figure } => write!(f, "captured {} on {}", figure, at),
            Event::PromotionRequired { at } => write!(f, "promotion required on {}", at),
            Event::Promoted { at, figure } => write!(f, "promoted to {} on {}", figure, at),
            Event::Castled {
                side,
                king_src,
                king_dst,
                rook_src,
                rook_dst,
            } => write!(
                f,
                "castled {} (king {} -> {}, rook {} -> {})",
                side, king_src, king_dst, rook_src, rook_dst
            ),
            Event::TurnChanged { side } => write!(f, "{} to move", side.name()),
            Event::GameEnded { winner } => write!(f, "game over, {} wins", winner.name()),
            Event::Rejected { reason } => write!(f, "rejected: {}", reason),
        }
    }
}

/// Events produced by a single call
pub type Events = ArrayVec<Event, 4>;

/// Current phase of the game
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Nothing is selected
    Idle,
    /// Figure on the given square is selected
    Selected(Coord),
    /// Pawn on the given square awaits the promotion choice
    AwaitingPromotion(Coord),
    /// The game is finished
    GameOver(Outcome),
}

/// Game session
///
/// The session owns the board, the side to move, the selection and the pending promotion. It
/// accepts the user input via [`BaseGame::square_activated()`] and [`BaseGame::resolve_promotion()`]
/// and reports the changes as [`Events`].
///
/// Parameter `A` decides which squares are attacked. Usually, you want to use [`Game`] instead
/// of this type.
///
/// # Example
///
/// ```
/// # use tabula::{Game, Coord, Color, game::Event};
/// # use std::str::FromStr;
/// #
/// let mut game = Game::new_initial();
/// let e2 = Coord::from_str("e2").unwrap();
/// let e4 = Coord::from_str("e4").unwrap();
///
/// assert_eq!(game.square_activated(e2).as_slice(), &[Event::Selected { at: e2 }]);
/// assert_eq!(
///     game.square_activated(e4).as_slice(),
///     &[
///         Event::Moved { src: e2, dst: e4 },
///         Event::TurnChanged { side: Color::Black },
///     ],
/// );
/// assert_eq!(game.side(), Color::Black);
/// ```
#[derive(Debug, Clone)]
pub struct BaseGame<A: AttackOracle> {
    board: Board,
    side: Color,
    selected: Option<Coord>,
    pending: Option<Coord>,
    outcome: Option<Outcome>,
    oracle: A,
    policy: PromotionPolicy,
}

/// Game session which never considers squares attacked
pub type Game = BaseGame<NeverAttacked>;

fn one(e: Event) -> Events {
    let mut res = Events::new();
    res.push(e);
    res
}

impl<A: AttackOracle + Default> BaseGame<A> {
    /// Creates a session from board `board` with side `side` to move
    pub fn new(board: Board, side: Color) -> Self {
        Self::with_options(board, side, A::default(), PromotionPolicy::default())
    }

    /// Creates a session from the initial position
    pub fn new_initial() -> Self {
        Self::new(Board::initial(), Color::White)
    }
}

impl<A: AttackOracle + Default> Default for BaseGame<A> {
    fn default() -> Self {
        Self::new_initial()
    }
}

impl<A: AttackOracle> BaseGame<A> {
    /// Creates a session with the given attack oracle and promotion policy
    pub fn with_options(board: Board, side: Color, oracle: A, policy: PromotionPolicy) -> Self {
        BaseGame {
            board,
            side,
            selected: None,
            pending: None,
            outcome: None,
            oracle,
            policy,
        }
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move
    #[inline]
    pub fn side(&self) -> Color {
        self.side
    }

    #[inline]
    pub fn selected(&self) -> Option<Coord> {
        self.selected
    }

    #[inline]
    pub fn pending_promotion(&self) -> Option<Coord> {
        self.pending
    }

    #[inline]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    #[inline]
    pub fn policy(&self) -> PromotionPolicy {
        self.policy
    }

    #[inline]
    pub fn oracle(&self) -> &A {
        &self.oracle
    }

    pub fn phase(&self) -> Phase {
        if let Some(outcome) = self.outcome {
            return Phase::GameOver(outcome);
        }
        if let Some(src) = self.selected {
            return Phase::Selected(src);
        }
        match self.pending {
            Some(at) => Phase::AwaitingPromotion(at),
            None => Phase::Idle,
        }
    }

    fn check_active(&self) -> Result<(), ValidateError> {
        if self.outcome.is_some() {
            return Err(ValidateError::GameOver);
        }
        if self.pending.is_some() && self.policy == PromotionPolicy::Block {
            return Err(ValidateError::PromotionPending);
        }
        Ok(())
    }

    fn reject(&mut self, reason: ValidateError) -> Events {
        trace!("rejected: {}", reason);
        self.selected = None;
        one(Event::Rejected { reason })
    }

    /// Handles the activation of square `at`
    ///
    /// If nothing is selected, tries to select the figure on `at`. Otherwise, tries to move the
    /// selected figure to `at`.
    pub fn square_activated(&mut self, at: Coord) -> Events {
        match self.selected {
            Some(src) => self.attempt_move(src, at),
            None => self.select(at),
        }
    }

    /// Selects the figure on `at`
    ///
    /// Only the figures of the side to move can be selected. Trying to select anything else is
    /// a no-op, and no events are returned.
    pub fn select(&mut self, at: Coord) -> Events {
        if let Err(e) = self.check_active() {
            return self.reject(e);
        }
        match self.board.get(at) {
            Some(f) if f.color == self.side => {
                trace!("selected {} on {}", f, at);
                self.selected = Some(at);
                one(Event::Selected { at })
            }
            _ => {
                trace!("nothing to select on {}", at);
                Events::new()
            }
        }
    }

    /// Moves the selected figure to `dst`
    pub fn move_selected(&mut self, dst: Coord) -> Events {
        match self.selected {
            Some(src) => self.attempt_move(src, dst),
            None => self.reject(ValidateError::NoSelection),
        }
    }

    /// Tries to move the figure from `src` to `dst`
    ///
    /// The selection is always cleared. If the move is rejected, the only returned event is
    /// [`Event::Rejected`], and the board stays untouched.
    pub fn attempt_move(&mut self, src: Coord, dst: Coord) -> Events {
        self.selected = None;
        if let Err(e) = self.check_active() {
            return self.reject(e);
        }
        let mv = match Move::new(&self.board, self.side, src, dst, &self.oracle) {
            Ok(mv) => mv,
            Err(e) => return self.reject(e),
        };
        if self.pending.is_some() && mv.is_promote(&self.board) {
            return self.reject(ValidateError::PromotionPending);
        }
        self.do_move(mv)
    }

    fn pass_turn(&mut self, events: &mut Events) {
        self.side = self.side.inv();
        events.push(Event::TurnChanged { side: self.side });
    }

    fn do_move(&mut self, mv: Move) -> Events {
        let mut events = Events::new();
        let effect = moves::make_move(&mut self.board, mv);

        if let MoveKind::Castling(side) = mv.kind() {
            if let Some(sq) = effect.castling {
                debug!("{} castled {}", mv.side().name(), side);
                events.push(Event::Castled {
                    side,
                    king_src: sq.king_src,
                    king_dst: sq.king_dst,
                    rook_src: sq.rook_src,
                    rook_dst: sq.rook_dst,
                });
            }
            self.pass_turn(&mut events);
            return events;
        }

        if let Some(figure) = effect.captured {
            debug!("{} captured on {}", figure, mv.dst());
            events.push(Event::Captured {
                at: mv.dst(),
                figure,
            });
            if self.pending == Some(mv.dst()) {
                self.pending = None;
            }
        }
        debug!("moved {} -> {}", mv.src(), mv.dst());
        events.push(Event::Moved {
            src: mv.src(),
            dst: mv.dst(),
        });

        if effect.captured.map_or(false, |f| f.piece == Piece::King) {
            let outcome = Outcome::win(mv.side());
            debug!("{}", outcome);
            self.outcome = Some(outcome);
            self.pending = None;
            events.push(Event::GameEnded {
                winner: outcome.winner,
            });
            return events;
        }

        if effect.promote {
            debug!("promotion pending on {}", mv.dst());
            self.pending = Some(mv.dst());
            events.push(Event::PromotionRequired { at: mv.dst() });
            return events;
        }

        self.pass_turn(&mut events);
        events
    }

    /// Replaces the pawn awaiting promotion on `at` with `piece`
    ///
    /// After the promotion, the turn is passed to the opponent. With [`PromotionPolicy::Lenient`],
    /// the turn may have been passed already by another move, and then it stays as is.
    pub fn resolve_promotion(&mut self, at: Coord, piece: Piece) -> Result<Events, PromotionError> {
        let pending = self.pending.ok_or(PromotionError::NotPending)?;
        if pending != at {
            return Err(PromotionError::WrongSquare(pending));
        }
        if !piece.is_promote_target() {
            return Err(PromotionError::BadPiece(piece));
        }

        let color = self.board.get(at).map_or(self.side, |f| f.color);
        let figure = Figure::new(color, piece).with_moved(true);
        self.board.put(at, Some(figure));
        self.pending = None;
        debug!("promoted to {} on {}", figure, at);

        let mut events = one(Event::Promoted { at, figure });
        if color == self.side {
            self.pass_turn(&mut events);
        }
        Ok(events)
    }

    /// Restores the initial position with White to move
    pub fn reset(&mut self) {
        debug!("reset");
        self.board = Board::initial();
        self.side = Color::White;
        self.selected = None;
        self.pending = None;
        self.outcome = None;
    }

    /// Lists the squares the figure on `at` may go to
    ///
    /// The list is empty if `at` doesn't hold a figure of the side to move, or if no moves can
    /// be made now.
    pub fn destinations(&self, at: Coord) -> DestList {
        if self.check_active().is_err() {
            return DestList::new();
        }
        match self.board.get(at) {
            Some(f) if f.color == self.side => movegen::destinations(&self.board, at, &self.oracle),
            _ => DestList::new(),
        }
    }

    /// Wraps the board to allow pretty-printing, with the side to move shown
    #[inline]
    pub fn pretty(&self, style: PrettyStyle) -> Pretty<'_> {
        self.board.pretty(style).side(self.side)
    }
}
