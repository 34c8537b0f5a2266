//! # Tabula
//!
//! Move-legality engine for a chess board driven by clicks (or taps, or any other way to
//! activate a square).
//!
//! The user activates squares one by one. The first activation selects a figure, the second
//! one tries to move it. The engine checks the move, changes the board and reports what
//! happened as a list of [events](game::Event), so the UI can redraw itself.
//!
//! The engine knows how all the pieces move, including pawn double steps, captures,
//! promotion and castling. It doesn't detect checks: the game ends when a king is captured.
//!
//! # Example
//!
//! ```
//! use tabula::{Color, Coord, Game, game::Event};
//! use std::str::FromStr;
//!
//! let mut game = Game::new_initial();
//! for sq in ["e2", "e4", "e7", "e5", "g1", "f3"] {
//!     let events = game.square_activated(Coord::from_str(sq).unwrap());
//!     assert!(!events.iter().any(|e| matches!(e, Event::Rejected { .. })));
//! }
//! assert_eq!(game.side(), Color::Black);
//! assert_eq!(
//!     game.board().as_layout(),
//!     "rnbqkbnr/pppp1ppp/8/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R",
//! );
//! ```

pub mod attack;
pub mod board;
pub mod castling;
pub mod game;
pub mod movegen;
pub mod moves;
pub mod rules;

mod between;

pub use tabula_base::{bitboard, geometry, types};

pub use bitboard::Bitboard;
pub use board::Board;
pub use game::{BaseGame, Event, Events, Game, Phase, PromotionError, PromotionPolicy};
pub use moves::{Move, MoveKind, ValidateError};
pub use types::{CastlingSide, Color, Coord, Figure, File, Outcome, Piece, Rank};
