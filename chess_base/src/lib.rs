//! # Base types for tabula
//!
//! This is an auxiliary crate for `tabula`, which contains squares, colors, pieces and
//! other plain values shared by the engine and its frontends.
//!
//! Normally you don't want to use this crate directly. Use `tabula` instead.

pub mod bitboard;
pub mod geometry;
pub mod types;
