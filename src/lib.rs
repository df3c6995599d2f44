//! # Connect Four rules
//!
//! Board model and win detection for Connect Four style games. After every
//! move the most recently placed piece is checked for a completed run along
//! the horizontal, vertical and diagonal axes.
//!
//! ## Modules
//!
//! - [`game`] — Board, sides, placed pieces, and a turn-enforcing game session
//! - [`rules`] — Horizontal, vertical and diagonal win-check algorithms
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod rules;
