//! # Connect Four Engine
//!
//! A two-player Connect Four engine on the classic 7×6 grid. Discs fall to the
//! lowest free cell, every accepted move is checked incrementally for a line
//! of four, and the engine reports the board after each move to an output
//! sink.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, state machine, engine
//! - [`ai`] — Agent trait and a random move source
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types
//! - [`logging`] — `tracing` subscriber setup with a reloadable filter

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod logging;
