//! # wordgrid
//!
//! A word-search puzzle engine. Words from a tiered vocabulary are hidden on
//! a square letter grid along four directions, and a session state machine
//! drives level progression, scoring, hints, and the countdown clock.
//! Rendering, input, audio, and persistence are host concerns: collaborators
//! call into [`session::Session`] and drain its event queue.
//!
//! ## Modules
//!
//! - [`game`] — Core puzzle logic: board generation, directions, word lookup, vocabulary
//! - [`session`] — Session state machine, difficulty curve, events, leaderboard
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod session;
