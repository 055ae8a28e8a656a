//! # Tic-Tac-Toe
//!
//! Single-player Tic-Tac-Toe against the computer, with animated moves in a
//! terminal UI built with Ratatui.
//!
//! ## Modules
//!
//! - [`game`]: Board model: cells, win detection, turn order
//! - [`ai`]: Computer opponent: win, else block, else random
//! - [`controller`]: Tick-driven turn and animation state machine
//! - [`ui`]: Terminal front-end: event loop, renderer, status sink
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod ai;
pub mod config;
pub mod controller;
pub mod error;
pub mod game;
pub mod ui;
