//! Driver for PokeMap games.
//!
//! [`service`] turns request documents into reply documents with an
//! HTTP-equivalent status, [`transcript`] plays a battle to the end, and
//! [`config`] reads `arena.toml`. The `pokemap-arena` binary wires these to
//! the command line.

pub mod config;
pub mod service;
pub mod transcript;

pub use config::{ArenaConfig, LoggingConfig};
pub use service::{Reply, ServiceError, open_session, play_turn, start_game, start_teams};
pub use transcript::{Transcript, play_out};
