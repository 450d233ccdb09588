//! Battle sessions and the turn-based battle engine for PokeMap.
//!
//! # Overview
//!
//! `pokemap-battle` sits between `pokemap-protocol` (JSON documents) and the
//! callers that drive a battle:
//!
//! ```text
//! pokemap-protocol (JSON documents)
//!        │
//!        ▼
//! pokemap-battle (domain types + engine) ← THIS CRATE
//!        │
//!        ├─> pokemap-team (builds the starting teams)
//!        └─> pokemap-arena (plays turns for a caller)
//! ```
//!
//! # Main Types
//!
//! ## Domain Types
//! - [`Creature`] - Static catalog data for one species
//! - [`BattleUnit`] - A creature with health and attack power
//! - [`TeamState`] - One side's units
//! - [`BattleSession`] - Both teams plus the turn counter
//!
//! ## Engine
//! - [`advance`] - Play the next turn of a session
//! - [`BattleResult`] - Next session, the call's log, and the outcome
//!
//! # Example Usage
//!
//! ```ignore
//! use pokemap_battle::{advance, BattleSession};
//!
//! let mut session = BattleSession::new(user_team, cpu_team);
//! loop {
//!     let result = advance(session)?;
//!     for line in result.log_lines() {
//!         println!("{}", line);
//!     }
//!     if result.game_over {
//!         println!("Winner: {:?}", result.winner);
//!         break;
//!     }
//!     session = result.session;
//! }
//! ```

pub mod engine;
pub mod error;
pub mod types;

pub use engine::{BattleEvent, BattleResult, BattleRules, advance, advance_with};
pub use error::BattleError;
pub use types::{BaseStats, BattleSession, BattleUnit, Creature, PhysicalStats, Side, TeamState, Type};

// Re-export commonly used protocol types
pub use pokemap_protocol::Winner;
