//! Core simulation module - pure, deterministic, and testable
//!
//! This module contains the whole match-3 board simulation: cluster
//! detection, move enumeration, the clear/shift/refill resolver and the
//! timed state machine that sequences swap, cascade and rewind phases.
//! It has no dependencies on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games (for replays and tests)
//! - **Testable**: Comprehensive unit tests for all board rules
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: the tile grid with swap and refill primitives
//! - [`cluster`]: matched-run detection over rows and columns
//! - [`moves`]: legal-swap enumeration via speculative probing
//! - [`resolver`]: clear, compact and refill until stable; board generation
//! - [`game`]: the tick-driven state machine and command surface
//! - [`scoring`]: points for cleared clusters
//! - [`rng`]: seeded LCG for tile sampling and the bot
//! - [`config`]: TOML-loadable simulation configuration
//! - [`snapshot`]: renderer-facing state snapshot
//!
//! # Game Rules
//!
//! - **Matching**: three or more same-colored tiles in a row or column clear
//! - **Scoring**: a cluster of length L awards `100 * (L - 2)` points
//! - **Cascades**: cleared tiles fall and refill, which can chain new clears
//! - **Game over**: a board with no legal swap sets a sticky advisory flag
//! - **Bot**: an optional autonomous player samples uniformly from the
//!   enumerated legal moves after a configurable idle delay
//!
//! # Example
//!
//! ```
//! use match3_core::{Game, GameConfig};
//! use match3_types::TICK_MS;
//!
//! let mut game = Game::new(GameConfig::default(), 12345).unwrap();
//! game.toggle_ai_bot();
//!
//! // Drive the simulation the way a frame loop would.
//! for _ in 0..1000 {
//!     game.tick(TICK_MS);
//! }
//!
//! assert!(game.board().is_full());
//! ```
//!
//! # Timing
//!
//! The state machine is tick-driven: call [`Game::tick`] every frame with
//! elapsed milliseconds. Each resolve phase fires once its accumulated time
//! crosses the configured duration (300 ms in the reference setup); the
//! renderer interpolates between phases with
//! [`Game::phase_progress`](game::Game::phase_progress).

pub mod board;
pub mod cluster;
pub mod config;
pub mod error;
pub mod game;
pub mod moves;
pub mod resolver;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use match3_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use cluster::find_clusters;
pub use config::GameConfig;
pub use error::ConfigError;
pub use game::Game;
pub use moves::{find_moves, is_adjacent};
pub use resolver::{generate_board, remove_clusters, resolve_clusters, shift_tiles};
pub use rng::SimpleRng;
pub use scoring::{cluster_score, score_clusters};
pub use snapshot::GameSnapshot;
