//! Match-3 board simulation (workspace facade crate).
//!
//! This package exposes the `match3::{core,types}` public API while the
//! implementation lives in dedicated crates under `crates/`.

pub use match3_core as core;
pub use match3_types as types;
