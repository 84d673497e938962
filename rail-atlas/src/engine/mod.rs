//! All-pairs route computation.
//!
//! This module implements the core routing algorithm: Floyd–Warshall
//! over the whole station universe with predecessor tracking, followed
//! by path reconstruction for every reachable ordered pair. The engine
//! holds no state across calls; it reads a built [`crate::domain::Network`]
//! and produces a [`crate::domain::RouteSet`] in one batch.

mod all_pairs;

pub use all_pairs::{EngineError, compute_all_pairs};
