//! All-pairs route tables for a two-dimension minecart transit network.
//!
//! Answers: "what is the cheapest way between every pair of stations,
//! given hand-authored line data spanning the Overworld and the Nether?"
//!
//! The pipeline runs in three batch stages: [`import`] validates the raw
//! network document into a [`domain::Network`], [`engine`] computes the
//! cheapest route for every reachable ordered station pair, and [`export`]
//! compacts each route and serializes the full table.

pub mod domain;
pub mod engine;
pub mod export;
pub mod import;
