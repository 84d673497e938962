//! Route table export.
//!
//! Encodes reconstructed routes into their compact turn-by-turn form and
//! assembles the serialized route table document.

mod document;
mod encode;

pub use document::{EncodedRoute, FORMAT_VERSION, RouteDocument};
pub use encode::{RouteStep, encode_route};
