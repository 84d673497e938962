//! Domain types for the transit network.
//!
//! This module contains the core model types that represent a validated
//! network. All types enforce their invariants at construction time, so
//! code that receives these types can trust their validity.

mod network;
mod route;
mod station;

pub use network::{
    Connection, Line, MINECART_SECONDS_PER_BLOCK, Network, PORTAL_TRANSFER_SECONDS, Station,
    TRANSFER_LINE,
};
pub use route::{ROUTE_KEY_SEPARATOR, Route, RoutePair, RouteSet};
pub use station::{InvalidStationCode, NETHER_PREFIX, StationCode};
