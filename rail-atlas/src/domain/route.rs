//! Route keys and computed routes.

use std::fmt;

use indexmap::IndexMap;

use super::network::Connection;
use super::station::StationCode;

/// Separator between the two codes in a serialized route key. Station
/// codes are guaranteed not to contain it.
pub const ROUTE_KEY_SEPARATOR: char = '`';

/// An ordered pair of stations identifying a route.
///
/// Displays as ``from`to``, e.g. ``N-SVW`N-XSG``.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoutePair {
    /// Starting station.
    pub from: StationCode,

    /// Destination station.
    pub to: StationCode,
}

impl RoutePair {
    /// Create a route pair.
    pub fn new(from: StationCode, to: StationCode) -> Self {
        Self { from, to }
    }
}

impl fmt::Display for RoutePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{ROUTE_KEY_SEPARATOR}{}", self.from, self.to)
    }
}

/// The cheapest route between an ordered pair of stations.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Total travel cost in seconds: the sum of the leg costs.
    pub cost: f64,

    /// The connections forming the path, in travel order.
    pub legs: Vec<Connection>,
}

/// All computed routes, keyed by ordered station pair.
///
/// A pair that is absent has no route; unreachable pairs are never stored
/// with a sentinel cost or an empty path.
pub type RouteSet = IndexMap<RoutePair, Route>;
