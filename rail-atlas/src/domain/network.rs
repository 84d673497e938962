//! Graph containers for the transit network.
//!
//! A [`Network`] is a pure data container: stations keyed by code, lines
//! keyed by line code, and directed costed connections hanging off each
//! station. All algorithmic behavior lives in the importer and the route
//! engine; this module only enforces the structural invariants.

use indexmap::IndexMap;

use super::station::StationCode;

/// Travel speed on rail, in seconds per block of track.
pub const MINECART_SECONDS_PER_BLOCK: f64 = 0.01;

/// Time spent standing in a portal when transferring between dimensions,
/// in seconds.
pub const PORTAL_TRANSFER_SECONDS: f64 = 4.0;

/// Line label attached to interdimensional transfer connections. Not a
/// real line code; it never appears in [`Network::lines`].
pub const TRANSFER_LINE: &str = "Interdimensional transfer";

/// A directed connection to another station via a line.
#[derive(Debug, Clone, PartialEq)]
pub struct Connection {
    /// Code of the destination station.
    pub to: StationCode,

    /// Code of the line this connection belongs to, or [`TRANSFER_LINE`].
    pub line: String,

    /// Travel cost in seconds. Never negative.
    pub cost: f64,
}

/// A station in the network.
///
/// Connections keep the order the lines were declared in; the importer
/// appends display names after the graph is built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Station {
    /// Outgoing connections, in insertion order.
    pub connections: Vec<Connection>,

    /// Human-readable display names. May be empty.
    pub names: Vec<String>,
}

/// Display metadata for a line. Lines own no stations; adjacency is
/// expressed purely through connections.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    /// Human-readable line name.
    pub name: String,
}

/// The full transit network: every station and every line, with O(1)
/// lookup by code and stable insertion order.
#[derive(Debug, Clone, Default)]
pub struct Network {
    /// Stations keyed by code, in the order they were first referenced.
    pub stations: IndexMap<StationCode, Station>,

    /// Lines keyed by line code, in declaration order.
    pub lines: IndexMap<String, Line>,
}

impl Network {
    /// Create an empty network.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a station by code.
    pub fn station(&self, code: &str) -> Option<&Station> {
        self.stations.get(code)
    }

    /// Ensure a station with the given code exists, creating an empty one
    /// if needed. An existing station is never overwritten.
    pub fn ensure_station(&mut self, code: StationCode) -> &mut Station {
        self.stations.entry(code).or_default()
    }

    /// Record a line's display metadata under its code.
    pub fn add_line(&mut self, code: String, name: String) {
        self.lines.insert(code, Line { name });
    }

    /// Connect two stations in both directions with identical cost.
    ///
    /// This is the only way connections are created, which keeps the
    /// network symmetric: every `a -> b` has a matching `b -> a` at the
    /// same cost. Missing stations are created on the fly.
    pub fn link(&mut self, a: StationCode, b: StationCode, line: &str, cost: f64) {
        self.ensure_station(b.clone());
        self.ensure_station(a.clone()).connections.push(Connection {
            to: b.clone(),
            line: line.to_owned(),
            cost,
        });
        self.stations[&b].connections.push(Connection {
            to: a,
            line: line.to_owned(),
            cost,
        });
    }
}
