//! Floyd–Warshall all-pairs search with path reconstruction.
//!
//! The relaxation runs over dense flat matrices indexed by station
//! position, so the O(S³) inner loop touches no maps and allocates
//! nothing. Predecessor entries record the exact connection used to
//! reach a station, which makes path reconstruction a plain backward
//! walk.

use std::collections::HashMap;

use tracing::{debug, trace};

use crate::domain::{Connection, Network, Route, RoutePair, RouteSet, StationCode};

/// Error from all-pairs route computation.
///
/// Both variants signal a broken model invariant rather than bad user
/// input; they should never surface for a network built by the importer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// A connection points at a station code that is not in the network.
    #[error("connection from \"{from}\" points at unknown station \"{to}\"")]
    UnknownStation { from: String, to: String },

    /// The predecessor chain for a reachable pair did not lead back to
    /// the start station.
    #[error("predecessor chain from \"{from}\" to \"{to}\" broke at \"{at}\"")]
    BrokenChain { from: String, to: String, at: String },
}

/// A predecessor entry: the station a pair's path arrives from, and the
/// connection used for that final hop.
#[derive(Debug, Clone, Copy)]
struct Step {
    pred: u32,
    edge: u32,
}

/// Compute the cheapest route for every ordered pair of distinct,
/// mutually reachable stations.
///
/// Pairs with no path are absent from the result; self-pairs are never
/// emitted. Each route's cost is the sum of its leg costs.
pub fn compute_all_pairs(network: &Network) -> Result<RouteSet, EngineError> {
    let station_count = network.stations.len();
    let codes: Vec<&StationCode> = network.stations.keys().collect();
    let index: HashMap<&str, usize> = codes
        .iter()
        .enumerate()
        .map(|(position, code)| (code.as_str(), position))
        .collect();
    let idx = |i: usize, j: usize| i * station_count + j;

    let mut dist = vec![f64::INFINITY; station_count * station_count];
    let mut prev: Vec<Option<Step>> = vec![None; station_count * station_count];
    let mut edges: Vec<&Connection> = Vec::new();

    // Seed with direct connections. Of parallel connections between the
    // same ordered pair, the cheapest wins; later ones only replace the
    // seed if strictly cheaper.
    for (i, (code, station)) in network.stations.iter().enumerate() {
        for conn in &station.connections {
            let Some(&j) = index.get(conn.to.as_str()) else {
                return Err(EngineError::UnknownStation {
                    from: code.to_string(),
                    to: conn.to.to_string(),
                });
            };
            if conn.cost < dist[idx(i, j)] {
                dist[idx(i, j)] = conn.cost;
                prev[idx(i, j)] = Some(Step {
                    pred: i as u32,
                    edge: edges.len() as u32,
                });
                edges.push(conn);
            }
        }
    }

    debug!(stations = station_count, edges = edges.len(), "seeded distance matrix");

    // Relax. `k` must stay the outermost loop: every (i, j) pair has to
    // see the fully relaxed table for intermediates < k.
    for k in 0..station_count {
        for i in 0..station_count {
            let via = dist[idx(i, k)];
            if via.is_infinite() {
                continue;
            }
            for j in 0..station_count {
                let through = via + dist[idx(k, j)];
                if through < dist[idx(i, j)] {
                    dist[idx(i, j)] = through;
                    // Inherit the final hop of the k -> j path.
                    prev[idx(i, j)] = prev[idx(k, j)];
                }
            }
        }
        trace!(k, "relaxed intermediate station");
    }

    // Walk every reachable pair backward from the destination.
    let mut routes = RouteSet::new();
    for i in 0..station_count {
        for j in 0..station_count {
            if i == j || prev[idx(i, j)].is_none() {
                continue;
            }

            let mut legs: Vec<Connection> = Vec::new();
            let mut current = j;
            while current != i {
                let broken_chain = || EngineError::BrokenChain {
                    from: codes[i].to_string(),
                    to: codes[j].to_string(),
                    at: codes[current].to_string(),
                };
                let Some(step) = prev[idx(i, current)] else {
                    return Err(broken_chain());
                };
                // A shortest path has at most `station_count - 1` legs; more
                // means the chain is cyclic.
                if legs.len() == station_count {
                    return Err(broken_chain());
                }
                legs.push(edges[step.edge as usize].clone());
                current = step.pred as usize;
            }
            legs.reverse();

            let cost = legs.iter().map(|leg| leg.cost).sum();
            routes.insert(
                RoutePair::new(codes[i].clone(), codes[j].clone()),
                Route { cost, legs },
            );
        }
    }

    debug!(routes = routes.len(), "reconstructed routes");
    Ok(routes)
}
