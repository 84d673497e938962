//! Compact route encoding.
//!
//! A reconstructed route lists one connection per hop, which repeats the
//! line code for every stop. The encoded form only mentions the line
//! when it changes, so a long ride on one line collapses to a list of
//! bare stop codes. Given the known starting station, the encoding is
//! lossless.

use serde::Serialize;

use crate::domain::{Connection, StationCode};

/// One step of an encoded route.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RouteStep {
    /// Ride to a station on a different line than the previous step;
    /// serializes as `["code", "line"]`.
    Change(StationCode, String),

    /// Ride to a station staying on the same line; serializes as
    /// `"code"`.
    Continue(StationCode),
}

/// Encode a route's legs, merging consecutive same-line hops.
pub fn encode_route(legs: &[Connection]) -> Vec<RouteStep> {
    let mut steps = Vec::with_capacity(legs.len());
    let mut current_line: Option<&str> = None;
    for leg in legs {
        if current_line == Some(leg.line.as_str()) {
            steps.push(RouteStep::Continue(leg.to.clone()));
        } else {
            current_line = Some(leg.line.as_str());
            steps.push(RouteStep::Change(leg.to.clone(), leg.line.clone()));
        }
    }
    steps
}
