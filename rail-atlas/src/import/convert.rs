//! Conversion from the raw network document to the domain model.
//!
//! All graph construction happens here: dimension and line walking,
//! Nether code prefixing, interdimensional transfer links, and
//! display-name resolution.

use indexmap::IndexMap;
use serde_json::Value;
use tracing::debug;

use crate::domain::{
    NETHER_PREFIX, Network, PORTAL_TRANSFER_SECONDS, StationCode, TRANSFER_LINE,
};

use super::cost::travel_seconds;
use super::error::ImportError;
use super::types::{RawLine, RawNames, RawNetwork, RawStop, RawTransfer};

/// Fallback display name for lines that don't carry one.
const UNNAMED_LINE: &str = "Unnamed Line";

/// Validate and import a raw network document.
///
/// Returns the populated network together with the document's verbatim
/// version string. With `exclude_interdimensional` set, portal transfer
/// links are left out, so the two dimensions stay disconnected unless a
/// line bridges them.
///
/// Any structural violation aborts the whole import; a partial network is
/// never returned.
pub fn import(
    data: &Value,
    exclude_interdimensional: bool,
) -> Result<(Network, String), ImportError> {
    let raw: RawNetwork = serde_json::from_value(data.clone())?;

    let mut network = Network::new();
    parse_dimension(&raw.lines.overworld, "", &mut network)?;
    parse_dimension(&raw.lines.the_nether, NETHER_PREFIX, &mut network)?;

    if !exclude_interdimensional {
        for transfer in &raw.connections {
            add_transfer(transfer, &mut network)?;
        }
    }

    resolve_names(&raw.stations, &mut network);

    debug!(
        version = %raw.version,
        stations = network.stations.len(),
        lines = network.lines.len(),
        "imported network"
    );

    Ok((network, raw.version))
}

/// Parse one dimension's lines into the network, prefixing station codes
/// with the dimension prefix.
fn parse_dimension(
    lines: &[RawLine],
    prefix: &str,
    network: &mut Network,
) -> Result<(), ImportError> {
    for line in lines {
        let name = line.name.clone().unwrap_or_else(|| UNNAMED_LINE.to_owned());
        let label = format!("{} ({name})", line.code);
        network.add_line(line.code.clone(), name);

        // Adjacent stop pairs; single-stop lines degrade to no connections.
        for pair in line.stops.windows(2) {
            connect_stops(&pair[0], &pair[1], line, &label, prefix, network)?;
        }

        // A loop line additionally connects the last stop back to the first.
        if line.is_loop && line.stops.len() > 1 {
            let first = &line.stops[0];
            let last = &line.stops[line.stops.len() - 1];
            connect_stops(last, first, line, &label, prefix, network)?;
        }
    }
    Ok(())
}

/// Derive the cost for one adjacent stop pair and link the two stations
/// in both directions.
fn connect_stops(
    from: &RawStop,
    to: &RawStop,
    line: &RawLine,
    label: &str,
    prefix: &str,
    network: &mut Network,
) -> Result<(), ImportError> {
    let from_code = stop_code(from, prefix, label)?;
    let to_code = stop_code(to, prefix, label)?;
    let cost = travel_seconds(from, to, from_code.as_str(), to_code.as_str(), label)?;
    network.link(from_code, to_code, &line.code, cost);
    Ok(())
}

/// Build the station code for a stop, applying the dimension prefix.
fn stop_code(stop: &RawStop, prefix: &str, label: &str) -> Result<StationCode, ImportError> {
    StationCode::parse_prefixed(&stop.code, prefix).map_err(|e| {
        ImportError::Schema(format!(
            "a stop on line {label} has an unusable code {:?}: {e}",
            stop.code
        ))
    })
}

/// Link an Overworld station with its Nether counterpart at the fixed
/// portal transfer cost.
fn add_transfer(transfer: &RawTransfer, network: &mut Network) -> Result<(), ImportError> {
    let (overworld, nether_suffix) = match transfer {
        RawTransfer::Code(code) => (code.as_str(), code.as_str()),
        RawTransfer::Pair(overworld, suffix) => (overworld.as_str(), suffix.as_str()),
    };

    let overworld_code = StationCode::parse(overworld).map_err(|e| {
        ImportError::Schema(format!(
            "interdimensional connection has an unusable code {overworld:?}: {e}"
        ))
    })?;
    let nether_code = StationCode::parse_prefixed(nether_suffix, NETHER_PREFIX).map_err(|e| {
        ImportError::Schema(format!(
            "interdimensional connection has an unusable Nether code {nether_suffix:?}: {e}"
        ))
    })?;

    network.link(
        overworld_code,
        nether_code,
        TRANSFER_LINE,
        PORTAL_TRANSFER_SECONDS,
    );
    Ok(())
}

/// Append display names to stations that exist in the graph.
///
/// A `$code` entry aliases another station's raw entry: a string referee
/// contributes that one name, a list referee contributes all of them,
/// and a referee with no entry contributes its own code as the single
/// name. Aliases are resolved eagerly against the raw table and are not
/// recursive. Entries for codes the graph never produced are ignored.
fn resolve_names(table: &IndexMap<String, RawNames>, network: &mut Network) {
    for (code, names) in table {
        let Some(station) = network.stations.get_mut(code.as_str()) else {
            continue;
        };
        station.names.extend(resolve(names, table));
    }
}

fn resolve(names: &RawNames, table: &IndexMap<String, RawNames>) -> Vec<String> {
    match names {
        RawNames::Many(list) => list.clone(),
        RawNames::One(name) => match name.strip_prefix('$') {
            None => vec![name.clone()],
            Some(target) => match table.get(target) {
                None => vec![target.to_owned()],
                Some(RawNames::One(single)) => vec![single.clone()],
                Some(RawNames::Many(list)) => list.clone(),
            },
        },
    }
}
