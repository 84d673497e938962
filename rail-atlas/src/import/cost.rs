//! Travel-cost derivation for adjacent stop pairs.
//!
//! Three strategies are tried in strict priority order: an explicit
//! `time` on the destination stop, a track `dist` on the destination
//! stop, and finally the taxicab distance between the two stops'
//! coordinates. A zero `time` or `dist` counts as absent and falls
//! through to the next strategy.

use crate::domain::MINECART_SECONDS_PER_BLOCK;

use super::error::ImportError;
use super::types::RawStop;

/// Where the cost of a connection comes from.
#[derive(Debug, Clone, PartialEq)]
enum CostSource {
    /// Explicit travel time in seconds.
    Time(f64),
    /// Track distance in blocks.
    Distance(f64),
    /// Taxicab distance between two ground-plane positions.
    Coords { from: (f64, f64), to: (f64, f64) },
}

impl CostSource {
    fn seconds(&self) -> f64 {
        match self {
            CostSource::Time(time) => *time,
            CostSource::Distance(dist) => dist * MINECART_SECONDS_PER_BLOCK,
            CostSource::Coords { from, to } => {
                let dist = (from.0 - to.0).abs() + (from.1 - to.1).abs();
                dist * MINECART_SECONDS_PER_BLOCK
            }
        }
    }
}

/// Derive the travel cost in seconds between two adjacent stops.
///
/// `from_code` and `to_code` are the already-prefixed station codes and
/// `line` is the line's display label; all three are used for error
/// context only.
pub(super) fn travel_seconds(
    from: &RawStop,
    to: &RawStop,
    from_code: &str,
    to_code: &str,
    line: &str,
) -> Result<f64, ImportError> {
    let source = match (nonzero(to.time), nonzero(to.dist), &from.coords, &to.coords) {
        (Some(time), _, _, _) => CostSource::Time(time),
        (None, Some(dist), _, _) => CostSource::Distance(dist),
        (None, None, Some(from_coords), Some(to_coords)) => CostSource::Coords {
            from: plane_position(from_coords, from_code, line)?,
            to: plane_position(to_coords, to_code, line)?,
        },
        _ => {
            return Err(ImportError::MissingCost {
                from: from_code.to_owned(),
                to: to_code.to_owned(),
                line: line.to_owned(),
            });
        }
    };

    let seconds = source.seconds();
    if seconds < 0.0 {
        return Err(ImportError::Schema(format!(
            "the travel cost from \"{from_code}\" to \"{to_code}\" on line {line} is negative"
        )));
    }
    Ok(seconds)
}

fn nonzero(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0)
}

/// Extract the (x, z) ground-plane position from a coordinate array.
///
/// A 3-component array is `[x, y, z]` (the height component is ignored);
/// a 2-component array is `[x, z]`.
fn plane_position(coords: &[f64], code: &str, line: &str) -> Result<(f64, f64), ImportError> {
    match coords {
        [x, _, z] | [x, z] => Ok((*x, *z)),
        _ => Err(ImportError::Schema(format!(
            "the stop \"{code}\" on line {line} has coordinates that are not 2- or 3-dimensional"
        ))),
    }
}
