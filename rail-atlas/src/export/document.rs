//! Serialized route table document.

use std::fs;
use std::io;
use std::path::Path;

use chrono::{SecondsFormat, Utc};
use indexmap::IndexMap;
use serde::Serialize;

use crate::domain::RouteSet;

use super::encode::{RouteStep, encode_route};

/// Version tag of the route table wire format.
pub const FORMAT_VERSION: &str = "0.3";

/// A route as serialized: total cost followed by the encoded path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EncodedRoute(pub f64, pub Vec<RouteStep>);

/// The full route table, ready for serialization.
///
/// Routes are keyed by `` from`to `` in the order the engine emitted
/// them. Unreachable pairs are simply absent.
#[derive(Debug, Clone, Serialize)]
pub struct RouteDocument {
    /// Version string of the source network data, passed through verbatim.
    pub version: String,

    /// Wire-format version tag.
    pub format: &'static str,

    /// Generation timestamp, ISO 8601 UTC.
    pub date: String,

    /// Encoded routes keyed by route pair.
    pub routes: IndexMap<String, EncodedRoute>,
}

impl RouteDocument {
    /// Build a document from computed routes, stamped with the current time.
    pub fn build(routes: &RouteSet, network_version: &str) -> Self {
        let mut encoded = IndexMap::with_capacity(routes.len());
        for (pair, route) in routes {
            encoded.insert(
                pair.to_string(),
                EncodedRoute(round_to_tenths(route.cost), encode_route(&route.legs)),
            );
        }
        Self {
            version: network_version.to_owned(),
            format: FORMAT_VERSION,
            date: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            routes: encoded,
        }
    }

    /// Serialize to a JSON string.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Serialize and write to a file.
    pub fn write_to(&self, path: &Path) -> io::Result<()> {
        let json = self.to_json().map_err(io::Error::other)?;
        fs::write(path, json)
    }
}

/// Costs are published with one decimal place.
fn round_to_tenths(cost: f64) -> f64 {
    (cost * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::compute_all_pairs;
    use crate::import::import;
    use serde_json::json;

    fn sample_network() -> serde_json::Value {
        json!({
            "version": "4.2",
            "lines": {
                "overworld": [
                    {
                        "code": "X",
                        "stops": [
                            { "code": "A" },
                            { "code": "B", "time": 5 },
                            { "code": "C", "time": 3 }
                        ]
                    },
                    {
                        "code": "Y",
                        "stops": [{ "code": "A" }, { "code": "C", "time": 20 }]
                    }
                ]
            }
        })
    }

    fn document(data: &serde_json::Value, exclude: bool) -> RouteDocument {
        let (network, version) = import(data, exclude).unwrap();
        let routes = compute_all_pairs(&network).unwrap();
        RouteDocument::build(&routes, &version)
    }

    #[test]
    fn document_carries_version_format_and_date() {
        let doc = document(&sample_network(), false);
        assert_eq!(doc.version, "4.2");
        assert_eq!(doc.format, "0.3");
        assert!(chrono::DateTime::parse_from_rfc3339(&doc.date).is_ok());
    }

    #[test]
    fn cheapest_route_is_encoded_compactly() {
        let doc = document(&sample_network(), false);
        let json = serde_json::to_value(&doc.routes["A`C"]).unwrap();
        // Cheapest A -> C goes via B on line X, so C needs no line tag.
        assert_eq!(json, json!([8.0, [["B", "X"], "C"]]));
    }

    #[test]
    fn route_keys_use_the_backtick_separator() {
        let doc = document(&sample_network(), false);
        assert!(doc.routes.keys().all(|key| key.contains('`')));
        assert!(doc.routes.contains_key("C`A"));
    }

    #[test]
    fn transfer_exclusion_produces_an_independent_route_set() {
        let data = json!({
            "version": "1",
            "lines": {
                "overworld": [{
                    "code": "L1",
                    "stops": [{ "code": "A" }, { "code": "B", "time": 1 }]
                }],
                "the_nether": [{
                    "code": "NL1",
                    "stops": [{ "code": "A" }, { "code": "B", "time": 1 }]
                }]
            },
            "connections": ["A"]
        });

        let standard = document(&data, false);
        assert_eq!(
            serde_json::to_value(&standard.routes["A`N-A"]).unwrap(),
            json!([4.0, [["N-A", "Interdimensional transfer"]]])
        );
        // The Nether side is reachable via the portal in the standard set.
        assert!(standard.routes.contains_key("B`N-B"));

        let no_nether = document(&data, true);
        assert!(!no_nether.routes.contains_key("A`N-A"));
        assert!(!no_nether.routes.contains_key("B`N-B"));
        // Same-dimension routes survive.
        assert!(no_nether.routes.contains_key("A`B"));
        assert!(no_nether.routes.contains_key("N-A`N-B"));
    }

    #[test]
    fn costs_are_rounded_to_one_decimal() {
        let data = json!({
            "version": "1",
            "lines": {
                "overworld": [{
                    "code": "L1",
                    // 1234 blocks at 0.01 s/block = 12.34 s
                    "stops": [{ "code": "A" }, { "code": "B", "dist": 1234 }]
                }]
            }
        });
        let doc = document(&data, false);
        assert_eq!(doc.routes["A`B"].0, 12.3);
    }

    #[test]
    fn serialized_document_has_the_expected_shape() {
        let doc = document(&sample_network(), false);
        let value: serde_json::Value = serde_json::from_str(&doc.to_json().unwrap()).unwrap();
        assert_eq!(value["version"], "4.2");
        assert_eq!(value["format"], "0.3");
        assert!(value["date"].is_string());
        assert!(value["routes"].is_object());
        assert_eq!(value["routes"]["A`C"], json!([8.0, [["B", "X"], "C"]]));
    }

    #[test]
    fn write_to_creates_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("routes.json");

        let doc = document(&sample_network(), false);
        doc.write_to(&path).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written["version"], "4.2");
    }

    #[test]
    fn rounding_is_to_the_nearest_tenth() {
        assert_eq!(round_to_tenths(8.0), 8.0);
        assert_eq!(round_to_tenths(12.34), 12.3);
        assert_eq!(round_to_tenths(12.35), 12.4);
        assert_eq!(round_to_tenths(0.04), 0.0);
    }
}
