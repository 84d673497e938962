//! Station code types.

use std::borrow::Borrow;
use std::fmt;

use serde::Serialize;

/// Prefix that distinguishes Nether stations from their Overworld
/// counterparts, e.g. `SVW` vs `N-SVW`.
pub const NETHER_PREFIX: &str = "N-";

/// Error returned when parsing an invalid station code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station code: {reason}")]
pub struct InvalidStationCode {
    reason: &'static str,
}

/// A valid station code.
///
/// Codes are case-sensitive and may use an arbitrary charset, but they are
/// never empty and never contain a backtick, which is reserved as the
/// separator in route keys. Any `StationCode` value is valid by
/// construction.
///
/// # Examples
///
/// ```
/// use rail_atlas::domain::StationCode;
///
/// let svw = StationCode::parse("SVW").unwrap();
/// assert_eq!(svw.as_str(), "SVW");
/// assert_eq!(svw.nether().as_str(), "N-SVW");
///
/// // The route-key separator is rejected
/// assert!(StationCode::parse("SV`W").is_err());
/// assert!(StationCode::parse("").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct StationCode(String);

impl StationCode {
    /// Parse a station code from a string.
    ///
    /// The input must be non-empty and must not contain a backtick.
    pub fn parse(s: &str) -> Result<Self, InvalidStationCode> {
        if s.is_empty() {
            return Err(InvalidStationCode {
                reason: "must not be empty",
            });
        }

        if s.contains('`') {
            return Err(InvalidStationCode {
                reason: "must not contain a backtick",
            });
        }

        Ok(StationCode(s.to_owned()))
    }

    /// Parse a raw code and apply a dimension prefix.
    ///
    /// The raw code is validated before the prefix is applied, so an empty
    /// Nether stop code is rejected rather than becoming just `"N-"`.
    pub fn parse_prefixed(raw: &str, prefix: &str) -> Result<Self, InvalidStationCode> {
        Self::parse(raw)?;
        Ok(StationCode(format!("{prefix}{raw}")))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the code of this station's Nether counterpart.
    ///
    /// The counterpart of a code that already carries the prefix is itself.
    pub fn nether(&self) -> StationCode {
        if self.is_nether() {
            self.clone()
        } else {
            StationCode(format!("{NETHER_PREFIX}{}", self.0))
        }
    }

    /// Whether this code belongs to the Nether layer.
    pub fn is_nether(&self) -> bool {
        self.0.starts_with(NETHER_PREFIX)
    }
}

impl Borrow<str> for StationCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for StationCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationCode({})", self.0)
    }
}

impl fmt::Display for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
