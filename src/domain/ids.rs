//! Type-safe entity identifiers.
//!
//! [`ToiletId`] and [`RatingId`] are newtype wrappers around the surrogate
//! `i64` keys assigned by storage, so that a rating id can never be passed
//! where a toilet id is expected.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ServiceError;

/// Unique identifier for a toilet.
///
/// Assigned by storage on insert (`AUTOINCREMENT`), monotonically
/// increasing and never reused. Exposed over GraphQL as the `uid` field.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct ToiletId(i64);

impl ToiletId {
    /// Wraps a raw storage key.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Returns the raw storage key.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ToiletId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ToiletId {
    type Err = ServiceError;

    /// Parses a client-supplied `uid`. Only positive decimal integers are
    /// accepted since storage never assigns zero or negative keys.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_key(s).map(Self)
    }
}

/// Unique identifier for a toilet rating.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, sqlx::Type,
)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct RatingId(i64);

impl RatingId {
    /// Wraps a raw storage key.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Returns the raw storage key.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for RatingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn parse_key(s: &str) -> Result<i64, ServiceError> {
    let trimmed = s.trim();
    match trimmed.parse::<i64>() {
        Ok(raw) if raw > 0 => Ok(raw),
        _ => Err(ServiceError::InvalidId(s.to_string())),
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_uid() {
        let Ok(id) = "42".parse::<ToiletId>() else {
            panic!("valid uid");
        };
        assert_eq!(id.get(), 42);
    }

    #[test]
    fn tolerates_surrounding_whitespace() {
        let parsed = " 7 ".parse::<ToiletId>().ok();
        assert_eq!(parsed, Some(ToiletId::new(7)));
    }

    #[test]
    fn rejects_non_numeric_uid() {
        let result = "abc".parse::<ToiletId>();
        assert!(matches!(result, Err(ServiceError::InvalidId(ref s)) if s == "abc"));
    }

    #[test]
    fn rejects_zero_and_negative() {
        assert!("0".parse::<ToiletId>().is_err());
        assert!("-3".parse::<ToiletId>().is_err());
    }

    #[test]
    fn display_is_plain_integer() {
        assert_eq!(ToiletId::new(12).to_string(), "12");
        assert_eq!(RatingId::new(3).to_string(), "3");
    }

    #[test]
    fn serde_is_transparent() {
        let json = serde_json::to_string(&ToiletId::new(5)).ok();
        assert_eq!(json.as_deref(), Some("5"));
    }
}
