//! Domain types for location resolution and nearby-seller search.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geo;

/// Errors from domain-type validation.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Latitude/longitude out of range or non-finite. Indicates a
    /// programming error upstream, not an environmental failure.
    #[error("invalid coordinate: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    /// Accuracy must be a finite, non-negative number of meters.
    #[error("invalid accuracy: {0} m")]
    InvalidAccuracy(f64),
}

/// A validated GPS position. Immutable value type.
///
/// Construct through [`Coordinate::new`] to get range validation; a
/// `Coordinate` deserialized straight from caller JSON may still carry
/// out-of-range values, which is why the search path re-checks with
/// [`geo::is_valid_coordinate`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
    /// Reported GPS accuracy, when the device supplied one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy_meters: Option<f64>,
}

impl Coordinate {
    /// Creates a coordinate, rejecting out-of-range or non-finite input.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidCoordinate`] when latitude is outside
    /// `[-90, 90]`, longitude is outside `[-180, 180]`, or either is
    /// NaN/infinite. Values are never clamped.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoreError> {
        if !geo::is_valid_coordinate(latitude, longitude) {
            return Err(CoreError::InvalidCoordinate {
                latitude,
                longitude,
            });
        }
        Ok(Self {
            latitude,
            longitude,
            accuracy_meters: None,
        })
    }

    /// Creates a coordinate with a reported accuracy radius.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidCoordinate`] for bad lat/lon and
    /// [`CoreError::InvalidAccuracy`] when `accuracy_meters` is negative
    /// or non-finite.
    pub fn with_accuracy(
        latitude: f64,
        longitude: f64,
        accuracy_meters: f64,
    ) -> Result<Self, CoreError> {
        if !accuracy_meters.is_finite() || accuracy_meters < 0.0 {
            return Err(CoreError::InvalidAccuracy(accuracy_meters));
        }
        let mut coordinate = Self::new(latitude, longitude)?;
        coordinate.accuracy_meters = Some(accuracy_meters);
        Ok(coordinate)
    }
}

/// An axis-aligned lat/lon rectangle, in degrees.
///
/// Only ever a cheap pre-filter; the authoritative inclusion test is the
/// exact great-circle distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

/// Canonical reverse-geocoding output.
///
/// String fields are `""` when unresolved, never null — the storefront
/// forms bind directly to these fields and must not branch on absence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedLocation {
    pub formatted_address: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub coordinate: Coordinate,
}

impl NormalizedLocation {
    /// An unresolved location: all string fields empty.
    #[must_use]
    pub fn unresolved(coordinate: Coordinate) -> Self {
        Self {
            formatted_address: String::new(),
            city: String::new(),
            state: String::new(),
            postal_code: String::new(),
            coordinate,
        }
    }
}

/// A searchable seller record supplied by the vendor directory.
///
/// Treated as read-only input; `metadata` is entity-specific payload
/// passed through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SellerLocation {
    pub id: String,
    pub display_name: String,
    pub is_active: bool,
    pub coordinate: Coordinate,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub locality: Option<String>,
    #[serde(default)]
    pub metadata: serde_json::Value,
}

/// One nearby-search hit: the seller plus its computed distance and
/// relevance score. Created per search call, never stored.
#[derive(Debug, Clone, Serialize)]
pub struct RankedResult {
    pub entity: SellerLocation,
    pub distance_km: f64,
    pub relevance_score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coordinate_new_accepts_valid_ranges() {
        assert!(Coordinate::new(0.0, 0.0).is_ok());
        assert!(Coordinate::new(-90.0, 180.0).is_ok());
        assert!(Coordinate::new(90.0, -180.0).is_ok());
    }

    #[test]
    fn coordinate_new_rejects_out_of_range() {
        assert!(Coordinate::new(91.0, 0.0).is_err());
        assert!(Coordinate::new(45.0, 200.0).is_err());
        assert!(Coordinate::new(f64::NAN, 0.0).is_err());
        assert!(Coordinate::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn with_accuracy_rejects_negative_and_nan() {
        assert!(Coordinate::with_accuracy(10.0, 10.0, -1.0).is_err());
        assert!(Coordinate::with_accuracy(10.0, 10.0, f64::NAN).is_err());
        let c = Coordinate::with_accuracy(10.0, 10.0, 12.5).expect("valid");
        assert_eq!(c.accuracy_meters, Some(12.5));
    }

    #[test]
    fn unresolved_location_has_empty_strings_not_nulls() {
        let coord = Coordinate::new(28.6139, 77.2090).expect("valid");
        let loc = NormalizedLocation::unresolved(coord);
        assert_eq!(loc.city, "");
        assert_eq!(loc.state, "");
        assert_eq!(loc.postal_code, "");

        let json = serde_json::to_value(&loc).expect("serializes");
        assert_eq!(json["city"], "");
        assert!(!json["city"].is_null());
    }

    #[test]
    fn seller_location_deserializes_without_optional_fields() {
        let seller: SellerLocation = serde_json::from_value(serde_json::json!({
            "id": "s-1",
            "display_name": "Fresh Farms",
            "is_active": true,
            "coordinate": { "latitude": 18.52, "longitude": 73.85 }
        }))
        .expect("minimal seller JSON should parse");
        assert!(seller.category.is_none());
        assert!(seller.locality.is_none());
        assert!(seller.metadata.is_null());
    }
}
