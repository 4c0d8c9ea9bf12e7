//! Domain types, geometry, and proximity search for the vendloc
//! marketplace location subsystem.
//!
//! Everything in this crate is pure computation over caller-supplied
//! values: no I/O, no shared state. The HTTP-facing pieces live in
//! `vendloc-geocode` and `vendloc-directory`.

pub mod geo;
pub mod search;
pub mod types;

pub use geo::{bounding_box, distance_km, is_valid_coordinate, is_within_bounds};
pub use search::{find_nearby_ranked, find_nearby_sellers, search_priority, DEFAULT_RADIUS_KM};
pub use types::{BoundingBox, Coordinate, CoreError, NormalizedLocation, RankedResult, SellerLocation};
