//! Reverse geocoding for the vendloc marketplace.
//!
//! Two third-party providers with incompatible schemas are tried in a
//! fixed fallback order: the structured-components provider (Google-style
//! geocode envelope, preferred for postal-code accuracy) and the
//! free-text provider (Nominatim-style reverse endpoint, the zero-cost
//! fallback). When both fail the caller still gets a coordinate-only
//! [`vendloc_core::NormalizedLocation`] — reverse geocoding is best-effort
//! enrichment and never surfaces provider failures.

pub mod components;
pub mod config;
pub mod error;
pub mod plus_code;
mod providers;
pub mod resolver;

pub use components::AddressComponents;
pub use config::{load_config, load_config_from_env, ConfigError, GeocodeConfig};
pub use error::GeocodeError;
pub use resolver::GeocodeClient;
