//! Typed passthrough client for the hierarchical location directory API
//! (states → districts → cities → pincodes) used to populate seller
//! address forms.
//!
//! Unlike reverse geocoding, these lookups back *required* form data, so
//! upstream failures propagate loudly as [`DirectoryError`] instead of
//! degrading. No caching, no re-derivation — strictly a boundary client.

pub mod client;
pub mod error;
pub mod types;

pub use client::DirectoryClient;
pub use error::DirectoryError;
pub use types::{DirectoryEntry, PincodeInfo};
