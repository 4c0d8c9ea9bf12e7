//! Location directory API response types.
//!
//! Every endpoint wraps its payload in a `{"data": [...]}` envelope;
//! [`Envelope`] captures that generically.

use serde::{Deserialize, Serialize};

/// Top-level `{"data": [...]}` wrapper for all directory responses.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub data: Vec<T>,
}

/// One node of the location hierarchy (a state, district, or city).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryEntry {
    pub id: i64,
    pub name: String,
}

/// Resolved metadata for a single pincode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PincodeInfo {
    pub pincode: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}
