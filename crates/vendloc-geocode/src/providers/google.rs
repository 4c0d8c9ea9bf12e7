//! Structured-components provider adapter (Google-style geocode
//! envelope: `{status, results: [{formatted_address, address_components}]}`).

use serde::Deserialize;

use vendloc_core::{Coordinate, NormalizedLocation};

use crate::components::{self, AddressComponents};
use crate::plus_code;

#[derive(Debug, Deserialize)]
pub(crate) struct GeocodeResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<GeocodeResult>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeocodeResult {
    #[serde(default)]
    pub formatted_address: String,
    #[serde(default)]
    pub address_components: Vec<RawComponent>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawComponent {
    pub long_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}

/// What the structured provider's response means for the fallback chain.
pub(crate) enum Outcome {
    Resolved(NormalizedLocation),
    /// No usable candidate (e.g. `ZERO_RESULTS`); try the next provider.
    NoMatch,
    /// Explicit denial (`REQUEST_DENIED` / `INVALID_REQUEST`): skip this
    /// provider without retrying within the same call.
    Denied(String),
}

pub(crate) fn parse_response(response: &GeocodeResponse, coordinate: Coordinate) -> Outcome {
    match response.status.as_str() {
        "OK" => {}
        "REQUEST_DENIED" | "INVALID_REQUEST" => {
            return Outcome::Denied(response.status.clone());
        }
        // ZERO_RESULTS, OVER_QUERY_LIMIT, UNKNOWN_ERROR and friends all
        // mean "nothing usable here" rather than "stop".
        _ => return Outcome::NoMatch,
    }

    let Some(best) = select_best(&response.results) else {
        return Outcome::NoMatch;
    };

    let tagged: Vec<(String, Vec<String>)> = best
        .address_components
        .iter()
        .map(|c| (c.long_name.clone(), c.types.clone()))
        .collect();
    let parsed = AddressComponents::from_tagged(&tagged);

    Outcome::Resolved(components::build_location(
        &best.formatted_address,
        &parsed,
        coordinate,
    ))
}

/// Best candidate: the one with the most address components among those
/// whose formatted address is not a bare Plus Code. When every result is
/// Plus-Code-only, fall back to the first result as-is. Ties keep the
/// earliest result.
fn select_best(results: &[GeocodeResult]) -> Option<&GeocodeResult> {
    let mut best: Option<&GeocodeResult> = None;
    for result in results {
        if plus_code::is_bare_plus_code(&result.formatted_address) {
            continue;
        }
        if best.is_none_or(|b| result.address_components.len() > b.address_components.len()) {
            best = Some(result);
        }
    }
    best.or_else(|| results.first())
}
