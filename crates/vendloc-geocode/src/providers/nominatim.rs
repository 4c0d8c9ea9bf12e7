//! Free-text provider adapter (Nominatim-style reverse endpoint:
//! `{display_name, address: {city|town|village|hamlet, state, postcode}}`).

use regex::Regex;
use serde::Deserialize;

use vendloc_core::{Coordinate, NormalizedLocation};

use crate::components;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ReverseResponse {
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub address: ReverseAddress,
}

/// Loosely-typed address object: which settlement key is present varies
/// by place size (city vs. town vs. village vs. hamlet).
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ReverseAddress {
    pub city: Option<String>,
    pub town: Option<String>,
    pub village: Option<String>,
    pub hamlet: Option<String>,
    pub state: Option<String>,
    pub postcode: Option<String>,
}

/// Maps a free-text reverse response to the canonical location, or
/// `None` when the provider returned no address at all.
pub(crate) fn parse_response(
    response: &ReverseResponse,
    coordinate: Coordinate,
) -> Option<NormalizedLocation> {
    let display_name = response.display_name.trim();
    if display_name.is_empty() {
        return None;
    }

    let address = &response.address;
    let city = [&address.city, &address.town, &address.village, &address.hamlet]
        .into_iter()
        .find_map(|field| field.as_deref())
        .map_or_else(
            || components::comma_segment_heuristic(display_name),
            ToString::to_string,
        );

    let postal_code = address
        .postcode
        .clone()
        .filter(|p| !p.is_empty())
        .or_else(|| recover_postal_code(display_name))
        .unwrap_or_default();

    Some(NormalizedLocation {
        formatted_address: display_name.to_string(),
        city,
        state: address.state.clone().unwrap_or_default(),
        postal_code,
        coordinate,
    })
}

/// Recovers a 6-digit postal code from the display string when the
/// structured field is absent.
fn recover_postal_code(display_name: &str) -> Option<String> {
    let re = Regex::new(r"\b\d{6}\b").expect("valid regex");
    re.find(display_name).map(|m| m.as_str().to_string())
}
