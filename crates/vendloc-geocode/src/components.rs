//! Address-component reconciliation.
//!
//! Providers disagree about address structure across countries and even
//! across results, so everything funnels through one slot model with a
//! fixed precedence chain. The precedence and fallbacks here are the
//! contract that lets the storefront tolerate inconsistent provider
//! data; changing them changes what users see on saved addresses.

use regex::Regex;

use vendloc_core::{Coordinate, NormalizedLocation};

use crate::plus_code;

/// Named address slots extracted from a provider component list.
///
/// Absence (`None`) is distinct from an empty display string.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AddressComponents {
    pub street_number: Option<String>,
    pub route: Option<String>,
    pub sublocality_l2: Option<String>,
    pub sublocality_l1: Option<String>,
    /// Plain sublocality or neighborhood tier.
    pub sublocality: Option<String>,
    pub locality: Option<String>,
    pub admin_area_l2: Option<String>,
    pub admin_area_l1: Option<String>,
    pub postal_code: Option<String>,
}

/// Provider type tags in slot-assignment priority order. A component
/// carrying several tags fills exactly one slot: the first tag here
/// that it carries.
const TAG_PRIORITY: &[&str] = &[
    "street_number",
    "route",
    "sublocality_level_2",
    "sublocality_level_1",
    "sublocality",
    "neighborhood",
    "locality",
    "administrative_area_level_2",
    "administrative_area_level_1",
    "postal_code",
];

impl AddressComponents {
    /// Populates slots from a structured-provider component list in a
    /// single scan. The first component to claim a slot wins; later
    /// components never overwrite it.
    #[must_use]
    pub fn from_tagged(components: &[(String, Vec<String>)]) -> Self {
        let mut out = Self::default();
        for (long_name, types) in components {
            let Some(tag) = TAG_PRIORITY
                .iter()
                .find(|t| types.iter().any(|ty| ty.as_str() == **t))
            else {
                continue;
            };
            let slot = match *tag {
                "street_number" => &mut out.street_number,
                "route" => &mut out.route,
                "sublocality_level_2" => &mut out.sublocality_l2,
                "sublocality_level_1" => &mut out.sublocality_l1,
                "sublocality" | "neighborhood" => &mut out.sublocality,
                "locality" => &mut out.locality,
                "administrative_area_level_2" => &mut out.admin_area_l2,
                "administrative_area_level_1" => &mut out.admin_area_l1,
                "postal_code" => &mut out.postal_code,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(long_name.clone());
            }
        }
        out
    }

    /// City per the fixed precedence:
    /// locality > admin-L2 > sublocality-L1 > sublocality-L2 > sublocality.
    #[must_use]
    pub fn city(&self) -> Option<&str> {
        self.locality
            .as_deref()
            .or(self.admin_area_l2.as_deref())
            .or(self.sublocality_l1.as_deref())
            .or(self.sublocality_l2.as_deref())
            .or(self.sublocality.as_deref())
    }

    /// State is admin-L1 verbatim.
    #[must_use]
    pub fn state(&self) -> Option<&str> {
        self.admin_area_l1.as_deref()
    }

    /// Single-line display address: (street-number + route | route) →
    /// sublocality (L2 > L1 > plain) → locality (admin-L2 fallback) →
    /// admin-L1 → postal code, comma-joined, empty slots omitted.
    #[must_use]
    pub fn display_address(&self) -> String {
        let street = match (&self.street_number, &self.route) {
            (Some(number), Some(route)) => Some(format!("{number} {route}")),
            (None, Some(route)) => Some(route.clone()),
            _ => None,
        };
        let sublocality = self
            .sublocality_l2
            .as_deref()
            .or(self.sublocality_l1.as_deref())
            .or(self.sublocality.as_deref());
        let city = self.locality.as_deref().or(self.admin_area_l2.as_deref());

        let parts = [
            street.as_deref(),
            sublocality,
            city,
            self.admin_area_l1.as_deref(),
            self.postal_code.as_deref(),
        ];
        parts
            .into_iter()
            .flatten()
            .filter(|p| !p.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Heuristic last resort when no structured slots resolved: the first
/// three comma-segments of the raw formatted address that are neither
/// "India" nor a 6-digit postal code.
#[must_use]
pub fn comma_segment_heuristic(formatted_address: &str) -> String {
    let postal = Regex::new(r"^\d{6}$").expect("valid regex");
    formatted_address
        .split(',')
        .map(str::trim)
        .filter(|segment| {
            !segment.is_empty()
                && !segment.eq_ignore_ascii_case("india")
                && !postal.is_match(segment)
        })
        .take(3)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Assembles the canonical output from a provider's formatted address
/// plus parsed components.
///
/// When the provider's own formatted address embeds a Plus Code, the
/// constructed address is preferred and the code is re-attached
/// parenthetically only if a locality is known — a bare code-only
/// address is never emitted. When construction yields nothing, falls
/// back to [`comma_segment_heuristic`] over the (code-stripped) raw
/// formatted address.
#[must_use]
pub fn build_location(
    formatted_address: &str,
    components: &AddressComponents,
    coordinate: Coordinate,
) -> NormalizedLocation {
    let constructed = components.display_address();

    let formatted = if plus_code::contains_plus_code(formatted_address) {
        if constructed.is_empty() {
            comma_segment_heuristic(&plus_code::strip_plus_code(formatted_address))
        } else {
            match (plus_code::extract_plus_code(formatted_address), components.locality.as_deref()) {
                (Some(code), Some(_)) => format!("{constructed} ({code})"),
                _ => constructed,
            }
        }
    } else if formatted_address.is_empty() {
        constructed
    } else {
        formatted_address.to_string()
    };

    NormalizedLocation {
        formatted_address: formatted,
        city: components.city().unwrap_or_default().to_string(),
        state: components.state().unwrap_or_default().to_string(),
        postal_code: components.postal_code.clone().unwrap_or_default(),
        coordinate,
    }
}
