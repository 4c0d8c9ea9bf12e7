//! Nearby-seller search: radius filter plus a fixed-weight relevance
//! heuristic.
//!
//! Linear scan over the caller-supplied slice. A bounding-box index
//! could be substituted transparently, but the exact great-circle
//! distance stays the inclusion test either way.

use crate::geo;
use crate::types::{Coordinate, RankedResult, SellerLocation};

/// Default search radius when the storefront does not specify one.
pub const DEFAULT_RADIUS_KM: f64 = 10.0;

const DISTANCE_BASE_SCORE: f64 = 100.0;
const DISTANCE_PENALTY_PER_KM: f64 = 10.0;
const NAME_MATCH_BONUS: f64 = 50.0;
const CATEGORY_MATCH_BONUS: f64 = 30.0;
const LOCALITY_MATCH_BONUS: f64 = 20.0;

/// Active sellers within `radius_km` of `center`, nearest first.
///
/// Inactive sellers and sellers with an out-of-range coordinate are
/// skipped even when they would fall inside the radius. Sort is stable:
/// equal distances keep input order. The `relevance_score` on each hit
/// is the query-less [`search_priority`] (distance component only).
#[must_use]
pub fn find_nearby_sellers(
    center: Coordinate,
    sellers: &[SellerLocation],
    radius_km: f64,
) -> Vec<RankedResult> {
    let mut results = collect_within_radius(center, sellers, radius_km, None);
    results.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));
    results
}

/// Ranked variant: same radius filter, ordered by descending relevance
/// (ties broken by ascending distance).
#[must_use]
pub fn find_nearby_ranked(
    center: Coordinate,
    sellers: &[SellerLocation],
    radius_km: f64,
    query: Option<&str>,
) -> Vec<RankedResult> {
    let mut results = collect_within_radius(center, sellers, radius_km, query);
    results.sort_by(|a, b| {
        b.relevance_score
            .total_cmp(&a.relevance_score)
            .then(a.distance_km.total_cmp(&b.distance_km))
    });
    results
}

/// Heuristic relevance score for one seller.
///
/// `max(0, 100 − distance_km·10)`, plus fixed bonuses when `query`
/// substring-matches (case-insensitively) the display name (+50),
/// category (+30), or locality (+20). The weights are contract, not
/// tunables; determinism is the testable property here.
#[must_use]
pub fn search_priority(seller: &SellerLocation, center: Coordinate, query: Option<&str>) -> f64 {
    let distance = geo::distance_km(center, seller.coordinate);
    let mut score = (DISTANCE_BASE_SCORE - distance * DISTANCE_PENALTY_PER_KM).max(0.0);

    let Some(needle) = query.map(str::trim).filter(|q| !q.is_empty()) else {
        return score;
    };
    let needle = needle.to_lowercase();

    if seller.display_name.to_lowercase().contains(&needle) {
        score += NAME_MATCH_BONUS;
    }
    if matches_lowered(seller.category.as_deref(), &needle) {
        score += CATEGORY_MATCH_BONUS;
    }
    if matches_lowered(seller.locality.as_deref(), &needle) {
        score += LOCALITY_MATCH_BONUS;
    }
    score
}

fn matches_lowered(field: Option<&str>, needle: &str) -> bool {
    field.is_some_and(|f| f.to_lowercase().contains(needle))
}

fn collect_within_radius(
    center: Coordinate,
    sellers: &[SellerLocation],
    radius_km: f64,
    query: Option<&str>,
) -> Vec<RankedResult> {
    sellers
        .iter()
        .filter(|s| {
            s.is_active && geo::is_valid_coordinate(s.coordinate.latitude, s.coordinate.longitude)
        })
        .filter_map(|s| {
            let distance_km = geo::distance_km(center, s.coordinate);
            if distance_km > radius_km {
                return None;
            }
            Some(RankedResult {
                relevance_score: search_priority(s, center, query),
                entity: s.clone(),
                distance_km,
            })
        })
        .collect()
}
