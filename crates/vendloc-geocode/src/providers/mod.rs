//! Provider adapters. Each converts one provider's raw JSON shape into
//! the common [`vendloc_core::NormalizedLocation`]; the raw candidate
//! lists never escape this crate.

pub(crate) mod google;
pub(crate) mod nominatim;
