// crates/ugaloc-core/src/raw.rs

//! Raw mirror of the dataset document.
//!
//! These structs match the JSON shape of the electoral dataset one-to-one:
//! a top-level `districts` array, each district carrying `constituencies`,
//! each constituency `subcounties`, each sub-county `electoral_areas`.
//! Unknown extra keys are ignored; a missing required key is a parse error.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct DatasetRaw {
    pub districts: Vec<DistrictRaw>,
}

#[derive(Debug, Deserialize)]
pub struct DistrictRaw {
    pub name: String,
    pub code: String,
    pub constituencies: Vec<ConstituencyRaw>,
}

#[derive(Debug, Deserialize)]
pub struct ConstituencyRaw {
    pub name: String,
    pub code: String,
    pub subcounties: Vec<SubCountyRaw>,
}

#[derive(Debug, Deserialize)]
pub struct SubCountyRaw {
    pub name: String,
    pub code: String,
    pub electoral_areas: Vec<ElectoralAreaRaw>,
}

#[derive(Debug, Deserialize)]
pub struct ElectoralAreaRaw {
    pub name: String,
    pub code: String,
}
