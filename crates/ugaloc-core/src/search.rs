// crates/ugaloc-core/src/search.rs

//! Lookup, resolve and search operations over the loaded tree.
//!
//! Two deliberate policies coexist here and must not be unified:
//! the listing operations are *permissive* (any missing or unmatched link
//! yields an empty slice, never an error), while [`LocationDb::resolve`] is
//! *strict* (the whole four-code chain matches, or the lookup is a miss).

use crate::common::DbStats;
use crate::error::LocError;
use crate::model::{Constituency, District, ElectoralArea, LocationDb, SubCounty};
use crate::text::fold_key;
use crate::traits::LocBackend;
use std::str::FromStr;

/// Hierarchy level selector for [`LocationDb::search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchLevel {
    District,
    Constituency,
    SubCounty,
    ElectoralArea,
    All,
}

impl SearchLevel {
    /// True if a node at `level` should be considered by a search at `self`.
    #[inline]
    fn covers(self, level: SearchLevel) -> bool {
        self == SearchLevel::All || self == level
    }
}

impl FromStr for SearchLevel {
    type Err = LocError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "district" => Ok(SearchLevel::District),
            "constituency" => Ok(SearchLevel::Constituency),
            "subcounty" | "sub_county" => Ok(SearchLevel::SubCounty),
            "electoral_area" | "electoralarea" => Ok(SearchLevel::ElectoralArea),
            "all" => Ok(SearchLevel::All),
            other => Err(LocError::InvalidData(format!(
                "unknown search level: {other}"
            ))),
        }
    }
}

/// A single match from [`LocationDb::search`], carrying the ancestor chain
/// up to the matched node.
#[derive(Debug, Clone, Copy)]
pub enum SearchHit<'a, B: LocBackend> {
    District(&'a District<B>),
    Constituency {
        district: &'a District<B>,
        constituency: &'a Constituency<B>,
    },
    SubCounty {
        district: &'a District<B>,
        constituency: &'a Constituency<B>,
        sub_county: &'a SubCounty<B>,
    },
    ElectoralArea {
        district: &'a District<B>,
        constituency: &'a Constituency<B>,
        sub_county: &'a SubCounty<B>,
        electoral_area: &'a ElectoralArea<B>,
    },
}

impl<'a, B: LocBackend> SearchHit<'a, B> {
    /// The level this hit matched at.
    pub fn level(&self) -> SearchLevel {
        match *self {
            SearchHit::District(_) => SearchLevel::District,
            SearchHit::Constituency { .. } => SearchLevel::Constituency,
            SearchHit::SubCounty { .. } => SearchLevel::SubCounty,
            SearchHit::ElectoralArea { .. } => SearchLevel::ElectoralArea,
        }
    }

    /// Display name of the matched node.
    pub fn name(&self) -> &'a str {
        match *self {
            SearchHit::District(d) => d.name(),
            SearchHit::Constituency { constituency, .. } => constituency.name(),
            SearchHit::SubCounty { sub_county, .. } => sub_county.name(),
            SearchHit::ElectoralArea { electoral_area, .. } => electoral_area.name(),
        }
    }

    /// The district the matched node belongs to (the node itself at
    /// district level).
    pub fn district(&self) -> &'a District<B> {
        match *self {
            SearchHit::District(d) => d,
            SearchHit::Constituency { district, .. }
            | SearchHit::SubCounty { district, .. }
            | SearchHit::ElectoralArea { district, .. } => district,
        }
    }

    /// The constituency in the ancestor chain, if the hit is that deep.
    pub fn constituency(&self) -> Option<&'a Constituency<B>> {
        match *self {
            SearchHit::District(_) => None,
            SearchHit::Constituency { constituency, .. }
            | SearchHit::SubCounty { constituency, .. }
            | SearchHit::ElectoralArea { constituency, .. } => Some(constituency),
        }
    }

    /// The sub-county in the ancestor chain, if the hit is that deep.
    pub fn sub_county(&self) -> Option<&'a SubCounty<B>> {
        match *self {
            SearchHit::SubCounty { sub_county, .. }
            | SearchHit::ElectoralArea { sub_county, .. } => Some(sub_county),
            _ => None,
        }
    }

    /// The matched electoral area, for leaf-level hits.
    pub fn electoral_area(&self) -> Option<&'a ElectoralArea<B>> {
        match *self {
            SearchHit::ElectoralArea { electoral_area, .. } => Some(electoral_area),
            _ => None,
        }
    }
}

/// The fully resolved four-level path returned by [`LocationDb::resolve`].
#[derive(Debug, Clone, Copy)]
pub struct LocationPath<'a, B: LocBackend> {
    pub district: &'a District<B>,
    pub constituency: &'a Constituency<B>,
    pub sub_county: &'a SubCounty<B>,
    pub electoral_area: &'a ElectoralArea<B>,
}

impl<B: LocBackend> LocationDb<B> {
    /// All districts, in dataset order.
    pub fn districts(&self) -> &[District<B>] {
        &self.districts
    }

    /// Find a district by exact code (district codes are globally unique).
    pub fn district(&self, code: &str) -> Option<&District<B>> {
        self.districts.iter().find(|d| d.code.as_ref() == code)
    }

    /// Constituencies of the given district, in dataset order.
    ///
    /// Permissive read: an empty or unmatched code yields an empty slice,
    /// never an error. An unmatched non-empty code additionally emits a
    /// `tracing` warning, since it usually points at stale caller state.
    pub fn constituencies(&self, district_code: &str) -> &[Constituency<B>] {
        if district_code.is_empty() {
            return &[];
        }
        match self.district(district_code) {
            Some(district) => district.constituencies(),
            None => {
                tracing::warn!(district_code, "district code not found");
                &[]
            }
        }
    }

    /// Sub-counties of the given constituency, in dataset order.
    ///
    /// Same permissive contract as [`LocationDb::constituencies`], applied to
    /// both ancestor links in sequence.
    pub fn sub_counties(
        &self,
        district_code: &str,
        constituency_code: &str,
    ) -> &[SubCounty<B>] {
        if district_code.is_empty() || constituency_code.is_empty() {
            return &[];
        }
        let district = match self.district(district_code) {
            Some(district) => district,
            None => {
                tracing::warn!(district_code, "district code not found");
                return &[];
            }
        };
        match district.constituency(constituency_code) {
            Some(constituency) => constituency.subcounties(),
            None => {
                tracing::warn!(
                    district_code,
                    constituency_code,
                    "constituency code not found in district"
                );
                &[]
            }
        }
    }

    /// Electoral areas of the given sub-county, in dataset order.
    ///
    /// Same permissive contract, applied to all three ancestor links.
    pub fn electoral_areas(
        &self,
        district_code: &str,
        constituency_code: &str,
        sub_county_code: &str,
    ) -> &[ElectoralArea<B>] {
        if district_code.is_empty() || constituency_code.is_empty() || sub_county_code.is_empty()
        {
            return &[];
        }
        let district = match self.district(district_code) {
            Some(district) => district,
            None => {
                tracing::warn!(district_code, "district code not found");
                return &[];
            }
        };
        let constituency = match district.constituency(constituency_code) {
            Some(constituency) => constituency,
            None => {
                tracing::warn!(
                    district_code,
                    constituency_code,
                    "constituency code not found in district"
                );
                return &[];
            }
        };
        match constituency.sub_county(sub_county_code) {
            Some(sub_county) => sub_county.electoral_areas(),
            None => {
                tracing::warn!(
                    constituency_code,
                    sub_county_code,
                    "sub-county code not found in constituency"
                );
                &[]
            }
        }
    }

    /// Resolve a full four-code chain to its named path.
    ///
    /// Strict contract: returns the complete path only when every link
    /// matches, `None` otherwise. Unlike the listing operations, a partial
    /// match is a miss here, not a degenerate success.
    pub fn resolve(
        &self,
        district_code: &str,
        constituency_code: &str,
        sub_county_code: &str,
        electoral_area_code: &str,
    ) -> Option<LocationPath<'_, B>> {
        let district = self.district(district_code)?;
        let constituency = district.constituency(constituency_code)?;
        let sub_county = constituency.sub_county(sub_county_code)?;
        let electoral_area = sub_county.electoral_area(electoral_area_code)?;

        Some(LocationPath {
            district,
            constituency,
            sub_county,
            electoral_area,
        })
    }

    /// Search node names by case-insensitive substring at the given level.
    ///
    /// The whole tree is walked once, depth-first, and results are reported
    /// in traversal order: a district hit precedes hits inside it, and so on
    /// down the levels. No deduplication or ranking is applied. An empty or
    /// whitespace-only term yields no results.
    pub fn search(&self, term: &str, level: SearchLevel) -> Vec<SearchHit<'_, B>> {
        let term = term.trim();
        if term.is_empty() {
            return Vec::new();
        }
        let q = fold_key(term);

        let mut out = Vec::new();

        for district in &self.districts {
            if level.covers(SearchLevel::District) && fold_key(district.name()).contains(&q) {
                out.push(SearchHit::District(district));
            }

            for constituency in &district.constituencies {
                if level.covers(SearchLevel::Constituency)
                    && fold_key(constituency.name()).contains(&q)
                {
                    out.push(SearchHit::Constituency {
                        district,
                        constituency,
                    });
                }

                for sub_county in &constituency.subcounties {
                    if level.covers(SearchLevel::SubCounty)
                        && fold_key(sub_county.name()).contains(&q)
                    {
                        out.push(SearchHit::SubCounty {
                            district,
                            constituency,
                            sub_county,
                        });
                    }

                    for electoral_area in &sub_county.electoral_areas {
                        if level.covers(SearchLevel::ElectoralArea)
                            && fold_key(electoral_area.name()).contains(&q)
                        {
                            out.push(SearchHit::ElectoralArea {
                                district,
                                constituency,
                                sub_county,
                                electoral_area,
                            });
                        }
                    }
                }
            }
        }

        out
    }

    /// Aggregate statistics for the database.
    ///
    /// Recomputed by full traversal on every call; the tree is small and
    /// immutable, so nothing is memoized.
    pub fn stats(&self) -> DbStats {
        let districts = self.districts.len();

        let mut constituencies = 0usize;
        let mut sub_counties = 0usize;
        let mut electoral_areas = 0usize;

        for district in &self.districts {
            constituencies += district.constituencies.len();
            for constituency in &district.constituencies {
                sub_counties += constituency.subcounties.len();
                for sub_county in &constituency.subcounties {
                    electoral_areas += sub_county.electoral_areas.len();
                }
            }
        }

        DbStats {
            districts,
            constituencies,
            sub_counties,
            electoral_areas,
        }
    }
}
