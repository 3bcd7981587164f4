// crates/ugaloc-core/src/model.rs

use crate::raw::DatasetRaw;
use crate::traits::{LocBackend, NameMatch};
use serde::{Deserialize, Serialize};

/// Default backend: plain `String` storage.
///
/// This backend is used by the convenient aliases [`StandardBackend`] and
/// [`DefaultLocationDb`]. It provides the best ergonomics and is suitable
/// for most applications.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DefaultBackend;

impl LocBackend for DefaultBackend {
    type Str = String;

    #[inline]
    fn str_from(s: &str) -> Self::Str {
        s.to_owned()
    }

    #[inline]
    fn str_to_string(v: &Self::Str) -> String {
        v.clone()
    }
}

/// An electoral area, the leaf level of the hierarchy.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ElectoralArea<B: LocBackend> {
    pub name: B::Str,
    pub code: B::Str,
}

/// A sub-county within a constituency.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SubCounty<B: LocBackend> {
    pub name: B::Str,
    pub code: B::Str,
    pub electoral_areas: Vec<ElectoralArea<B>>,
}

/// A constituency within a district.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Constituency<B: LocBackend> {
    pub name: B::Str,
    pub code: B::Str,
    pub subcounties: Vec<SubCounty<B>>,
}

/// A district, the top level of the hierarchy.
///
/// District codes are the only codes that are unique across the whole
/// dataset; every deeper code is unique only within its parent.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct District<B: LocBackend> {
    pub name: B::Str,
    pub code: B::Str,
    pub constituencies: Vec<Constituency<B>>,
}

/// Top-level database structure.
///
/// Holds the district tree and provides the lookup, resolve, search and
/// statistics operations. Constructed once by the loader from the dataset
/// document and immutable afterwards, so shared references can be handed to
/// any number of concurrent readers.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LocationDb<B: LocBackend> {
    pub districts: Vec<District<B>>,
}

/// Convenient alias for the default backend.
pub type DefaultLocationDb = LocationDb<DefaultBackend>;
/// Convenient alias used in examples.
pub type StandardBackend = DefaultBackend;

impl<B: LocBackend> District<B> {
    /// District display name.
    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    /// District code (e.g. "027" for Mbarara). Globally unique.
    pub fn code(&self) -> &str {
        self.code.as_ref()
    }

    /// Read-only slice of constituencies belonging to this district.
    pub fn constituencies(&self) -> &[Constituency<B>] {
        &self.constituencies
    }

    /// Find a constituency of this district by exact code.
    pub fn constituency(&self, code: &str) -> Option<&Constituency<B>> {
        self.constituencies.iter().find(|c| c.code.as_ref() == code)
    }
}

impl<B: LocBackend> Constituency<B> {
    /// Constituency display name.
    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    /// Constituency code, unique within its parent district.
    pub fn code(&self) -> &str {
        self.code.as_ref()
    }

    /// Read-only slice of sub-counties belonging to this constituency.
    pub fn subcounties(&self) -> &[SubCounty<B>] {
        &self.subcounties
    }

    /// Find a sub-county of this constituency by exact code.
    pub fn sub_county(&self, code: &str) -> Option<&SubCounty<B>> {
        self.subcounties.iter().find(|s| s.code.as_ref() == code)
    }
}

impl<B: LocBackend> SubCounty<B> {
    /// Sub-county display name.
    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    /// Sub-county code, unique within its parent constituency.
    pub fn code(&self) -> &str {
        self.code.as_ref()
    }

    /// Read-only slice of electoral areas belonging to this sub-county.
    pub fn electoral_areas(&self) -> &[ElectoralArea<B>] {
        &self.electoral_areas
    }

    /// Find an electoral area of this sub-county by exact code.
    pub fn electoral_area(&self, code: &str) -> Option<&ElectoralArea<B>> {
        self.electoral_areas
            .iter()
            .find(|a| a.code.as_ref() == code)
    }
}

impl<B: LocBackend> ElectoralArea<B> {
    /// Electoral area display name.
    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    /// Electoral area code, unique within its parent sub-county.
    pub fn code(&self) -> &str {
        self.code.as_ref()
    }
}

impl<B: LocBackend> NameMatch for District<B> {
    #[inline]
    fn name_str(&self) -> &str {
        self.name()
    }
}

impl<B: LocBackend> NameMatch for Constituency<B> {
    #[inline]
    fn name_str(&self) -> &str {
        self.name()
    }
}

impl<B: LocBackend> NameMatch for SubCounty<B> {
    #[inline]
    fn name_str(&self) -> &str {
        self.name()
    }
}

impl<B: LocBackend> NameMatch for ElectoralArea<B> {
    #[inline]
    fn name_str(&self) -> &str {
        self.name()
    }
}

/// Converts the raw dataset document into a [`LocationDb`] using the
/// specified backend.
///
/// The conversion preserves the document order of every children list, which
/// is the order all listing operations report.
pub fn build_location_db<B: LocBackend>(raw: DatasetRaw) -> LocationDb<B> {
    let districts = raw
        .districts
        .into_iter()
        .map(|d| {
            let constituencies = d
                .constituencies
                .into_iter()
                .map(|c| {
                    let subcounties = c
                        .subcounties
                        .into_iter()
                        .map(|s| {
                            let electoral_areas = s
                                .electoral_areas
                                .into_iter()
                                .map(|a| ElectoralArea::<B> {
                                    name: B::str_from(&a.name),
                                    code: B::str_from(&a.code),
                                })
                                .collect();

                            SubCounty::<B> {
                                name: B::str_from(&s.name),
                                code: B::str_from(&s.code),
                                electoral_areas,
                            }
                        })
                        .collect();

                    Constituency::<B> {
                        name: B::str_from(&c.name),
                        code: B::str_from(&c.code),
                        subcounties,
                    }
                })
                .collect();

            District::<B> {
                name: B::str_from(&d.name),
                code: B::str_from(&d.code),
                constituencies,
            }
        })
        .collect();

    LocationDb { districts }
}
