// crates/ugaloc-core/src/lib.rs

//! # ugaloc-core
//!
//! In-memory database of the Uganda administrative hierarchy — district →
//! constituency → sub-county → electoral area — built from the Electoral
//! Commission dataset, with exact-code lookups, name search, chain
//! resolution, statistics, and Nominatim geocoding for selected places.
//!
//! The tree is loaded once from a [`loader::DocumentSource`] and is
//! immutable afterwards; every read operation is a pure traversal.
//! [`Selector`] wraps the load-then-query lifecycle for callers that want
//! the stateful surface; [`LocationDb`] is the loaded handle itself.

pub mod common;
pub mod error;
#[cfg(feature = "fetch")]
pub mod geocode;
pub mod loader;
pub mod model;
pub mod search;
pub mod selector;
pub mod text;
pub mod traits;
// Raw mirror of the dataset document (used by the loader)
#[doc(hidden)]
pub mod raw;

#[cfg(test)]
pub(crate) mod test_data;

// Re-exports
pub use crate::common::DbStats;
pub use crate::error::{LocError, Result};
#[cfg(feature = "fetch")]
pub use crate::geocode::{Coordinates, GeocodeClient, NOMINATIM_ENDPOINT};
pub use crate::loader::{DocumentSource, FileSource};
#[cfg(feature = "fetch")]
pub use crate::loader::HttpSource;
pub use crate::model::{
    Constituency, DefaultBackend, DefaultLocationDb, District, ElectoralArea, LocationDb,
    StandardBackend, SubCounty,
};
pub use crate::search::{LocationPath, SearchHit, SearchLevel};
pub use crate::selector::Selector;

/// Bring common types and traits into scope for examples.
pub mod prelude {
    #![allow(unused_imports)]

    pub use crate::common::DbStats;
    pub use crate::error::{LocError, Result};
    #[cfg(feature = "fetch")]
    pub use crate::geocode::{Coordinates, GeocodeClient};
    pub use crate::loader::{DocumentSource, FileSource};
    pub use crate::model::{
        Constituency, DefaultBackend, DefaultLocationDb, District, ElectoralArea, LocationDb,
        StandardBackend, SubCounty,
    };
    pub use crate::search::{LocationPath, SearchHit, SearchLevel};
    pub use crate::selector::Selector;
    pub use crate::text::{equals_folded, fold_key};
    pub use crate::traits::{LocBackend, NameMatch};
}
