// crates/ugaloc-core/src/selector.rs

//! Stateful selector facade over the loader and the database.
//!
//! [`Selector`] is the entry point for callers that drive the two-phase
//! lifecycle: construct with a [`DocumentSource`], call
//! [`Selector::init`], then query. Every query fails with
//! [`LocError::NotInitialized`] until the first successful `init()`.
//!
//! Library users who do not need that runtime sequencing can load a
//! [`LocationDb`] directly and get the readiness guarantee from the type
//! system instead.

use crate::common::DbStats;
use crate::error::{LocError, Result};
use crate::loader::{DocumentSource, FileSource};
use crate::model::{Constituency, DefaultBackend, District, ElectoralArea, LocationDb, SubCounty};
use crate::search::{LocationPath, SearchHit, SearchLevel};
use crate::traits::LocBackend;
use std::path::Path;

#[cfg(feature = "fetch")]
use crate::geocode::{Coordinates, GeocodeClient};

pub struct Selector<B: LocBackend = DefaultBackend> {
    source: Box<dyn DocumentSource>,
    db: Option<LocationDb<B>>,
    #[cfg(feature = "fetch")]
    geocoder: Option<GeocodeClient>,
}

impl<B: LocBackend> Selector<B> {
    /// A selector that will load from the given source. No I/O happens until
    /// [`Selector::init`].
    pub fn new(source: impl DocumentSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            db: None,
            #[cfg(feature = "fetch")]
            geocoder: None,
        }
    }

    /// A selector over a local dataset file.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self::new(FileSource::new(path.as_ref()))
    }

    /// Replace the default Nominatim client, e.g. to set an endpoint or a
    /// request timeout.
    #[cfg(feature = "fetch")]
    pub fn with_geocoder(mut self, geocoder: GeocodeClient) -> Self {
        self.geocoder = Some(geocoder);
        self
    }

    /// Fetch and parse the dataset, replacing any previously loaded tree.
    ///
    /// Calling this twice re-fetches; the operation is deliberately not
    /// deduplicated. On failure the previous tree (if any) is kept.
    pub fn init(&mut self) -> Result<()> {
        let db = LocationDb::load_from_source(self.source.as_ref())?;
        self.db = Some(db);
        Ok(())
    }

    /// True once a dataset has been loaded.
    pub fn is_ready(&self) -> bool {
        self.db.is_some()
    }

    /// The loaded database, or [`LocError::NotInitialized`].
    pub fn db(&self) -> Result<&LocationDb<B>> {
        self.db.as_ref().ok_or(LocError::NotInitialized)
    }

    /// All districts, in dataset order.
    pub fn districts(&self) -> Result<&[District<B>]> {
        Ok(self.db()?.districts())
    }

    /// Constituencies of a district; empty on any unmatched link.
    pub fn constituencies(&self, district_code: &str) -> Result<&[Constituency<B>]> {
        Ok(self.db()?.constituencies(district_code))
    }

    /// Sub-counties of a constituency; empty on any unmatched link.
    pub fn sub_counties(
        &self,
        district_code: &str,
        constituency_code: &str,
    ) -> Result<&[SubCounty<B>]> {
        Ok(self.db()?.sub_counties(district_code, constituency_code))
    }

    /// Electoral areas of a sub-county; empty on any unmatched link.
    pub fn electoral_areas(
        &self,
        district_code: &str,
        constituency_code: &str,
        sub_county_code: &str,
    ) -> Result<&[ElectoralArea<B>]> {
        Ok(self
            .db()?
            .electoral_areas(district_code, constituency_code, sub_county_code))
    }

    /// Resolve a full four-code chain; `Ok(None)` when it does not resolve.
    pub fn resolve(
        &self,
        district_code: &str,
        constituency_code: &str,
        sub_county_code: &str,
        electoral_area_code: &str,
    ) -> Result<Option<LocationPath<'_, B>>> {
        Ok(self.db()?.resolve(
            district_code,
            constituency_code,
            sub_county_code,
            electoral_area_code,
        ))
    }

    /// Name search at the given level; see [`LocationDb::search`].
    pub fn search(&self, term: &str, level: SearchLevel) -> Result<Vec<SearchHit<'_, B>>> {
        Ok(self.db()?.search(term, level))
    }

    /// Aggregate counts; see [`LocationDb::stats`].
    pub fn stats(&self) -> Result<DbStats> {
        Ok(self.db()?.stats())
    }

    /// Geocode a free-text location description.
    ///
    /// Independent of the tree: does not require [`Selector::init`].
    #[cfg(feature = "fetch")]
    pub fn coordinates(&self, query: &str) -> Result<Coordinates> {
        match &self.geocoder {
            Some(geocoder) => geocoder.coordinates(query),
            None => GeocodeClient::new()?.coordinates(query),
        }
    }
}

impl Selector<DefaultBackend> {
    /// A selector over the dataset bundled with the crate.
    pub fn with_default_dataset() -> Self {
        let path =
            LocationDb::default_data_dir().join(LocationDb::default_dataset_filename());
        Self::from_path(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_data::SAMPLE_DATASET;

    struct StaticSource;

    impl DocumentSource for StaticSource {
        fn fetch_raw_document(&self) -> Result<Vec<u8>> {
            Ok(SAMPLE_DATASET.as_bytes().to_vec())
        }
    }

    #[test]
    fn every_lookup_fails_before_init() {
        let selector = Selector::<DefaultBackend>::new(StaticSource);

        assert!(!selector.is_ready());
        assert!(matches!(selector.districts(), Err(LocError::NotInitialized)));
        assert!(matches!(
            selector.constituencies("027"),
            Err(LocError::NotInitialized)
        ));
        assert!(matches!(
            selector.sub_counties("027", "01"),
            Err(LocError::NotInitialized)
        ));
        assert!(matches!(
            selector.electoral_areas("027", "01", "01"),
            Err(LocError::NotInitialized)
        ));
        assert!(matches!(
            selector.resolve("027", "01", "01", "01"),
            Err(LocError::NotInitialized)
        ));
        assert!(matches!(
            selector.search("mbarara", SearchLevel::All),
            Err(LocError::NotInitialized)
        ));
        assert!(matches!(selector.stats(), Err(LocError::NotInitialized)));
    }

    #[test]
    fn init_makes_the_lookups_available() {
        let mut selector = Selector::<DefaultBackend>::new(StaticSource);
        selector.init().unwrap();

        assert!(selector.is_ready());
        assert_eq!(selector.districts().unwrap().len(), 3);
        assert_eq!(selector.constituencies("027").unwrap().len(), 2);
    }

    #[test]
    fn init_twice_reloads_and_replaces() {
        let mut selector = Selector::<DefaultBackend>::new(StaticSource);
        selector.init().unwrap();
        let first = selector.stats().unwrap();
        selector.init().unwrap();
        assert_eq!(selector.stats().unwrap(), first);
    }

    #[test]
    fn a_failing_source_keeps_the_selector_unready() {
        struct BrokenSource;
        impl DocumentSource for BrokenSource {
            fn fetch_raw_document(&self) -> Result<Vec<u8>> {
                Err(LocError::NotFound("nothing here".into()))
            }
        }

        let mut selector = Selector::<DefaultBackend>::new(BrokenSource);
        assert!(selector.init().is_err());
        assert!(!selector.is_ready());
        assert!(matches!(selector.stats(), Err(LocError::NotInitialized)));
    }
}
