// crates/ugaloc-core/src/loader.rs

//! # Dataset Loader
//!
//! Obtains the raw dataset document from a [`DocumentSource`] and parses it
//! into the in-memory [`LocationDb`]. The source is an injected capability:
//! the same load path serves a local file, a network fetch, or anything else
//! that can produce the document bytes.

use crate::error::{LocError, Result};
use crate::model::{build_location_db, DefaultBackend, LocationDb};
use crate::raw::DatasetRaw;
use crate::traits::LocBackend;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// Capability contract for obtaining the raw dataset document.
///
/// Implementations produce the complete document bytes in one call; the
/// loader owns parsing and conversion. No retry logic lives on either side
/// of this seam.
pub trait DocumentSource: Send + Sync {
    fn fetch_raw_document(&self) -> Result<Vec<u8>>;
}

/// Reads the dataset document from a local file.
///
/// With the `compact` feature enabled, a `.gz` path is gunzipped
/// transparently.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DocumentSource for FileSource {
    fn fetch_raw_document(&self) -> Result<Vec<u8>> {
        let file = File::open(&self.path).map_err(|e| {
            LocError::NotFound(format!("dataset not found at {}: {e}", self.path.display()))
        })?;

        let reader = BufReader::new(file);

        #[allow(unused_mut)]
        let mut stream: Box<dyn Read> = Box::new(reader);

        #[cfg(feature = "compact")]
        if self.path.extension().is_some_and(|ext| ext == "gz") {
            stream = Box::new(flate2::read::GzDecoder::new(stream));
        }

        let mut buf = Vec::new();
        stream.read_to_end(&mut buf)?;
        Ok(buf)
    }
}

/// Fetches the dataset document over HTTP.
#[cfg(feature = "fetch")]
pub struct HttpSource {
    url: String,
    client: reqwest::blocking::Client,
}

#[cfg(feature = "fetch")]
impl HttpSource {
    pub fn new(url: impl Into<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(crate::geocode::USER_AGENT)
            .build()?;
        Ok(Self {
            url: url.into(),
            client,
        })
    }
}

#[cfg(feature = "fetch")]
impl DocumentSource for HttpSource {
    fn fetch_raw_document(&self) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| LocError::NotFound(format!("dataset not reachable at {}: {e}", self.url)))?;

        let bytes = response
            .bytes()
            .map_err(|e| LocError::NotFound(format!("dataset not readable from {}: {e}", self.url)))?;

        Ok(bytes.to_vec())
    }
}

impl<B: LocBackend> LocationDb<B> {
    /// Parse a dataset document held in memory.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        let raw: DatasetRaw = serde_json::from_slice(bytes)?;
        Ok(build_location_db(raw))
    }

    /// Fetch the document from `source` and build the database.
    ///
    /// Every call re-fetches and re-parses; nothing is cached between calls.
    pub fn load_from_source(source: &dyn DocumentSource) -> Result<Self> {
        let bytes = source.fetch_raw_document()?;
        let db = Self::from_json_slice(&bytes)?;
        tracing::debug!(districts = db.districts.len(), "dataset loaded");
        Ok(db)
    }

    /// Convenience wrapper over [`FileSource`].
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::load_from_source(&FileSource::new(path.as_ref()))
    }
}

impl LocationDb<DefaultBackend> {
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "uganda_electoral_data.json"
    }

    /// Load the bundled dataset shipped with the crate.
    pub fn load() -> Result<Self> {
        Self::load_from_path(Self::default_data_dir().join(Self::default_dataset_filename()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DefaultLocationDb;
    use crate::test_data::SAMPLE_DATASET;
    use std::io::Write;

    #[test]
    fn loads_a_dataset_from_a_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE_DATASET.as_bytes()).unwrap();

        let db = DefaultLocationDb::load_from_path(file.path()).unwrap();
        assert_eq!(db.districts().len(), 3);
    }

    #[test]
    fn missing_file_is_a_not_found_error() {
        let err = DefaultLocationDb::load_from_path("/no/such/dataset.json").unwrap_err();
        assert!(matches!(err, LocError::NotFound(_)), "got {err:?}");
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = DefaultLocationDb::from_json_slice(b"{ not json").unwrap_err();
        assert!(matches!(err, LocError::Json(_)), "got {err:?}");
    }

    #[test]
    fn a_document_without_districts_is_rejected() {
        let err = DefaultLocationDb::from_json_slice(br#"{"regions": []}"#).unwrap_err();
        assert!(matches!(err, LocError::Json(_)), "got {err:?}");
    }

    #[test]
    fn extra_keys_in_the_document_are_tolerated() {
        let doc = br#"{"generated_at": "2021-01-14", "districts": []}"#;
        let db = DefaultLocationDb::from_json_slice(doc).unwrap();
        assert!(db.districts().is_empty());
    }

    #[test]
    fn the_bundled_dataset_loads() {
        let db = DefaultLocationDb::load().unwrap();
        assert!(!db.districts().is_empty());
    }

    #[cfg(feature = "compact")]
    #[test]
    fn gzipped_datasets_are_read_transparently() {
        use flate2::{write::GzEncoder, Compression};

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dataset.json.gz");
        let file = File::create(&path).unwrap();
        let mut encoder = GzEncoder::new(file, Compression::default());
        encoder.write_all(SAMPLE_DATASET.as_bytes()).unwrap();
        encoder.finish().unwrap();

        let db = DefaultLocationDb::load_from_path(&path).unwrap();
        assert_eq!(db.districts().len(), 3);
    }
}
