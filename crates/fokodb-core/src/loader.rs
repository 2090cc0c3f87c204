// crates/fokodb-core/src/loader.rs

//! # Data Loader
//!
//! Materializes a [`Gazetteer`] from the source document: a JSON array of
//! regions, optionally gzip-compressed. This is the only place the crate
//! touches the filesystem; the search engine only ever sees the parsed tree.

use crate::error::{FokoError, Result};
use crate::gazetteer::Gazetteer;
use crate::model::AdministrativeNode;
use std::fs::File;
#[cfg(feature = "compact")]
use std::io::BufRead;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// First two bytes of every gzip stream.
#[cfg(feature = "compact")]
const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

impl Gazetteer {
    /// Directory holding the bundled dataset, next to this crate's manifest.
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    pub fn default_dataset_filename() -> &'static str {
        "reg.json"
    }

    /// Parses a JSON document held in memory.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let regions: Vec<AdministrativeNode> = serde_json::from_str(json)?;
        Ok(Self::new(regions))
    }

    /// Parses a JSON document from any reader (no decompression).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let regions: Vec<AdministrativeNode> = serde_json::from_reader(reader)?;
        Ok(Self::new(regions))
    }

    /// Loads a dataset file, plain or gzip-compressed.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let reader = open_stream(path)?;
        let db = Self::from_reader(reader)?;
        info!(
            path = %path.display(),
            regions = db.regions().len(),
            "loaded administrative tree"
        );
        Ok(db)
    }

    /// Like [`Gazetteer::load_from_path`], but any failure yields an empty
    /// gazetteer. Searches over it simply return nothing.
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        Self::load_from_path(path).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "could not load dataset, continuing with an empty tree");
            Self::default()
        })
    }
}

/// Opens a file, buffers it, and wraps it in a gzip decoder when the content
/// starts with the gzip magic bytes.
fn open_stream(path: &Path) -> Result<Box<dyn Read>> {
    let file = File::open(path).map_err(|e| {
        FokoError::NotFound(format!("Dataset not found at {}: {}", path.display(), e))
    })?;

    #[allow(unused_mut)]
    let mut reader = BufReader::new(file);

    #[cfg(feature = "compact")]
    {
        if reader.fill_buf()?.starts_with(&GZIP_MAGIC) {
            use flate2::bufread::GzDecoder;
            return Ok(Box::new(GzDecoder::new(reader)));
        }
    }

    Ok(Box::new(reader))
}
