// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::airport::{Airport, Continent};
use crate::error::DataLoadError;
use flate2::read::GzDecoder;
use log::{debug, error, warn};
use serde::Serialize;
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// The immutable, ordered airport table plus lookup indexes built from it.
#[derive(Debug)]
pub struct Dataset {
    airports: Vec<Airport>,
    // Positions into `airports`, ascending, so indexed lookups keep dataset order.
    iata_index: HashMap<String, Vec<usize>>,
    icao_index: HashMap<String, Vec<usize>>,
    country_index: HashMap<String, Vec<usize>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatasetStats {
    pub airports: usize,
    pub with_coordinates: usize,
    pub with_scheduled_service: usize,
    pub countries: usize,
    pub by_continent: BTreeMap<String, usize>,
}

impl Dataset {
    pub fn from_records(airports: Vec<Airport>) -> Self {
        let mut iata_index: HashMap<String, Vec<usize>> = HashMap::new();
        let mut icao_index: HashMap<String, Vec<usize>> = HashMap::new();
        let mut country_index: HashMap<String, Vec<usize>> = HashMap::new();

        for (i, apt) in airports.iter().enumerate() {
            if !apt.iata.is_empty() {
                iata_index.entry(apt.iata.clone()).or_default().push(i);
            }
            if !apt.icao.is_empty() {
                icao_index.entry(apt.icao.clone()).or_default().push(i);
            }
            if !apt.country_code.is_empty() {
                country_index
                    .entry(apt.country_code.clone())
                    .or_default()
                    .push(i);
            }
        }

        let missing_coords = airports.iter().filter(|a| a.coordinates().is_none()).count();
        if missing_coords > 0 {
            warn!(
                "Airport records without usable coordinates will be skipped by geographic queries — count={}",
                missing_coords
            );
        }
        debug!(
            "Built airport dataset — airports={} iata_keys={} icao_keys={} countries={}",
            airports.len(),
            iata_index.len(),
            icao_index.len(),
            country_index.len()
        );

        Self {
            airports,
            iata_index,
            icao_index,
            country_index,
        }
    }

    /// Parses an uncompressed JSON array of airport records.
    pub fn from_json_reader<R: Read>(mut reader: R) -> Result<Self, DataLoadError> {
        let mut buf = Vec::new();
        reader
            .read_to_end(&mut buf)
            .map_err(|e| DataLoadError::Io {
                path: "<reader>".to_string(),
                message: e.to_string(),
            })?;
        Self::from_json_slice(&buf)
    }

    /// Decompresses a gzip stream holding the JSON array.
    pub fn from_gz_reader<R: Read>(reader: R) -> Result<Self, DataLoadError> {
        let mut decoder = GzDecoder::new(reader);
        let mut json = Vec::new();
        decoder
            .read_to_end(&mut json)
            .map_err(|e| DataLoadError::Decompress(e.to_string()))?;
        debug!("Decompressed airport dataset — uncompressed_bytes={}", json.len());
        Self::from_json_slice(&json)
    }

    /// Accepts either gzip or plain JSON, told apart by the gzip magic bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DataLoadError> {
        if bytes.starts_with(&GZIP_MAGIC) {
            Self::from_gz_reader(bytes)
        } else {
            Self::from_json_slice(bytes)
        }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DataLoadError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(DataLoadError::Missing(vec![path.to_path_buf()]));
        }
        let bytes = fs::read(path).map_err(|e| DataLoadError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        debug!(
            "Read airport dataset — path={} bytes={}",
            path.display(),
            bytes.len()
        );
        Self::from_bytes(&bytes)
    }

    fn from_json_slice(json: &[u8]) -> Result<Self, DataLoadError> {
        let airports: Vec<Airport> =
            serde_json::from_slice(json).map_err(|e| DataLoadError::Malformed(e.to_string()))?;
        Ok(Self::from_records(airports))
    }

    pub fn airports(&self) -> &[Airport] {
        &self.airports
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Airport> {
        self.airports.iter()
    }

    pub fn len(&self) -> usize {
        self.airports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }

    pub(crate) fn by_iata_index(&self, code: &str) -> impl Iterator<Item = &Airport> {
        self.indexed(&self.iata_index, code)
    }

    pub(crate) fn by_icao_index(&self, code: &str) -> impl Iterator<Item = &Airport> {
        self.indexed(&self.icao_index, code)
    }

    pub(crate) fn by_country_index(&self, code: &str) -> impl Iterator<Item = &Airport> {
        self.indexed(&self.country_index, code)
    }

    fn indexed<'a>(
        &'a self,
        index: &'a HashMap<String, Vec<usize>>,
        key: &str,
    ) -> impl Iterator<Item = &'a Airport> + 'a {
        index
            .get(key)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(move |&i| &self.airports[i])
    }

    pub fn stats(&self) -> DatasetStats {
        let mut by_continent: BTreeMap<String, usize> = Continent::ALL
            .iter()
            .map(|c| (c.code().to_string(), 0))
            .collect();
        for apt in &self.airports {
            if !apt.continent.is_empty() {
                *by_continent.entry(apt.continent.clone()).or_default() += 1;
            }
        }

        DatasetStats {
            airports: self.airports.len(),
            with_coordinates: self
                .airports
                .iter()
                .filter(|a| a.coordinates().is_some())
                .count(),
            with_scheduled_service: self
                .airports
                .iter()
                .filter(|a| a.has_scheduled_service())
                .count(),
            countries: self.country_index.len(),
            by_continent,
        }
    }
}

/// Where a `DatasetCell` gets its bytes from.
#[derive(Debug, Clone)]
pub enum DataSource {
    /// A `.gz` or `.json` file; the first existing candidate wins.
    Paths(Vec<PathBuf>),
    /// Bytes already in memory, e.g. from `include_bytes!`.
    Bytes(Cow<'static, [u8]>),
}

impl DataSource {
    pub fn path<P: Into<PathBuf>>(path: P) -> Self {
        DataSource::Paths(vec![path.into()])
    }

    fn load(&self) -> Result<Dataset, DataLoadError> {
        match self {
            DataSource::Paths(candidates) => match candidates.iter().find(|p| p.exists()) {
                Some(path) => Dataset::from_path(path),
                None => Err(DataLoadError::Missing(candidates.clone())),
            },
            DataSource::Bytes(bytes) => Dataset::from_bytes(bytes),
        }
    }
}

/// Builds a `Dataset` once, on first use, and hands out shared handles.
///
/// The outcome is cached either way: after a failed load every `get()`
/// returns the same `DataLoadError` without touching the source again.
/// Concurrent first calls block on the same initialisation.
pub struct DatasetCell {
    source: DataSource,
    cell: OnceLock<Result<Arc<Dataset>, DataLoadError>>,
}

impl DatasetCell {
    pub fn new(source: DataSource) -> Self {
        Self {
            source,
            cell: OnceLock::new(),
        }
    }

    /// Usable in a `static` over bundled bytes.
    pub const fn from_static(bytes: &'static [u8]) -> Self {
        Self {
            source: DataSource::Bytes(Cow::Borrowed(bytes)),
            cell: OnceLock::new(),
        }
    }

    pub fn get(&self) -> Result<Arc<Dataset>, DataLoadError> {
        self.cell
            .get_or_init(|| {
                self.source.load().map(Arc::new).map_err(|e| {
                    error!("Failed to load airport dataset: {}", e);
                    e
                })
            })
            .clone()
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.get().is_some()
    }
}
