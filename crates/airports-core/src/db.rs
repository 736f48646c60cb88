// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::airport::{Airport, Continent, TypeQuery};
use crate::codes::{self, AirportCode};
use crate::dataset::{Dataset, DatasetCell};
use crate::error::{AirportError, Result};
use std::path::Path;
use std::sync::Arc;

/// Minimum query length for name search and autocomplete.
pub const MIN_QUERY_LEN: usize = 2;

pub const DEFAULT_AUTOCOMPLETE_LIMIT: usize = 10;

/// Read-only query handle over a shared `Dataset`.
///
/// Every query scans or indexes the same immutable table and returns owned
/// copies of the matching records.
#[derive(Debug, Clone)]
pub struct AirportDb {
    dataset: Arc<Dataset>,
}

impl AirportDb {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self { dataset }
    }

    pub fn from_records(airports: Vec<Airport>) -> Self {
        Self::new(Arc::new(Dataset::from_records(airports)))
    }

    /// Loads a `.gz` or plain `.json` dataset file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(Arc::new(Dataset::from_path(path)?)))
    }

    pub fn from_cell(cell: &DatasetCell) -> Result<Self> {
        Ok(Self::new(cell.get()?))
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn by_iata(&self, code: &str) -> Result<Vec<Airport>> {
        let code = codes::iata(code)?;
        non_empty(
            self.dataset.by_iata_index(&code).cloned().collect(),
            "IATA code",
            &code,
        )
    }

    pub fn by_icao(&self, code: &str) -> Result<Vec<Airport>> {
        let code = codes::icao(code)?;
        non_empty(
            self.dataset.by_icao_index(&code).cloned().collect(),
            "ICAO code",
            &code,
        )
    }

    pub fn by_city_code(&self, code: &str) -> Result<Vec<Airport>> {
        let code = codes::region(code, "city code")?;
        non_empty(self.filter(|a| a.city_code == code), "city code", &code)
    }

    pub fn by_country_code(&self, code: &str) -> Result<Vec<Airport>> {
        let code = codes::region(code, "country code")?;
        non_empty(
            self.dataset.by_country_index(&code).cloned().collect(),
            "country code",
            &code,
        )
    }

    pub fn by_continent(&self, code: &str) -> Result<Vec<Airport>> {
        let continent: Continent = code.parse()?;
        non_empty(
            self.filter(|a| a.continent == continent.code()),
            "continent",
            continent.code(),
        )
    }

    /// First record, in dataset order, for an IATA-shaped or ICAO-shaped code.
    pub fn by_code(&self, code: &str) -> Result<Airport> {
        let parsed = AirportCode::parse(code)?;
        let found = match &parsed {
            AirportCode::Iata(c) => self.dataset.by_iata_index(c).next(),
            AirportCode::Icao(c) => self.dataset.by_icao_index(c).next(),
        };
        found.cloned().ok_or_else(|| {
            let field = match parsed {
                AirportCode::Iata(_) => "IATA code",
                AirportCode::Icao(_) => "ICAO code",
            };
            AirportError::not_found(field, parsed.as_str())
        })
    }

    /// Case-insensitive substring match on the airport name.
    pub fn search_by_name(&self, query: &str) -> Result<Vec<Airport>> {
        let needle = search_needle(query).ok_or_else(|| {
            AirportError::invalid(
                query,
                format!("a name query of at least {} characters", MIN_QUERY_LEN),
            )
        })?;
        non_empty(
            self.filter(|a| a.name.to_lowercase().contains(&needle)),
            "name containing",
            query.trim(),
        )
    }

    /// Up to `limit` records whose name or IATA code contains `query`.
    /// Short queries and zero matches both give an empty list.
    pub fn autocomplete(&self, query: &str, limit: usize) -> Vec<Airport> {
        let Some(needle) = search_needle(query) else {
            return Vec::new();
        };
        self.dataset
            .iter()
            .filter(|a| {
                a.name.to_lowercase().contains(&needle) || a.iata.to_lowercase().contains(&needle)
            })
            .take(limit)
            .cloned()
            .collect()
    }

    pub fn by_type(&self, type_name: &str) -> Result<Vec<Airport>> {
        let query: TypeQuery = type_name.parse()?;
        non_empty(
            self.filter(|a| query.matches(&a.airport_type)),
            "type",
            type_name.trim(),
        )
    }

    /// Exact, case-sensitive match on the IANA zone name.
    pub fn by_timezone(&self, tz_name: &str) -> Result<Vec<Airport>> {
        let tz = tz_name.trim();
        if tz.is_empty() {
            return Err(AirportError::invalid(
                tz_name,
                "a non-empty IANA timezone name, e.g. 'Europe/London'",
            ));
        }
        non_empty(self.filter(|a| a.timezone == tz), "timezone", tz)
    }

    pub(crate) fn filter<F>(&self, predicate: F) -> Vec<Airport>
    where
        F: Fn(&Airport) -> bool,
    {
        self.dataset
            .iter()
            .filter(|a| predicate(a))
            .cloned()
            .collect()
    }
}

fn search_needle(query: &str) -> Option<String> {
    let q = query.trim();
    if q.chars().count() < MIN_QUERY_LEN {
        None
    } else {
        Some(q.to_lowercase())
    }
}

fn non_empty(found: Vec<Airport>, field: &'static str, value: &str) -> Result<Vec<Airport>> {
    if found.is_empty() {
        Err(AirportError::not_found(field, value))
    } else {
        Ok(found)
    }
}
