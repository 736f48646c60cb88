// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! Read-only lookup and filtering over a bundled world airport dataset.
//!
//! Build a [`Dataset`] once (from a `.gz`/`.json` file, bytes, or records),
//! wrap it in an [`AirportDb`] and query it. [`DatasetCell`] covers the
//! load-on-first-use case and remembers a failed load.

pub mod airport;
pub mod codes;
pub mod dataset;
pub mod db;
pub mod error;
pub mod filter;
pub mod geo;
pub mod links;

pub use airport::{Airport, AirportType, Continent, TypeQuery};
pub use dataset::{DataSource, Dataset, DatasetCell, DatasetStats};
pub use db::{AirportDb, DEFAULT_AUTOCOMPLETE_LIMIT, MIN_QUERY_LEN};
pub use error::{AirportError, DataLoadError, Result};
pub use filter::AirportFilter;
pub use geo::{haversine_km, NearbyAirport, DEFAULT_RADIUS_KM, EARTH_RADIUS_KM};
pub use links::AirportLinks;
