// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

#![allow(dead_code)]

use airports_core::{AirportDb, Dataset};
use flate2::write::GzEncoder;
use flate2::Compression;
use simplelog::{Config, LevelFilter, TestLogger};
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

/// Small slice of the real dataset, string-encoded the way `airports.gz` is.
pub const FIXTURE: &str = r#"[
  {"iata": "SIN", "icao": "WSSS", "time": "Asia/Singapore", "utc": 8.0, "country_code": "SG",
   "continent": "AS", "city_code": "SIN", "airport": "Singapore Changi Airport",
   "latitude": "1.35019", "longitude": "103.994003", "elevation_ft": "22",
   "type": "large_airport", "scheduled_service": "yes",
   "wikipedia": "https://en.wikipedia.org/wiki/Singapore_Changi_Airport",
   "website": "https://www.changiairport.com", "runway_length": "13123"},
  {"iata": "LHR", "icao": "EGLL", "time": "Europe/London", "utc": 0.0, "country_code": "GB",
   "continent": "EU", "city_code": "LON", "airport": "London Heathrow Airport",
   "latitude": "51.4775", "longitude": "-0.4614", "elevation_ft": "83",
   "type": "large_airport", "scheduled_service": "yes",
   "wikipedia": "https://en.wikipedia.org/wiki/Heathrow_Airport", "website": "",
   "runway_length": "12799"},
  {"iata": "LGW", "icao": "EGKK", "time": "Europe/London", "utc": 0.0, "country_code": "GB",
   "continent": "EU", "city_code": "LON", "airport": "London Gatwick Airport",
   "latitude": "51.148102", "longitude": "-0.190278", "elevation_ft": "202",
   "type": "large_airport", "scheduled_service": "yes", "runway_length": "10879"},
  {"iata": "LCY", "icao": "EGLC", "time": "Europe/London", "utc": 0.0, "country_code": "GB",
   "continent": "EU", "city_code": "LON", "airport": "London City Airport",
   "latitude": "51.505299", "longitude": "0.055278", "elevation_ft": "19",
   "type": "medium_airport", "scheduled_service": "yes", "runway_length": "4948"},
  {"iata": "", "icao": "EGLW", "time": "Europe/London", "utc": 0.0, "country_code": "GB",
   "continent": "EU", "city_code": "", "airport": "London Heliport",
   "latitude": "51.470001", "longitude": "-0.179722", "elevation_ft": "18",
   "type": "heliport", "scheduled_service": "no", "runway_length": ""},
  {"iata": "JFK", "icao": "KJFK", "time": "America/New_York", "utc": -5.0, "country_code": "US",
   "continent": "NA", "city_code": "NYC", "airport": "John F Kennedy International Airport",
   "latitude": "40.639751", "longitude": "-73.778925", "elevation_ft": "13",
   "type": "large_airport", "scheduled_service": "yes", "runway_length": "14511"},
  {"iata": "", "icao": "", "time": "America/Anchorage", "utc": -9.0, "country_code": "US",
   "continent": "NA", "city_code": "", "airport": "Lake Hood Seaplane Base",
   "latitude": "61.18", "longitude": "-149.972", "elevation_ft": "71",
   "type": "seaplane_base", "scheduled_service": "no", "runway_length": "0"},
  {"iata": "XGH", "icao": "XXGH", "time": "Europe/London", "utc": 0.0, "country_code": "GB",
   "continent": "EU", "city_code": "XGH", "airport": "Ghost Field",
   "latitude": "", "longitude": "n/a", "type": "small_airport",
   "scheduled_service": "no", "runway_length": "bad"},
  {"iata": "LHR", "icao": "", "time": "Europe/London", "utc": 0.0, "country_code": "GB",
   "continent": "EU", "city_code": "LON", "airport": "Heathrow Duplicate Entry",
   "latitude": "51.4775", "longitude": "-0.4614", "type": "small_airport",
   "scheduled_service": "no", "runway_length": "2000"}
]"#;

pub fn init_logging() {
    // Errors when another test in this binary got there first.
    let _ = TestLogger::init(LevelFilter::Debug, Config::default());
}

pub fn fixture_db() -> AirportDb {
    init_logging();
    AirportDb::new(std::sync::Arc::new(
        Dataset::from_bytes(FIXTURE.as_bytes()).expect("fixture parses"),
    ))
}

pub fn gzip(data: &[u8]) -> Vec<u8> {
    let mut enc = GzEncoder::new(Vec::new(), Compression::best());
    enc.write_all(data).unwrap();
    enc.finish().unwrap()
}

/// Writes the fixture as `airports.gz` in a fresh temp dir.
pub fn fixture_gz() -> (TempDir, PathBuf) {
    init_logging();
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("airports.gz");
    std::fs::write(&path, gzip(FIXTURE.as_bytes())).unwrap();
    (dir, path)
}
