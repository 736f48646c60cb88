// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::airport::Airport;
use crate::db::AirportDb;
use crate::error::{AirportError, Result};
use serde::Serialize;

/// Mean Earth radius used for every distance in this crate.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

pub const DEFAULT_RADIUS_KM: f64 = 100.0;

/// Great-circle distance in kilometres (haversine).
pub fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_KM * c
}

pub fn validate_point(lat: f64, lon: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&lat) {
        return Err(AirportError::invalid(
            lat.to_string(),
            "a latitude between -90 and 90 degrees",
        ));
    }
    if !(-180.0..=180.0).contains(&lon) {
        return Err(AirportError::invalid(
            lon.to_string(),
            "a longitude between -180 and 180 degrees",
        ));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearbyAirport {
    #[serde(flatten)]
    pub airport: Airport,
    pub distance_km: f64,
}

impl AirportDb {
    /// Airports within `radius_km` of the point, nearest first. Records with
    /// no usable coordinates are skipped; ties keep dataset order.
    pub fn find_nearby(&self, lat: f64, lon: f64, radius_km: f64) -> Result<Vec<NearbyAirport>> {
        validate_point(lat, lon)?;
        if !radius_km.is_finite() || radius_km < 0.0 {
            return Err(AirportError::invalid(
                radius_km.to_string(),
                "a finite, non-negative radius in kilometres",
            ));
        }

        let mut found: Vec<NearbyAirport> = self
            .dataset()
            .iter()
            .filter_map(|apt| {
                let (a_lat, a_lon) = apt.coordinates()?;
                let distance_km = haversine_km(lat, lon, a_lat, a_lon);
                (distance_km <= radius_km).then(|| NearbyAirport {
                    airport: apt.clone(),
                    distance_km,
                })
            })
            .collect();
        // Stable sort: equal distances stay in dataset order.
        found.sort_by(|a, b| a.distance_km.total_cmp(&b.distance_km));

        log::debug!(
            "find_nearby — lat={} lon={} radius_km={} found={}",
            lat,
            lon,
            radius_km,
            found.len()
        );
        Ok(found)
    }

    /// Distance in km between two airports given by IATA or ICAO code.
    /// Each code resolves to its first match in dataset order.
    pub fn calculate_distance(&self, code1: &str, code2: &str) -> Result<f64> {
        let (lat1, lon1) = self.coordinates_of(code1)?;
        let (lat2, lon2) = self.coordinates_of(code2)?;
        Ok(haversine_km(lat1, lon1, lat2, lon2))
    }

    fn coordinates_of(&self, code: &str) -> Result<(f64, f64)> {
        let apt = self.by_code(code)?;
        apt.coordinates().ok_or_else(|| {
            AirportError::invalid(
                code,
                "an airport with usable coordinates (this record has none)",
            )
        })
    }
}
