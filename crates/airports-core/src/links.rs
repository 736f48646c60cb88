// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::airport::Airport;
use crate::db::AirportDb;
use crate::error::Result;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AirportLinks {
    pub website: Option<String>,
    pub wikipedia: Option<String>,
    pub flightradar24: Option<String>,
    pub radarbox: Option<String>,
    pub flightaware: Option<String>,
}

impl AirportLinks {
    /// Stored URLs take precedence; tracker links fall back to templates
    /// built from the airport's codes.
    pub fn for_airport(apt: &Airport) -> Self {
        Self {
            website: apt.website.clone(),
            wikipedia: apt.wikipedia.clone(),
            flightradar24: stored_or(&apt.flightradar24_url, &apt.iata, |iata| {
                format!("https://www.flightradar24.com/airport/{}", iata)
            }),
            radarbox: stored_or(&apt.radarbox_url, &apt.icao, |icao| {
                format!("https://www.radarbox.com/airport/{}", icao)
            }),
            flightaware: stored_or(&apt.flightaware_url, &apt.icao, |icao| {
                format!("https://www.flightaware.com/live/airport/{}", icao)
            }),
        }
    }
}

fn stored_or(
    stored: &Option<String>,
    code: &str,
    template: impl Fn(&str) -> String,
) -> Option<String> {
    match stored {
        Some(url) => Some(url.clone()),
        None if !code.trim().is_empty() => Some(template(code.trim())),
        None => None,
    }
}

impl AirportDb {
    /// External links for the first airport matching an IATA or ICAO code.
    pub fn get_links(&self, code: &str) -> Result<AirportLinks> {
        self.by_code(code).map(|apt| AirportLinks::for_airport(&apt))
    }
}
