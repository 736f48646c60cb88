// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::airport::{Airport, Continent, TypeQuery};
use crate::codes;
use crate::db::AirportDb;
use crate::error::{AirportError, Result};
use serde::{Deserialize, Serialize};

/// Keys accepted by `AirportFilter::set` and the JSON form.
pub const FILTER_KEYS: [&str; 6] = [
    "country_code",
    "continent",
    "type",
    "has_scheduled_service",
    "min_runway_ft",
    "timezone",
];

/// Criteria for `AirportDb::find_airports`. Every field that is set must
/// match (logical AND).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AirportFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continent: Option<Continent>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub airport_type: Option<TypeQuery>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_scheduled_service: Option<bool>,
    /// Records with no runway length never pass this threshold.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_runway_ft: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

impl AirportFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON object; unknown keys and ill-typed values are rejected here.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| {
            AirportError::invalid(
                json,
                format!(
                    "a filter object using only the keys {} ({})",
                    FILTER_KEYS.join(", "),
                    e
                ),
            )
        })
    }

    /// Sets one criterion from its textual key and value.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key.trim() {
            "country_code" => self.country_code = Some(codes::region(value, "country code")?),
            "continent" => self.continent = Some(value.parse()?),
            "type" => self.airport_type = Some(value.parse()?),
            "has_scheduled_service" => {
                self.has_scheduled_service = Some(parse_flag(value)?);
            }
            "min_runway_ft" => {
                let ft = value.trim().parse::<i64>().map_err(|_| {
                    AirportError::invalid(value, "a whole number of feet for min_runway_ft")
                })?;
                self.min_runway_ft = Some(ft);
            }
            "timezone" => self.timezone = Some(value.trim().to_string()),
            other => {
                return Err(AirportError::invalid(
                    other,
                    format!("a filter key, one of: {}", FILTER_KEYS.join(", ")),
                ))
            }
        }
        Ok(())
    }

    pub fn country_code(mut self, code: impl Into<String>) -> Self {
        self.country_code = Some(code.into());
        self
    }

    pub fn continent(mut self, continent: Continent) -> Self {
        self.continent = Some(continent);
        self
    }

    pub fn airport_type(mut self, query: TypeQuery) -> Self {
        self.airport_type = Some(query);
        self
    }

    pub fn has_scheduled_service(mut self, flag: bool) -> Self {
        self.has_scheduled_service = Some(flag);
        self
    }

    pub fn min_runway_ft(mut self, ft: i64) -> Self {
        self.min_runway_ft = Some(ft);
        self
    }

    pub fn timezone(mut self, tz: impl Into<String>) -> Self {
        self.timezone = Some(tz.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Validated copy with codes upper-cased and the zone trimmed.
    fn normalized(&self) -> Result<Self> {
        let country_code = match &self.country_code {
            Some(c) => Some(codes::region(c, "country code")?),
            None => None,
        };
        let timezone = match &self.timezone {
            Some(tz) if tz.trim().is_empty() => {
                return Err(AirportError::invalid(tz.as_str(), "a non-empty IANA timezone name"))
            }
            Some(tz) => Some(tz.trim().to_string()),
            None => None,
        };
        Ok(Self {
            country_code,
            timezone,
            ..self.clone()
        })
    }

    pub fn matches(&self, apt: &Airport) -> bool {
        if let Some(code) = &self.country_code {
            if &apt.country_code != code {
                return false;
            }
        }
        if let Some(continent) = self.continent {
            if apt.continent != continent.code() {
                return false;
            }
        }
        if let Some(query) = &self.airport_type {
            if !query.matches(&apt.airport_type) {
                return false;
            }
        }
        if let Some(flag) = self.has_scheduled_service {
            if apt.has_scheduled_service() != flag {
                return false;
            }
        }
        if let Some(min) = self.min_runway_ft {
            match apt.runway_length {
                Some(len) if len >= min => {}
                _ => return false,
            }
        }
        if let Some(tz) = &self.timezone {
            if &apt.timezone != tz {
                return false;
            }
        }
        true
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Ok(true),
        "false" | "no" | "0" => Ok(false),
        _ => Err(AirportError::invalid(value, "true or false for has_scheduled_service")),
    }
}

impl AirportDb {
    /// Records matching every criterion of `filter`, in dataset order.
    /// An empty filter is rejected; no matches is an empty list.
    pub fn find_airports(&self, filter: &AirportFilter) -> Result<Vec<Airport>> {
        if filter.is_empty() {
            return Err(AirportError::invalid(
                "{}",
                format!("at least one filter, from: {}", FILTER_KEYS.join(", ")),
            ));
        }
        let filter = filter.normalized()?;
        Ok(self.filter(|a| filter.matches(a)))
    }
}
