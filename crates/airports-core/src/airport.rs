// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::error::AirportError;
use serde::de::Deserializer;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// One airport entry as stored in the dataset.
///
/// Field names on the wire follow the bundled `airports.gz` file (`airport`
/// for the display name, `time` for the IANA zone, `elevation_ft`). Numeric
/// and boolean fields are decoded leniently: blank or malformed values become
/// `None` instead of failing the whole load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Airport {
    #[serde(default, deserialize_with = "text_or_empty")]
    pub iata: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub icao: String,
    #[serde(rename = "airport", alias = "name", default, deserialize_with = "text_or_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub city_code: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub country_code: String,
    #[serde(default, deserialize_with = "text_or_empty")]
    pub continent: String,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub latitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub longitude: Option<f64>,
    #[serde(
        rename = "elevation_ft",
        alias = "elevation",
        default,
        deserialize_with = "lenient_i64"
    )]
    pub elevation_ft: Option<i64>,
    #[serde(rename = "type", default)]
    pub airport_type: AirportType,
    #[serde(rename = "time", alias = "timezone", default, deserialize_with = "text_or_empty")]
    pub timezone: String,
    /// UTC offset in hours.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub utc: Option<f64>,
    #[serde(default, deserialize_with = "lenient_bool")]
    pub scheduled_service: Option<bool>,
    #[serde(default, deserialize_with = "lenient_i64")]
    pub runway_length: Option<i64>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub wikipedia: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub website: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub flightradar24_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub radarbox_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub flightaware_url: Option<String>,
}

impl Airport {
    /// Latitude/longitude pair, only when both are present and in range.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon))
                if (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon) =>
            {
                Some((lat, lon))
            }
            _ => None,
        }
    }

    pub fn has_scheduled_service(&self) -> bool {
        self.scheduled_service.unwrap_or(false)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum AirportType {
    LargeAirport,
    MediumAirport,
    SmallAirport,
    Heliport,
    SeaplaneBase,
    BalloonPort,
    Closed,
    /// Any value the dataset carries that is not one of the known kinds.
    Other(String),
    #[default]
    Unknown,
}

impl AirportType {
    /// Known kinds, in the order they are listed to users.
    pub const KNOWN: [AirportType; 7] = [
        AirportType::LargeAirport,
        AirportType::MediumAirport,
        AirportType::SmallAirport,
        AirportType::Heliport,
        AirportType::SeaplaneBase,
        AirportType::BalloonPort,
        AirportType::Closed,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            AirportType::LargeAirport => "large_airport",
            AirportType::MediumAirport => "medium_airport",
            AirportType::SmallAirport => "small_airport",
            AirportType::Heliport => "heliport",
            AirportType::SeaplaneBase => "seaplane_base",
            AirportType::BalloonPort => "balloonport",
            AirportType::Closed => "closed",
            AirportType::Other(raw) => raw,
            AirportType::Unknown => "",
        }
    }

    /// Case-insensitive match against the known kinds only.
    pub fn from_token(token: &str) -> Option<Self> {
        let token = token.trim().to_ascii_lowercase();
        Self::KNOWN.into_iter().find(|t| t.as_str() == token)
    }

    /// Large, medium and small airports; the set the `airport` alias expands to.
    pub fn is_airport(&self) -> bool {
        matches!(
            self,
            AirportType::LargeAirport | AirportType::MediumAirport | AirportType::SmallAirport
        )
    }

    /// Stored kinds are trimmed and matched case-insensitively, so a stored
    /// `"LARGE_AIRPORT"` reads back and serialises as `"large_airport"`.
    /// Unrecognised kinds keep their raw text.
    fn from_stored(raw: String) -> Self {
        if raw.is_empty() {
            return AirportType::Unknown;
        }
        Self::from_token(&raw).unwrap_or(AirportType::Other(raw))
    }
}

impl fmt::Display for AirportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for AirportType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for AirportType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        text_or_empty(deserializer).map(AirportType::from_stored)
    }
}

/// A type selector as accepted by `by_type` and the composite filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TypeQuery {
    Exact(AirportType),
    /// The bare `airport` token: any of large, medium or small airports.
    AnyAirport,
}

impl TypeQuery {
    pub fn matches(&self, airport_type: &AirportType) -> bool {
        match self {
            TypeQuery::Exact(t) => t == airport_type,
            TypeQuery::AnyAirport => airport_type.is_airport(),
        }
    }
}

impl FromStr for TypeQuery {
    type Err = AirportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.eq_ignore_ascii_case("airport") {
            return Ok(TypeQuery::AnyAirport);
        }
        AirportType::from_token(token)
            .map(TypeQuery::Exact)
            .ok_or_else(|| {
                let mut known: Vec<&str> = AirportType::KNOWN.iter().map(|t| t.as_str()).collect();
                known.push("airport");
                AirportError::invalid(s, format!("an airport type, one of: {}", known.join(", ")))
            })
    }
}

impl TryFrom<String> for TypeQuery {
    type Error = AirportError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TypeQuery> for String {
    fn from(query: TypeQuery) -> Self {
        match query {
            TypeQuery::Exact(t) => t.as_str().to_string(),
            TypeQuery::AnyAirport => "airport".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Continent {
    Asia,
    Europe,
    NorthAmerica,
    SouthAmerica,
    Africa,
    Oceania,
    Antarctica,
}

impl Continent {
    pub const ALL: [Continent; 7] = [
        Continent::Asia,
        Continent::Europe,
        Continent::NorthAmerica,
        Continent::SouthAmerica,
        Continent::Africa,
        Continent::Oceania,
        Continent::Antarctica,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Continent::Asia => "AS",
            Continent::Europe => "EU",
            Continent::NorthAmerica => "NA",
            Continent::SouthAmerica => "SA",
            Continent::Africa => "AF",
            Continent::Oceania => "OC",
            Continent::Antarctica => "AN",
        }
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Continent {
    type Err = AirportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_ascii_uppercase();
        Self::ALL
            .into_iter()
            .find(|c| c.code() == code)
            .ok_or_else(|| {
                AirportError::invalid(s, "a continent code, one of: AS, EU, NA, SA, AF, OC, AN")
            })
    }
}

impl TryFrom<String> for Continent {
    type Error = AirportError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Continent> for String {
    fn from(continent: Continent) -> Self {
        continent.code().to_string()
    }
}

// --- Lenient field decoding ---

#[derive(Deserialize)]
#[serde(untagged)]
enum Loose {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Other(serde::de::IgnoredAny),
}

fn text_or_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Option::<Loose>::deserialize(deserializer)? {
        Some(Loose::Text(s)) => s,
        Some(Loose::Int(i)) => i.to_string(),
        Some(Loose::Float(f)) => f.to_string(),
        Some(Loose::Bool(_)) | Some(Loose::Other(_)) | None => String::new(),
    })
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Option::<Loose>::deserialize(deserializer)? {
        Some(Loose::Text(s)) if !s.trim().is_empty() => Some(s),
        _ => None,
    })
}

fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    let value = match Option::<Loose>::deserialize(deserializer)? {
        Some(Loose::Int(i)) => Some(i as f64),
        Some(Loose::Float(f)) => Some(f),
        Some(Loose::Text(s)) => s.trim().parse::<f64>().ok(),
        Some(Loose::Bool(_)) | Some(Loose::Other(_)) | None => None,
    };
    Ok(value.filter(|v| v.is_finite()))
}

fn lenient_i64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
    Ok(match Option::<Loose>::deserialize(deserializer)? {
        Some(Loose::Int(i)) => Some(i),
        Some(Loose::Float(f)) if f.is_finite() => Some(f.round() as i64),
        Some(Loose::Text(s)) => {
            let s = s.trim();
            s.parse::<i64>().ok().or_else(|| {
                s.parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite())
                    .map(|f| f.round() as i64)
            })
        }
        _ => None,
    })
}

fn lenient_bool<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<bool>, D::Error> {
    Ok(match Option::<Loose>::deserialize(deserializer)? {
        Some(Loose::Bool(b)) => Some(b),
        Some(Loose::Int(1)) => Some(true),
        Some(Loose::Int(0)) => Some(false),
        Some(Loose::Text(s)) => match s.trim().to_ascii_lowercase().as_str() {
            "yes" | "true" | "1" => Some(true),
            "no" | "false" | "0" => Some(false),
            _ => None,
        },
        _ => None,
    })
}
