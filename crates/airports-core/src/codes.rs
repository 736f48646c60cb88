// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! Normalisation and shape checks for the code-style inputs.

use crate::error::{AirportError, Result};
use regex::Regex;
use std::sync::OnceLock;

/// Trims and upper-cases a code-style input.
pub fn normalize(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

pub fn is_iata_shape(code: &str) -> bool {
    static RE_IATA: OnceLock<Regex> = OnceLock::new();
    let re = RE_IATA.get_or_init(|| Regex::new(r"^[A-Z]{3}$").expect("static IATA pattern"));
    re.is_match(code)
}

pub fn is_icao_shape(code: &str) -> bool {
    static RE_ICAO: OnceLock<Regex> = OnceLock::new();
    let re = RE_ICAO.get_or_init(|| Regex::new(r"^[A-Z]{4}$").expect("static ICAO pattern"));
    re.is_match(code)
}

pub fn iata(code: &str) -> Result<String> {
    let normalized = normalize(code);
    if is_iata_shape(&normalized) {
        Ok(normalized)
    } else {
        Err(AirportError::invalid(code, "a 3-letter IATA code, e.g. 'LHR'"))
    }
}

pub fn icao(code: &str) -> Result<String> {
    let normalized = normalize(code);
    if is_icao_shape(&normalized) {
        Ok(normalized)
    } else {
        Err(AirportError::invalid(code, "a 4-letter ICAO code, e.g. 'EGLL'"))
    }
}

/// City and country codes: any non-empty run of ASCII letters or digits.
pub fn region(code: &str, what: &str) -> Result<String> {
    let normalized = normalize(code);
    if !normalized.is_empty() && normalized.chars().all(|c| c.is_ascii_alphanumeric()) {
        Ok(normalized)
    } else {
        Err(AirportError::invalid(code, format!("a non-empty alphanumeric {}", what)))
    }
}

/// Which lookup a single-airport code resolves through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AirportCode {
    Iata(String),
    Icao(String),
}

impl AirportCode {
    /// IATA shape is tried first, then ICAO.
    pub fn parse(code: &str) -> Result<Self> {
        let normalized = normalize(code);
        if is_iata_shape(&normalized) {
            Ok(AirportCode::Iata(normalized))
        } else if is_icao_shape(&normalized) {
            Ok(AirportCode::Icao(normalized))
        } else {
            Err(AirportError::invalid(
                code,
                "a 3-letter IATA or 4-letter ICAO code, e.g. 'LHR' or 'EGLL'",
            ))
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            AirportCode::Iata(c) | AirportCode::Icao(c) => c,
        }
    }
}
