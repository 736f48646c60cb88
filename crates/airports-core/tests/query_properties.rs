// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz
//
// Behavioural tests for the query engine against a small fixture table.
// Each query's results are checked against the backing dataset, and
// malformed input is checked to fail differently from input with no match.

mod common;

use airports_core::{
    Airport, AirportError, AirportFilter, AirportType, Continent, TypeQuery,
    DEFAULT_AUTOCOMPLETE_LIMIT,
};
use common::fixture_db;

fn codes(airports: &[Airport]) -> Vec<String> {
    airports
        .iter()
        .map(|a| {
            if a.iata.is_empty() {
                a.icao.clone()
            } else {
                a.iata.clone()
            }
        })
        .collect()
}

// =====================================================================
// Code lookups
// =====================================================================

#[test]
fn test_by_iata_every_record_matches_query() {
    let db = fixture_db();
    for code in ["SIN", "lhr", " jfk "] {
        let found = db.by_iata(code).unwrap();
        assert!(!found.is_empty());
        let normalized = code.trim().to_uppercase();
        assert!(found.iter().all(|a| a.iata == normalized), "{}", code);
    }
}

#[test]
fn test_duplicate_codes_return_all_records() {
    let found = fixture_db().by_iata("LHR").unwrap();
    assert_eq!(found.len(), 2);
    assert_eq!(found[0].name, "London Heathrow Airport");
    assert_eq!(found[1].name, "Heathrow Duplicate Entry");
}

#[test]
fn test_consistent_error_kinds() {
    let db = fixture_db();

    // Malformed input
    assert!(db.by_iata("AB").unwrap_err().is_invalid_input());
    assert!(db.by_icao("ABC").unwrap_err().is_invalid_input());
    assert!(db.by_continent("ASIA").unwrap_err().is_invalid_input());
    assert!(db.by_country_code("").unwrap_err().is_invalid_input());
    assert!(db.by_city_code("!").unwrap_err().is_invalid_input());

    // Well-formed, nothing there
    assert!(db.by_iata("ZZZ").unwrap_err().is_not_found());
    assert!(db.by_icao("ZZZZ").unwrap_err().is_not_found());
    assert!(db.by_country_code("ZZ").unwrap_err().is_not_found());
    assert!(db.by_city_code("QQQ").unwrap_err().is_not_found());
    assert!(db.by_continent("AN").unwrap_err().is_not_found());
}

#[test]
fn test_case_insensitive_codes() {
    let db = fixture_db();
    assert_eq!(db.by_iata("LHR").unwrap(), db.by_iata("lhr").unwrap());
    assert_eq!(db.by_icao("egll").unwrap(), db.by_icao("EGLL").unwrap());
    assert_eq!(
        db.by_country_code("gb").unwrap(),
        db.by_country_code("GB").unwrap()
    );
    assert_eq!(db.by_type("LARGE_AIRPORT").unwrap().len(), 4);
}

#[test]
fn test_region_lookups() {
    let db = fixture_db();
    assert_eq!(codes(&db.by_city_code("lon").unwrap()), vec!["LHR", "LGW", "LCY", "LHR"]);
    assert_eq!(db.by_country_code("US").unwrap().len(), 2);
    let na = db.by_continent("na").unwrap();
    assert_eq!(na.len(), 2);
    assert!(na.iter().all(|a| a.continent == "NA"));
}

// =====================================================================
// Name search / autocomplete
// =====================================================================

#[test]
fn test_search_by_name_short_queries_rejected() {
    let db = fixture_db();
    for q in ["", "L", " x ", "é"] {
        let err = db.search_by_name(q).unwrap_err();
        assert!(err.is_invalid_input(), "{:?} -> {:?}", q, err);
    }
}

#[test]
fn test_search_by_name_dataset_order() {
    let found = fixture_db().search_by_name("LONDON").unwrap();
    assert_eq!(codes(&found), vec!["LHR", "LGW", "LCY", "EGLW"]);
    assert!(fixture_db().search_by_name("Tokyo").unwrap_err().is_not_found());
}

#[test]
fn test_autocomplete_limits() {
    let db = fixture_db();
    let all = db.autocomplete("airport", DEFAULT_AUTOCOMPLETE_LIMIT);
    assert_eq!(codes(&all), vec!["SIN", "LHR", "LGW", "LCY", "JFK"]);
    assert!(all.len() <= DEFAULT_AUTOCOMPLETE_LIMIT);

    let three = db.autocomplete("airport", 3);
    assert_eq!(codes(&three), vec!["SIN", "LHR", "LGW"]);

    // IATA substring
    assert_eq!(codes(&db.autocomplete("jf", 10)), vec!["JFK"]);
    assert!(db.autocomplete("L", 10).is_empty());
    assert!(db.autocomplete("zzzz", 10).is_empty());
}

#[test]
fn test_autocomplete_caps_large_match_sets() {
    let records: Vec<Airport> = (0u8..15)
        .map(|i| {
            serde_json::from_value(serde_json::json!({
                "iata": format!("Q{}Q", (b'A' + i) as char),
                "airport": format!("Regional Airport {}", i),
            }))
            .unwrap()
        })
        .collect();
    let db = airports_core::AirportDb::from_records(records);

    let found = db.autocomplete("regional", DEFAULT_AUTOCOMPLETE_LIMIT);
    assert_eq!(found.len(), DEFAULT_AUTOCOMPLETE_LIMIT);
    assert_eq!(found[0].name, "Regional Airport 0");
    assert_eq!(found[9].name, "Regional Airport 9");
    assert_eq!(db.autocomplete("regional", 50).len(), 15);
}

// =====================================================================
// Type / timezone
// =====================================================================

#[test]
fn test_airport_alias_is_union_without_duplicates() {
    let db = fixture_db();
    let any = db.by_type("airport").unwrap();
    let large = db.by_type("large_airport").unwrap();
    let medium = db.by_type("medium_airport").unwrap();
    let small = db.by_type("small_airport").unwrap();

    assert_eq!(any.len(), large.len() + medium.len() + small.len());
    for apt in large.iter().chain(&medium).chain(&small) {
        assert_eq!(any.iter().filter(|a| *a == apt).count(), 1);
    }
    assert!(any.iter().all(|a| a.airport_type.is_airport()));
}

#[test]
fn test_by_type_unknown_token() {
    let err = fixture_db().by_type("spaceport").unwrap_err();
    assert!(matches!(err, AirportError::InvalidInput { .. }));
    assert!(err.to_string().contains("spaceport"));
    assert_eq!(fixture_db().by_type("seaplane_base").unwrap().len(), 1);
}

#[test]
fn test_by_timezone() {
    let db = fixture_db();
    let london = db.by_timezone("Europe/London").unwrap();
    assert_eq!(london.len(), 6);
    assert!(london.iter().all(|a| a.timezone == "Europe/London"));
    assert!(db.by_timezone("EUROPE/LONDON").unwrap_err().is_not_found());
    assert!(db.by_timezone("  ").unwrap_err().is_invalid_input());
}

// =====================================================================
// Composite filter
// =====================================================================

#[test]
fn test_find_airports_combines_with_and() {
    let db = fixture_db();
    let filter = AirportFilter::new()
        .country_code("gb")
        .airport_type(TypeQuery::Exact(AirportType::LargeAirport));
    assert_eq!(codes(&db.find_airports(&filter).unwrap()), vec!["LHR", "LGW"]);

    let filter = AirportFilter::new()
        .continent(Continent::Europe)
        .has_scheduled_service(true)
        .min_runway_ft(10000)
        .timezone("Europe/London");
    assert_eq!(codes(&db.find_airports(&filter).unwrap()), vec!["LHR", "LGW"]);
}

#[test]
fn test_find_airports_scheduled_service_partitions() {
    let db = fixture_db();
    let with = db
        .find_airports(&AirportFilter::new().has_scheduled_service(true))
        .unwrap();
    let without = db
        .find_airports(&AirportFilter::new().has_scheduled_service(false))
        .unwrap();
    assert_eq!(with.len(), 5);
    assert_eq!(without.len(), 4);
    assert_eq!(with.len() + without.len(), db.dataset().len());
}

#[test]
fn test_find_airports_empty_filter_rejected() {
    let db = fixture_db();
    assert!(db
        .find_airports(&AirportFilter::new())
        .unwrap_err()
        .is_invalid_input());
    let from_json = AirportFilter::from_json("{}").unwrap();
    assert!(db.find_airports(&from_json).unwrap_err().is_invalid_input());
}

#[test]
fn test_find_airports_no_match_is_success() {
    let db = fixture_db();
    let found = db
        .find_airports(&AirportFilter::from_json(r#"{"min_runway_ft": 999999999}"#).unwrap())
        .unwrap();
    assert!(found.is_empty());

    let long = db
        .find_airports(&AirportFilter::new().min_runway_ft(12000))
        .unwrap();
    assert_eq!(codes(&long), vec!["SIN", "LHR", "JFK"]);
}

#[test]
fn test_find_airports_bad_timezone_value() {
    let err = fixture_db()
        .find_airports(&AirportFilter::new().timezone(" "))
        .unwrap_err();
    assert!(err.is_invalid_input());
}

// =====================================================================
// Geography
// =====================================================================

#[test]
fn test_distance_singapore_heathrow() {
    let d = fixture_db().calculate_distance("SIN", "LHR").unwrap();
    assert!((d - 10883.09).abs() < 0.01, "got {}", d);
}

#[test]
fn test_distance_mixed_codes_and_symmetry() {
    let db = fixture_db();
    let ab = db.calculate_distance("EGLL", "jfk").unwrap();
    let ba = db.calculate_distance("JFK", "LHR").unwrap();
    assert!((ab - ba).abs() < 1e-6);
    assert!((ab - 5539.45).abs() < 0.01, "got {}", ab);
    assert!(db.calculate_distance("WSSS", "SIN").unwrap() <= 1e-6);
}

#[test]
fn test_distance_errors() {
    let db = fixture_db();
    assert!(db.calculate_distance("XYZ", "JFK").unwrap_err().is_not_found());
    assert!(db.calculate_distance("JFK", "QQQQ").unwrap_err().is_not_found());
    assert!(db.calculate_distance("invalid", "JFK").unwrap_err().is_invalid_input());
    // XGH exists but has no coordinates
    assert!(db.calculate_distance("XGH", "JFK").unwrap_err().is_invalid_input());
}

#[test]
fn test_find_nearby_london() {
    let found = fixture_db().find_nearby(51.5074, -0.1278, 50.0).unwrap();
    let names: Vec<&str> = found.iter().map(|n| n.airport.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "London Heliport",
            "London City Airport",
            "London Heathrow Airport",
            "Heathrow Duplicate Entry",
            "London Gatwick Airport",
        ]
    );
    assert!(found.iter().all(|n| n.distance_km <= 50.0));
    assert!(found.windows(2).all(|w| w[0].distance_km <= w[1].distance_km));
}

#[test]
fn test_find_nearby_zero_radius_only_coincident() {
    let db = fixture_db();
    let found = db.find_nearby(51.4775, -0.4614, 0.0).unwrap();
    assert_eq!(found.len(), 2);
    assert!(found.iter().all(|n| n.distance_km == 0.0));

    assert!(db.find_nearby(0.0, 0.0, 0.0).unwrap().is_empty());
}

#[test]
fn test_find_nearby_validation() {
    let db = fixture_db();
    assert!(db.find_nearby(-90.5, 0.0, 100.0).unwrap_err().is_invalid_input());
    assert!(db.find_nearby(0.0, 181.0, 100.0).unwrap_err().is_invalid_input());
    assert!(db.find_nearby(0.0, 0.0, -5.0).unwrap_err().is_invalid_input());
}

// =====================================================================
// Links
// =====================================================================

#[test]
fn test_links_fixed_shape() {
    let db = fixture_db();
    let links = db.get_links("LHR").unwrap();
    assert_eq!(links.website, None);
    assert_eq!(
        links.wikipedia.as_deref(),
        Some("https://en.wikipedia.org/wiki/Heathrow_Airport")
    );
    assert_eq!(
        links.flightradar24.as_deref(),
        Some("https://www.flightradar24.com/airport/LHR")
    );
    assert_eq!(
        links.flightaware.as_deref(),
        Some("https://www.flightaware.com/live/airport/EGLL")
    );

    let value = serde_json::to_value(&links).unwrap();
    for key in ["website", "wikipedia", "flightradar24", "radarbox", "flightaware"] {
        assert!(value.get(key).is_some(), "missing key {}", key);
    }

    assert!(db.get_links("XYZ").unwrap_err().is_not_found());
}

// =====================================================================
// Results are faithful copies of the dataset
// =====================================================================

#[test]
fn test_results_identical_to_backing_records() {
    let db = fixture_db();
    let table = db.dataset().airports();
    let in_table = |apt: &Airport| table.iter().any(|t| t == apt);

    let mut results = Vec::new();
    results.extend(db.by_iata("LHR").unwrap());
    results.extend(db.by_icao("WSSS").unwrap());
    results.extend(db.search_by_name("london").unwrap());
    results.extend(db.autocomplete("airport", 10));
    results.extend(db.by_type("airport").unwrap());
    results.extend(db.by_timezone("America/Anchorage").unwrap());
    results.extend(
        db.find_airports(&AirportFilter::new().country_code("US"))
            .unwrap(),
    );
    results.extend(
        db.find_nearby(51.5, -0.1, 100.0)
            .unwrap()
            .into_iter()
            .map(|n| n.airport),
    );
    results.push(db.by_code("EGLW").unwrap());

    assert!(!results.is_empty());
    assert!(results.iter().all(in_table));
}
