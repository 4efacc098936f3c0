//! Static catalog of selectable UK cities.
//!
//! The dashboard's add-city dropdown is populated from this list; city names
//! arriving from the outside are rejected unless they appear here. There is
//! no dynamic lookup or geocoding.

/// All cities a user may add to their dashboard, in display order.
pub const UK_CITIES: &[&str] = &[
    "London",
    "Birmingham",
    "Manchester",
    "Leeds",
    "Glasgow",
    "Liverpool",
    "Newcastle",
    "Sheffield",
    "Bristol",
    "Edinburgh",
    "Cardiff",
    "Belfast",
    "Nottingham",
    "Southampton",
    "Brighton",
    "Aberdeen",
    "Cambridge",
    "Oxford",
    "York",
    "Plymouth",
];

/// Returns whether `name` is a known city (case-sensitive, exact match).
pub fn is_known_city(name: &str) -> bool {
    UK_CITIES.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_no_duplicates() {
        let unique: HashSet<_> = UK_CITIES.iter().collect();
        assert_eq!(unique.len(), UK_CITIES.len());
    }

    #[test]
    fn test_known_city() {
        assert!(is_known_city("Manchester"));
        assert!(is_known_city("Glasgow"));
        assert!(!is_known_city("manchester"));
        assert!(!is_known_city("Atlantis"));
    }
}
