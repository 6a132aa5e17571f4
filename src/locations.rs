//! Closed set of locations a review may be filed under.
//!
//! The list mirrors the cities present in the bulk-load dataset. Matching is
//! exact and case-sensitive; anything else is rejected at the boundary.

pub const ALLOWED_LOCATIONS: [&str; 18] = [
    "Albuquerque, New Mexico",
    "Carlsbad, California",
    "Chula Vista, California",
    "Colorado Springs, Colorado",
    "Denver, Colorado",
    "El Cajon, California",
    "El Paso, Texas",
    "Escondido, California",
    "Fresno, California",
    "La Mesa, California",
    "Las Vegas, Nevada",
    "Los Angeles, California",
    "Oceanside, California",
    "Phoenix, Arizona",
    "Sacramento, California",
    "Salt Lake City, Utah",
    "San Diego, California",
    "Tucson, Arizona",
];

pub fn is_allowed(location: &str) -> bool {
    ALLOWED_LOCATIONS.contains(&location)
}
