//! Item lists for the demo
//!
//! Items come from a file (a JSON array of strings for `.json`, otherwise
//! one item per non-blank line) or from the built-in city list.

use std::fs;
use std::path::Path;

use crate::error::ComboboxError;

pub const DEFAULT_ITEMS: &[&str] = &[
    "Albuquerque, NM",
    "Anchorage, AK",
    "Atlanta, GA",
    "Austin, TX",
    "Baltimore, MD",
    "Boise, ID",
    "Boston, MA",
    "Charlotte, NC",
    "Chicago, IL",
    "Cleveland, OH",
    "Columbus, OH",
    "Dallas, TX",
    "Denver, CO",
    "Detroit, MI",
    "El Paso, TX",
    "Fort Worth, TX",
    "Fresno, CA",
    "Honolulu, HI",
    "Houston, TX",
    "Indianapolis, IN",
    "Jacksonville, FL",
    "Kansas City, MO",
    "Las Vegas, NV",
    "Los Angeles, CA",
    "Louisville, KY",
    "Memphis, TN",
    "Miami, FL",
    "Milwaukee, WI",
    "Minneapolis, MN",
    "Nashville, TN",
    "New Orleans, LA",
    "New York, NY",
    "Oakland, CA",
    "Oklahoma City, OK",
    "Omaha, NE",
    "Philadelphia, PA",
    "Phoenix, AZ",
    "Pittsburgh, PA",
    "Portland, OR",
    "Raleigh, NC",
    "Sacramento, CA",
    "Salt Lake City, UT",
    "San Antonio, TX",
    "San Diego, CA",
    "San Francisco, CA",
    "San Jose, CA",
    "Seattle, WA",
    "St. Louis, MO",
    "Tucson, AZ",
    "Washington, DC",
];

pub fn default_items() -> Vec<String> {
    DEFAULT_ITEMS.iter().map(|s| s.to_string()).collect()
}

pub fn load_items(path: &Path) -> Result<Vec<String>, ComboboxError> {
    let contents = fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        parse_json_items(&contents)
    } else {
        Ok(parse_line_items(&contents))
    }
}

pub fn parse_json_items(contents: &str) -> Result<Vec<String>, ComboboxError> {
    serde_json::from_str::<Vec<String>>(contents)
        .map_err(|e| ComboboxError::InvalidItems(e.to_string()))
}

pub fn parse_line_items(contents: &str) -> Vec<String> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
#[path = "items_tests.rs"]
mod items_tests;
