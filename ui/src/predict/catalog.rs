//! Choices offered by the vehicle form. These mirror the categories the
//! prediction models were trained on.

use crate::core::error::{MAX_MODEL_YEAR, MIN_MODEL_YEAR};

/// Manufacturer groups; individual brands are folded into these by the backend.
pub const MAKES: &[&str] = &[
    "BMW Group",
    "Ferrari",
    "Ford Motor Company",
    "General Motors",
    "Honda",
    "Hyundai Motor Group",
    "Mercedes-Benz Group",
    "Nissan-Renault Alliance",
    "Stellantis",
    "Tata",
    "Toyota",
    "Volkswagen Group",
    "Volvo",
];

pub const TRANSMISSIONS: &[&str] = &[
    "Automatic",
    "Automated Manual",
    "CVT",
    "Dual-Clutch",
    "Manual",
];

/// Fuel type code and its label.
pub const FUEL_TYPES: &[(&str, &str)] = &[
    ("D", "Diesel"),
    ("E", "E85"),
    ("X", "Regular gasoline"),
    ("Z", "Premium gasoline"),
];

pub fn model_years() -> impl DoubleEndedIterator<Item = i32> {
    MIN_MODEL_YEAR..=MAX_MODEL_YEAR
}

pub fn fuel_label(code: &str) -> Option<&'static str> {
    FUEL_TYPES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, label)| *label)
}
