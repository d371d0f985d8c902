//! Prediction payload as consumed by the render pipeline.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::format;

/// Placeholder shown for derived figures that have no value yet.
pub const NOT_APPLICABLE: &str = "N/A";

/// One field of the payload. Anything that is neither a number nor a string is
/// kept as `Other` so only the slot reading it is skipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Number(f64),
    Text(String),
    Other(serde_json::Value),
}

impl MetricValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) if value.is_finite() => Some(*value),
            _ => None,
        }
    }

    /// Text shown in a plain readout.
    pub fn display(&self) -> Option<String> {
        match self {
            Self::Number(value) if value.is_finite() => Some(format::format_plain(*value)),
            Self::Text(text) => Some(text.clone()),
            _ => None,
        }
    }
}

impl From<f64> for MetricValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for MetricValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Metric name to value, as returned by `/predict_json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetricResult {
    values: BTreeMap<String, MetricValue>,
}

impl MetricResult {
    pub fn get(&self, metric: &str) -> Option<&MetricValue> {
        self.values.get(metric)
    }

    pub fn number(&self, metric: &str) -> Option<f64> {
        self.get(metric).and_then(MetricValue::as_number)
    }

    pub fn with(mut self, metric: &str, value: impl Into<MetricValue>) -> Self {
        self.values.insert(metric.to_string(), value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Figures shown before any prediction and restored by a reset.
    pub fn defaults() -> Self {
        Self::default()
            .with("combined_fuel", 9.0)
            .with("city_fuel", 10.7)
            .with("highway_fuel", 7.4)
            .with("combined_mpg", 31.0)
            .with("annual_fuel_cost", 1962.0)
            .with("prediction", 201.4)
            .with("co2_rating", 7.0)
            .with("smog_rating", 8.0)
            .with("eco_score", 7.5)
            .with("co2_tax", NOT_APPLICABLE)
            .with("fuel_efficiency_score", NOT_APPLICABLE)
            .with("cost_per_passenger_km", NOT_APPLICABLE)
    }
}

impl FromIterator<(String, MetricValue)> for MetricResult {
    fn from_iter<I: IntoIterator<Item = (String, MetricValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for MetricResult {
    type Item = (String, MetricValue);
    type IntoIter = std::collections::btree_map::IntoIter<String, MetricValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn decodes_backend_payload() {
        let raw = r#"{
            "prediction": 187.32, "combined_fuel": 8.1, "city_fuel": 9.6,
            "highway_fuel": 6.3, "combined_mpg": 29, "smog_rating": 7,
            "annual_fuel_cost": 2510, "vehicle_class_range": "7.1 – 12.4",
            "co2_rating": 7.3, "eco_score": 7.2, "co2_tax": 355.91,
            "fuel_efficiency_score": 0.1007, "cost_per_passenger_km": 3.8247
        }"#;
        let result: MetricResult = serde_json::from_str(raw).unwrap();
        assert_eq!(result.number("combined_mpg"), Some(29.0));
        assert_eq!(result.number("co2_tax"), Some(355.91));
        assert_eq!(
            result.get("vehicle_class_range"),
            Some(&MetricValue::Text("7.1 – 12.4".into()))
        );
    }

    #[test]
    fn odd_values_survive_decoding() {
        let result: MetricResult =
            serde_json::from_str(r#"{"eco_score": null, "smog_rating": [1, 2]}"#).unwrap();
        assert_eq!(result.number("eco_score"), None);
        assert!(matches!(
            result.get("smog_rating"),
            Some(MetricValue::Other(_))
        ));
        assert_eq!(result.get("eco_score").and_then(MetricValue::display), None);
    }

    #[test]
    fn defaults_match_reset_literals() {
        let d = MetricResult::defaults();
        assert_eq!(d.number("combined_fuel"), Some(9.0));
        assert_eq!(d.number("city_fuel"), Some(10.7));
        assert_eq!(d.number("highway_fuel"), Some(7.4));
        assert_eq!(d.number("combined_mpg"), Some(31.0));
        assert_eq!(d.number("annual_fuel_cost"), Some(1962.0));
        assert_eq!(d.number("prediction"), Some(201.4));
        assert_eq!(d.number("co2_rating"), Some(7.0));
        assert_eq!(d.number("smog_rating"), Some(8.0));
        assert_eq!(d.number("eco_score"), Some(7.5));
        for derived in ["co2_tax", "fuel_efficiency_score", "cost_per_passenger_km"] {
            assert_eq!(d.get(derived), Some(&MetricValue::Text("N/A".into())));
        }
    }
}
