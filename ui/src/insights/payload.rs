//! `/emission_insights` response and its completeness check.

use serde::{Deserialize, Serialize};

use crate::core::error::AppError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuelEmission {
    pub fuel_type: String,
    pub avg_co2: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransmissionEmission {
    pub transmission: String,
    pub avg_co2: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineEmission {
    pub engine_size: f64,
    pub mean_co2: f64,
    #[serde(default)]
    pub min_co2: Option<f64>,
    #[serde(default)]
    pub max_co2: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopCombination {
    pub engine_size: f64,
    pub cylinders: u32,
    pub transmission: String,
    pub fuel_type: String,
    pub co2_emissions: f64,
}

/// Raw response. Every collection is optional until validated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InsightsPayload {
    #[serde(default)]
    pub fuel_emissions: Option<Vec<FuelEmission>>,
    #[serde(default)]
    pub transmission_emissions: Option<Vec<TransmissionEmission>>,
    #[serde(default)]
    pub engine_emissions: Option<Vec<EngineEmission>>,
    #[serde(default)]
    pub top_5_combinations: Option<Vec<TopCombination>>,
}

/// A payload with all four collections present.
#[derive(Debug, Clone, PartialEq)]
pub struct EmissionInsights {
    pub fuel_emissions: Vec<FuelEmission>,
    pub transmission_emissions: Vec<TransmissionEmission>,
    pub engine_emissions: Vec<EngineEmission>,
    pub top_5_combinations: Vec<TopCombination>,
}

impl InsightsPayload {
    /// All-or-nothing: any missing collection rejects the whole payload.
    pub fn validate(self) -> Result<EmissionInsights, AppError> {
        match self {
            Self {
                fuel_emissions: Some(fuel_emissions),
                transmission_emissions: Some(transmission_emissions),
                engine_emissions: Some(engine_emissions),
                top_5_combinations: Some(top_5_combinations),
            } => Ok(EmissionInsights {
                fuel_emissions,
                transmission_emissions,
                engine_emissions,
                top_5_combinations,
            }),
            partial => {
                let missing = [
                    ("fuel_emissions", partial.fuel_emissions.is_none()),
                    ("transmission_emissions", partial.transmission_emissions.is_none()),
                    ("engine_emissions", partial.engine_emissions.is_none()),
                    ("top_5_combinations", partial.top_5_combinations.is_none()),
                ]
                .into_iter()
                .filter_map(|(name, absent)| absent.then_some(name))
                .collect();
                Err(AppError::IncompleteInsights { missing })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"{
        "fuel_emissions": [{"fuel_type": "E", "avg_co2": 175.2}, {"fuel_type": "Z", "avg_co2": 260.41}],
        "transmission_emissions": [{"transmission": "AV7", "avg_co2": 180.0}],
        "engine_emissions": [{"engine_size": 1.5, "mean_co2": 160.5, "min_co2": 120.0, "max_co2": 201.0}],
        "top_5_combinations": [{"engine_size": 1.2, "cylinders": 3, "transmission": "AV", "fuel_type": "X", "co2_emissions": 104.0}]
    }"#;

    #[test]
    fn complete_payload_validates() {
        let payload: InsightsPayload = serde_json::from_str(FULL).unwrap();
        let insights = payload.validate().unwrap();
        assert_eq!(insights.fuel_emissions.len(), 2);
        assert_eq!(insights.engine_emissions[0].max_co2, Some(201.0));
        assert_eq!(insights.top_5_combinations[0].cylinders, 3);
    }

    #[test]
    fn empty_collections_still_count_as_present() {
        let payload: InsightsPayload = serde_json::from_str(
            r#"{"fuel_emissions": [], "transmission_emissions": [], "engine_emissions": [], "top_5_combinations": []}"#,
        )
        .unwrap();
        assert!(payload.validate().is_ok());
    }

    #[test]
    fn missing_or_null_collections_are_reported() {
        let payload: InsightsPayload = serde_json::from_str(
            r#"{"fuel_emissions": [], "transmission_emissions": null, "engine_emissions": []}"#,
        )
        .unwrap();
        assert_eq!(
            payload.validate(),
            Err(AppError::IncompleteInsights {
                missing: vec!["transmission_emissions", "top_5_combinations"],
            })
        );
    }
}
