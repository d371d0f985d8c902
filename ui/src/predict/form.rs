//! Vehicle form model.

use crate::core::error::{ValidationError, MAX_MODEL_YEAR, MIN_MODEL_YEAR};

pub const DEFAULT_YEAR: &str = "2020";
pub const DEFAULT_MAKE: &str = "Toyota";
pub const DEFAULT_TRANSMISSION: &str = "Automated Manual";
pub const DEFAULT_FUEL_TYPE: &str = "X";

/// Raw field values as typed or selected by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleForm {
    pub vehicle_year: String,
    pub make: String,
    pub transmission: String,
    pub fuel_type: String,
}

impl Default for VehicleForm {
    fn default() -> Self {
        Self {
            vehicle_year: DEFAULT_YEAR.to_string(),
            make: DEFAULT_MAKE.to_string(),
            transmission: DEFAULT_TRANSMISSION.to_string(),
            fuel_type: DEFAULT_FUEL_TYPE.to_string(),
        }
    }
}

impl VehicleForm {
    /// Restore every field to its literal default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// The only client-side check: the model year must parse and fall in range.
    pub fn validate(&self) -> Result<i32, ValidationError> {
        let raw = self.vehicle_year.trim();
        if raw.is_empty() {
            return Err(ValidationError::YearMissing);
        }
        let year = raw
            .parse::<i32>()
            .map_err(|_| ValidationError::YearMissing)?;
        if !(MIN_MODEL_YEAR..=MAX_MODEL_YEAR).contains(&year) {
            return Err(ValidationError::YearOutOfRange { year });
        }
        Ok(year)
    }

    /// Field name and value pairs in submission order.
    pub fn fields(&self) -> [(&'static str, &str); 4] {
        [
            ("vehicle_year", self.vehicle_year.trim()),
            ("make", self.make.as_str()),
            ("transmission", self.transmission.as_str()),
            ("fuel_type", self.fuel_type.as_str()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_year(year: &str) -> VehicleForm {
        VehicleForm {
            vehicle_year: year.to_string(),
            ..VehicleForm::default()
        }
    }

    #[test]
    fn year_bounds_are_inclusive() {
        assert_eq!(with_year("2017").validate(), Ok(2017));
        assert_eq!(with_year("2025").validate(), Ok(2025));
        assert_eq!(
            with_year("2016").validate(),
            Err(ValidationError::YearOutOfRange { year: 2016 })
        );
        assert_eq!(
            with_year("2026").validate(),
            Err(ValidationError::YearOutOfRange { year: 2026 })
        );
    }

    #[test]
    fn blank_or_garbage_year_is_rejected() {
        assert_eq!(with_year("").validate(), Err(ValidationError::YearMissing));
        assert_eq!(with_year("  ").validate(), Err(ValidationError::YearMissing));
        assert_eq!(with_year("20x0").validate(), Err(ValidationError::YearMissing));
    }

    #[test]
    fn reset_restores_literals_from_any_state() {
        let mut form = VehicleForm {
            vehicle_year: "2024".into(),
            make: "Volvo".into(),
            transmission: "CVT".into(),
            fuel_type: "Z".into(),
        };
        form.reset();
        assert_eq!(form.vehicle_year, "2020");
        assert_eq!(form.make, "Toyota");
        assert_eq!(form.transmission, "Automated Manual");
        assert_eq!(form.fuel_type, "X");
    }

    #[test]
    fn fields_are_submitted_by_name() {
        let form = with_year(" 2019 ");
        assert_eq!(
            form.fields(),
            [
                ("vehicle_year", "2019"),
                ("make", "Toyota"),
                ("transmission", "Automated Manual"),
                ("fuel_type", "X"),
            ]
        );
    }
}
