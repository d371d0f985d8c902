//! Static declaration of every visual slot on the predictor page.
//!
//! The page owns a fixed set of widgets. Each one is bound to the metric it
//! displays and to the way it is updated, so a render cycle is a single walk
//! over this table rather than hand-written DOM pokes per field.

/// How a slot consumes its metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlotKind {
    /// Circular progress. The metric is divided by `max` to obtain a percentage.
    Ring { max: f64 },
    /// Numeric readout that counts from the displayed value to the new one.
    AnimatedNumber,
    /// Direct text replacement. `replay` restarts the appear transition on every write.
    Text {
        unit: Option<&'static str>,
        replay: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotSpec {
    /// Element id of the widget.
    pub key: &'static str,
    /// Field of the prediction payload feeding this slot.
    pub metric: &'static str,
    pub kind: SlotKind,
}

impl SlotSpec {
    pub const fn ring(key: &'static str, metric: &'static str, max: f64) -> Self {
        Self {
            key,
            metric,
            kind: SlotKind::Ring { max },
        }
    }

    pub const fn animated(key: &'static str, metric: &'static str) -> Self {
        Self {
            key,
            metric,
            kind: SlotKind::AnimatedNumber,
        }
    }

    pub const fn text(key: &'static str, metric: &'static str) -> Self {
        Self {
            key,
            metric,
            kind: SlotKind::Text {
                unit: None,
                replay: false,
            },
        }
    }

    pub const fn with_unit(mut self, unit: &'static str) -> Self {
        if let SlotKind::Text { replay, .. } = self.kind {
            self.kind = SlotKind::Text {
                unit: Some(unit),
                replay,
            };
        }
        self
    }

    pub const fn replaying(mut self) -> Self {
        if let SlotKind::Text { unit, .. } = self.kind {
            self.kind = SlotKind::Text { unit, replay: true };
        }
        self
    }
}

pub const STANDARD_SLOTS: &[SlotSpec] = &[
    // Fuel consumption rings
    SlotSpec::ring("combined-ring", "combined_fuel", 15.0),
    SlotSpec::ring("city-ring", "city_fuel", 20.0),
    SlotSpec::ring("highway-ring", "highway_fuel", 15.0),
    SlotSpec::ring("mpg-ring", "combined_mpg", 50.0),
    // Fuel consumption readouts
    SlotSpec::animated("combined-fuel", "combined_fuel"),
    SlotSpec::animated("city-fuel", "city_fuel"),
    SlotSpec::animated("highway-fuel", "highway_fuel"),
    SlotSpec::animated("combined-mpg", "combined_mpg"),
    SlotSpec::animated("annual-fuel-cost", "annual_fuel_cost"),
    // Emission gauges
    SlotSpec::ring("co2-bar", "prediction", 450.0),
    SlotSpec::text("co2-value", "prediction").with_unit("g/km"),
    SlotSpec::ring("co2-rating-bar", "co2_rating", 10.0),
    SlotSpec::text("co2-rating-value", "co2_rating"),
    SlotSpec::ring("smog-bar", "smog_rating", 10.0),
    SlotSpec::text("smog-value", "smog_rating"),
    SlotSpec::ring("eco-score-bar", "eco_score", 10.0),
    SlotSpec::text("eco-score-value", "eco_score"),
    // Derived figures
    SlotSpec::text("co2-tax", "co2_tax").replaying(),
    SlotSpec::text("fuel-efficiency-score", "fuel_efficiency_score").replaying(),
    SlotSpec::text("cost-per-passenger-km", "cost_per_passenger_km").replaying(),
];

/// Ordered set of slots walked by every render cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotRegistry {
    slots: &'static [SlotSpec],
}

impl SlotRegistry {
    pub const fn new(slots: &'static [SlotSpec]) -> Self {
        Self { slots }
    }

    pub const fn standard() -> Self {
        Self::new(STANDARD_SLOTS)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static SlotSpec> {
        self.slots.iter()
    }

    pub fn get(&self, key: &str) -> Option<&'static SlotSpec> {
        self.slots.iter().find(|spec| spec.key == key)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl Default for SlotRegistry {
    fn default() -> Self {
        Self::standard()
    }
}
