use serde::{Deserialize, Serialize};

use super::{DomainError, Place, ensure_non_negative};

/// A journey between two places with a flat cost and a duration in whole days.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Trip {
    pub origin: Place,
    pub destination: Place,
    pub transport_mode: String,
    total_cost: f64,
    duration_days: u32,
}

impl Trip {
    pub fn new(
        origin: Place,
        destination: Place,
        transport_mode: impl Into<String>,
        total_cost: f64,
        duration_days: u32,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            origin,
            destination,
            transport_mode: transport_mode.into(),
            total_cost: ensure_non_negative("total_cost", total_cost)?,
            duration_days,
        })
    }

    /// Caller guarantees `total_cost` already passed validation.
    pub(crate) fn from_validated(
        origin: Place,
        destination: Place,
        transport_mode: String,
        total_cost: f64,
        duration_days: u32,
    ) -> Self {
        Self {
            origin,
            destination,
            transport_mode,
            total_cost,
            duration_days,
        }
    }

    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    pub fn duration_days(&self) -> u32 {
        self.duration_days
    }

    /// Cost spread over the trip duration. A zero-day trip costs 0 per day.
    pub fn cost_per_day(&self) -> f64 {
        if self.duration_days == 0 {
            return 0.0;
        }
        self.total_cost / self.duration_days as f64
    }
}

impl std::fmt::Display for Trip {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} -> {} by {}",
            self.origin.city(),
            self.destination.city(),
            self.transport_mode
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trip(cost: f64, days: u32) -> Trip {
        Trip::new(
            Place::new("Lisbon", "Portugal"),
            Place::new("Paris", "France"),
            "Plane",
            cost,
            days,
        )
        .unwrap()
    }

    #[test]
    fn cost_per_day_divides_cost_by_duration() {
        assert_eq!(trip(1600.0, 6).cost_per_day(), 1600.0 / 6.0);
        assert_eq!(trip(500.0, 3).cost_per_day(), 500.0 / 3.0);
    }

    #[test]
    fn zero_day_trip_costs_nothing_per_day() {
        for cost in [0.0, 1.0, 1600.0, 1e9] {
            assert_eq!(trip(cost, 0).cost_per_day(), 0.0);
        }
    }

    #[test]
    fn rejects_negative_cost() {
        let err = Trip::new(
            Place::new("A", "X"),
            Place::new("B", "Y"),
            "Bus",
            -1.0,
            2,
        )
        .unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidQuantity {
                field: "total_cost",
                value: -1.0
            }
        );
    }
}
