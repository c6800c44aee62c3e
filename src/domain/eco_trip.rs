use serde::{Deserialize, Serialize};

use super::{DomainError, Place, TransportMode, Trip, ensure_non_negative};

/// A trip that also knows its distance and the emission profile of its transport.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EcoTrip {
    pub origin: Place,
    pub destination: Place,
    pub transport_mode: TransportMode,
    total_cost: f64,
    duration_days: u32,
    distance_km: f64,
}

impl EcoTrip {
    pub fn new(
        origin: Place,
        destination: Place,
        transport_mode: TransportMode,
        total_cost: f64,
        duration_days: u32,
        distance_km: f64,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            origin,
            destination,
            transport_mode,
            total_cost: ensure_non_negative("total_cost", total_cost)?,
            duration_days,
            distance_km: ensure_non_negative("distance_km", distance_km)?,
        })
    }

    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    pub fn duration_days(&self) -> u32 {
        self.duration_days
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    /// Plain-trip view, with the transport collapsed to its name.
    pub fn as_trip(&self) -> Trip {
        Trip::from_validated(
            self.origin.clone(),
            self.destination.clone(),
            self.transport_mode.name.clone(),
            self.total_cost,
            self.duration_days,
        )
    }

    pub fn cost_per_day(&self) -> f64 {
        self.as_trip().cost_per_day()
    }

    /// Total emissions in kg.
    pub fn co2_kg(&self) -> f64 {
        self.distance_km * self.transport_mode.co2_per_km()
    }

    /// Pure travel time in hours. 0 when the mode has no speed.
    pub fn travel_hours(&self) -> f64 {
        let speed = self.transport_mode.avg_speed_kmh();
        if speed == 0.0 {
            return 0.0;
        }
        self.distance_km / speed
    }
}
