//! Flat records for the trip tables.
use serde::Serialize;
use tabled::Tabled;

use crate::domain::{EcoTrip, Trip};
use crate::utils::{format_currency, round_to};

fn display_two_dp(value: &f64) -> String {
    format!("{value:.2}")
}

fn display_money(value: &f64) -> String {
    format_currency(*value)
}

/// One line of the "all trips" table.
#[derive(Debug, Clone, PartialEq, Serialize, Tabled)]
pub struct TripRow {
    #[tabled(rename = "Origin")]
    pub origin: String,
    #[tabled(rename = "Destination")]
    pub destination: String,
    #[tabled(rename = "Mode")]
    pub mode: String,
    #[tabled(rename = "Cost")]
    pub cost: f64,
    #[tabled(rename = "Days")]
    pub days: u32,
    #[tabled(rename = "Cost/Day", display_with = "display_two_dp")]
    pub cost_per_day: f64,
}

impl From<&Trip> for TripRow {
    fn from(trip: &Trip) -> Self {
        Self {
            origin: trip.origin.city().to_string(),
            destination: trip.destination.city().to_string(),
            mode: trip.transport_mode.clone(),
            cost: trip.total_cost(),
            days: trip.duration_days(),
            cost_per_day: trip.cost_per_day(),
        }
    }
}

/// One affordable option in the booking table.
#[derive(Debug, Clone, PartialEq, Serialize, Tabled)]
pub struct BookingRow {
    #[tabled(rename = "Origin")]
    pub origin: String,
    #[tabled(rename = "Destination")]
    pub destination: String,
    #[tabled(rename = "Mode")]
    pub mode: String,
    #[tabled(rename = "Total Cost", display_with = "display_money")]
    pub total_cost: f64,
    #[tabled(rename = "Duration (Days)")]
    pub duration_days: u32,
    #[tabled(rename = "Travel (h)")]
    pub travel_hours: f64,
    #[tabled(rename = "CO2 (kg)")]
    pub co2_kg: f64,
    #[tabled(rename = "Status")]
    pub status: String,
}

impl From<&EcoTrip> for BookingRow {
    fn from(trip: &EcoTrip) -> Self {
        Self {
            origin: trip.origin.city().to_string(),
            destination: trip.destination.city().to_string(),
            mode: trip.transport_mode.name.clone(),
            total_cost: trip.total_cost(),
            duration_days: trip.duration_days(),
            travel_hours: round_to(trip.travel_hours(), 1),
            co2_kg: round_to(trip.co2_kg(), 2),
            status: "Affordable".to_string(),
        }
    }
}
