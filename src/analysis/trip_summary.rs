use serde::Serialize;
use statrs::statistics::Statistics;

use crate::domain::Trip;
use crate::utils::position_max_by_key;

/// Headline metrics over a set of trips.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripSummary {
    pub trip_count: usize,
    pub total_cost: f64,
    pub mean_cost_per_day: f64,
    pub cost_std_population: f64,
    /// Needs two or more trips
    pub cost_std_sample: Option<f64>,
    /// First trip with the highest total cost
    pub most_expensive: Option<Trip>,
}

pub fn summarize_trips(trips: &[Trip]) -> TripSummary {
    if trips.is_empty() {
        return TripSummary {
            trip_count: 0,
            total_cost: 0.0,
            mean_cost_per_day: 0.0,
            cost_std_population: 0.0,
            cost_std_sample: None,
            most_expensive: None,
        };
    }

    let costs: Vec<f64> = trips.iter().map(Trip::total_cost).collect();
    let per_day: Vec<f64> = trips.iter().map(Trip::cost_per_day).collect();

    let cost_std_sample = (costs.len() > 1).then(|| costs.iter().std_dev());

    TripSummary {
        trip_count: trips.len(),
        total_cost: costs.iter().sum(),
        mean_cost_per_day: per_day.iter().mean(),
        cost_std_population: costs.iter().population_std_dev(),
        cost_std_sample,
        most_expensive: position_max_by_key(trips, Trip::total_cost).map(|i| trips[i].clone()),
    }
}
