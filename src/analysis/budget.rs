use log::debug;
use serde::Serialize;

use crate::domain::EcoTrip;
use crate::utils::{position_max_by_key, position_min_by_key};

/// Parses the budget typed by the user. Blank, non-numeric and non-finite input is rejected.
/// Digits may be grouped with underscores (`1_000`).
pub fn parse_budget(input: &str) -> Option<f64> {
    strip_digit_separators(input.trim())?
        .parse::<f64>()
        .ok()
        .filter(|budget| budget.is_finite())
}

/// Removes `_` separators, each of which must sit between two digits.
fn strip_digit_separators(text: &str) -> Option<String> {
    let chars: Vec<char> = text.chars().collect();
    let mut digits = String::with_capacity(text.len());
    for (i, &c) in chars.iter().enumerate() {
        if c != '_' {
            digits.push(c);
            continue;
        }
        let between_digits = i > 0
            && chars[i - 1].is_ascii_digit()
            && chars.get(i + 1).is_some_and(char::is_ascii_digit);
        if !between_digits {
            return None;
        }
    }
    Some(digits)
}

/// Trips within a budget, cheapest first, plus their emission extremes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetSelection {
    pub budget: f64,
    pub options: Vec<EcoTrip>,
    lowest_co2: Option<usize>,
    highest_co2: Option<usize>,
}

impl BudgetSelection {
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    pub fn lowest_co2(&self) -> Option<&EcoTrip> {
        self.lowest_co2.map(|i| &self.options[i])
    }

    pub fn highest_co2(&self) -> Option<&EcoTrip> {
        self.highest_co2.map(|i| &self.options[i])
    }
}

/// Keeps trips with `total_cost <= budget`, sorted ascending by cost (stable).
pub fn filter_by_budget(trips: &[EcoTrip], budget: f64) -> BudgetSelection {
    let mut options: Vec<EcoTrip> = trips
        .iter()
        .filter(|trip| trip.total_cost() <= budget)
        .cloned()
        .collect();
    options.sort_by(|a, b| a.total_cost().total_cmp(&b.total_cost()));

    debug!(
        "{} of {} trips fit a budget of {budget}",
        options.len(),
        trips.len()
    );

    BudgetSelection {
        budget,
        lowest_co2: position_min_by_key(&options, EcoTrip::co2_kg),
        highest_co2: position_max_by_key(&options, EcoTrip::co2_kg),
        options,
    }
}
