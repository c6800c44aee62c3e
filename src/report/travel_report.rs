use tabled::{Table, settings::Style};

use super::Reporter;
use crate::analysis::{BudgetSelection, TripSummary};
use crate::domain::{EcoTrip, Trip};
use crate::models::{BookingRow, TripRow};
use crate::utils::{format_currency, format_thousands};

/// Trip table plus headline metrics.
pub fn add_summary_section(reporter: &mut Reporter, trips: &[Trip], summary: &TripSummary) {
    let mut table = Table::new(trips.iter().map(TripRow::from));
    table.with(Style::psql());
    reporter.add_blank();
    reporter.add_block(table);

    reporter.add_blank();
    reporter.add_line("--- Summary Statistics (All Trips) ---");
    reporter.add_line(format!(
        "Total Cost of All Trips:      {}",
        format_currency(summary.total_cost)
    ));
    reporter.add_line(format!(
        "Average Cost per Day:         {}",
        format_currency(summary.mean_cost_per_day)
    ));
    let sample_std = summary
        .cost_std_sample
        .map(format_currency)
        .unwrap_or_else(|| "n/a".to_string());
    reporter.add_line(format!("Standard Deviation (Costs):   {sample_std}"));
    reporter.add_line(format!(
        "Population Std Dev (Costs):   {}",
        format_currency(summary.cost_std_population)
    ));

    match &summary.most_expensive {
        Some(trip) => reporter.add_line(format!(
            "Most Expensive Trip:          {} -> {} ({})",
            trip.origin.city(),
            trip.destination.city(),
            format_currency(trip.total_cost())
        )),
        None => reporter.add_line("Most Expensive Trip:          none"),
    }
}

fn describe_choice(reporter: &mut Reporter, heading: &str, trip: &EcoTrip) {
    reporter.add_line(heading);
    reporter.add_line(format!(
        "   {} -> {} ({})",
        trip.origin.city(),
        trip.destination.city(),
        trip.transport_mode
    ));
    reporter.add_line(format!(
        "   Emissions: {} kg | Cost: {}",
        format_thousands(trip.co2_kg(), 2),
        format_currency(trip.total_cost())
    ));
}

/// Affordable bookings, cheapest first, followed by the emission comparison.
pub fn add_booking_section(reporter: &mut Reporter, user_name: &str, selection: &BudgetSelection) {
    let budget = format_currency(selection.budget);
    if selection.is_empty() {
        reporter.add_line(format!(
            "I'm sorry, {user_name}. No trips were found within your budget of {budget}."
        ));
        return;
    }

    reporter.add_rule('=');
    reporter.add_line(format!(" POSSIBLE BOOKINGS FOR: {}", user_name.to_uppercase()));
    reporter.add_line(format!(" BUDGET LIMIT: {budget}"));
    reporter.add_rule('=');

    let mut table = Table::new(selection.options.iter().map(BookingRow::from));
    table.with(Style::blank());
    reporter.add_block(table);

    reporter.add_rule('-');
    reporter.add_line(format!("Total options found: {}", selection.options.len()));

    reporter.add_banner("ENVIRONMENTAL IMPACT ANALYSIS", '=');
    if let Some(best) = selection.lowest_co2() {
        describe_choice(reporter, "🌱 BEST CHOICE (Lowest CO2):", best);
    }
    if let Some(worst) = selection.highest_co2() {
        reporter.add_blank();
        describe_choice(reporter, "⚠️  HIGHEST IMPACT (Highest CO2):", worst);
    }
    reporter.add_rule('=');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{filter_by_budget, summarize_trips};
    use crate::models::Inventory;

    #[test]
    fn summary_reports_totals_and_most_expensive() {
        let trips = Inventory::basic_trips().unwrap();
        let summary = summarize_trips(&trips);
        let mut reporter = Reporter::new();
        add_summary_section(&mut reporter, &trips, &summary);
        let text = reporter.lines().join("\n");

        assert!(text.contains("Total Cost of All Trips:      €12,200.00"));
        assert!(text.contains("Most Expensive Trip:          Paris -> New York (€5,000.00)"));
        assert!(text.contains("Cost/Day"));
    }

    #[test]
    fn empty_selection_apologises() {
        let trips = Inventory::eco_trips().unwrap();
        let selection = filter_by_budget(&trips, 10.0);
        let mut reporter = Reporter::new();
        add_booking_section(&mut reporter, "Ana", &selection);
        assert_eq!(
            reporter.lines(),
            &["I'm sorry, Ana. No trips were found within your budget of €10.00."]
        );
    }

    #[test]
    fn bookings_list_best_and_worst_choice() {
        let trips = Inventory::eco_trips().unwrap();
        let selection = filter_by_budget(&trips, 2000.0);
        let mut reporter = Reporter::new();
        add_booking_section(&mut reporter, "Ana", &selection);
        let text = reporter.lines().join("\n");

        assert!(text.contains(" POSSIBLE BOOKINGS FOR: ANA"));
        assert!(text.contains("Total options found: 4"));
        assert!(text.contains("   Lisbon -> Madrid (Bus)"));
        assert!(text.contains("   Emissions: 362.50 kg | Cost: €1,600.00"));
        assert!(text.contains("€1,800.00"));
    }
}
