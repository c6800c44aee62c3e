use lab_analytics::{SessionOutcome, TravelSession};

fn run(input: &str) -> (SessionOutcome, String) {
    let mut out = Vec::new();
    let outcome = TravelSession::new(input.as_bytes(), &mut out)
        .run()
        .expect("session should not fail on in-memory I/O");
    (outcome, String::from_utf8(out).expect("report is UTF-8"))
}

#[test]
fn part_one_always_prints_summary() {
    let (_, text) = run("Ana\nabc\n");
    assert!(text.contains("PART 1: REQUIRED METRICS"));
    assert!(text.contains("Total Cost of All Trips:      €12,200.00"));
    assert!(text.contains("Most Expensive Trip:          Paris -> New York (€5,000.00)"));
}

#[test]
fn non_numeric_budget_ends_the_session() {
    let (outcome, text) = run("Ana\nabc\n");
    assert_eq!(outcome, SessionOutcome::InvalidBudget);
    assert!(text.contains("Error: Please enter a valid number for the budget."));
    assert!(!text.contains("Welcome, Ana"));
    assert!(!text.contains("POSSIBLE BOOKINGS"));
}

#[test]
fn unreachable_budget_gets_an_apology() {
    let (outcome, text) = run("Ana\n100\n");
    assert_eq!(outcome, SessionOutcome::Completed { options: 0 });
    assert!(text.contains("I'm sorry, Ana. No trips were found within your budget of €100.00."));
    assert!(!text.contains("ENVIRONMENTAL IMPACT ANALYSIS"));
}

#[test]
fn generous_budget_lists_everything_cheapest_first() {
    let (outcome, text) = run("Bruno\n10000\n");
    assert_eq!(outcome, SessionOutcome::Completed { options: 6 });
    assert!(text.contains(" POSSIBLE BOOKINGS FOR: BRUNO"));
    assert!(text.contains(" BUDGET LIMIT: €10,000.00"));

    let bookings = &text[text.find("POSSIBLE BOOKINGS").unwrap()..];
    let cheapest = bookings.find("€500.00").expect("bus trip listed");
    let middle = bookings.find("€1,800.00").expect("train trip listed");
    let priciest = bookings.find("€5,000.00").expect("jet listed");
    assert!(cheapest < middle && middle < priciest);

    assert!(text.contains("ENVIRONMENTAL IMPACT ANALYSIS"));
    assert!(text.contains("   Paris -> New York (LuxuryJet)"));
    assert!(text.contains("   Emissions: 2,320.00 kg | Cost: €5,000.00"));
    assert!(text.contains("   Emissions: 40.00 kg | Cost: €500.00"));
}
