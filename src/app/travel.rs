use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use log::{info, warn};

use crate::analysis::{filter_by_budget, parse_budget, summarize_trips};
use crate::models::Inventory;
use crate::report::{Reporter, add_booking_section, add_summary_section};
use crate::utils::format_currency;

pub const INVALID_BUDGET_MESSAGE: &str = "Error: Please enter a valid number for the budget.";

#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    /// Number of affordable options shown (0 means the apology was printed)
    Completed { options: usize },
    InvalidBudget,
}

/// Static trip metrics, then the interactive budget search.
pub struct TravelSession<R, W> {
    input: R,
    output: W,
    reporter: Reporter,
}

impl<R: BufRead, W: Write> TravelSession<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            reporter: Reporter::new(),
        }
    }

    fn flush(&mut self) -> Result<()> {
        self.reporter
            .flush_to(&mut self.output)
            .context("Failed to write report")
    }

    /// Asks one question on the same line and returns the trimmed answer. EOF reads as empty.
    fn prompt(&mut self, question: &str) -> Result<String> {
        self.flush()?;
        write!(self.output, "{question}")?;
        self.output.flush()?;
        let mut answer = String::new();
        self.input
            .read_line(&mut answer)
            .context("Failed to read from standard input")?;
        Ok(answer.trim_end_matches(['\r', '\n']).to_string())
    }

    pub fn run(mut self) -> Result<SessionOutcome> {
        self.reporter.add_banner("PART 1: REQUIRED METRICS", '#');
        let trips = Inventory::basic_trips().context("Invalid trip inventory")?;
        let summary = summarize_trips(&trips);
        add_summary_section(&mut self.reporter, &trips, &summary);

        self.reporter.add_banner("PART 2: TRAVEL BOOKING INTERFACE", '#');
        self.reporter.add_blank();

        let user_name = self.prompt("Please enter your name: ")?;
        let budget_input = self.prompt("Please enter your total budget (€): ")?;
        let Some(budget) = parse_budget(&budget_input) else {
            warn!("Rejected budget input {budget_input:?}");
            self.reporter.add_line(INVALID_BUDGET_MESSAGE);
            self.flush()?;
            return Ok(SessionOutcome::InvalidBudget);
        };

        self.reporter.add_blank();
        self.reporter.add_line(format!(
            "Welcome, {user_name}. Searching for trips under {}...",
            format_currency(budget)
        ));
        self.reporter.add_blank();

        let eco_trips = Inventory::eco_trips().context("Invalid trip inventory")?;
        let selection = filter_by_budget(&eco_trips, budget);
        info!(
            "{} affordable options for budget {budget}",
            selection.options.len()
        );
        add_booking_section(&mut self.reporter, &user_name, &selection);
        self.flush()?;

        Ok(SessionOutcome::Completed {
            options: selection.options.len(),
        })
    }
}
