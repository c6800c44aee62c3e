//! Console reports. Sections are buffered line by line, then written out in one go.
mod game_report;
mod reporter;
mod travel_report;

pub use game_report::{group_stats_table, ols_summary_table, preview_table};
pub(crate) use game_report::join_names;
pub use reporter::Reporter;
pub use travel_report::{add_booking_section, add_summary_section};
