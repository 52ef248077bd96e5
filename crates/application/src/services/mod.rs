//! Application services - Use case implementations

pub mod messages;
mod roulette_service;
mod spot_finder;

pub use messages::{Locale, ResultSummary, failure_message, result_summary, time_option_label};
pub use roulette_service::{RouletteService, RouletteSettings, SearchForm, SearchOutcome};
pub use spot_finder::{DEFAULT_ATTEMPT_LIMIT, SpotFinder};
