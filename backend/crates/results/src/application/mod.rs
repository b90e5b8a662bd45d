//! Application Layer

pub mod list_results;
pub mod save_result;

pub use list_results::{ListResultsUseCase, RECENT_RESULTS_LIMIT};
pub use save_result::{SaveResultInput, SaveResultUseCase};
