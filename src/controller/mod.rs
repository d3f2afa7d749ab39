//! Page orchestration: request lifecycle and the results display window

pub mod page;
pub mod results;

pub use page::{Completion, PageController, Ticket, UiState};
pub use results::{EMPTY_RESULTS_MESSAGE, PAGE_SIZE, ResultsWindow};
