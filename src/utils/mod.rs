pub mod environment;
pub mod logging;
pub mod terminal;

pub use environment::{API_URL_ENV, DEFAULT_SEARCH_ENDPOINT, get_search_endpoint, validate_endpoint};
pub use logging::{default_log_path, init_file_logging, init_stderr_logging};
pub use terminal::{sanitize, single_line};
