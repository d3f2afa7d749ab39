//! Search form input handling and date validation

pub mod dates;
pub mod search_form;

pub use dates::{DateError, validate_date, validate_range};
pub use search_form::{FormError, FormField, FormState, SearchForm};
