//! Search form state: query text, optional date range, and the filter panel.
//!
//! The form is a small state machine over [`FormState`]. Editing any field moves
//! it to `Editing`; a successful [`SearchForm::submit`] moves it to `Submitting`
//! until the page reports completion through [`SearchForm::finish`]. A failed
//! submit returns to `Editing` with an inline error and leaves every field
//! exactly as the user typed it.

use std::fmt;

use thiserror::Error;

use super::dates::{DateError, validate_date, validate_range};
use crate::models::SearchQuery;

/// Maximum characters accepted per field
const MAX_INPUT_LEN: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Editing,
    Submitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Query,
    StartDate,
    EndDate,
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FormField::Query => "Query",
            FormField::StartDate => "Start date",
            FormField::EndDate => "End date",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please enter a search query")]
    EmptyQuery,
    #[error("{field}: {source}")]
    Date {
        field: FormField,
        #[source]
        source: DateError,
    },
}

impl FormError {
    /// Field the error should be displayed next to
    pub fn field(&self) -> FormField {
        match self {
            FormError::EmptyQuery => FormField::Query,
            FormError::Date { field, .. } => *field,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SearchForm {
    query: String,
    start_date: String,
    end_date: String,
    focus: FormField,
    filter_open: bool,
    state: FormState,
    error: Option<FormError>,
}

impl SearchForm {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            start_date: String::new(),
            end_date: String::new(),
            focus: FormField::Query,
            filter_open: false,
            state: FormState::Idle,
            error: None,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn start_date(&self) -> &str {
        &self.start_date
    }

    pub fn end_date(&self) -> &str {
        &self.end_date
    }

    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Query => &self.query,
            FormField::StartDate => &self.start_date,
            FormField::EndDate => &self.end_date,
        }
    }

    pub fn focus(&self) -> FormField {
        self.focus
    }

    pub fn is_filter_open(&self) -> bool {
        self.filter_open
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn error(&self) -> Option<&FormError> {
        self.error.as_ref()
    }

    /// True when a date filter is set, shown as a "From/To" hint under the query
    pub fn has_date_filter(&self) -> bool {
        !self.start_date.trim().is_empty() || !self.end_date.trim().is_empty()
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
        self.mark_edited();
    }

    pub fn set_start_date(&mut self, text: impl Into<String>) {
        self.start_date = text.into();
        self.mark_edited();
    }

    pub fn set_end_date(&mut self, text: impl Into<String>) {
        self.end_date = text.into();
        self.mark_edited();
    }

    /// Append a character to the focused field
    pub fn insert_char(&mut self, c: char) {
        let field = self.field_mut(self.focus);
        if field.chars().count() < MAX_INPUT_LEN {
            field.push(c);
            self.mark_edited();
        }
    }

    /// Remove the last character of the focused field
    pub fn delete_char(&mut self) {
        if self.field_mut(self.focus).pop().is_some() {
            self.mark_edited();
        }
    }

    /// Clear the focused field; returns false if it was already empty
    pub fn clear_focused(&mut self) -> bool {
        let field = self.field_mut(self.focus);
        if field.is_empty() {
            return false;
        }
        field.clear();
        self.mark_edited();
        true
    }

    pub fn toggle_filter_panel(&mut self) {
        self.filter_open = !self.filter_open;
        if !self.filter_open {
            self.focus = FormField::Query;
        }
    }

    /// Move focus to the next field; date fields are reachable only while the
    /// filter panel is open
    pub fn focus_next(&mut self) {
        self.focus = match (self.focus, self.filter_open) {
            (_, false) => FormField::Query,
            (FormField::Query, true) => FormField::StartDate,
            (FormField::StartDate, true) => FormField::EndDate,
            (FormField::EndDate, true) => FormField::Query,
        };
    }

    /// Validate the form and produce a normalized query
    ///
    /// On failure the form returns to `Editing` with an inline error and no
    /// field is modified. On success the date fields are rewritten to their
    /// normalized text, the filter panel closes and the form is `Submitting`.
    pub fn submit(&mut self) -> Result<SearchQuery, FormError> {
        match self.validate() {
            Ok((query, start, end)) => {
                self.start_date = start.clone();
                self.end_date = end.clone();
                self.filter_open = false;
                self.focus = FormField::Query;
                self.error = None;
                self.state = FormState::Submitting;
                Ok(SearchQuery::new(query).with_dates(&start, &end))
            }
            Err(err) => {
                if err.field() != FormField::Query {
                    self.filter_open = true;
                }
                self.focus = err.field();
                self.error = Some(err.clone());
                self.state = FormState::Editing;
                Err(err)
            }
        }
    }

    /// Called when the search started by `submit` has completed
    pub fn finish(&mut self) {
        if self.state == FormState::Submitting {
            self.state = FormState::Idle;
        }
    }

    fn validate(&self) -> Result<(String, String, String), FormError> {
        let query = self.query.trim();
        if query.is_empty() {
            return Err(FormError::EmptyQuery);
        }

        validate_date(&self.start_date)
            .map_err(|source| FormError::Date { field: FormField::StartDate, source })?;
        validate_date(&self.end_date)
            .map_err(|source| FormError::Date { field: FormField::EndDate, source })?;

        let (start, end) = validate_range(&self.start_date, &self.end_date)
            .map_err(|source| FormError::Date { field: FormField::EndDate, source })?;

        Ok((query.to_string(), start, end))
    }

    fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Query => &mut self.query,
            FormField::StartDate => &mut self.start_date,
            FormField::EndDate => &mut self.end_date,
        }
    }

    fn mark_edited(&mut self) {
        self.error = None;
        self.state = FormState::Editing;
    }
}

impl Default for SearchForm {
    fn default() -> Self {
        Self::new()
    }
}
