//! TUI application state and event handling.
//!
//! The `App` owns the search form and the page controller and runs the main
//! event loop via `run()`:
//!
//! - **Form editing**: keystrokes go to the focused field (query or, with the
//!   filter panel open, start/end date)
//! - **Submission**: Enter validates the form and hands the query to the page
//!   controller, which runs the request off the UI thread
//! - **Completion**: each tick drains finished requests; only the latest one is
//!   applied
//! - **Status messages**: transient feedback for clipboard operations
//! - **Dirty state tracking**: redraws only when state changes, or every 100ms
//!   for resize handling and the loading animation

use std::time::{Duration, Instant};

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;
use tracing::debug;

use super::events::{Action, poll_event};
use super::rendering::{RenderState, render_ui};
use super::timestamps::loading_dots;
use crate::clipboard::copy_link;
use crate::controller::PageController;
use crate::form::{FormField, SearchForm};
use crate::models::{City, SearchResult};

/// Duration for success status messages (milliseconds)
const STATUS_SUCCESS_DURATION_MS: u64 = 3000;
/// Duration for error status messages (milliseconds)
const STATUS_ERROR_DURATION_MS: u64 = 5000;
/// Rows moved by PageUp/PageDown
const PAGE_JUMP: isize = 5;

/// Type of status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Error,
}

/// Transient status message with expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub message_type: MessageType,
    pub expires_at: Instant,
}

pub struct App {
    form: SearchForm,
    page: PageController,
    city: City,
    selected_idx: usize,
    should_quit: bool,
    // Status message (clipboard feedback, etc.)
    status_message: Option<StatusMessage>,
    // Dirty state tracking for efficient rendering
    needs_redraw: bool,
    last_draw_time: Instant,
}

impl App {
    pub fn new(page: PageController, city: City) -> Self {
        Self {
            form: SearchForm::new(),
            page,
            city,
            selected_idx: 0,
            should_quit: false,
            status_message: None,
            needs_redraw: true, // Initial draw needed
            last_draw_time: Instant::now(),
        }
    }

    /// Set a transient status message with automatic expiry
    fn set_status(&mut self, text: impl Into<String>, message_type: MessageType, duration_ms: u64) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            message_type,
            expires_at: Instant::now() + Duration::from_millis(duration_ms),
        });
        self.needs_redraw = true;
    }

    /// Check and clear expired status messages
    fn check_and_clear_expired_status(&mut self) {
        let should_clear = self
            .status_message
            .as_ref()
            .map(|msg| Instant::now() >= msg.expires_at)
            .unwrap_or(false);
        if should_clear {
            self.status_message = None;
            self.needs_redraw = true;
        }
    }

    /// Apply any finished search to the page
    fn process_completions(&mut self) {
        if self.page.poll() {
            self.form.finish();
            self.selected_idx = 0;
            self.needs_redraw = true;
        }
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            self.check_and_clear_expired_status();
            self.process_completions();

            // Draw if dirty or if it's been >100ms (resize handling, loading dots)
            let now = Instant::now();
            let elapsed = now.duration_since(self.last_draw_time);
            if self.needs_redraw || elapsed >= Duration::from_millis(100) {
                let dots = self.page.loading_elapsed().map(loading_dots).unwrap_or("");
                terminal.draw(|f| {
                    let state = RenderState {
                        form: &self.form,
                        page: self.page.state(),
                        selected_idx: self.selected_idx,
                        city: self.city,
                        loading_dots: dots,
                        status_message: self.status_message.as_ref(),
                    };
                    render_ui(f, &state);
                })?;
                self.needs_redraw = false;
                self.last_draw_time = now;
            }

            let action = poll_event(Duration::from_millis(100))?;
            self.handle_action(action);
        }

        Ok(())
    }

    fn visible_results(&self) -> &[SearchResult] {
        let state = self.page.state();
        state.results.as_ref().map(|r| state.window.visible(r)).unwrap_or(&[])
    }

    /// Handle a user action (extracted for testing)
    fn handle_action(&mut self, action: Action) {
        let total_items = self.visible_results().len();
        match action {
            Action::Quit => self.should_quit = true,
            Action::ClearField => self.clear_field(),
            Action::MoveUp => self.move_selection(-1, total_items),
            Action::MoveDown => self.move_selection(1, total_items),
            Action::PageUp => self.move_selection(-PAGE_JUMP, total_items),
            Action::PageDown => self.move_selection(PAGE_JUMP, total_items),
            Action::Submit => self.submit(),
            Action::ShowMore => {
                if self.page.show_more() {
                    // Land on the first newly revealed result
                    self.selected_idx = total_items.min(self.visible_results().len() - 1);
                    self.needs_redraw = true;
                }
            }
            Action::CopyLink => self.copy_selected_link(),
            Action::ToggleFilter => {
                self.form.toggle_filter_panel();
                self.needs_redraw = true;
            }
            Action::FocusNext => {
                self.form.focus_next();
                self.needs_redraw = true;
            }
            Action::InsertChar(c) => {
                self.form.insert_char(c);
                self.needs_redraw = true;
            }
            Action::DeleteChar => {
                self.form.delete_char();
                self.needs_redraw = true;
            }
            Action::None => {}
        }
    }

    fn submit(&mut self) {
        match self.form.submit() {
            Ok(query) => {
                self.page.handle_search(query);
                self.selected_idx = 0;
            }
            Err(err) => debug!(error = %err, "search form rejected"),
        }
        self.needs_redraw = true;
    }

    /// Esc clears the focused field; on an empty date field it closes the
    /// filter panel, and on an empty query it quits
    fn clear_field(&mut self) {
        if self.form.clear_focused() {
            self.needs_redraw = true;
        } else if self.form.focus() != FormField::Query {
            self.form.toggle_filter_panel();
            self.needs_redraw = true;
        } else {
            self.should_quit = true;
        }
    }

    fn copy_selected_link(&mut self) {
        let Some(result) = self.visible_results().get(self.selected_idx) else {
            self.set_status("✗ No result selected", MessageType::Error, STATUS_ERROR_DURATION_MS);
            return;
        };

        let link = self.city.record_link(&result.event_id);
        match copy_link(&link) {
            Ok(()) => {
                self.set_status(
                    "✓ Record link copied to clipboard",
                    MessageType::Success,
                    STATUS_SUCCESS_DURATION_MS,
                );
            }
            Err(e) => {
                self.set_status(
                    format!("✗ Clipboard error: {}", e),
                    MessageType::Error,
                    STATUS_ERROR_DURATION_MS,
                );
            }
        }
    }

    fn move_selection(&mut self, delta: isize, total: usize) {
        if total == 0 {
            self.selected_idx = 0;
            return;
        }

        let old_idx = self.selected_idx;
        let new_idx = (self.selected_idx as isize + delta).max(0) as usize;
        self.selected_idx = new_idx.min(total - 1);

        if old_idx != self.selected_idx {
            self.needs_redraw = true;
        }
    }
}
