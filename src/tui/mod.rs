// Interactive search page
mod app;
mod events;
mod layout;
mod rendering;
mod terminal;
mod timestamps;

use std::sync::Arc;

use anyhow::Result;
pub use app::App;
pub use timestamps::{format_clip_range, format_meeting_date, format_processing_time};

use self::terminal::TerminalManager;
use crate::client::HttpSearchBackend;
use crate::config::AppConfig;
use crate::controller::PageController;

/// Run the interactive TUI against the configured search endpoint
pub fn run_interactive(config: &AppConfig) -> Result<()> {
    let backend = HttpSearchBackend::new(config.endpoint.clone())?;
    let mut app = App::new(PageController::new(Arc::new(backend)), config.city);

    let mut manager = TerminalManager::new()?;
    let res = app.run(manager.terminal_mut());
    manager.restore()?;

    res
}
