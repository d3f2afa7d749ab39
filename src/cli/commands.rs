use std::io::{self, Write};
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};

use crate::client::{GENERIC_ERROR_MESSAGE, HttpSearchBackend};
use crate::config::AppConfig;
use crate::controller::{EMPTY_RESULTS_MESSAGE, PageController, ResultsWindow};
use crate::form::SearchForm;
use crate::models::{City, SearchResponse};
use crate::tui::{format_clip_range, format_meeting_date, run_interactive};
use crate::utils::{default_log_path, init_file_logging, init_stderr_logging, sanitize, single_line};

#[derive(Parser)]
#[command(name = "civicly")]
#[command(version)]
#[command(about = "Search city council meeting transcripts", long_about = None)]
pub struct Cli {
    /// Search endpoint URL (overrides CIVICLY_API_URL)
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// City whose public records viewer is linked
    #[arg(long, global = true, default_value = "seattle")]
    pub city: City,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a single search and print the results
    Search {
        /// Search query text
        query: String,

        /// Only include meetings on or after this date (MM/DD/YYYY)
        #[arg(long, default_value = "")]
        from: String,

        /// Only include meetings on or before this date (MM/DD/YYYY)
        #[arg(long, default_value = "")]
        to: String,

        /// Number of result pages to print (3 results per page)
        #[arg(long, default_value_t = 1)]
        pages: usize,

        /// Print the raw response as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::resolve(cli.endpoint.as_deref(), cli.city)?;

    match &cli.command {
        Some(Commands::Search { query, from, to, pages, json }) => {
            init_stderr_logging()?;
            search(&config, query, from, to, *pages, *json)?;
        }
        None => {
            // The alternate screen owns the terminal, so logs go to a file
            if let Err(e) = default_log_path().and_then(|path| init_file_logging(&path)) {
                eprintln!("Warning: file logging disabled: {}", e);
            }
            run_interactive(&config)?;
        }
    }

    Ok(())
}

fn search(
    config: &AppConfig,
    query: &str,
    from: &str,
    to: &str,
    pages: usize,
    json: bool,
) -> Result<()> {
    let mut form = SearchForm::new();
    form.set_query(query);
    form.set_start_date(from);
    form.set_end_date(to);
    let query = form.submit()?;

    let backend = HttpSearchBackend::new(config.endpoint.clone())?;
    let mut page = PageController::new(Arc::new(backend));
    page.handle_search(query);
    page.wait_for_completion();

    let state = page.state();
    if let Some(message) = &state.error {
        bail!(message.clone());
    }
    let Some(response) = state.results.as_ref() else {
        bail!(GENERIC_ERROR_MESSAGE);
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if json {
        serde_json::to_writer_pretty(&mut out, response).context("Failed to write JSON")?;
        writeln!(out)?;
    } else {
        let mut window = ResultsWindow::new();
        for _ in 1..pages.max(1) {
            if !window.show_more(response) {
                break;
            }
        }
        print_response(&mut out, response, &window, config.city)?;
    }

    Ok(())
}

/// Plain-text rendering of a response window
pub fn print_response(
    out: &mut impl Write,
    response: &SearchResponse,
    window: &ResultsWindow,
    city: City,
) -> Result<()> {
    if response.is_empty() {
        writeln!(out, "{}", EMPTY_RESULTS_MESSAGE)?;
        return Ok(());
    }

    let summary = sanitize(&response.summary);
    if !summary.trim().is_empty() {
        writeln!(out, "AI Summary")?;
        writeln!(out, "==========")?;
        writeln!(out, "{}", summary.trim())?;
        writeln!(out)?;
    }

    let visible = window.visible(response);
    for (idx, result) in visible.iter().enumerate() {
        writeln!(out, "{}. {}", idx + 1, single_line(&result.meeting_title))?;
        writeln!(
            out,
            "   {} | {} | {}",
            format_meeting_date(result.meeting_date),
            single_line(&result.speaker),
            format_clip_range(&result.start_time, &result.end_time)
        )?;
        writeln!(out, "   {}", single_line(&result.text))?;
        writeln!(out, "   {}", city.record_link(&result.event_id))?;
        writeln!(out)?;
    }

    write!(out, "Showing {} of {} results", visible.len(), response.total_results)?;
    if window.has_more(response) {
        write!(out, " (use --pages to see more)")?;
    }
    writeln!(out)?;

    Ok(())
}
