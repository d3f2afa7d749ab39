use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use super::app::{MessageType, StatusMessage};
use super::layout::AppLayout;
use super::timestamps::{format_clip_range, format_meeting_date, format_processing_time};
use crate::controller::{EMPTY_RESULTS_MESSAGE, UiState};
use crate::form::dates::DATE_PLACEHOLDER;
use crate::form::{FormField, SearchForm};
use crate::models::{City, SearchResponse, SearchResult};
use crate::utils::terminal::{sanitize, single_line, truncate_chars};

const BRIGHT: Color = Color::Rgb(250, 250, 250);
const MUTED: Color = Color::Rgb(113, 113, 122);
const ACCENT: Color = Color::Rgb(16, 185, 129); // Emerald
const DANGER: Color = Color::Rgb(239, 68, 68);
const SUMMARY: Color = Color::Rgb(96, 165, 250); // Blue
const BAR_BG: Color = Color::Rgb(24, 24, 27);

/// Snippet characters shown per list row
const LIST_SNIPPET_CHARS: usize = 80;

/// Everything needed to draw one frame
pub struct RenderState<'a> {
    pub form: &'a SearchForm,
    pub page: &'a UiState,
    pub selected_idx: usize,
    pub city: City,
    pub loading_dots: &'a str,
    pub status_message: Option<&'a StatusMessage>,
}

/// Render the entire UI
pub fn render_ui(frame: &mut Frame, state: &RenderState) {
    let response = state.page.results.as_ref().filter(|_| !state.page.is_loading);
    let show_summary = response.is_some_and(|r| !r.summary.trim().is_empty());
    let layout = AppLayout::new(frame.area(), state.form.is_filter_open(), show_summary);

    let title = format!(" Search {} City Council Records ", state.city.display_name());
    render_input(
        frame,
        layout.query_area,
        &title,
        state.form,
        FormField::Query,
        "Enter your search query",
    );
    if let Some((start_area, end_area)) = layout.date_areas {
        render_input(
            frame,
            start_area,
            " Start Date ",
            state.form,
            FormField::StartDate,
            DATE_PLACEHOLDER,
        );
        render_input(
            frame,
            end_area,
            " End Date ",
            state.form,
            FormField::EndDate,
            DATE_PLACEHOLDER,
        );
    }

    render_hint(frame, layout.hint_area, state.form);
    render_banner(frame, layout.banner_area, state);

    if let (Some(area), Some(response)) = (layout.summary_area, response) {
        render_summary(frame, area, &response.summary);
    }

    let visible = response.map(|r| state.page.window.visible(r)).unwrap_or(&[]);
    render_results_list(frame, layout.results_area, state, response);
    render_preview(frame, layout.preview_area, visible.get(state.selected_idx), state.city);
    render_status_bar(frame, layout.status_area, state);
}

fn render_input(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    form: &SearchForm,
    field: FormField,
    placeholder: &str,
) {
    let focused = form.focus() == field;
    let has_error = form.error().is_some_and(|e| e.field() == field);
    let value = form.value(field);

    let border_color = if has_error {
        DANGER
    } else if focused {
        ACCENT
    } else {
        MUTED
    };

    let content = if value.is_empty() {
        Span::styled(placeholder.to_string(), Style::default().fg(MUTED))
    } else {
        Span::styled(value.to_string(), Style::default().fg(BRIGHT))
    };

    let paragraph = Paragraph::new(Line::from(content)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(title.to_string()),
    );
    frame.render_widget(paragraph, area);

    if focused && area.width > 2 && area.height > 2 {
        let max_x = area.x + area.width - 2;
        let x = (area.x + 1 + value.chars().count() as u16).min(max_x);
        frame.set_cursor_position((x, area.y + 1));
    }
}

/// Inline form error, or the active date range
fn render_hint(frame: &mut Frame, area: Rect, form: &SearchForm) {
    let line = if let Some(error) = form.error() {
        Line::from(Span::styled(format!(" {}", error), Style::default().fg(DANGER)))
    } else if form.has_date_filter() {
        let mut spans = vec![Span::raw(" ")];
        if !form.start_date().trim().is_empty() {
            spans.push(Span::styled(
                format!("From: {}  ", form.start_date()),
                Style::default().fg(MUTED),
            ));
        }
        if !form.end_date().trim().is_empty() {
            spans.push(Span::styled(
                format!("To: {}", form.end_date()),
                Style::default().fg(MUTED),
            ));
        }
        Line::from(spans)
    } else {
        Line::from("")
    };

    frame.render_widget(Paragraph::new(line), area);
}

/// Loading indicator, error banner, or response stats
fn render_banner(frame: &mut Frame, area: Rect, state: &RenderState) {
    let page = state.page;
    let line = if page.is_loading {
        Line::from(Span::styled(
            format!(" Searching through records{}", state.loading_dots),
            Style::default().fg(BRIGHT),
        ))
    } else if let Some(error) = &page.error {
        Line::from(Span::styled(format!(" {}", error), Style::default().fg(DANGER)))
    } else if let Some(response) = &page.results {
        Line::from(Span::styled(
            format!(
                " {} results in {}",
                response.total_results,
                format_processing_time(response.processing_time)
            ),
            Style::default().fg(MUTED),
        ))
    } else {
        Line::from("")
    };

    frame.render_widget(Paragraph::new(line), area);
}

fn render_summary(frame: &mut Frame, area: Rect, summary: &str) {
    let paragraph = Paragraph::new(sanitize(summary))
        .style(Style::default().fg(BRIGHT))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(SUMMARY))
                .title(Span::styled(
                    " AI Summary ",
                    Style::default().fg(SUMMARY).add_modifier(Modifier::BOLD),
                )),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

fn results_block(title: String) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(MUTED))
        .title(title)
}

fn render_results_list(
    frame: &mut Frame,
    area: Rect,
    state: &RenderState,
    response: Option<&SearchResponse>,
) {
    if !state.page.search_performed {
        let intro = Text::from(vec![
            Line::from(""),
            Line::from(Span::styled(
                "Know your city",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from("Engage with your community"),
            Line::from(""),
            Line::from(Span::styled(
                format!("Search {} City Council Records", state.city.display_name()),
                Style::default().fg(MUTED),
            )),
        ]);
        let paragraph = Paragraph::new(intro)
            .alignment(ratatui::layout::Alignment::Center)
            .block(results_block(" Results ".to_string()));
        frame.render_widget(paragraph, area);
        return;
    }

    let Some(response) = response else {
        // Loading or failed: the banner says which
        frame.render_widget(results_block(" Results ".to_string()), area);
        return;
    };

    if response.is_empty() {
        let paragraph = Paragraph::new(EMPTY_RESULTS_MESSAGE)
            .style(Style::default().fg(MUTED))
            .wrap(Wrap { trim: true })
            .block(results_block(" Results ".to_string()));
        frame.render_widget(paragraph, area);
        return;
    }

    let window = &state.page.window;
    let visible = window.visible(response);

    let mut items: Vec<ListItem> = visible
        .iter()
        .enumerate()
        .map(|(idx, result)| {
            let selected = idx == state.selected_idx;
            let (title_style, body_style) = if selected {
                (
                    Style::default().fg(BRIGHT).bg(ACCENT).add_modifier(Modifier::BOLD),
                    Style::default().fg(BRIGHT).bg(ACCENT),
                )
            } else {
                (Style::default().add_modifier(Modifier::BOLD), Style::default().fg(MUTED))
            };

            let header = format!(
                "{} | {}",
                format_meeting_date(result.meeting_date),
                single_line(&result.meeting_title)
            );
            let snippet = format!(
                "  …\u{201c}{}\u{201d}…",
                truncate_chars(&single_line(&result.text), LIST_SNIPPET_CHARS)
            );

            ListItem::new(Text::from(vec![
                Line::from(Span::styled(header, title_style)),
                Line::from(Span::styled(snippet, body_style)),
            ]))
        })
        .collect();

    if window.has_more(response) {
        items.push(ListItem::new(Line::from(Span::styled(
            "▼ Show more results (Ctrl+L)",
            Style::default().fg(ACCENT),
        ))));
    }

    let title = format!(" Results ({} of {}) ", visible.len(), response.total_results);
    let list = List::new(items).block(results_block(title));
    let mut list_state = ListState::default().with_selected(Some(state.selected_idx));

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_preview(frame: &mut Frame, area: Rect, result: Option<&SearchResult>, city: City) {
    let content = if let Some(result) = result {
        let label = |text: &'static str| Span::styled(text, Style::default().fg(MUTED));

        let mut lines = vec![
            Line::from(Span::styled(
                single_line(&result.meeting_title),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(vec![label("Date: "), Span::raw(format_meeting_date(result.meeting_date))]),
            Line::from(vec![label("Speaker: "), Span::raw(single_line(&result.speaker))]),
        ];

        let clip =
            format_clip_range(&single_line(&result.start_time), &single_line(&result.end_time));
        if !clip.is_empty() {
            lines.push(Line::from(vec![label("Clip: "), Span::raw(clip)]));
        }
        lines.push(Line::from(vec![
            label("Relevance: "),
            Span::raw(format!("{:.2}", result.relevance_score)),
        ]));
        lines.push(Line::from(vec![
            label("Link: "),
            Span::styled(city.record_link(&result.event_id), Style::default().fg(ACCENT)),
        ]));
        lines.push(Line::from(""));

        let text = sanitize(&result.text);
        lines.push(Line::from(format!("…\u{201c}{}\u{201d}…", text.trim())));

        Text::from(lines)
    } else {
        Text::from(Span::styled("No result selected", Style::default().fg(MUTED)))
    };

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(MUTED))
                .title(" Preview "),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, state: &RenderState) {
    let (status_text, style) = if let Some(message) = state.status_message {
        let color = match message.message_type {
            MessageType::Success => ACCENT,
            MessageType::Error => DANGER,
        };
        (format!(" {} ", message.text), Style::default().fg(color).bg(BAR_BG))
    } else {
        let mut parts = vec!["Enter: search".to_string()];
        parts.push(if state.form.is_filter_open() {
            "Ctrl+F: hide dates".to_string()
        } else {
            "Ctrl+F: dates".to_string()
        });
        if state.form.is_filter_open() {
            parts.push("Tab: next field".to_string());
        }
        if let Some(response) = state.page.results.as_ref()
            && !response.is_empty()
        {
            parts.push("↑/↓: select".to_string());
            if state.page.window.has_more(response) {
                parts.push("Ctrl+L: more".to_string());
            }
            parts.push("Ctrl+Y: copy link".to_string());
        }
        parts.push("Esc: clear".to_string());
        parts.push("Ctrl+C: quit".to_string());

        (format!(" {} ", parts.join(" | ")), Style::default().fg(BRIGHT).bg(BAR_BG))
    };

    frame.render_widget(Paragraph::new(status_text).style(style), area);
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;

    use super::*;
    use crate::client::fake::sample_response;
    use crate::controller::ResultsWindow;

    fn buffer_text(buffer: &Buffer) -> String {
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn draw(form: &SearchForm, page: &UiState, status: Option<&StatusMessage>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal
            .draw(|f| {
                let state = RenderState {
                    form,
                    page,
                    selected_idx: 0,
                    city: City::Seattle,
                    loading_dots: "..",
                    status_message: status,
                };
                render_ui(f, &state);
            })
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn page_with(response: SearchResponse) -> UiState {
        UiState {
            search_performed: true,
            is_loading: false,
            error: None,
            results: Some(response),
            window: ResultsWindow::new(),
        }
    }

    #[test]
    fn test_initial_screen_shows_intro() {
        let screen = draw(&SearchForm::new(), &UiState::default(), None);
        assert!(screen.contains("Know your city"));
        assert!(screen.contains("Search Seattle City Council Records"));
        assert!(screen.contains("Enter your search query"));
    }

    #[test]
    fn test_loading_banner() {
        let page = UiState { search_performed: true, is_loading: true, ..UiState::default() };
        let screen = draw(&SearchForm::new(), &page, None);
        assert!(screen.contains("Searching through records.."));
    }

    #[test]
    fn test_error_banner() {
        let page = UiState {
            search_performed: true,
            error: Some(crate::client::GENERIC_ERROR_MESSAGE.to_string()),
            ..UiState::default()
        };
        let screen = draw(&SearchForm::new(), &page, None);
        assert!(screen.contains("An error occurred while fetching search results"));
        assert!(!screen.contains("Show more"));
    }

    #[test]
    fn test_results_window_with_show_more() {
        let page = page_with(sample_response(7, 7));
        let screen = draw(&SearchForm::new(), &page, None);

        assert!(screen.contains("Results (3 of 7)"));
        assert!(screen.contains("Council Meeting 0"));
        assert!(screen.contains("Council Meeting 2"));
        assert!(!screen.contains("Council Meeting 3"));
        assert!(screen.contains("Show more results"));
        assert!(screen.contains("AI Summary"));
        assert!(screen.contains("Found 7 relevant moments."));
    }

    #[test]
    fn test_all_results_visible_hides_show_more() {
        let page = page_with(sample_response(2, 2));
        let screen = draw(&SearchForm::new(), &page, None);
        assert!(screen.contains("Results (2 of 2)"));
        assert!(!screen.contains("Show more results"));
    }

    #[test]
    fn test_empty_results_message() {
        let page = page_with(sample_response(0, 12));
        let screen = draw(&SearchForm::new(), &page, None);
        assert!(screen.contains("No results found."));
        assert!(!screen.contains("Show more results"));
    }

    #[test]
    fn test_preview_shows_record_link() {
        let page = page_with(sample_response(1, 1));
        let screen = draw(&SearchForm::new(), &page, None);
        assert!(screen.contains("Speaker: Councilmember Rivera"));
        assert!(screen.contains("April 1, 2023"));
        assert!(screen.contains("Link:"));
    }

    #[test]
    fn test_inline_form_error() {
        let mut form = SearchForm::new();
        form.set_query("parks");
        form.set_start_date("tomorrow");
        let _ = form.submit();

        let screen = draw(&form, &UiState::default(), None);
        assert!(screen.contains("Start date: Invalid date: 'tomorrow'"));
        assert!(screen.contains("Start Date"));
        assert!(screen.contains("End Date"));
    }

    #[test]
    fn test_date_hint_when_panel_closed() {
        let mut form = SearchForm::new();
        form.set_query("parks");
        form.set_start_date("1/2/2023");
        form.submit().unwrap();

        let screen = draw(&form, &UiState::default(), None);
        assert!(screen.contains("From: 01/02/2023"));
    }

    #[test]
    fn test_status_message_replaces_hints() {
        let message = StatusMessage {
            text: "Link copied".to_string(),
            message_type: MessageType::Success,
            expires_at: Instant::now() + Duration::from_secs(3),
        };
        let screen = draw(&SearchForm::new(), &UiState::default(), Some(&message));
        assert!(screen.contains("Link copied"));
        assert!(!screen.contains("Ctrl+C: quit"));
    }

    #[test]
    fn test_backend_escape_sequences_not_rendered() {
        let mut response = sample_response(1, 1);
        response.summary = "\x1b[2JSummary text".to_string();
        response.results[0].meeting_title = "\x1b]0;evil\x07Budget Committee".to_string();
        let screen = draw(&SearchForm::new(), &page_with(response), None);
        assert!(screen.contains("Summary text"));
        assert!(screen.contains("Budget Committee"));
        assert!(!screen.contains("evil"));
    }

    #[test]
    fn test_small_terminal_does_not_panic() {
        let mut terminal = Terminal::new(TestBackend::new(20, 8)).unwrap();
        let form = SearchForm::new();
        let page = page_with(sample_response(5, 5));
        terminal
            .draw(|f| {
                let state = RenderState {
                    form: &form,
                    page: &page,
                    selected_idx: 0,
                    city: City::Seattle,
                    loading_dots: "",
                    status_message: None,
                };
                render_ui(f, &state);
            })
            .unwrap();
    }
}
