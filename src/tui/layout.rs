use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Rows used by the bordered single-line inputs
const INPUT_HEIGHT: u16 = 3;
/// Rows used by the summary panel (borders included)
const SUMMARY_HEIGHT: u16 = 6;

/// Screen layout for the search page
pub struct AppLayout {
    pub query_area: Rect,
    /// Start/end date inputs, present only while the filter panel is open
    pub date_areas: Option<(Rect, Rect)>,
    pub hint_area: Rect,
    pub banner_area: Rect,
    pub summary_area: Option<Rect>,
    pub results_area: Rect,
    pub preview_area: Rect,
    pub status_area: Rect,
}

impl AppLayout {
    /// Top to bottom:
    /// - Query input (3 rows), then date inputs side by side when the filter panel is open
    /// - Hint line (date range or inline form error) and banner line (loading/error)
    /// - Summary panel when a response with a summary is shown
    /// - Results list 60% width (left) and preview pane 40% width (right)
    /// - Status bar (bottom row)
    pub fn new(area: Rect, filter_open: bool, show_summary: bool) -> Self {
        let filter_height = if filter_open { INPUT_HEIGHT } else { 0 };
        let summary_height = if show_summary { SUMMARY_HEIGHT } else { 0 };

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(INPUT_HEIGHT),
                Constraint::Length(filter_height),
                Constraint::Length(1), // Hint
                Constraint::Length(1), // Banner
                Constraint::Length(summary_height),
                Constraint::Min(3), // Results + preview
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let date_areas = filter_open.then(|| {
            let halves = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(rows[1]);
            (halves[0], halves[1])
        });

        let main = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(60), // Results list
                Constraint::Percentage(40), // Preview pane
            ])
            .split(rows[5]);

        Self {
            query_area: rows[0],
            date_areas,
            hint_area: rows[2],
            banner_area: rows[3],
            summary_area: show_summary.then_some(rows[4]),
            results_area: main[0],
            preview_area: main[1],
            status_area: rows[6],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_without_filter_or_summary() {
        let layout = AppLayout::new(Rect::new(0, 0, 100, 30), false, false);

        assert_eq!(layout.query_area.height, 3);
        assert!(layout.date_areas.is_none());
        assert!(layout.summary_area.is_none());
        assert_eq!(layout.hint_area.y, 3);
        assert_eq!(layout.banner_area.y, 4);

        // Status bar is the last row
        assert_eq!(layout.status_area.height, 1);
        assert_eq!(layout.status_area.y, 29);

        // Remaining 24 rows go to results/preview split 60/40
        assert_eq!(layout.results_area.height, 24);
        assert_eq!(layout.results_area.width, 60);
        assert_eq!(layout.preview_area.width, 40);
    }

    #[test]
    fn test_layout_with_filter_panel() {
        let layout = AppLayout::new(Rect::new(0, 0, 100, 30), true, false);

        let (start, end) = layout.date_areas.unwrap();
        assert_eq!(start.y, 3);
        assert_eq!(start.height, 3);
        assert_eq!(start.width, 50);
        assert_eq!(end.x, 50);
        assert_eq!(layout.hint_area.y, 6);
        assert_eq!(layout.results_area.height, 21);
    }

    #[test]
    fn test_layout_with_summary() {
        let layout = AppLayout::new(Rect::new(0, 0, 100, 30), false, true);

        let summary = layout.summary_area.unwrap();
        assert_eq!(summary.y, 5);
        assert_eq!(summary.height, SUMMARY_HEIGHT);
        assert_eq!(layout.results_area.y, 11);
        assert_eq!(layout.results_area.height, 18);
    }
}
