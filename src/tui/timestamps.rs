use std::time::Duration;

use chrono::NaiveDate;

/// Meeting date in long US form: "April 5, 2023"
pub fn format_meeting_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Clip position within the meeting recording, e.g. "00:10:00 – 00:10:30"
pub fn format_clip_range(start_time: &str, end_time: &str) -> String {
    match (start_time.trim(), end_time.trim()) {
        ("", "") => String::new(),
        (start, "") => start.to_string(),
        ("", end) => end.to_string(),
        (start, end) => format!("{} – {}", start, end),
    }
}

/// Backend processing time reported in seconds: "850ms" below a second, "1.3s" above
pub fn format_processing_time(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "?".to_string();
    }
    if seconds < 1.0 {
        format!("{}ms", (seconds * 1000.0).round() as u64)
    } else {
        format!("{:.1}s", seconds)
    }
}

/// Animated suffix for the loading line: "", ".", "..", "..." advancing every 500ms
pub fn loading_dots(elapsed: Duration) -> &'static str {
    const FRAMES: [&str; 4] = ["", ".", "..", "..."];
    FRAMES[(elapsed.as_millis() / 500 % 4) as usize]
}
