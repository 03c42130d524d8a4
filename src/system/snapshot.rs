//! Rendering of log entries into a single snapshot text.

use chrono::{DateTime, Local, TimeZone, Utc};
use std::fmt::Display;

use crate::sink::{EntryKind, LogEntry};

/// Short date, medium time (e.g. `1/2/26, 3:04:05 PM`).
pub const TIMESTAMP_FORMAT: &str = "%-m/%-d/%y, %-I:%M:%S %p";

/// Format `date` in local time for a snapshot line.
pub fn format_timestamp(date: DateTime<Utc>) -> String {
    format_timestamp_in(date, &Local)
}

/// Format `date` in `tz` for a snapshot line.
pub fn format_timestamp_in<Tz>(date: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    date.with_timezone(tz).format(TIMESTAMP_FORMAT).to_string()
}

/// Render entries oldest first, one per line, with local timestamps.
///
/// Entries in `default_category` carry no category prefix. Only `Log` entries
/// are rendered.
pub fn render(entries: Vec<LogEntry>, default_category: &str) -> String {
    render_in(entries, default_category, &Local)
}

/// [`render`] with timestamps in `tz`.
pub fn render_in<Tz>(entries: Vec<LogEntry>, default_category: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut entries: Vec<LogEntry> = entries
        .into_iter()
        .filter(|e| e.kind == EntryKind::Log)
        .collect();
    entries.sort_by_key(|e| e.date);

    entries
        .iter()
        .map(|e| render_line(e, default_category, tz))
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_line<Tz>(entry: &LogEntry, default_category: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let timestamp = format_timestamp_in(entry.date, tz);
    if entry.category == default_category {
        format!("[{}] {}", timestamp, entry.message)
    } else {
        format!("[{}] [{}] {}", timestamp, entry.category, entry.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::LogLevel;
    use chrono::{Duration, FixedOffset, NaiveDate};

    fn entry(category: &str, message: &str, date: DateTime<Utc>) -> LogEntry {
        LogEntry {
            subsystem: "app".to_string(),
            category: category.to_string(),
            level: LogLevel::Info,
            kind: EntryKind::Log,
            message: message.to_string(),
            date,
        }
    }

    #[test]
    fn test_timestamp_format() {
        let naive = NaiveDate::from_ymd_opt(2026, 1, 2)
            .unwrap()
            .and_hms_opt(15, 4, 5)
            .unwrap();
        assert_eq!(naive.format(TIMESTAMP_FORMAT).to_string(), "1/2/26, 3:04:05 PM");
    }

    #[test]
    fn test_timestamp_converts_from_utc() {
        // 2026-01-02 20:04:05 UTC is 3:04:05 PM at UTC-5.
        let date = Utc.with_ymd_and_hms(2026, 1, 2, 20, 4, 5).unwrap();
        let offset = FixedOffset::west_opt(5 * 3600).unwrap();
        assert_eq!(format_timestamp_in(date, &offset), "1/2/26, 3:04:05 PM");

        // Crossing midnight moves the date too.
        let offset = FixedOffset::east_opt(9 * 3600).unwrap();
        assert_eq!(format_timestamp_in(date, &offset), "1/3/26, 5:04:05 AM");
    }

    #[test]
    fn test_render_pinned_output() {
        let t1 = Utc.with_ymd_and_hms(2026, 1, 2, 20, 4, 5).unwrap();
        let t2 = Utc.with_ymd_and_hms(2026, 1, 2, 20, 4, 6).unwrap();
        let offset = FixedOffset::west_opt(5 * 3600).unwrap();

        let content = render_in(
            vec![entry("network", "b", t2), entry("general", "a", t1)],
            "general",
            &offset,
        );
        assert_eq!(
            content,
            "[1/2/26, 3:04:05 PM] a\n[1/2/26, 3:04:06 PM] [network] b"
        );
    }

    #[test]
    fn test_local_timestamp_shape() {
        let stamp = format_timestamp(Utc::now());
        let (date, time) = stamp.split_once(", ").unwrap();
        assert_eq!(date.split('/').count(), 3);
        assert!(time.ends_with(" AM") || time.ends_with(" PM"));
        assert_eq!(time[..time.len() - 3].split(':').count(), 3);
    }

    #[test]
    fn test_render_prefixes_non_default_categories() {
        let t1 = Utc::now();
        let t2 = t1 + Duration::seconds(1);
        let content = render(
            vec![entry("general", "a", t1), entry("network", "b", t2)],
            "general",
        );

        let expected = format!(
            "[{}] a\n[{}] [network] b",
            format_timestamp(t1),
            format_timestamp(t2)
        );
        assert_eq!(content, expected);
        assert!(!content.ends_with('\n'));
    }

    #[test]
    fn test_render_sorts_by_date() {
        let t1 = Utc::now();
        let t2 = t1 + Duration::seconds(5);
        let content = render(
            vec![entry("general", "late", t2), entry("general", "early", t1)],
            "general",
        );
        let lines: Vec<_> = content.lines().collect();
        assert!(lines[0].ends_with("early"));
        assert!(lines[1].ends_with("late"));
    }

    #[test]
    fn test_render_skips_non_log_entries() {
        let now = Utc::now();
        let mut activity = entry("general", "activity", now);
        activity.kind = EntryKind::Activity;

        let content = render(vec![activity, entry("general", "kept", now)], "general");
        assert_eq!(content, format!("[{}] kept", format_timestamp(now)));
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(Vec::new(), "general"), "");
    }
}
