//! Shared traits for Store records.

use chrono::NaiveDateTime;

use super::datetime::parse_store_timestamp;

/// A record that carries Store-assigned creation times.
pub trait Dated {
    /// Full ISO-8601 creation timestamp, if the Store sent one.
    fn timestamp(&self) -> Option<&str>;

    /// Display date string.
    fn date(&self) -> &str;

    /// Best-effort creation time: `timestamp` first, then `date`.
    fn recorded_at(&self) -> Option<NaiveDateTime> {
        self.timestamp()
            .and_then(parse_store_timestamp)
            .or_else(|| parse_store_timestamp(self.date()))
    }
}

/// Order records newest first.
///
/// Records without a parseable time count as oldest and go after every
/// timed record. The sort is stable, so records with equal times, and the
/// untimed ones among themselves, keep the order the Store returned them
/// in. If no record has a parseable time the slice is left untouched.
pub fn sort_newest_first<T: Dated>(items: &mut [T]) {
    if items.iter().all(|item| item.recorded_at().is_none()) {
        return;
    }
    items.sort_by(|a, b| b.recorded_at().cmp(&a.recorded_at()));
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Stamp {
        name: &'static str,
        timestamp: Option<&'static str>,
        date: &'static str,
    }

    impl Dated for Stamp {
        fn timestamp(&self) -> Option<&str> {
            self.timestamp
        }

        fn date(&self) -> &str {
            self.date
        }
    }

    fn stamp(name: &'static str, timestamp: Option<&'static str>, date: &'static str) -> Stamp {
        Stamp {
            name,
            timestamp,
            date,
        }
    }

    #[test]
    fn test_recorded_at_prefers_timestamp() {
        let s = stamp("a", Some("2024-01-02T10:00:00"), "2020-01-01");
        assert_eq!(
            s.recorded_at().unwrap().format("%Y").to_string(),
            "2024"
        );
    }

    #[test]
    fn test_recorded_at_falls_back_to_date() {
        let s = stamp("a", None, "2023-05-05 12:00:00");
        assert!(s.recorded_at().is_some());
    }

    #[test]
    fn test_sort_newest_first() {
        let mut items = vec![
            stamp("old", Some("2024-01-01T00:00:00"), ""),
            stamp("new", Some("2024-01-03T00:00:00"), ""),
            stamp("mid", Some("2024-01-02T00:00:00"), ""),
        ];
        sort_newest_first(&mut items);
        let names: Vec<_> = items.iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_untimed_records_sort_last() {
        let mut items = vec![
            stamp("first-untimed", None, "?"),
            stamp("old", Some("2024-01-01T00:00:00"), ""),
            stamp("second-untimed", None, "?"),
        ];
        sort_newest_first(&mut items);
        let names: Vec<_> = items.iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["old", "first-untimed", "second-untimed"]);
    }

    #[test]
    fn test_sort_keeps_order_without_times() {
        let mut items = vec![stamp("b", None, "?"), stamp("a", None, "?")];
        sort_newest_first(&mut items);
        assert_eq!(items[0].name, "b");
        assert_eq!(items[1].name, "a");
    }
}
