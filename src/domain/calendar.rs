//! Calendar model: dated entries plus recurring weekday notes

use crate::domain::key::{weekday_name, EntryKey};
use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Input value attached to every key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawEntry {
    pub data: String,
}

impl RawEntry {
    pub fn new(data: impl Into<String>) -> Self {
        RawEntry { data: data.into() }
    }
}

/// Input object in document order
pub type EntryMap = IndexMap<String, RawEntry>;

/// An entry that belongs to one calendar day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatedEntry {
    pub at: NaiveDateTime,
    pub data: String,
}

impl DatedEntry {
    pub fn date(&self) -> NaiveDate {
        self.at.date()
    }

    pub fn weekday(&self) -> Weekday {
        self.at.weekday()
    }

    /// Component-wise year/month/day comparison
    pub fn is_on(&self, day: NaiveDate) -> bool {
        self.at.year() == day.year() && self.at.month() == day.month() && self.at.day() == day.day()
    }
}

/// Notes keyed by the literal input key.
///
/// Keys that are not weekday names are kept too; they are simply never
/// looked up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeekdayNotes {
    notes: IndexMap<String, String>,
}

impl WeekdayNotes {
    pub fn insert(&mut self, key: impl Into<String>, data: impl Into<String>) {
        self.notes.insert(key.into(), data.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.notes.get(key).map(String::as_str)
    }

    /// Note for the given day of week
    pub fn for_weekday(&self, day: Weekday) -> Option<&str> {
        self.get(weekday_name(day))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.notes.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}

/// Result of classifying one input object
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Calendar {
    /// Dated entries, ascending by date
    pub days: Vec<DatedEntry>,
    pub weekdays: WeekdayNotes,
    /// Keys stored as notes that match no weekday
    pub unrecognized: Vec<String>,
}

impl Calendar {
    /// Partition entries into dated entries and weekday notes, then sort the
    /// dated entries.
    ///
    /// The sort is stable: entries on the same date keep their input order.
    pub fn classify<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a RawEntry)>,
    {
        let mut calendar = Calendar::default();

        for (key, entry) in entries {
            match EntryKey::classify(key) {
                EntryKey::Date(at) => calendar.days.push(DatedEntry {
                    at,
                    data: entry.data.clone(),
                }),
                EntryKey::Weekday(_) => calendar.weekdays.insert(key, entry.data.as_str()),
                EntryKey::Unrecognized(raw) => {
                    calendar.weekdays.insert(raw.as_str(), entry.data.as_str());
                    calendar.unrecognized.push(raw);
                }
            }
        }

        calendar.days.sort_by_key(|entry| entry.at);
        calendar
    }

    /// Classify an entry map in document order
    pub fn from_entries(entries: &EntryMap) -> Self {
        Self::classify(entries.iter().map(|(key, entry)| (key.as_str(), entry)))
    }

    /// Weekday note attached to a dated entry, if any
    pub fn note_for(&self, entry: &DatedEntry) -> Option<&str> {
        self.weekdays.for_weekday(entry.weekday())
    }

    /// Number of input keys this calendar was built from
    pub fn key_count(&self) -> usize {
        self.days.len() + self.weekdays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty() && self.weekdays.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(pairs: &[(&str, &str)]) -> EntryMap {
        pairs
            .iter()
            .map(|(key, data)| (key.to_string(), RawEntry::new(*data)))
            .collect()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_partition_is_exhaustive_and_exclusive() {
        let input = entries(&[
            ("2024-01-10", "A"),
            ("Wed", "W!"),
            ("not-a-date", "X"),
            ("2024-01-08", "B"),
            ("Mon", "M"),
        ]);

        let calendar = Calendar::from_entries(&input);

        assert_eq!(calendar.days.len(), 2);
        assert_eq!(calendar.weekdays.len(), 3);
        assert_eq!(calendar.key_count(), input.len());
        for key in input.keys() {
            let dated = EntryKey::classify(key).is_date();
            assert_ne!(dated, calendar.weekdays.contains_key(key));
        }
    }

    #[test]
    fn test_days_sorted_ascending() {
        let input = entries(&[
            ("2024-03-01", "c"),
            ("2023-12-31", "a"),
            ("2024-01-15", "b"),
        ]);

        let calendar = Calendar::from_entries(&input);
        let data: Vec<&str> = calendar.days.iter().map(|d| d.data.as_str()).collect();

        assert_eq!(data, vec!["a", "b", "c"]);
        assert!(calendar.days.windows(2).all(|w| w[0].at <= w[1].at));
    }

    #[test]
    fn test_equal_dates_keep_input_order() {
        let input = entries(&[
            ("2024/01/10", "second-format"),
            ("2024-01-09", "earlier"),
            ("2024-01-10", "iso"),
            ("Jan 10 2024", "long"),
        ]);

        let calendar = Calendar::from_entries(&input);
        let data: Vec<&str> = calendar.days.iter().map(|d| d.data.as_str()).collect();

        assert_eq!(data, vec!["earlier", "second-format", "iso", "long"]);
    }

    #[test]
    fn test_weekday_note_lookup() {
        let input = entries(&[("2024-01-10", "A"), ("Wed", "W!"), ("Thu", "T")]);
        let calendar = Calendar::from_entries(&input);

        let entry = &calendar.days[0];
        assert_eq!(entry.weekday(), Weekday::Wed);
        assert_eq!(calendar.note_for(entry), Some("W!"));
    }

    #[test]
    fn test_missing_weekday_note_is_none() {
        let input = entries(&[("2024-01-11", "A"), ("Wed", "W!")]);
        let calendar = Calendar::from_entries(&input);

        assert_eq!(calendar.note_for(&calendar.days[0]), None);
    }

    #[test]
    fn test_unrecognized_key_is_inert_note() {
        let input = entries(&[("not-a-date", "X")]);
        let calendar = Calendar::from_entries(&input);

        assert!(calendar.days.is_empty());
        assert_eq!(calendar.weekdays.get("not-a-date"), Some("X"));
        assert_eq!(calendar.unrecognized, vec!["not-a-date".to_string()]);
        for day in [Weekday::Sun, Weekday::Mon, Weekday::Sat] {
            assert_eq!(calendar.weekdays.for_weekday(day), None);
        }
    }

    #[test]
    fn test_empty_input() {
        let calendar = Calendar::from_entries(&EntryMap::new());
        assert!(calendar.is_empty());
        assert_eq!(calendar.key_count(), 0);
    }

    #[test]
    fn test_is_on_compares_calendar_day() {
        let entry = DatedEntry {
            at: date(2024, 1, 10).and_hms_opt(23, 59, 0).unwrap(),
            data: String::new(),
        };
        assert!(entry.is_on(date(2024, 1, 10)));
        assert!(!entry.is_on(date(2024, 1, 11)));
        assert!(!entry.is_on(date(2023, 1, 10)));
        assert_eq!(entry.date(), date(2024, 1, 10));
    }
}
