use super::kind::Kind;
use chrono::{DateTime, FixedOffset, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One clock event, as persisted in the data file.
///
/// Entries are values: an edit builds a new `Entry` with the same id
/// (see [`Entry::with_fields`]) and hands it to the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: Uuid,
    pub timestamp: DateTime<FixedOffset>, // RFC 3339, offset preserved
    pub kind: Kind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Entry {
    /// New entry with a fresh v4 id.
    pub fn new(timestamp: DateTime<FixedOffset>, kind: Kind, note: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp,
            kind,
            note: clean_note(note),
        }
    }

    /// New entry stamped with the current local instant.
    pub fn punch(kind: Kind, note: Option<String>) -> Self {
        Self::new(Local::now().fixed_offset(), kind, note)
    }

    /// Copy of this entry with every mutable field replaced. The id is kept.
    pub fn with_fields(
        &self,
        timestamp: DateTime<FixedOffset>,
        kind: Kind,
        note: Option<String>,
    ) -> Self {
        Self {
            id: self.id,
            timestamp,
            kind,
            note: clean_note(note),
        }
    }

    /// Calendar date in the entry's own offset.
    pub fn local_date(&self) -> NaiveDate {
        self.timestamp.date_naive()
    }

    pub fn note_str(&self) -> &str {
        self.note.as_deref().unwrap_or("")
    }

    pub fn time_str(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}

/// Empty notes are stored as absent. Anything else, whitespace included, is
/// kept verbatim so composite matching stays exact.
fn clean_note(note: Option<String>) -> Option<String> {
    note.filter(|n| !n.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    #[test]
    fn local_date_uses_entry_offset() {
        let e = Entry::new(ts("2024-03-01T23:30:00-03:00"), Kind::Entrada, None);
        assert_eq!(e.local_date(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }

    #[test]
    fn with_fields_keeps_id() {
        let e = Entry::new(ts("2024-03-01T08:00:00-03:00"), Kind::Entrada, None);
        let edited = e.with_fields(
            ts("2024-03-01T18:00:00-03:00"),
            Kind::Saida,
            Some("late".into()),
        );
        assert_eq!(edited.id, e.id);
        assert_eq!(edited.kind, Kind::Saida);
        assert_eq!(edited.note.as_deref(), Some("late"));
    }

    #[test]
    fn empty_note_is_absent_and_not_serialized() {
        let e = Entry::new(ts("2024-03-01T08:00:00-03:00"), Kind::Saida, Some(String::new()));
        assert_eq!(e.note, None);
        let json = serde_json::to_string(&e).unwrap();
        assert!(!json.contains("note"));
        assert!(json.contains("2024-03-01T08:00:00-03:00"));
    }

    #[test]
    fn utc_timestamp_serializes_with_z() {
        let e = Entry::new(ts("2024-03-01T08:00:00+00:00"), Kind::Entrada, None);
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("2024-03-01T08:00:00Z"));
    }

    #[test]
    fn whitespace_note_is_kept_verbatim() {
        let e = Entry::new(ts("2024-03-01T08:00:00-03:00"), Kind::Entrada, Some(" ".into()));
        assert_eq!(e.note.as_deref(), Some(" "));
        let edited = e.with_fields(e.timestamp, Kind::Entrada, Some("\t".into()));
        assert_eq!(edited.note.as_deref(), Some("\t"));
    }
}
