use crate::errors::{AppError, AppResult};
use crate::models::{Entry, Kind};
use crate::store::EntryStore;
use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::Deserialize;
use tracing::{info, warn};
use uuid::Uuid;

/// Body of a fallback removal: any subset of the entry's fields.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RemoveRequest {
    pub id: Option<String>,
    pub timestamp: Option<DateTime<FixedOffset>>,
    pub kind: Option<String>,
    pub note: Option<String>,
}

/// High-level entry operations shared by the HTTP surface and the CLI.
///
/// Kinds are validated here, before the store is touched.
pub struct EntryLogic;

impl EntryLogic {
    /// Record an event at the current instant.
    pub fn punch(store: &EntryStore, kind: &str, note: Option<String>) -> AppResult<Entry> {
        let kind = Kind::parse(kind)?;
        let entry = store.upsert(Entry::punch(kind, note))?;
        info!(id = %entry.id, kind = %entry.kind, "punch");
        Ok(entry)
    }

    /// Manual entry with a caller supplied timestamp.
    pub fn create(
        store: &EntryStore,
        timestamp: DateTime<FixedOffset>,
        kind: &str,
        note: Option<String>,
    ) -> AppResult<Entry> {
        let kind = Kind::parse(kind)?;
        store.upsert(Entry::new(timestamp, kind, note))
    }

    /// Full replacement of an existing entry. The id must be a well-formed
    /// uuid here; only deletion is shape-tolerant.
    pub fn update(
        store: &EntryStore,
        id: &str,
        timestamp: DateTime<FixedOffset>,
        kind: &str,
        note: Option<String>,
    ) -> AppResult<Entry> {
        let kind = Kind::parse(kind)?;
        let id = Uuid::parse_str(id.trim()).map_err(|_| AppError::InvalidId(id.to_string()))?;

        // Lookup and write happen under one lock; a missing id is never
        // appended back.
        let mut updated = Entry::new(timestamp, kind, note);
        updated.id = id;
        if store.replace(updated.clone())? {
            Ok(updated)
        } else {
            Err(AppError::NotFound(id.to_string()))
        }
    }

    pub fn delete(store: &EntryStore, id_text: &str) -> AppResult<()> {
        info!(id = id_text, "delete requested");
        let removed = store.delete_by_id(id_text)?;
        info!(id = id_text, removed, "delete finished");

        if removed {
            Ok(())
        } else {
            Err(AppError::NotFound(id_text.to_string()))
        }
    }

    /// Try the id first, then the (timestamp, kind, note) composite.
    ///
    /// An unknown kind in the composite branch counts as "no match".
    pub fn remove(store: &EntryStore, req: &RemoveRequest) -> AppResult<()> {
        let ts_text = req.timestamp.map(|t| t.to_rfc3339()).unwrap_or_default();
        info!(
            id = req.id.as_deref().unwrap_or(""),
            ts = %ts_text,
            kind = req.kind.as_deref().unwrap_or(""),
            note = req.note.as_deref().unwrap_or(""),
            "remove requested"
        );

        if let Some(id) = req.id.as_deref().filter(|s| !s.trim().is_empty())
            && store.delete_by_id(id)?
        {
            return Ok(());
        }

        if let (Some(ts), Some(kind)) = (req.timestamp, req.kind.as_deref())
            && !kind.trim().is_empty()
        {
            match store.delete_by_composite(ts, kind, req.note.as_deref()) {
                Ok(true) => return Ok(()),
                Ok(false) => {}
                Err(AppError::InvalidKind(k)) => warn!(kind = %k, "composite skipped"),
                Err(e) => return Err(e),
            }
        }

        Err(AppError::NotFound(
            "no entry matched the id or the timestamp/kind/note combination".into(),
        ))
    }

    /// Entries of one local day, oldest first.
    pub fn list_day(store: &EntryStore, date: NaiveDate) -> AppResult<Vec<Entry>> {
        let mut entries = store.get_by_date(date)?;
        entries.sort_by_key(|e| e.timestamp);
        Ok(entries)
    }
}
