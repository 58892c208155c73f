//! Flat-file entry store.
//!
//! The whole collection lives in one JSON array. Every operation takes the
//! same lock for its full read-modify-write span and re-reads the file, so
//! there is no cache to go stale and no reader can see a half-written file.

pub mod matching;

use crate::errors::AppResult;
use crate::models::{Entry, Kind};
use chrono::{DateTime, FixedOffset, NaiveDate};
use serde_json::Value;
use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, info};
use uuid::Uuid;

pub struct EntryStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl EntryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    // The guard protects no data, so a poisoned lock is still usable.
    fn acquire(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Full collection; empty when the file does not exist yet.
    pub fn get_all(&self) -> AppResult<Vec<Entry>> {
        let _guard = self.acquire();
        self.load()
    }

    pub fn get_by_id(&self, id: Uuid) -> AppResult<Option<Entry>> {
        Ok(self.get_all()?.into_iter().find(|e| e.id == id))
    }

    /// Entries whose local calendar date is `date`. Order is not guaranteed.
    pub fn get_by_date(&self, date: NaiveDate) -> AppResult<Vec<Entry>> {
        Ok(self
            .get_all()?
            .into_iter()
            .filter(|e| e.local_date() == date)
            .collect())
    }

    /// Replace the entry with the same id in place, or append it.
    pub fn upsert(&self, entry: Entry) -> AppResult<Entry> {
        let _guard = self.acquire();
        let mut list = self.load()?;

        match list.iter().position(|e| e.id == entry.id) {
            Some(idx) => list[idx] = entry.clone(),
            None => list.push(entry.clone()),
        }

        self.save(&list)?;
        debug!(id = %entry.id, kind = %entry.kind, "entry upserted");
        Ok(entry)
    }

    /// Replace the stored entry with the same id. Never appends: returns
    /// `false` when the id is not present at the moment the lock is held.
    pub fn replace(&self, entry: Entry) -> AppResult<bool> {
        let _guard = self.acquire();
        let mut list = self.load()?;

        let Some(slot) = list.iter_mut().find(|e| e.id == entry.id) else {
            return Ok(false);
        };
        *slot = entry;

        self.save(&list)?;
        Ok(true)
    }

    /// Delete by an id written in any common textual shape.
    ///
    /// A strict parse removes every entry with that id. If the text does not
    /// parse, or nothing matched, the text is canonicalized and compared with
    /// every rendering of each stored id; the first hit is removed.
    pub fn delete_by_id(&self, id_text: &str) -> AppResult<bool> {
        let id_text = id_text.trim();
        if id_text.is_empty() {
            return Ok(false);
        }

        let _guard = self.acquire();
        if !self.path.exists() {
            return Ok(false);
        }
        let mut list = self.load()?;

        let mut removed = false;

        // 1) strict uuid
        if let Ok(id) = Uuid::parse_str(id_text) {
            let before = list.len();
            list.retain(|e| e.id != id);
            removed = list.len() < before;
        }

        // 2) textual equivalence
        if !removed {
            let wanted = matching::canonicalize(id_text);
            if let Some(idx) = list
                .iter()
                .position(|e| matching::id_matches_text(&e.id, &wanted))
            {
                let gone = list.remove(idx);
                info!(idx, id = %gone.id, "textual id match");
                removed = true;
            }
        }

        if !removed {
            return Ok(false);
        }

        self.save(&list)?;
        Ok(true)
    }

    /// Delete the first entry matching (timestamp ±2s, kind, note).
    ///
    /// Fails with `InvalidKind` before touching the file if `kind` does not
    /// normalize.
    pub fn delete_by_composite(
        &self,
        timestamp: DateTime<FixedOffset>,
        kind: &str,
        note: Option<&str>,
    ) -> AppResult<bool> {
        let kind = Kind::parse(kind)?;

        let _guard = self.acquire();
        if !self.path.exists() {
            return Ok(false);
        }
        let mut list = self.load()?;

        let Some(idx) = list
            .iter()
            .position(|e| matching::composite_matches(e, &timestamp, kind, note))
        else {
            return Ok(false);
        };

        let gone = list.remove(idx);
        let ts = gone.timestamp.to_rfc3339();
        info!(
            idx,
            id = %gone.id,
            ts = %ts,
            kind = %gone.kind,
            note = gone.note_str(),
            "composite match removed"
        );

        self.save(&list)?;
        Ok(true)
    }

    // ---------------------------------------------------------------
    // File access (caller holds the lock)
    // ---------------------------------------------------------------

    fn load(&self) -> AppResult<Vec<Entry>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(s) => s,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        // A literal `null` reads as an empty collection.
        let value: Value = serde_json::from_str(&raw)?;
        let list: Option<Vec<Entry>> = serde_json::from_value(lowercase_keys(value))?;
        Ok(list.unwrap_or_default())
    }

    /// Truncate and rewrite the whole file.
    fn save(&self, list: &[Entry]) -> AppResult<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, list)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        writer.get_ref().sync_all()?;
        Ok(())
    }
}

/// Field names are case-insensitive on read: fold object keys of each array
/// element to lower case.
fn lowercase_keys(value: Value) -> Value {
    match value {
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .map(|item| match item {
                    Value::Object(map) => Value::Object(
                        map.into_iter()
                            .map(|(k, v)| (k.to_lowercase(), v))
                            .collect(),
                    ),
                    other => other,
                })
                .collect(),
        ),
        other => other,
    }
}
