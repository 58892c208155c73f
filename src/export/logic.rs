use super::{csv, fs_utils::ensure_writable, notify_export_success};
use crate::errors::AppResult;
use crate::store::EntryStore;
use crate::ui::messages::info;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export every entry to a CSV file, oldest first.
    ///
    /// Returns the number of exported rows.
    pub fn export_csv(store: &EntryStore, file: &str, force: bool) -> AppResult<usize> {
        let path = Path::new(file);
        ensure_writable(path, force)?;

        let mut entries = store.get_all()?;
        entries.sort_by_key(|e| e.timestamp);

        info(format!("Exporting to CSV: {}", path.display()));
        let out = BufWriter::new(File::create(path)?);
        csv::write_csv(out, &entries)?;

        notify_export_success("CSV", path);
        Ok(entries.len())
    }
}
