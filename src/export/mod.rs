// src/export/mod.rs

pub mod csv;
mod fs_utils;
pub mod logic;

pub use logic::ExportLogic;

use crate::ui::messages::success;
use std::path::Path;

/// Common completion message for exports.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}
