use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::entries::EntryLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date;

/// Manual create (`add`) and full replacement (`edit`).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Add {
            timestamp,
            kind,
            note,
        } => {
            let ts = date::parse_timestamp(timestamp)
                .ok_or_else(|| AppError::InvalidTimestamp(timestamp.to_string()))?;

            let store = super::open_store(cfg);
            let entry = EntryLogic::create(&store, ts, kind, note.clone())?;
            success(format!(
                "Added {} at {} ({})",
                entry.kind,
                entry.timestamp.to_rfc3339(),
                entry.id
            ));
        }
        Commands::Edit {
            id,
            timestamp,
            kind,
            note,
        } => {
            let ts = date::parse_timestamp(timestamp)
                .ok_or_else(|| AppError::InvalidTimestamp(timestamp.to_string()))?;

            let store = super::open_store(cfg);
            let entry = EntryLogic::update(&store, id, ts, kind, note.clone())?;
            success(format!(
                "Updated {}: {} at {}",
                entry.id,
                entry.kind,
                entry.timestamp.to_rfc3339()
            ));
        }
        _ => {}
    }
    Ok(())
}
