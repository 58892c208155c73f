use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::entries::{EntryLogic, RemoveRequest};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use crate::utils::date;

/// `del <id>` and the `remove` fallback.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    match cmd {
        Commands::Del { id } => {
            let store = super::open_store(cfg);
            EntryLogic::delete(&store, id)?;
            success(format!("Entry {} has been deleted.", id));
        }
        Commands::Remove {
            id,
            timestamp,
            kind,
            note,
        } => {
            let timestamp = match timestamp {
                Some(t) => Some(
                    date::parse_timestamp(t)
                        .ok_or_else(|| AppError::InvalidTimestamp(t.to_string()))?,
                ),
                None => None,
            };

            let req = RemoveRequest {
                id: id.clone(),
                timestamp,
                kind: kind.clone(),
                note: note.clone(),
            };

            let store = super::open_store(cfg);
            EntryLogic::remove(&store, &req)?;
            success("Entry has been removed.");
        }
        _ => {}
    }
    Ok(())
}
