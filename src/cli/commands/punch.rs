use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::entries::EntryLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::colors::colorize_in_out;

/// Punch now.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Punch { kind, note } = cmd {
        let store = super::open_store(cfg);
        let entry = EntryLogic::punch(&store, kind, note.clone())?;

        success(format!(
            "{} at {} ({})",
            colorize_in_out(entry.kind.as_str(), entry.kind.is_in()),
            entry.timestamp.format("%Y-%m-%d %H:%M:%S %:z"),
            entry.id
        ));
    }
    Ok(())
}
