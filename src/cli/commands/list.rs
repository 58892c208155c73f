use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::entries::EntryLogic;
use crate::errors::{AppError, AppResult};
use crate::models::Entry;
use crate::utils::date;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { date: date_str } = cmd {
        let day = match date_str {
            Some(s) => date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?,
            None => date::today(),
        };

        let store = super::open_store(cfg);
        let entries = EntryLogic::list_day(&store, day)?;

        if entries.is_empty() {
            println!("No entries for {}", day);
            return Ok(());
        }

        println!("=== {} ===", day);
        print!("{}", render(&entries));
    }
    Ok(())
}

fn render(entries: &[Entry]) -> String {
    let mut table = Table::new(vec![
        Column::new("TIME", 9),
        Column::new("KIND", 8),
        Column::new("ID", 36),
        Column::new("NOTE", 0),
    ]);

    for e in entries {
        table.add_row(vec![
            e.time_str(),
            e.kind.to_string(),
            e.id.to_string(),
            e.note_str().to_string(),
        ]);
    }

    table.render()
}
