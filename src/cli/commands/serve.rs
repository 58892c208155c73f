use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::http::{self, AppState};
use std::net::SocketAddr;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Serve { bind } = cmd {
        let bind = bind.as_deref().unwrap_or(&cfg.bind);
        let addr: SocketAddr = bind
            .parse()
            .map_err(|e| AppError::Config(format!("invalid bind address '{bind}': {e}")))?;

        let state = AppState::new(super::open_store(cfg));

        let runtime = tokio::runtime::Runtime::new()?;
        runtime.block_on(http::serve(state, addr))?;
    }
    Ok(())
}
