pub mod add;
pub mod config;
pub mod del;
pub mod export;
pub mod init;
pub mod list;
pub mod punch;
pub mod serve;

use crate::config::Config;
use crate::store::EntryStore;

/// Store over the configured data file.
pub(crate) fn open_store(cfg: &Config) -> EntryStore {
    EntryStore::new(crate::utils::path::expand_tilde(&cfg.data_file))
}
