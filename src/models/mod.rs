pub mod entry;
pub mod kind;

pub use entry::Entry;
pub use kind::Kind;
