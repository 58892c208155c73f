use clap::{Parser, Subcommand};

/// Command-line interface definition for rTimeclock
/// Personal time clock backed by a JSON file, with an HTTP UI
#[derive(Parser)]
#[command(
    name = "rtimeclock",
    version = env!("CARGO_PKG_VERSION"),
    about = "A personal time clock: punch in/out now, edit entries, list by day and export CSV",
    long_about = None
)]
pub struct Cli {
    /// Override the data file path (useful for tests or custom storage)
    #[arg(global = true, long = "data")]
    pub data: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the data file
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Specify the editor to use (vim, nano, or custom path)")]
        editor: Option<String>,
    },

    /// Run the HTTP service (JSON API + web page)
    Serve {
        #[arg(long = "bind", help = "Address to listen on, e.g. 127.0.0.1:5080")]
        bind: Option<String>,
    },

    /// Punch now (entrada/in/ent or saida/out/sai)
    Punch {
        kind: String,

        #[arg(long = "note", short = 'n', help = "Optional note")]
        note: Option<String>,
    },

    /// Add an entry with an explicit timestamp
    Add {
        /// RFC 3339 timestamp, or YYYY-MM-DDTHH:MM in local time
        timestamp: String,

        kind: String,

        #[arg(long = "note", short = 'n', help = "Optional note")]
        note: Option<String>,
    },

    /// Replace timestamp, kind and note of an existing entry
    Edit {
        id: String,

        timestamp: String,

        kind: String,

        #[arg(long = "note", short = 'n', help = "Optional note")]
        note: Option<String>,
    },

    /// List the entries of one day
    List {
        #[arg(long, short, help = "Day to list (YYYY-MM-DD, default today)")]
        date: Option<String>,
    },

    /// Delete an entry by id (any common id shape)
    Del { id: String },

    /// Delete by id if possible, otherwise by timestamp + kind + note
    Remove {
        #[arg(long)]
        id: Option<String>,

        #[arg(long)]
        timestamp: Option<String>,

        #[arg(long)]
        kind: Option<String>,

        #[arg(long)]
        note: Option<String>,
    },

    /// Export all entries to CSV
    Export {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
