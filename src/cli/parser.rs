use crate::export::ExportFormat;
use crate::models::category::OvertimeCategory;
use clap::{Parser, Subcommand};

/// Command-line interface definition for otledger
/// CLI application to record biweekly overtime and generate slip documents
#[derive(Parser)]
#[command(
    name = "otledger",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple overtime ledger CLI: record biweekly overtime, split it into pay-period weeks, and export slips",
    long_about = None
)]
pub struct Cli {
    /// Override state file path (useful for tests or multiple ledgers)
    #[arg(global = true, long = "state")]
    pub state: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and state files
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/vim/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Import, list, search or clear the employee roster
    Roster {
        #[arg(
            long = "import",
            value_name = "FILE",
            help = "Import a roster CSV, replacing the current roster"
        )]
        import: Option<String>,

        #[arg(long = "clear", help = "Remove the employee roster")]
        clear: bool,

        #[arg(long = "list", help = "List the current roster")]
        list: bool,

        #[arg(
            long = "search",
            value_name = "QUERY",
            help = "Search the roster by last name, first name, or employee number"
        )]
        search: Option<String>,

        #[arg(long = "yes", short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },

    /// Set or show the pay period ending date
    Period {
        /// Pay period ending date (YYYY-MM-DD or M/D/YYYY)
        end: Option<String>,

        #[arg(long = "show", help = "Show the current pay period week ranges")]
        show: bool,
    },

    /// Record an overtime entry for an employee
    Add {
        /// Employee number, or a query with a single roster match
        emp: Option<String>,

        /// Entry date (YYYY-MM-DD or M/D/YYYY)
        #[arg(long = "date", help = "Entry date (YYYY-MM-DD or M/D/YYYY)")]
        date: Option<String>,

        #[arg(long = "cat", value_enum, help = "Overtime category")]
        category: Option<OvertimeCategory>,

        #[arg(long = "hours", help = "Hours worked, greater than 0")]
        hours: Option<f64>,
    },

    /// Delete an overtime entry by its ledger index
    Del {
        /// Index as shown by `list`
        index: usize,
    },

    /// List overtime entries
    List {
        #[arg(
            long = "emp",
            help = "Only entries for one employee, date ascending"
        )]
        emp: Option<String>,
    },

    /// Show the per-employee week/category summary
    Summary,

    /// Export entries or generate slip documents
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            help = "Generate blank slips for the whole roster (pdf only)"
        )]
        blank: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Clear the current session (entries and pay period; roster survives)
    Clear {
        #[arg(long = "yes", short = 'y', help = "Skip the confirmation prompt")]
        yes: bool,
    },
}
