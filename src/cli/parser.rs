use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rfidattend
/// CLI application to run RFID attendance sessions for a class
#[derive(Parser)]
#[command(
    name = "rfidattend",
    version = env!("CARGO_PKG_VERSION"),
    about = "RFID class attendance: simulated check-ins, late/absent tracking, teacher overrides and roster export",
    long_about = None
)]
pub struct Cli {
    /// Override the dataset file (classes, students, readers)
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
    /// Write the default configuration file
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// List today's classes and whether they are upcoming, current or completed
    Classes {
        #[arg(long = "at", value_name = "HH:MM", help = "Reference time (default: now)")]
        at: Option<String>,
    },

    /// Open an attendance session and run the RFID feed
    Session {
        #[arg(long = "class", help = "Class id (default: the class running at --start)")]
        class: Option<u32>,

        #[arg(long = "date", value_name = "YYYY-MM-DD", help = "Session date (default: today)")]
        date: Option<String>,

        #[arg(
            long = "start",
            value_name = "HH:MM",
            help = "Time the feed starts at (default: class start, or now with --realtime)"
        )]
        start: Option<String>,

        #[arg(long = "ticks", default_value_t = 0, help = "Number of feed ticks to run")]
        ticks: usize,

        #[arg(long = "seed", help = "Seed for the simulated feed (reproducible runs)")]
        seed: Option<u64>,

        #[arg(long = "realtime", help = "Use the wall clock and really wait between ticks")]
        realtime: bool,

        #[arg(
            long = "scan",
            value_name = "TAG[@HH:MM]",
            help = "RFID tag read to apply after the feed (repeatable)"
        )]
        scans: Vec<String>,

        #[arg(long = "reader", help = "Reader id the --scan reads come from")]
        reader: Option<String>,

        #[arg(
            long = "mark",
            value_name = "ID=STATUS",
            help = "Teacher override: present, late or absent (repeatable)"
        )]
        marks: Vec<String>,

        #[arg(long = "export", value_name = "FILE", help = "Export the final roster")]
        export: Option<String>,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, short = 'f', help = "Overwrite the export file without asking")]
        force: bool,

        #[arg(long = "log", help = "Print the internal session log")]
        log: bool,
    },
}
