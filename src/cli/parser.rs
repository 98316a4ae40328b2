use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for rAttendance
/// CLI application to record student attendance from an RFID reader
#[derive(Parser)]
#[command(
    name = "rattendance",
    version = env!("CARGO_PKG_VERSION"),
    about = "RFID attendance logger: reads card scans from a serial port and records time-in/time-out to CSV",
    long_about = None
)]
pub struct Cli {
    /// Override roster file path (ID,Name,Grade,Section)
    #[arg(global = true, long = "roster", value_name = "FILE")]
    pub roster: Option<String>,

    /// Override attendance file path
    #[arg(global = true, long = "attendance", value_name = "FILE")]
    pub attendance: Option<String>,

    /// Override serial port (e.g. /dev/ttyUSB0, COM10)
    #[arg(global = true, long = "port")]
    pub port: Option<String>,

    /// Override serial baud rate
    #[arg(global = true, long = "baud")]
    pub baud: Option<u32>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum KindFilter {
    In,
    Out,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and the roster file
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

    /// Start the attendance loop on the serial reader
    Run {
        /// Read tag lines from FILE instead of the serial port ('-' = stdin)
        #[arg(long = "input", value_name = "FILE")]
        input: Option<String>,
    },

    /// Register a new card in the roster
    Reg {
        /// Card identifier as sent by the reader
        id: String,
        /// Student name
        name: String,
        /// Grade
        grade: String,
        /// Section
        section: String,
    },

    /// Process a single scan against the roster
    Scan {
        /// Card identifier as sent by the reader
        id: String,
    },

    /// List registered students
    List,

    /// Show recorded attendance rows
    History {
        #[arg(long = "date", help = "Only rows for this date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long = "id", help = "Only rows for this card")]
        id: Option<String>,

        #[arg(long = "kind", value_enum, help = "Only IN or OUT rows")]
        kind: Option<KindFilter>,
    },

    /// List available serial ports
    Ports,

    /// Print the internal activity log
    Log {
        #[arg(long = "print", help = "Print rows from the activity log")]
        print: bool,
    },
}
