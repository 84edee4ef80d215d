use clap::{Parser, Subcommand};

/// Command-line interface definition for leaveplanner
#[derive(Parser)]
#[command(
    name = "leaveplanner",
    version = env!("CARGO_PKG_VERSION"),
    about = "Plan weekend leave for a cadet group around duties, incidents and confinement",
    long_about = None
)]
pub struct Cli {
    /// Override the roster file (one cadet per line, "(к)" marks city commuters)
    #[arg(global = true, long = "roster", value_name = "FILE")]
    pub roster: Option<String>,

    /// Without a command the interactive session starts
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive planning session (default)
    Session,

    /// Print the default leave schedule of the roster and exit
    Schedule,

    /// Write the default configuration file
    Init,

    /// Show the configuration
    Config {
        #[arg(long = "print", help = "Print the effective configuration as YAML")]
        print_config: bool,
    },
}
