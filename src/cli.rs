use clap::{Parser, Subcommand};

/// viewgate — view-authorization resolver for the ops dashboard shell
#[derive(Parser)]
#[command(name = "viewgate", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the shell service
    Serve {
        /// Port to bind
        #[arg(short, long, default_value = "8460")]
        port: u16,
    },

    /// Resolve one (role, selection, approval) triple and print the outcome
    Resolve {
        /// Role string as the auth provider reports it (e.g. "intern")
        #[arg(long)]
        role: String,
        /// Sidebar section label (e.g. "Leads")
        #[arg(long)]
        selection: String,
        /// Treat the approval flag as granted
        #[arg(long)]
        approved: bool,
    },
}
