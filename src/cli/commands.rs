use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "cohort")]
#[command(version, about = "Academic project tracking server for a one-semester course")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP API server
    Serve {
        /// Address to bind
        #[arg(long, env = "COHORT_HOST", default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on
        #[arg(long, short = 'p', env = "COHORT_PORT", default_value_t = 5000)]
        port: u16,

        /// Start with an empty store instead of the semester reference data
        #[arg(long)]
        no_seed: bool,

        /// Log filter used when RUST_LOG is unset (e.g. "cohort=debug")
        #[arg(long, env = "COHORT_LOG", default_value = "cohort=info")]
        log_filter: String,
    },

    /// Print the reference projects and their schedules without serving
    Seed {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}
