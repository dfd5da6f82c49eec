use clap::Parser;
use cohort::cli::{handle_seed, handle_serve, Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve {
            host,
            port,
            no_seed,
            log_filter,
        } => handle_serve(host, port, no_seed, log_filter),
        Commands::Seed { json } => handle_seed(json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
