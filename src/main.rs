//! cringein CLI entry point.

use clap::Parser;
use cringein::cli::{self, Cli, Commands, EXIT_ERROR};

fn main() {
    let cli = Cli::parse();
    cli::init_logging(cli.verbose);

    let result = match &cli.command {
        Commands::Analyze(args) => cli::run_analyze(args),
        Commands::Decringe(args) => cli::run_decringe(args),
        Commands::History(args) => cli::run_history(args),
        Commands::Settings(args) => cli::run_settings(args),
        Commands::Gallery(args) => cli::run_gallery(args),
        Commands::Rules => cli::run_rules(),
        Commands::Init(args) => cli::run_init(args),
    };

    let exit_code = match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            EXIT_ERROR
        }
    };

    std::process::exit(exit_code);
}
