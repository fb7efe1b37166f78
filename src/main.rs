use clap::Parser;

use modelwatch::cli::{self, Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match &cli.command {
        Commands::Build(args) => cli::build::execute(args),
        Commands::Check(command) => cli::check::execute(command),
        Commands::Init(args) => cli::init::execute(args),
    };

    if let Err(e) = result {
        cli::output::error(&e.to_string());
        std::process::exit(1);
    }
}
