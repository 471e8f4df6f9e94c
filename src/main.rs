use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use tracing::Level;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about = "Neff's anterior coefficient analysis", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log debug detail to stderr
    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate one set of measurements and exit
    Calculate(cmd::calculate::CalculateArgs),
    /// Print the reference panel
    Info,
    /// Edit and evaluate measurements at a prompt
    Interactive(cmd::interactive::InteractiveArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::WARN })
        .init();

    let outcome = match cli.command {
        Commands::Calculate(args) => match matches.subcommand_matches("calculate") {
            Some(sub_matches) => cmd::calculate::run(args, sub_matches),
            None => unreachable!("clap dispatched calculate without its matches"),
        },
        Commands::Info => {
            cmd::info::run();
            Ok(())
        }
        Commands::Interactive(args) => {
            let stdin = std::io::stdin();
            cmd::interactive::run(args, stdin.lock(), std::io::stdout())
        }
    };

    if let Err(e) = outcome {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
