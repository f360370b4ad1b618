use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "dayflow-cli", version, about = "Dayflow CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Schedule generation and block operations
    Schedule {
        #[command(subcommand)]
        action: commands::schedule::ScheduleAction,
    },
    /// Day-mode rules
    Modes {
        #[command(subcommand)]
        action: commands::modes::ModesAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Schedule { action } => commands::schedule::run(action),
        Commands::Modes { action } => commands::modes::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
