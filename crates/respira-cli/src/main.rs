use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "respira-cli", version, about = "Respira CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Take a respiratory-system quiz
    Quiz {
        #[command(subcommand)]
        action: commands::quiz::QuizAction,
    },
    /// Breathing cycle simulation
    Breathe {
        #[command(subcommand)]
        action: commands::breathe::BreatheAction,
    },
    /// Anatomy reference lookup
    Anatomy {
        #[command(subcommand)]
        action: commands::anatomy::AnatomyAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    pretty_env_logger::init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Quiz { action } => commands::quiz::run(action),
        Commands::Breathe { action } => commands::breathe::run(action),
        Commands::Anatomy { action } => commands::anatomy::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
