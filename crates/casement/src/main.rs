mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "casement",
    version,
    about = "Remembers and restores window placement across monitors"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the default configuration file
    Init,
    /// List attached monitors and their work areas
    Monitors,
    /// Show the rectangle a spanned (pseudo-maximized) window would cover
    Span(commands::span::SpanArgs),
    /// Show how saved bounds would be restored on the given displays
    Restore(commands::restore::RestoreArgs),
    /// Inspect and move live windows
    Debug {
        #[command(subcommand)]
        command: DebugCommands,
    },
}

#[derive(Subcommand)]
enum DebugCommands {
    /// Print a window's state, bounds and restore bounds
    Show(commands::debug::show::ShowArgs),
    /// Place an owned window relative to its owner
    Place(commands::debug::place::PlaceArgs),
}

fn main() {
    let cli = Cli::parse();

    let config = casement_core::config::load();
    casement_core::log::init(&config.logging);

    match cli.command {
        Commands::Init => commands::init::execute(),
        Commands::Monitors => commands::monitors::execute(),
        Commands::Span(args) => commands::span::execute(&args),
        Commands::Restore(args) => commands::restore::execute(&args),
        Commands::Debug { command } => match command {
            DebugCommands::Show(args) => commands::debug::show::execute(&args),
            DebugCommands::Place(args) => commands::debug::place::execute(&args, &config),
        },
    }
}
