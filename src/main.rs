mod aggregator;
mod catalog;
mod cli;
mod error;
mod fmt;
mod models;
mod period;
mod settings;
mod store;
mod tui;

use clap::Parser;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Init { data_dir }) => cli::init::run(data_dir),
        Some(Commands::Add {
            name,
            amount,
            kind,
            category,
            date,
        }) => cli::add::run(&name, &amount, &kind, &category, date.as_deref()),
        Some(Commands::List { month }) => cli::list::run(month),
        Some(Commands::Resume { month, kind, plain }) => cli::resume::run(month, &kind, plain),
        Some(Commands::Categories) => cli::categories::run(),
        Some(Commands::Demo) => cli::demo::run(),
        Some(Commands::Status) => cli::status::run(),
        // Bare `resumo` opens the interactive summary for the current month.
        None => cli::resume::run(None, "expense", false),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
