use clap::{Parser, Subcommand};
use kitcheck::predictor::LinearModel;
use std::path::Path;
use std::process;

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to a JSON model artifact. Falls back to the embedded model.
    #[arg(global = true, short, long)]
    model: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Assemble a configuration and predict its compatibility.
    Predict(cmd::predict::PredictArgs),
    /// List the component specification catalog.
    Fields,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(level).init();

    let model = match &cli.model {
        Some(path) => {
            if !Path::new(path).exists() {
                eprintln!("❌ Model artifact not found: {}", path);
                process::exit(1);
            }
            println!("⚖️  Loading model artifact: {}", path);
            LinearModel::load_from_file(path).unwrap_or_else(|e| {
                eprintln!("❌ Failed to load model: {}", e);
                process::exit(1);
            })
        }
        None => {
            println!("⚠️  No model artifact supplied. Using embedded defaults.");
            LinearModel::new_with_defaults()
        }
    };

    match cli.command {
        Commands::Predict(args) => cmd::predict::run(args, &model),
        Commands::Fields => cmd::fields::run(),
    }
}
