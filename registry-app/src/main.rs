use std::path::PathBuf;

use clap::Parser;
use color_eyre::Result;
use log::{info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use registry_app::{
    catalogue::{load_catalogue, sample_catalogue},
    VehicleRegistry,
};

/// Registers a vehicle from a catalogue of known models and prints it.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// JSON file with the models to load. Uses a built-in sample when left out.
    #[arg(long)]
    catalogue: Option<PathBuf>,
    /// Brand of the vehicle to register.
    #[arg(long, default_value = "Volkswagen")]
    brand: String,
    /// Model of the vehicle to register.
    #[arg(long, default_value = "ID3")]
    model: String,
    /// Take the registry offline before reporting its status.
    #[arg(long)]
    offline: bool,
    /// Print the registered vehicle as JSON.
    #[arg(long)]
    json: bool,
    /// Enable debug logging.
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let level = if args.debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let models = match &args.catalogue {
        Some(path) => load_catalogue(path)?,
        None => sample_catalogue(),
    };
    let mut registry = VehicleRegistry::with_models(models);
    info!("Registry holds {} models", registry.len());

    if args.offline {
        registry.set_online(false);
    }
    println!("Registry status: {}", registry.online_status());

    let vehicle = registry.register_vehicle(&args.brand, &args.model)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&vehicle)?);
    } else {
        println!("{vehicle}");
    }

    Ok(())
}
