use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;

use elastiwire_core::TranslateConfig;
use elastiwire_core::catalog::{StaticImageResolver, StaticMachineTypeCatalog};
use elastiwire_core::json_file::read_json;
use elastiwire_core::resource::{InstanceGroupSpec, Subnet};
use elastiwire_spotinst::payload::subnets_changed;
use elastiwire_spotinst::taints::parse_taints;
use elastiwire_spotinst::{Translator, normalize_orientation};

#[derive(Parser)]
#[command(name = "elastiwire")]
#[command(
    about = "Translate instance groups into Spotinst Elastigroup and Ocean payloads",
    long_about = None
)]
struct Cli {
    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Path to a JSON translate config
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the Elastigroup payload for an instance group
    Elastigroup {
        /// Path to the instance group JSON document
        file: PathBuf,

        /// Path to the machine type catalog
        #[arg(long, default_value = "machine-types.json")]
        machine_types: PathBuf,

        /// Path to the image catalog
        #[arg(long, default_value = "images.json")]
        images: PathBuf,
    },
    /// Print the Ocean launch spec payload for an instance group
    Ocean {
        /// Path to the instance group JSON document
        file: PathBuf,
    },
    /// Parse taints written as key=value:effect
    Taints {
        taints: Vec<String>,

        /// Fail if any taint is rejected
        #[arg(long)]
        strict: bool,
    },
    /// Compare two subnet lists ignoring order
    Subnets {
        /// Path to the current subnets JSON list
        current: PathBuf,
        /// Path to the desired subnets JSON list
        desired: PathBuf,
    },
    /// Print the normalized placement orientation
    Orientation { value: Option<String> },
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let result = match cli.command {
        Commands::Elastigroup {
            file,
            machine_types,
            images,
        } => run_elastigroup(&file, &machine_types, &images, cli.config.as_deref()),
        Commands::Ocean { file } => run_ocean(&file, cli.config.as_deref()),
        Commands::Taints { taints, strict } => run_taints(&taints, strict),
        Commands::Subnets { current, desired } => run_subnets(&current, &desired),
        Commands::Orientation { value } => {
            println!("{}", normalize_orientation(value.as_deref()));
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_logger(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn load_config(path: Option<&Path>) -> Result<TranslateConfig, String> {
    match path {
        Some(path) => TranslateConfig::from_path(path).map_err(|e| e.to_string()),
        None => Ok(TranslateConfig::default()),
    }
}

fn load_group(path: &Path) -> Result<InstanceGroupSpec, String> {
    read_json(path).map_err(|e| e.to_string())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize payload: {}", e))?;
    println!("{}", json);
    Ok(())
}

fn run_elastigroup(
    file: &Path,
    machine_types: &Path,
    images: &Path,
    config: Option<&Path>,
) -> Result<(), String> {
    let config = load_config(config)?;
    let group = load_group(file)?;
    let catalog = StaticMachineTypeCatalog::from_path(machine_types).map_err(|e| e.to_string())?;
    let images = StaticImageResolver::from_path(images).map_err(|e| e.to_string())?;

    let translator = Translator::new(&catalog, &images).with_config(config);
    let payload = translator
        .elastigroup(&group)
        .map_err(|e| format!("{}: {}", group.name, e))?;
    print_json(&payload)
}

fn run_ocean(file: &Path, config: Option<&Path>) -> Result<(), String> {
    let config = load_config(config)?;
    let group = load_group(file)?;

    // Ocean launch specs carry no block devices, so no lookups happen.
    let catalog = StaticMachineTypeCatalog::default();
    let images = StaticImageResolver::default();

    let translator = Translator::new(&catalog, &images).with_config(config);
    let spec = translator
        .ocean_launch_spec(&group)
        .map_err(|e| format!("{}: {}", group.name, e))?;
    print_json(&spec)
}

fn run_taints(taints: &[String], strict: bool) -> Result<(), String> {
    let report = parse_taints(taints);

    for taint in &report.accepted {
        println!(
            "{} {}={}:{}",
            "✓".green(),
            taint.key,
            taint.value,
            taint.effect
        );
    }
    for rejected in &report.rejected {
        println!(
            "{} {} ({})",
            "✗".red(),
            rejected.input,
            rejected.outcome.to_string().dimmed()
        );
    }

    if strict && !report.is_clean() {
        return Err(format!("{} taint(s) rejected", report.rejected.len()));
    }
    Ok(())
}

fn run_subnets(current: &Path, desired: &Path) -> Result<(), String> {
    let current: Vec<Subnet> = read_json(current).map_err(|e| e.to_string())?;
    let desired: Vec<Subnet> = read_json(desired).map_err(|e| e.to_string())?;

    if subnets_changed(&current, &desired) {
        println!("{}", "Subnets differ".yellow());
    } else {
        println!("{}", "Subnets match".green());
    }
    Ok(())
}
