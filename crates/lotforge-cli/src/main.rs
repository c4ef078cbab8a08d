use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use lotforge_core::config::AnalysisConfig;
use lotforge_core::engine::Engine;
use lotforge_core::rhna::{RhnaDirectory, RhnaRequirement};
use lotforge_core::standards::StandardsTable;
use std::collections::HashMap;
use std::path::Path;
use std::process;
use tracing::{error, info, warn};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Zone standards CSV; embedded defaults are used when absent.
    #[arg(global = true, short = 'z', long, default_value = "data/zone_standards.csv")]
    zone_standards: String,

    /// RHNA directory JSON: { "City|County": { "percentage": ..., "isExempt": ... } }
    #[arg(global = true, short = 'r', long, default_value = "data/rhna.json")]
    rhna: String,

    /// Analysis assumptions JSON overriding embedded defaults.
    #[arg(global = true, long)]
    assumptions: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Analyze(cmd::analyze::AnalyzeArgs),
    Eligibility(cmd::eligibility::EligibilityArgs),
}

fn main() {
    tracing_subscriber::fmt::init();

    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    info!("🏗️  Initializing Lotforge Core...");

    let tables = if Path::new(&cli.zone_standards).exists() {
        info!("📂 Loading Zone Standards: {}", cli.zone_standards);
        StandardsTable::load_from_file(&cli.zone_standards).unwrap_or_else(|e| {
            error!("Failed to load zone standards: {}", e);
            process::exit(1);
        })
    } else {
        warn!(
            "⚠️  Zone standards file '{}' not found. Using embedded defaults.",
            cli.zone_standards
        );
        StandardsTable::embedded()
    };

    let rhna = if Path::new(&cli.rhna).exists() {
        info!("📂 Loading RHNA Directory: {}", cli.rhna);
        load_rhna(&cli.rhna).unwrap_or_else(|e| {
            error!("Failed to load RHNA directory: {}", e);
            process::exit(1);
        })
    } else {
        warn!(
            "⚠️  RHNA file '{}' not found. Unlisted jurisdictions default to the conservative 50% requirement.",
            cli.rhna
        );
        RhnaDirectory::new()
    };

    let (cli_config_ref, sub_matches) = match &cli.command {
        Commands::Analyze(args) => (
            &args.config,
            matches.subcommand_matches("analyze").unwrap(),
        ),
        Commands::Eligibility(args) => (
            &args.config,
            matches.subcommand_matches("eligibility").unwrap(),
        ),
    };

    let config = if let Some(path) = &cli.assumptions {
        info!("⚖️  Loading Assumptions from: {}", path);
        let mut file_config = AnalysisConfig::load_from_file(path).unwrap_or_else(|e| {
            error!("Failed to load assumptions: {}", e);
            process::exit(1);
        });
        file_config.merge_from_cli(cli_config_ref, sub_matches);
        file_config
    } else {
        cli_config_ref.clone()
    };

    let engine = Engine::new(tables, rhna, config);

    match cli.command {
        Commands::Analyze(args) => cmd::analyze::run(args, &engine),
        Commands::Eligibility(args) => cmd::eligibility::run(args, &engine),
    }
}

fn load_rhna(path: &str) -> Result<RhnaDirectory, String> {
    let content = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
    let raw: HashMap<String, RhnaRequirement> =
        serde_json::from_str(&content).map_err(|e| e.to_string())?;

    let mut dir = RhnaDirectory::new();
    for (key, requirement) in raw {
        let Some((jurisdiction, county)) = key.split_once('|') else {
            warn!("RHNA key '{}' is not 'City|County'; skipped", key);
            continue;
        };
        dir.insert(jurisdiction, county, requirement);
    }
    Ok(dir)
}
