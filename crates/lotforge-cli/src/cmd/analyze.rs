use crate::reports;
use clap::Args;
use lotforge_core::config::AnalysisConfig;
use lotforge_core::engine::Engine;
use lotforge_core::parcel::Parcel;
use std::process;
use tracing::error;

#[derive(Args, Debug, Clone)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub config: AnalysisConfig,

    /// Parcel JSON file produced by the intake layer.
    #[arg(short, long)]
    pub parcel: String,

    /// Emit the raw AnalysisResult as JSON instead of tables.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: AnalyzeArgs, engine: &Engine) {
    let parcel = load_parcel(&args.parcel);

    let result = match engine.analyze(&parcel) {
        Ok(r) => r,
        Err(e) => {
            error!("Analysis failed: {}", e);
            process::exit(1);
        }
    };

    if args.json {
        match serde_json::to_string_pretty(&result) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("Serialization failed: {}", e);
                process::exit(1);
            }
        }
        return;
    }

    reports::print_analysis(&parcel, &result);
}

pub(crate) fn load_parcel(path: &str) -> Parcel {
    let content = std::fs::read_to_string(path).unwrap_or_else(|e| {
        error!("Cannot read parcel file '{}': {}", path, e);
        process::exit(1);
    });
    serde_json::from_str(&content).unwrap_or_else(|e| {
        error!("Cannot parse parcel JSON '{}': {}", path, e);
        process::exit(1);
    })
}
