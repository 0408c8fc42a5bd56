use chrono::Utc;
use clap::Parser;
use tmmr_processor::{
    model::{config::FormulaConfig, create_formula, FormulaVersion},
    processor::{
        batch::{compute_breakdowns, tier_distribution},
        snapshot::{load_snapshot, write_breakdowns, PlayerBreakdown}
    }
};
use tracing::{error, info};
use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod args;

use args::Args;

fn main() {
    dotenv::dotenv().ok();

    let args = Args::parse();
    init_tracing(&args.log_level);

    let version = match FormulaVersion::try_from(args.formula_version) {
        Ok(v) => v,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };

    let config = FormulaConfig::from_env();
    let formula = create_formula(version, config);

    let histories = match load_snapshot(&args.input) {
        Ok(h) => h,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };

    let as_of = Utc::now();
    let results = compute_breakdowns(&histories, formula.as_ref(), as_of);

    let breakdowns: Vec<PlayerBreakdown> = results
        .into_iter()
        .map(|(player_id, breakdown)| PlayerBreakdown { player_id, breakdown })
        .collect();

    if let Err(e) = write_breakdowns(args.output.as_deref(), &breakdowns) {
        error!("{e}");
        std::process::exit(1);
    }

    let provisional = breakdowns.iter().filter(|b| b.breakdown.provisional).count();
    info!(
        players = breakdowns.len(),
        provisional, "rating pass complete (formula v{})", args.formula_version
    );

    for (tier, count) in tier_distribution(breakdowns.iter().map(|b| &b.breakdown)) {
        info!("{tier}: {count}");
    }
}

fn init_tracing(log_level: &str) {
    let indicatif_layer = IndicatifLayer::new();

    tracing_subscriber::registry()
        .with(EnvFilter::new(log_level))
        .with(tracing_subscriber::fmt::layer().with_writer(indicatif_layer.get_stderr_writer()))
        .with(indicatif_layer)
        .init();
}
