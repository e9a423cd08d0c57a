mod collect;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::collect::CollectArgs;

#[derive(Debug, Parser)]
#[command(name = "poidb")]
#[command(about = "Collect restaurant and cafe details from the Places API")]
struct Cli {
    /// Defaults to `collect` with configured settings
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search every planned area and write the deduplicated dataset
    Collect(CollectArgs),
    /// Print the resolved search plan without calling the provider
    Areas {
        /// Search plan YAML (overrides `POIDB_PLAN_PATH`)
        #[arg(long)]
        plan: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = poidb_core::load_app_config()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match cli.command {
        Some(Commands::Collect(args)) => collect::run_collect(&config, args).await?,
        Some(Commands::Areas { plan }) => {
            let plan = collect::resolve_plan(&config, plan.as_deref())?;
            print_plan(&plan);
        }
        None => collect::run_collect(&config, CollectArgs::default()).await?,
    }

    Ok(())
}

fn print_plan(plan: &poidb_core::SearchPlan) {
    println!("categories: {}", plan.categories.join(", "));
    for area in &plan.areas {
        println!(
            "{:<20} {:>10.4} {:>10.4}",
            area.name, area.latitude, area.longitude
        );
    }
}
