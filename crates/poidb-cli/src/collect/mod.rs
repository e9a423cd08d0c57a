//! The `collect` command: search every planned area, fetch details, and
//! write the deduplicated dataset.
//!
//! Provider failures never abort the run. They are logged where they happen
//! and only reduce the number of places collected; the output file is written
//! even when it ends up empty.

mod aggregate;
mod area;
mod output;
mod runner;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use poidb_core::{AppConfig, SearchPlan};
use poidb_places::{Pacer, PlacesClient};
use tokio::sync::Semaphore;

pub(crate) use area::Collector;
pub(crate) use output::write_places_json;
pub(crate) use runner::run_collection;

/// Overrides for a single collection run.
#[derive(Debug, Clone, Default, Args)]
pub struct CollectArgs {
    /// Search plan YAML (overrides `POIDB_PLAN_PATH`)
    #[arg(long)]
    pub plan: Option<PathBuf>,

    /// Output JSON file (overrides `POIDB_OUTPUT_PATH`)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Search radius in meters (overrides `POIDB_SEARCH_RADIUS_M`)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=50_000))]
    pub radius: Option<u32>,

    /// Restrict the run to one planned area (case-insensitive)
    #[arg(long)]
    pub area: Option<String>,
}

/// Resolve the search plan: explicit path, then `POIDB_PLAN_PATH`, then the
/// built-in Downtown plan.
///
/// # Errors
///
/// Returns an error if a plan file is named but cannot be loaded.
pub(crate) fn resolve_plan(
    config: &AppConfig,
    plan_override: Option<&Path>,
) -> anyhow::Result<SearchPlan> {
    match plan_override.or(config.plan_path.as_deref()) {
        Some(path) => poidb_core::load_plan(path)
            .with_context(|| format!("failed to load search plan {}", path.display())),
        None => Ok(SearchPlan::default()),
    }
}

/// Run a full collection and write the result to disk.
///
/// # Errors
///
/// Returns an error if the plan cannot be resolved, the requested area is
/// not planned, the HTTP client cannot be built, or the output file cannot
/// be written. Provider failures are not errors.
pub(crate) async fn run_collect(config: &AppConfig, args: CollectArgs) -> anyhow::Result<()> {
    let mut plan = resolve_plan(config, args.plan.as_deref())?;
    if let Some(name) = args.area.as_deref() {
        plan = plan
            .only_area(name)
            .ok_or_else(|| anyhow::anyhow!("area '{name}' is not in the search plan"))?;
    }

    let radius_m = args.radius.unwrap_or(config.search_radius_m);
    let output_path = args.output.unwrap_or_else(|| config.output_path.clone());

    let client = PlacesClient::with_base_url(
        config.places_api_key.as_deref().unwrap_or_default(),
        config.request_timeout_secs,
        &config.user_agent,
        &config.places_base_url,
    )?;
    let pacer = Pacer::new(
        config.batch_delay(),
        config.page_token_delay(),
        config.category_delay(),
    );
    let gate = Semaphore::new(config.max_concurrent_details);

    let collector = Collector {
        api: &client,
        gate: &gate,
        pacer: &pacer,
        categories: &plan.categories,
        radius_m,
        batch_size: config.detail_batch_size,
    };

    tracing::info!(
        areas = plan.areas.len(),
        categories = plan.categories.len(),
        radius_m,
        "starting collection"
    );

    let (aggregate, summary) = run_collection(&collector, &plan.areas).await;

    write_places_json(&output_path, aggregate.places())?;

    tracing::info!(
        areas = summary.areas,
        fetched = summary.fetched,
        unique = summary.unique,
        duplicates = summary.duplicates,
        output = %output_path.display(),
        "collection complete"
    );
    println!("Total unique places found: {}", summary.unique);
    println!("Results saved to {}", output_path.display());

    Ok(())
}

#[cfg(test)]
#[path = "collect_test.rs"]
mod tests;
