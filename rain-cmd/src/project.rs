//! `project` subcommand: lay out one year and write the draw plan.

use crate::load::{load_config, load_store};
use anyhow::Context;
use rain_grid::{project, DrawPlan, HeatmapConfig};
use rain_store::DataStore;
use rain_utils::dates::parse_date;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectOptions {
    pub year: i32,
    pub config_path: Option<String>,
    pub output: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub pretty: bool,
}

/// Project the visible points of `year` between the optional bounds.
pub fn plan_for(
    store: &DataStore,
    year: i32,
    start: Option<&str>,
    end: Option<&str>,
    config: &HeatmapConfig,
) -> anyhow::Result<DrawPlan> {
    let start = start.map(parse_date).transpose()?;
    let end = end.map(parse_date).transpose()?;
    let points = store.get_year_within(year, start, end)?;
    let plan = project(&points, config)
        .with_context(|| format!("Cannot lay out {} for the selected range", year))?;
    Ok(plan)
}

pub async fn run_project(input: &str, options: ProjectOptions) -> anyhow::Result<()> {
    let store = load_store(input).await?;
    let config = load_config(options.config_path.as_deref()).await?;
    let plan = plan_for(
        &store,
        options.year,
        options.start.as_deref(),
        options.end.as_deref(),
        &config,
    )?;
    let json = if options.pretty {
        plan.to_json_pretty()?
    } else {
        plan.to_json()?
    };

    match options.output {
        Some(path) => {
            tokio::fs::write(&path, json)
                .await
                .with_context(|| format!("Failed to write {}", path))?;
            log::info!(
                "Wrote {} cells and {} month paths for {} to {}",
                plan.cells.len(),
                plan.month_paths.len(),
                plan.year,
                path
            );
        }
        None => println!("{}", json),
    }
    Ok(())
}
