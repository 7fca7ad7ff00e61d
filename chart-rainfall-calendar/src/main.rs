//! Daily Rainfall Calendar Heatmap
//!
//! Shows one year of daily rainfall as a Monday-first calendar grid: one
//! cell per day colored by the measured amount, month boundaries drawn
//! between cells, and a legend of the color buckets.
//!
//! Data flow:
//! 1. `build.rs` copies `fixtures/rainfall.json` into `OUT_DIR`.
//! 2. `include_str!` embeds the records into the WASM binary.
//! 3. On mount, the records are ingested into a `DataStore` and the last
//!    selected year is restored from localStorage.
//! 4. Whenever the year, date range or config changes, the visible points
//!    are projected into a `DrawPlan` and handed to the D3 renderer.

use dioxus::prelude::*;
use rain_chart_ui::components::{
    DateRangePicker, HeatmapContainer, HeatmapHeader, Status, StatusBanner, YearSelector,
};
use rain_chart_ui::js_bridge;
use rain_chart_ui::selection;
use rain_chart_ui::state::{AppState, DEFAULT_YEAR};
use rain_chart_ui::view::visible_points;
use rain_grid::{project, GridError};
use rain_store::{DataStore, StoreError};

/// Daily rainfall records for all years.
const RAINFALL_JSON: &str = include_str!(concat!(env!("OUT_DIR"), "/rainfall.json"));

/// Chart container DOM element ID used by D3.js to render into.
const CHART_ID: &str = "rainfall-heatmap";

/// Where the fixture measurements were taken.
const LOCATION: &str = "Tampere";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("rainfall-calendar-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Load the embedded records once on mount
    use_effect(move || {
        let mut store = DataStore::new();
        if let Err(e) = store.load_json(RAINFALL_JSON) {
            log::error!("Failed to load rainfall data: {}", e);
            state
                .error_msg
                .set(Some(format!("Failed to load rainfall data: {}", e)));
            state.loading.set(false);
            return;
        }

        let years = store.available_years();
        match selection::initial_year(selection::load_selected_year(), &years, DEFAULT_YEAR) {
            Some(year) => {
                log::info!("Loaded {} years of rainfall, showing {}", years.len(), year);
                state.selected_year.set(year);
            }
            None => {
                state
                    .notice
                    .set(Some("The rainfall data set is empty.".to_string()));
            }
        }
        state.years.set(years);
        state.store.set(Some(store));
        state.loading.set(false);
    });

    // Re-project whenever the year, range or config changes
    use_effect(move || {
        if (state.loading)() || (state.error_msg)().is_some() {
            return;
        }
        let year = (state.selected_year)();
        let start = (state.start_date)();
        let end = (state.end_date)();
        let config = (state.config)();

        let store = state.store.read();
        let Some(store) = store.as_ref() else {
            return;
        };

        js_bridge::init_charts();

        let points = match visible_points(store, year, &start, &end) {
            Ok(points) => points,
            Err(StoreError::NotFound(_)) => {
                state
                    .notice
                    .set(Some(format!("No rainfall data for {}.", year)));
                js_bridge::destroy_chart(CHART_ID);
                return;
            }
            Err(e) => {
                log::error!("Failed to select rainfall data: {}", e);
                return;
            }
        };

        match project(&points, &config) {
            Ok(plan) => match plan.to_json() {
                Ok(plan_json) => {
                    state.notice.set(None);
                    state.weeks.set(plan.weeks);
                    js_bridge::render_heatmap(CHART_ID, &plan_json);
                }
                Err(e) => log::error!("Failed to serialize draw plan: {}", e),
            },
            Err(GridError::EmptyRange) => {
                state
                    .notice
                    .set(Some("No measurements in the selected date range.".to_string()));
                js_bridge::destroy_chart(CHART_ID);
            }
            Err(e) => {
                log::error!("Failed to lay out heatmap: {}", e);
                state.notice.set(Some(format!("Cannot draw heatmap: {}", e)));
                js_bridge::destroy_chart(CHART_ID);
            }
        }
    });

    let year = (state.selected_year)();
    let config = (state.config)();
    let summary = state
        .store
        .read()
        .as_ref()
        .and_then(|store| store.summary(year).ok());

    rsx! {
        div {
            style: "padding: 16px; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            HeatmapHeader {
                location: LOCATION.to_string(),
                year,
                summary,
                unit_label: config.unit_label.clone(),
            }

            if let Some(err) = (state.error_msg)() {
                StatusBanner { status: Status::Error(err) }
            } else if (state.loading)() {
                StatusBanner { status: Status::Loading }
            } else {
                YearSelector {}
                DateRangePicker {}

                if let Some(message) = (state.notice)() {
                    StatusBanner { status: Status::Empty(message) }
                }

                HeatmapContainer {
                    id: CHART_ID.to_string(),
                    weeks: (state.weeks)(),
                    cell_unit: config.cell_unit,
                }
            }
        }
    }
}
