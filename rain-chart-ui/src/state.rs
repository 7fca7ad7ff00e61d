//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.
//! The store is written once after loading; every other signal is a user
//! selection that triggers a fresh projection.

use crate::selection;
use dioxus::prelude::*;
use rain_grid::HeatmapConfig;
use rain_store::DataStore;

/// Year shown before any selection has been made or persisted.
pub const DEFAULT_YEAR: i32 = 2018;

/// Columns reserved before the first plan is projected.
pub const DEFAULT_WEEKS: u32 = 53;

/// Shared application state for the heatmap apps.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Loaded rainfall data (None until loaded)
    pub store: Signal<Option<DataStore>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if loading failed
    pub error_msg: Signal<Option<String>>,
    /// Informational message, e.g. when the selection has no data
    pub notice: Signal<Option<String>>,
    /// Years with data, ascending
    pub years: Signal<Vec<i32>>,
    /// Currently selected year
    pub selected_year: Signal<i32>,
    /// Optional range start ("YYYY-MM-DD", empty for none)
    pub start_date: Signal<String>,
    /// Optional range end ("YYYY-MM-DD", empty for none)
    pub end_date: Signal<String>,
    /// Layout and color settings
    pub config: Signal<HeatmapConfig>,
    /// Grid columns of the last projected plan
    pub weeks: Signal<u32>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            store: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            notice: Signal::new(None),
            years: Signal::new(Vec::new()),
            selected_year: Signal::new(DEFAULT_YEAR),
            start_date: Signal::new(String::new()),
            end_date: Signal::new(String::new()),
            config: Signal::new(HeatmapConfig::default()),
            weeks: Signal::new(DEFAULT_WEEKS),
        }
    }

    /// Switch to `year`, clearing any date range and persisting the choice.
    /// Selecting the current year again does nothing.
    pub fn select_year(&mut self, year: i32) {
        if (self.selected_year)() == year {
            return;
        }
        self.selected_year.set(year);
        self.start_date.set(String::new());
        self.end_date.set(String::new());
        selection::save_selected_year(year);
    }
}
