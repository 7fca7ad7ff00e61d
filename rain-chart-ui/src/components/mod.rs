//! Reusable Dioxus RSX components for the rainfall heatmap apps.

mod date_range_picker;
mod heatmap_container;
mod heatmap_header;
mod status_banner;
mod year_selector;

pub use date_range_picker::DateRangePicker;
pub use heatmap_container::HeatmapContainer;
pub use heatmap_header::HeatmapHeader;
pub use status_banner::{Status, StatusBanner};
pub use year_selector::YearSelector;
