//! Calendar heatmap layout for daily rainfall.
//!
//! This crate turns an ordered year of [`DataPoint`]s into a
//! renderer-agnostic [`DrawPlan`]:
//!
//! - [`mapper`]: date → (week column, weekday row) cell coordinate
//! - [`boundary`]: polylines separating consecutive months in the grid
//! - [`color`]: value → discrete color bucket, plus the legend
//! - [`projector`]: ties the above together into a [`DrawPlan`]
//!
//! Nothing here draws; the plan is serialized to JSON and handed to the D3
//! renderer in the chart app, or printed by the CLI.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use rain_grid::{project, HeatmapConfig};
//! use rain_records::DataPoint;
//!
//! let points = vec![
//!     DataPoint { date: NaiveDate::from_ymd_opt(2018, 1, 31).unwrap(), value: 2.0 },
//!     DataPoint { date: NaiveDate::from_ymd_opt(2018, 2, 1).unwrap(), value: 30.0 },
//! ];
//! let plan = project(&points, &HeatmapConfig::default()).unwrap();
//! assert_eq!(plan.cells.len(), 2);
//! assert_eq!(plan.month_paths.len(), 1);
//! assert_eq!(plan.cells[1].color_bucket, 7);
//! ```

pub mod boundary;
pub mod color;
pub mod config;
pub mod error;
pub mod mapper;
pub mod plan;
pub mod projector;

pub use boundary::{month_boundaries, GridPoint, MonthPath};
pub use color::{bucket_of, Color, ColorScale, MAX_BUCKET_COUNT};
pub use config::HeatmapConfig;
pub use error::GridError;
pub use mapper::{coordinate_of, CellCoordinate};
pub use plan::{CellRect, DrawPlan, LegendEntry, TextLabel};
pub use projector::project;
pub use rain_records::DataPoint;
