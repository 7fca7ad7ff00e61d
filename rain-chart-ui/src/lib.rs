//! Shared Dioxus components and D3.js bridge for the rainfall heatmap apps.
//!
//! This crate provides:
//! - `js_bridge`: Rust wrappers for the D3.js heatmap renderer via `js_sys::eval()`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `selection`: the selected year, persisted in browser localStorage
//! - `view`: picks the data points visible for the current selection
//! - `components`: Reusable RSX components (year selector, date range, header, ...)

pub mod components;
pub mod js_bridge;
pub mod selection;
pub mod state;
pub mod view;
