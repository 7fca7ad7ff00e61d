//! Row of buttons, one per year with data.

use crate::state::AppState;
use dioxus::prelude::*;

const YEAR_STYLE: &str = "padding: 4px 10px; border: 1px solid #90CAF9; border-radius: 4px; background: #FFFFFF; color: #1565C0; cursor: pointer;";
const SELECTED_YEAR_STYLE: &str = "padding: 4px 10px; border: 1px solid #1565C0; border-radius: 4px; background: #1565C0; color: #FFFFFF; font-weight: bold; cursor: default;";

/// Year buttons. Reads available years from AppState; clicking a button
/// selects (and persists) that year.
#[component]
pub fn YearSelector() -> Element {
    let state = use_context::<AppState>();
    let selected = (state.selected_year)();
    let buttons: Vec<(i32, &'static str)> = state
        .years
        .read()
        .iter()
        .map(|&year| {
            let style = if year == selected {
                SELECTED_YEAR_STYLE
            } else {
                YEAR_STYLE
            };
            (year, style)
        })
        .collect();

    rsx! {
        div {
            class: "year-selection",
            style: "margin: 8px 0; display: flex; flex-wrap: wrap; gap: 6px;",
            for (year, style) in buttons {
                button {
                    key: "{year}",
                    style: "{style}",
                    onclick: move |_| {
                        let mut state = state;
                        state.select_year(year);
                    },
                    "{year}"
                }
            }
        }
    }
}
