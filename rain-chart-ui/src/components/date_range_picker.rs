//! Date range picker narrowing the heatmap to part of the selected year.

use crate::state::AppState;
use dioxus::prelude::*;

/// Start/end date inputs bounded to the selected year, plus a reset button.
#[component]
pub fn DateRangePicker() -> Element {
    let mut state = use_context::<AppState>();
    let year = (state.selected_year)();
    let start = (state.start_date)();
    let end = (state.end_date)();
    let min = format!("{year}-01-01");
    let max = format!("{year}-12-31");
    let has_range = !start.is_empty() || !end.is_empty();

    let on_start_change = move |evt: Event<FormData>| {
        state.start_date.set(evt.value());
    };

    let on_end_change = move |evt: Event<FormData>| {
        state.end_date.set(evt.value());
    };

    let on_clear = move |_| {
        state.start_date.set(String::new());
        state.end_date.set(String::new());
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 12px; align-items: center;",
            label {
                style: "font-weight: bold;",
                "From: "
                input {
                    r#type: "date",
                    value: "{start}",
                    min: "{min}",
                    max: "{max}",
                    onchange: on_start_change,
                }
            }
            label {
                style: "font-weight: bold;",
                "To: "
                input {
                    r#type: "date",
                    value: "{end}",
                    min: "{min}",
                    max: "{max}",
                    onchange: on_end_change,
                }
            }
            if has_range {
                button {
                    style: "padding: 2px 8px;",
                    onclick: on_clear,
                    "Whole year"
                }
            }
        }
    }
}
