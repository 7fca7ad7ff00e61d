//! Heatmap title with the selected year's rainfall totals.

use dioxus::prelude::*;
use rain_store::YearSummary;
use rain_utils::dates::format_date;
use rain_utils::numbers::format_value;

#[derive(Props, Clone, PartialEq)]
pub struct HeatmapHeaderProps {
    /// Place the measurements were taken, e.g. "Tampere"
    pub location: String,
    pub year: i32,
    /// Totals for `year`, when it has data
    #[props(!optional)]
    pub summary: Option<YearSummary>,
    #[props(default = "mm".to_string())]
    pub unit_label: String,
}

/// "Rainfall in <location> in <year>" plus a one-line summary.
#[component]
pub fn HeatmapHeader(props: HeatmapHeaderProps) -> Element {
    let summary_line = props.summary.as_ref().map(|s| {
        format!(
            "{} {unit} over {} rainy days of {} measured; wettest day {} ({} {unit})",
            format_value(s.total),
            s.rainy_days,
            s.days,
            format_date(&s.max_date),
            format_value(s.max_value),
            unit = props.unit_label,
        )
    });

    rsx! {
        header {
            style: "margin-bottom: 8px;",
            h2 {
                style: "margin: 0 0 4px 0; font-size: 20px;",
                "Rainfall in {props.location} in {props.year}"
            }
            if let Some(line) = summary_line {
                p {
                    style: "margin: 0; font-size: 12px; color: #666;",
                    "{line}"
                }
            }
        }
    }
}
