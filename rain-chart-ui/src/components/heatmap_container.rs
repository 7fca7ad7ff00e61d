//! Sized container the D3 renderer draws the heatmap into.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct HeatmapContainerProps {
    /// The DOM id D3 renders into
    pub id: String,
    /// Grid columns in the current plan
    #[props(default = 53)]
    pub weeks: u32,
    /// Cell edge length in pixels
    #[props(default = 12.0)]
    pub cell_unit: f64,
}

/// Pixel width and height reserved for `weeks` columns, seven rows and the
/// legend.
pub fn container_size(weeks: u32, cell_unit: f64) -> (f64, f64) {
    // 2.5 units of margin on the left and top, 1 on the right and bottom,
    // 2.5 for the legend below the grid.
    let width = (weeks as f64 + 3.5) * cell_unit;
    let height = (7.0 + 6.0) * cell_unit;
    (width, height)
}

/// Reserves room for the plan so the page does not jump while D3 loads.
#[component]
pub fn HeatmapContainer(props: HeatmapContainerProps) -> Element {
    let (width, height) = container_size(props.weeks, props.cell_unit);
    let style = format!(
        "min-width: {width}px; min-height: {height}px; position: relative; overflow-x: auto;"
    );

    rsx! {
        div {
            style: "{style}",
            div { id: "{props.id}" }
        }
    }
}
