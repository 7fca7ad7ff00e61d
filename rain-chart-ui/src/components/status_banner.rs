//! Loading, error and empty-selection messages.

use dioxus::prelude::*;

/// What the banner reports.
#[derive(Clone, PartialEq, Debug)]
pub enum Status {
    Loading,
    Error(String),
    /// Nothing to draw for the current selection
    Empty(String),
}

#[derive(Props, Clone, PartialEq)]
pub struct StatusBannerProps {
    pub status: Status,
}

#[component]
pub fn StatusBanner(props: StatusBannerProps) -> Element {
    match props.status {
        Status::Loading => rsx! {
            div {
                style: "display: flex; justify-content: center; align-items: center; padding: 40px; color: #666;",
                "Loading rainfall data..."
            }
        },
        Status::Error(message) => rsx! {
            div {
                style: "padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
                strong { "Error: " }
                "{message}"
            }
        },
        Status::Empty(message) => rsx! {
            div {
                style: "padding: 12px 16px; margin: 8px 0; background: #FFF8E1; color: #6D4C41; border-radius: 4px; border: 1px solid #FFE082;",
                "{message}"
            }
        },
    }
}
