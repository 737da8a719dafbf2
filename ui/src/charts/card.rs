//! Loading / error / data chrome shared by every chart page.

use dioxus::prelude::*;

use crate::core::format;

const CHARTS_CSS: Asset = asset!("/assets/styling/charts.css");

/// Shown while the dataset request is in flight.
#[component]
pub fn LoadingNotice() -> Element {
    rsx! {
        h1 { class: "chart-loading", "Loading Data..." }
    }
}

/// Plain-text failure line replacing the chart; there is no retry control,
/// a reload issues the next attempt.
#[component]
pub fn FetchErrorNotice(message: String) -> Element {
    rsx! {
        div { class: "chart-error", "There was a problem fetching the data - {message}" }
    }
}

/// Chart title and optional sub-description headings.
#[component]
pub fn ChartHeading(title: String, description: Option<String>) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: CHARTS_CSS }
        h1 { id: "title", class: "chart-heading__title", "{title}" }
        if let Some(description) = description.as_ref() {
            h2 { id: "description", class: "chart-heading__description", "{description}" }
        }
    }
}

/// The payload-size and source-link footer under each chart.
#[component]
pub fn DataInformation(payload_bytes: usize, source_url: String) -> Element {
    rsx! {
        ul { class: "data-information",
            li {
                "Size:\u{a0}"
                i { {format::format_kb(payload_bytes)} }
            }
            li {
                i {
                    "Data:"
                    a {
                        href: "{source_url}",
                        target: "_blank",
                        rel: "noreferrer",
                        "\u{a0}Source"
                    }
                }
            }
        }
    }
}
