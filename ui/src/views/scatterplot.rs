use dioxus::prelude::*;

use crate::charts::scatterplot::ScatterplotGraph;

#[component]
pub fn Scatterplot() -> Element {
    rsx! {
        section { class: "page page-chart page-scatterplot",
            ScatterplotGraph {}
        }
    }
}
