use dioxus::prelude::*;

use crate::charts::choropleth::ChoroplethMap;

#[component]
pub fn Choropleth() -> Element {
    rsx! {
        section { class: "page page-chart page-choropleth",
            ChoroplethMap {}
        }
    }
}
