use dioxus::prelude::*;

use crate::charts::heat_map::HeatMap;

#[component]
pub fn Heat() -> Element {
    rsx! {
        section { class: "page page-chart page-heat-map",
            HeatMap {}
        }
    }
}
