use dioxus::prelude::*;

use crate::charts::bar::BarChart;

#[component]
pub fn Bar() -> Element {
    rsx! {
        section { class: "page page-chart page-bar-chart",
            BarChart {}
        }
    }
}
