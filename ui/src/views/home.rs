use dioxus::prelude::*;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { class: "page page-home",
            h1 { "About this Project" }
            p {
                "A single site collecting a set of interactive data-visualization "
                "projects: a bar chart, a scatterplot, a heat map, a choropleth "
                "map, and a treemap diagram."
            }
            p {
                "Each chart pulls its data from a public JSON endpoint (or the "
                "bundled copy shipped with the site) and renders it as SVG: "
                "scales map the data domain onto pixels, marks are bound "
                "per record, and hovering any mark raises a tooltip with the "
                "underlying values."
            }
            p { class: "page-home__cta",
                "Pick a chart from the selector above to get started."
            }
        }
    }
}
