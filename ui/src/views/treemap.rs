use dioxus::prelude::*;

use crate::charts::treemap::TreemapDiagram;
use crate::core::data::TreemapDataset;

#[component]
pub fn Treemap(dataset: TreemapDataset) -> Element {
    rsx! {
        section { class: "page page-chart page-treemap",
            TreemapDiagram { dataset }
        }
    }
}
