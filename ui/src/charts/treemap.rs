//! Treemap diagram over the three sales/pledges datasets.

use dioxus::prelude::*;

use crate::charts::card::{ChartHeading, DataInformation, FetchErrorNotice, LoadingNotice};
use crate::charts::tooltip::{Tooltip, TooltipState};
use crate::core::data::{self, TreeNode, TreemapDataset};
use crate::core::fetch::LoadState;
use crate::core::palette;
use crate::core::treemap::{self, Tile};

const TILE_AREA_WIDTH: f64 = 960.0;
const TILE_AREA_HEIGHT: f64 = 570.0;
const LEGEND_ROW_HEIGHT: f64 = 24.0;
const LEGEND_COLUMNS: usize = 4;

// Labels only fit on tiles with some room to spare.
const LABEL_MIN_WIDTH: f64 = 44.0;
const LABEL_MIN_HEIGHT: f64 = 16.0;

#[derive(Debug, Clone, PartialEq)]
pub struct TreemapLayout {
    pub tiles: Vec<Tile>,
    pub categories: Vec<String>,
}

/// Squarified tiles plus the category list driving fills and the legend.
pub fn layout(root: &TreeNode) -> TreemapLayout {
    let tiles = treemap::layout(root, TILE_AREA_WIDTH, TILE_AREA_HEIGHT);
    tracing::debug!(tiles = tiles.len(), "laid out treemap tiles");
    TreemapLayout {
        tiles,
        categories: treemap::categories(root),
    }
}

pub fn category_fill(categories: &[String], category: &str) -> &'static str {
    let index = categories
        .iter()
        .position(|known| known == category)
        .unwrap_or(0);
    palette::categorical(index)
}

#[component]
pub fn TreemapDiagram(dataset: ReadOnlySignal<TreemapDataset>) -> Element {
    // Reading the dataset signal inside the resource closure re-issues the
    // load whenever the `?treemap-data=` selection changes.
    let resource = use_resource(move || async move { data::load_treemap(dataset()).await });
    let mut tooltip = use_signal(TooltipState::default);
    let navigator = use_navigator();

    let selected = dataset();
    let guard = resource.read();
    let state = LoadState::from_result(guard.as_ref());

    let switcher = rsx! {
        div { class: "treemap-switcher",
            for option in TreemapDataset::ALL.into_iter() {
                button {
                    key: "{option.param()}",
                    r#type: "button",
                    class: if option == selected {
                        "treemap-switcher__button treemap-switcher__button--active"
                    } else {
                        "treemap-switcher__button"
                    },
                    onclick: move |_| {
                        navigator
                            .push(format!("/treemap-diagram?treemap-data={}", option.param()));
                    },
                    "{option.switch_label()}"
                }
            }
        }
    };

    match state {
        LoadState::Loading => rsx! {
            {switcher}
            LoadingNotice {}
        },
        LoadState::Failed(message) => rsx! {
            {switcher}
            FetchErrorNotice { message }
        },
        LoadState::Ready(root) => {
            let chart = layout(&root);
            let legend_rows = chart.categories.len().div_ceil(LEGEND_COLUMNS);
            let legend_height = legend_rows as f64 * LEGEND_ROW_HEIGHT;
            let view_height = TILE_AREA_HEIGHT + legend_height + 40.0;

            rsx! {
                div { class: "chart-page chart-page--treemap",
                    {switcher}
                    ChartHeading {
                        title: "{selected.title()}",
                        description: "{selected.description()}",
                    }

                    div { class: "chart-surface",
                        svg {
                            class: "chart-svg",
                            view_box: "0 0 {TILE_AREA_WIDTH} {view_height}",
                            preserve_aspect_ratio: "xMinYMin meet",
                            g { class: "plot-area",
                                for (index, tile) in chart.tiles.iter().enumerate() {
                                    g { key: "{index}-{tile.name}",
                                        rect {
                                            class: "tile",
                                            x: "{tile.x}",
                                            y: "{tile.y}",
                                            width: "{tile.width}",
                                            height: "{tile.height}",
                                            fill: category_fill(&chart.categories, &tile.category),
                                            onmousemove: {
                                                let tile = tile.clone();
                                                move |event: Event<MouseData>| {
                                                    let point = event.page_coordinates();
                                                    tooltip.write().show_at(
                                                        point.x,
                                                        point.y,
                                                        vec![
                                                            format!("Name: {}", tile.name),
                                                            format!("Category: {}", tile.category),
                                                            format!("Value: {}", tile.value),
                                                        ],
                                                    );
                                                }
                                            },
                                            onmouseleave: move |_| tooltip.write().hide(),
                                        }
                                        if tile.width >= LABEL_MIN_WIDTH && tile.height >= LABEL_MIN_HEIGHT {
                                            {
                                                let label_x = tile.x + 4.0;
                                                let label_y = tile.y + 12.0;
                                                rsx! {
                                                    text {
                                                        class: "tile__label",
                                                        x: "{label_x}",
                                                        y: "{label_y}",
                                                        "{tile.name}"
                                                    }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                            g {
                                id: "legend",
                                class: "legend legend--treemap",
                                transform: format!("translate(0, {})", TILE_AREA_HEIGHT + 24.0),
                                for (index, category) in chart.categories.iter().enumerate() {
                                    g {
                                        key: "{category}",
                                        class: "legend__entry",
                                        transform: format!(
                                            "translate({}, {})",
                                            (index % LEGEND_COLUMNS) as f64 * 200.0,
                                            (index / LEGEND_COLUMNS) as f64 * LEGEND_ROW_HEIGHT
                                        ),
                                        rect {
                                            class: "legend__swatch",
                                            width: "14",
                                            height: "14",
                                            fill: palette::categorical(index),
                                        }
                                        text { x: "20", y: "12", "{category}" }
                                    }
                                }
                            }
                        }
                        Tooltip { state: tooltip }
                    }

                    DataInformation {
                        payload_bytes: selected.fixture().len(),
                        source_url: "{selected.endpoint()}",
                    }
                }
            }
        }
    }
}
