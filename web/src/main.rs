use dioxus::prelude::*;

use ui::components::{ChartId, ProjectNav};
use ui::core::data::TreemapDataset;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(PageShell)]
    #[route("/")]
    Home {},
    #[route("/bar-chart")]
    Bar {},
    #[route("/scatterplot-graph")]
    Scatterplot {},
    #[route("/heat-map")]
    Heat {},
    #[route("/choropleth-map")]
    Choropleth {},
    #[route("/treemap-diagram?:..query")]
    TreemapPage { query: String },
    // Anything unrecognized lands on the home page.
    #[route("/:..segments")]
    Fallback { segments: Vec<String> },
}

impl Route {
    fn chart_id(&self) -> ChartId {
        match self {
            Route::Home {} | Route::Fallback { .. } => ChartId::Home,
            Route::Bar {} => ChartId::BarChart,
            Route::Scatterplot {} => ChartId::ScatterplotGraph,
            Route::Heat {} => ChartId::HeatMap,
            Route::Choropleth {} => ChartId::ChoroplethMap,
            Route::TreemapPage { .. } => ChartId::TreemapDiagram,
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Page shell around every route: global metadata, the page title, the
/// responsive chart selector, the routed chart, and the footer.
#[component]
fn PageShell() -> Element {
    let route: Route = use_route();
    let active = route.chart_id();

    rsx! {
        document::Title { "Data Visualization | {active.label()}" }
        document::Meta { name: "description", content: "{active.description()}" }

        div { class: "page-container",
            div { class: "page-container__body",
                h1 { class: "page-title", "Data Visualization" }
                ProjectNav { active }
                div { class: "project-container", Outlet::<Route> {} }
            }
            footer { class: "page-footer",
                span { "Designed & Coded by\u{a0}" }
                a {
                    href: "https://github.com/vizfolio/vizfolio",
                    target: "_blank",
                    rel: "noreferrer",
                    "the Vizfolio contributors"
                }
            }
        }
    }
}

#[component]
fn Home() -> Element {
    rsx! {
        ui::views::Home {}
    }
}

#[component]
fn Bar() -> Element {
    rsx! {
        ui::views::Bar {}
    }
}

#[component]
fn Scatterplot() -> Element {
    rsx! {
        ui::views::Scatterplot {}
    }
}

#[component]
fn Heat() -> Element {
    rsx! {
        ui::views::Heat {}
    }
}

#[component]
fn Choropleth() -> Element {
    rsx! {
        ui::views::Choropleth {}
    }
}

/// The treemap route carries a `?treemap-data=` query value naming the
/// sub-dataset; missing or unknown values fall back to the video-game data.
#[component]
fn TreemapPage(query: String) -> Element {
    let dataset = TreemapDataset::from_query(&query);
    rsx! {
        ui::views::Treemap { dataset }
    }
}

#[component]
fn Fallback(segments: Vec<String>) -> Element {
    let _ = segments;
    rsx! {
        ui::views::Home {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn known_paths_route_to_their_charts() {
        let cases = [
            ("/", ChartId::Home),
            ("/bar-chart", ChartId::BarChart),
            ("/scatterplot-graph", ChartId::ScatterplotGraph),
            ("/heat-map", ChartId::HeatMap),
            ("/choropleth-map", ChartId::ChoroplethMap),
            ("/treemap-diagram", ChartId::TreemapDiagram),
        ];
        for (path, expected) in cases {
            let route = Route::from_str(path).expect(path);
            assert_eq!(route.chart_id(), expected, "{path}");
        }
    }

    #[test]
    fn unknown_paths_fall_back_to_home() {
        let route = Route::from_str("/no-such-chart").unwrap();
        assert!(matches!(route, Route::Fallback { .. }));
        assert_eq!(route.chart_id(), ChartId::Home);
    }

    #[test]
    fn treemap_query_selects_the_sub_dataset() {
        let route = Route::from_str("/treemap-diagram?treemap-data=movie").unwrap();
        match route {
            Route::TreemapPage { query } => {
                assert_eq!(TreemapDataset::from_query(&query), TreemapDataset::Movies);
            }
            other => panic!("expected treemap route, got {other:?}"),
        }

        let bare = Route::from_str("/treemap-diagram").unwrap();
        match bare {
            Route::TreemapPage { query } => {
                assert_eq!(TreemapDataset::from_query(&query), TreemapDataset::VideoGames);
            }
            other => panic!("expected treemap route, got {other:?}"),
        }
    }
}
