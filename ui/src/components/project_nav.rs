//! Chart selector navigation: an inline list on large screens, a
//! collapsible dropdown on small ones.

use dioxus::prelude::*;

use crate::core::viewport;

const NAV_CSS: Asset = asset!("/assets/styling/project_nav.css");

/// The fixed set of chart pages, with everything the router, the selector,
/// and the page metadata need to know about each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartId {
    #[default]
    Home,
    BarChart,
    ScatterplotGraph,
    HeatMap,
    ChoroplethMap,
    TreemapDiagram,
}

impl ChartId {
    pub const ALL: [ChartId; 6] = [
        ChartId::Home,
        ChartId::BarChart,
        ChartId::ScatterplotGraph,
        ChartId::HeatMap,
        ChartId::ChoroplethMap,
        ChartId::TreemapDiagram,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ChartId::Home => "Home",
            ChartId::BarChart => "Bar Chart",
            ChartId::ScatterplotGraph => "Scatterplot Graph",
            ChartId::HeatMap => "Heat Map",
            ChartId::ChoroplethMap => "Choropleth Map",
            ChartId::TreemapDiagram => "Treemap Diagram",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            ChartId::Home => "/",
            ChartId::BarChart => "/bar-chart",
            ChartId::ScatterplotGraph => "/scatterplot-graph",
            ChartId::HeatMap => "/heat-map",
            ChartId::ChoroplethMap => "/choropleth-map",
            ChartId::TreemapDiagram => "/treemap-diagram",
        }
    }

    /// Per-page description metadata, mirrored into the document head.
    pub fn description(&self) -> &'static str {
        match self {
            ChartId::Home => {
                "A collection of interactive data-visualization projects rendered as SVG charts."
            }
            ChartId::BarChart => {
                "Data visualization project, bar chart, displaying information about the United States GDP over 68 years."
            }
            ChartId::ScatterplotGraph => {
                "Data visualization project, scatterplot graph, displaying information about doping allegations in professional bicycling."
            }
            ChartId::HeatMap => {
                "Data visualization project, heat map, displaying information about the global land-surface temperatures."
            }
            ChartId::ChoroplethMap => {
                "Data visualization project, choropleth map, displaying information about the United States educational attainment from 2010 - 2014."
            }
            ChartId::TreemapDiagram => {
                "Data visualization project, treemap diagram, featuring three different graphs relating to video game sales, kickstarter pledges, and movie sales."
            }
        }
    }

    /// Match a location pathname against the known chart paths. Anything
    /// unrecognized lands on the home page.
    pub fn from_path(path: &str) -> ChartId {
        let normalized = match path.trim_end_matches('/') {
            "" => "/",
            rest => rest,
        };
        Self::ALL
            .into_iter()
            .find(|chart| chart.path() == normalized)
            .unwrap_or_default()
    }
}

#[component]
pub fn ProjectNav(active: ChartId) -> Element {
    let mut expanded = use_signal(|| false);
    let navigator = use_navigator();

    let entries = |mut expanded: Signal<bool>, inline: bool| {
        rsx! {
            ul {
                class: if inline { "project-nav__list project-nav__list--inline" } else { "project-nav__list project-nav__list--dropdown" },
                for chart in ChartId::ALL.into_iter() {
                    li { key: "{chart.path()}",
                        button {
                            r#type: "button",
                            class: if chart == active { "project-nav__link active" } else { "project-nav__link" },
                            onclick: move |_| {
                                navigator.push(chart.path());
                                expanded.set(false);
                            },
                            "{chart.label()}"
                        }
                    }
                }
            }
        }
    };

    if viewport::is_small_screen() {
        rsx! {
            document::Link { rel: "stylesheet", href: NAV_CSS }
            nav { class: "project-nav project-nav--dropdown",
                button {
                    r#type: "button",
                    class: "project-nav__toggle",
                    onclick: move |_| {
                        let current = expanded();
                        expanded.set(!current);
                    },
                    span { "Select a Chart:" }
                    svg {
                        class: "project-nav__chevron",
                        view_box: "0 0 20 20",
                        path { d: "M9.293 12.95l.707.707L15.657 8l-1.414-1.414L10 10.828 5.757 6.586 4.343 8z" }
                    }
                }
                if expanded() {
                    {entries(expanded, false)}
                }
                span { class: "project-nav__current", "{active.label()}" }
            }
        }
    } else {
        rsx! {
            document::Link { rel: "stylesheet", href: NAV_CSS }
            nav { class: "project-nav project-nav--inline",
                {entries(expanded, true)}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_known_path_maps_to_its_chart() {
        for chart in ChartId::ALL {
            assert_eq!(ChartId::from_path(chart.path()), chart);
        }
    }

    #[test]
    fn unknown_paths_fall_back_to_home() {
        assert_eq!(ChartId::from_path("/nope"), ChartId::Home);
        assert_eq!(ChartId::from_path("/bar-chart/extra"), ChartId::Home);
        assert_eq!(ChartId::from_path(""), ChartId::Home);
    }

    #[test]
    fn trailing_slashes_are_tolerated() {
        assert_eq!(ChartId::from_path("/heat-map/"), ChartId::HeatMap);
        assert_eq!(ChartId::from_path("/"), ChartId::Home);
    }

    #[test]
    fn labels_and_descriptions_are_distinct() {
        for chart in ChartId::ALL {
            assert!(!chart.label().is_empty());
            assert!(!chart.description().is_empty());
        }
        let labels: std::collections::BTreeSet<&str> =
            ChartId::ALL.iter().map(|chart| chart.label()).collect();
        assert_eq!(labels.len(), ChartId::ALL.len());
    }
}
