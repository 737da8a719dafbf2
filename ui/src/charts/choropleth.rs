//! US educational-attainment choropleth.

use std::collections::HashMap;

use dioxus::prelude::*;

use crate::charts::card::{ChartHeading, DataInformation, FetchErrorNotice, LoadingNotice};
use crate::charts::frame::ThresholdLegend;
use crate::charts::tooltip::{Tooltip, TooltipState};
use crate::core::data::{self, EducationRecord};
use crate::core::fetch::{FetchError, LoadState};
use crate::core::palette;
use crate::core::scale::{evenly_spaced, ThresholdScale};
use crate::core::topo::{feature_paths, interior_mesh, TopoError, Topology};

// The county atlas is pre-projected to a fixed 960×600 surface.
const MAP_WIDTH: f64 = 960.0;
const MAP_HEIGHT: f64 = 600.0;
const LEGEND_WIDTH: f64 = 260.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ChoroplethLayout {
    pub counties: Vec<County>,
    pub state_borders: String,
    pub color_scale: ThresholdScale,
    pub education_domain: (f64, f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct County {
    pub fips: Option<u32>,
    pub path: String,
    pub fill: &'static str,
    pub education: f64,
    pub area_name: String,
    pub state: String,
}

/// Join county geometry against the education records by fips. A county
/// with no matching record keeps its mark and defaults to 0% rather than
/// being excluded.
pub fn layout(
    topology: &Topology,
    education: &[EducationRecord],
) -> Result<ChoroplethLayout, TopoError> {
    let regions = feature_paths(topology, "counties")?;
    let state_borders = interior_mesh(topology, "states")?;

    let by_fips: HashMap<u32, &EducationRecord> = education
        .iter()
        .map(|record| (record.fips, record))
        .collect();

    let min_education = education
        .iter()
        .map(|record| record.bachelors_or_higher)
        .fold(f64::INFINITY, f64::min);
    let max_education = education
        .iter()
        .map(|record| record.bachelors_or_higher)
        .fold(f64::NEG_INFINITY, f64::max);
    let (min_education, max_education) = if education.is_empty() {
        (0.0, 0.0)
    } else {
        (min_education, max_education)
    };

    let color_scale = ThresholdScale::new(
        evenly_spaced(min_education, max_education, 8),
        palette::ORANGES_9.to_vec(),
    );

    let counties = regions
        .into_iter()
        .map(|region| {
            let record = region.id.and_then(|fips| by_fips.get(&fips).copied());
            let education = record.map(|r| r.bachelors_or_higher).unwrap_or(0.0);
            County {
                fips: region.id,
                path: region.path,
                fill: color_scale.color(education),
                education,
                area_name: record
                    .map(|r| r.area_name.clone())
                    .unwrap_or_else(|| "Unknown county".to_string()),
                state: record.map(|r| r.state.clone()).unwrap_or_default(),
            }
        })
        .collect::<Vec<County>>();

    tracing::debug!(
        counties = counties.len(),
        records = education.len(),
        "joined county geometry with education records"
    );

    Ok(ChoroplethLayout {
        counties,
        state_borders,
        color_scale,
        education_domain: (min_education, max_education),
    })
}

fn legend_label(value: f64) -> String {
    format!("{}%", value.round())
}

#[component]
pub fn ChoroplethMap() -> Element {
    let resource = use_resource(|| async move {
        let counties = data::load_counties().await?;
        let education = data::load_education().await?;
        Ok::<(Topology, Vec<EducationRecord>), FetchError>((counties, education))
    });
    let mut tooltip = use_signal(TooltipState::default);

    let guard = resource.read();
    let state = LoadState::from_result(guard.as_ref());

    match state {
        LoadState::Loading => rsx! {
            LoadingNotice {}
        },
        LoadState::Failed(message) => rsx! {
            FetchErrorNotice { message }
        },
        LoadState::Ready((topology, education)) => match layout(&topology, &education) {
            Err(err) => {
                let message = err.to_string();
                rsx! {
                    FetchErrorNotice { message }
                }
            }
            Ok(chart) => rsx! {
                div { class: "chart-page chart-page--choropleth",
                    ChartHeading {
                        title: "U.S. Educational Attainment",
                        description: "Adults (aged 25 and older) with a bachelor's degree or higher (2010 - 2014)",
                    }

                    div { class: "chart-surface",
                        svg {
                            class: "chart-svg",
                            view_box: "0 0 {MAP_WIDTH} {MAP_HEIGHT}",
                            preserve_aspect_ratio: "xMinYMin meet",
                            g { class: "plot-area",
                                g { class: "counties",
                                    for (index, county) in chart.counties.iter().enumerate() {
                                        path {
                                            key: "{index}",
                                            class: "county",
                                            d: "{county.path}",
                                            fill: county.fill,
                                            onmousemove: {
                                                let area_name = county.area_name.clone();
                                                let county_state = county.state.clone();
                                                let education = county.education;
                                                move |event: Event<MouseData>| {
                                                    let point = event.page_coordinates();
                                                    let place = if county_state.is_empty() {
                                                        area_name.clone()
                                                    } else {
                                                        format!("{area_name}, {county_state}")
                                                    };
                                                    tooltip.write().show_at(
                                                        point.x,
                                                        point.y,
                                                        vec![place, format!("{education}%")],
                                                    );
                                                }
                                            },
                                            onmouseleave: move |_| tooltip.write().hide(),
                                        }
                                    }
                                }
                                path { class: "states", d: "{chart.state_borders}" }
                            }
                            ThresholdLegend {
                                scale: chart.color_scale.clone(),
                                axis_domain: chart.education_domain,
                                width: LEGEND_WIDTH,
                                swatch_height: 15.0,
                                extend_ends: false,
                                transform: "translate(625, 40)",
                                format: legend_label,
                            }
                        }
                        Tooltip { state: tooltip }
                    }

                    DataInformation {
                        payload_bytes: data::COUNTY_FIXTURE.len() + data::EDUCATION_FIXTURE.len(),
                        source_url: "https://www.ers.usda.gov/data-products/county-level-data-sets/download-data.aspx",
                    }
                }
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixtures() -> (Topology, Vec<EducationRecord>) {
        let topology =
            serde_json::from_str(data::COUNTY_FIXTURE).expect("bundled county fixture parses");
        let education =
            serde_json::from_str(data::EDUCATION_FIXTURE).expect("bundled education fixture parses");
        (topology, education)
    }

    #[test]
    fn one_path_per_county_geometry() {
        let (topology, education) = fixtures();
        let chart = layout(&topology, &education).unwrap();
        assert_eq!(chart.counties.len(), 12);
    }

    #[test]
    fn unmatched_county_defaults_to_zero() {
        let (topology, education) = fixtures();
        let chart = layout(&topology, &education).unwrap();

        let orphans: Vec<&County> = chart
            .counties
            .iter()
            .filter(|county| county.state.is_empty())
            .collect();
        assert_eq!(orphans.len(), 1);

        let orphan = orphans[0];
        assert_eq!(orphan.education, 0.0);
        assert_eq!(orphan.fill, palette::ORANGES_9[0]);
        assert_eq!(orphan.area_name, "Unknown county");
    }

    #[test]
    fn matched_counties_carry_their_records() {
        let (topology, education) = fixtures();
        let chart = layout(&topology, &education).unwrap();
        let matched = chart
            .counties
            .iter()
            .filter(|county| !county.state.is_empty())
            .count();
        assert_eq!(matched, education.len());
    }

    #[test]
    fn state_borders_keep_only_interior_lines() {
        let (topology, education) = fixtures();
        let chart = layout(&topology, &education).unwrap();
        // Three stacked state rows share two interior boundaries, each made
        // of four county-edge arcs.
        let move_commands = chart.state_borders.matches('M').count();
        assert_eq!(move_commands, 8);
        assert!(!chart.state_borders.contains("M0.0,0.0"));
    }

    #[test]
    fn eight_breakpoints_over_nine_colors() {
        let (topology, education) = fixtures();
        let chart = layout(&topology, &education).unwrap();
        assert_eq!(chart.color_scale.breakpoints().len(), 8);
        assert_eq!(chart.color_scale.colors().len(), 9);
    }

    #[test]
    fn relayout_is_idempotent() {
        let (topology, education) = fixtures();
        assert_eq!(
            layout(&topology, &education).unwrap(),
            layout(&topology, &education).unwrap()
        );
    }
}
