//! Doping-allegation scatterplot over the fastest Alpe d'Huez climbs.

use dioxus::prelude::*;

use crate::charts::card::{ChartHeading, DataInformation, FetchErrorNotice, LoadingNotice};
use crate::charts::frame::{ChartFrame, Tick, XAxis, YAxis, FRAME};
use crate::charts::tooltip::{Tooltip, TooltipState};
use crate::core::data::{self, CyclistRecord};
use crate::core::fetch::LoadState;
use crate::core::format;
use crate::core::scale::LinearScale;

const DOT_RADIUS: f64 = 6.0;

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterLayout {
    pub x_scale: LinearScale,
    pub y_scale: LinearScale,
    pub dots: Vec<Dot>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dot {
    pub cx: f64,
    pub cy: f64,
    pub doping: bool,
    pub record: CyclistRecord,
}

/// One dot per finisher: race year across, finishing time down, with the
/// fastest time at the top. The year domain is padded by one on each side
/// so no dot sits on the frame edge.
pub fn layout(records: &[CyclistRecord], frame: ChartFrame) -> ScatterLayout {
    let min_year = records.iter().map(|r| r.year).min().unwrap_or(0);
    let max_year = records.iter().map(|r| r.year).max().unwrap_or(0);
    let min_seconds = records.iter().map(|r| r.seconds).min().unwrap_or(0);
    let max_seconds = records.iter().map(|r| r.seconds).max().unwrap_or(0);

    let x_scale = LinearScale::new(
        (f64::from(min_year - 1), f64::from(max_year + 1)),
        (0.0, frame.width),
    );
    let y_scale = LinearScale::new(
        (f64::from(min_seconds), f64::from(max_seconds)),
        (0.0, frame.height),
    );

    let dots = records
        .iter()
        .map(|record| Dot {
            cx: x_scale.scale(f64::from(record.year)),
            cy: y_scale.scale(f64::from(record.seconds)),
            doping: record.has_doping_allegation(),
            record: record.clone(),
        })
        .collect::<Vec<Dot>>();

    tracing::debug!(dots = dots.len(), "laid out cyclist dots");

    ScatterLayout {
        x_scale,
        y_scale,
        dots,
    }
}

fn tooltip_lines(record: &CyclistRecord) -> Vec<String> {
    let mut lines = vec![
        format!("{}: {}", record.name, record.nationality),
        format!("Year: {}, Time: {}", record.year, record.time),
    ];
    if record.has_doping_allegation() {
        lines.push(record.doping.clone());
    }
    lines
}

#[component]
pub fn ScatterplotGraph() -> Element {
    let resource = use_resource(|| async move { data::load_cyclists().await });
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
        LoadState::Ready(records) => {
            let finisher_count = records.len();
            let chart = layout(&records, FRAME);
            let x_ticks: Vec<Tick> = chart
                .x_scale
                .ticks(10)
                .into_iter()
                .map(|year| Tick::new(chart.x_scale.scale(year), format!("{year:.0}")))
                .collect();
            let y_ticks: Vec<Tick> = chart
                .y_scale
                .ticks(10)
                .into_iter()
                .map(|seconds| {
                    Tick::new(
                        chart.y_scale.scale(seconds),
                        format::format_race_time(seconds as u32),
                    )
                })
                .collect();

            rsx! {
                div { class: "chart-page chart-page--scatterplot",
                    ChartHeading {
                        title: "Doping in Professional Bicycle Racing",
                        description: "{finisher_count} Fastest times up Alpe d'Huez",
                    }

                    div { class: "chart-surface",
                        svg {
                            class: "chart-svg",
                            view_box: "{FRAME.view_box()}",
                            preserve_aspect_ratio: "xMinYMin meet",
                            g { class: "plot-area", transform: "{FRAME.plot_transform()}",
                                for dot in chart.dots.iter() {
                                    circle {
                                        key: "{dot.record.place}",
                                        class: if dot.doping { "dot dot--doping" } else { "dot dot--clean" },
                                        cx: "{dot.cx}",
                                        cy: "{dot.cy}",
                                        r: "{DOT_RADIUS}",
                                        onmousemove: {
                                            let record = dot.record.clone();
                                            move |event: Event<MouseData>| {
                                                let point = event.page_coordinates();
                                                tooltip
                                                    .write()
                                                    .show_at(point.x, point.y, tooltip_lines(&record));
                                            }
                                        },
                                        onmouseleave: move |_| tooltip.write().hide(),
                                    }
                                }
                            }
                            XAxis {
                                ticks: x_ticks,
                                length: FRAME.width,
                                transform: format!(
                                    "translate({}, {})",
                                    FRAME.margin,
                                    FRAME.margin + FRAME.height
                                ),
                            }
                            YAxis {
                                ticks: y_ticks,
                                length: FRAME.height,
                                transform: FRAME.plot_transform(),
                            }
                            g {
                                id: "legend",
                                class: "legend legend--scatterplot",
                                transform: format!(
                                    "translate({}, {})",
                                    FRAME.margin + FRAME.width - 18.0,
                                    FRAME.margin + FRAME.height / 2.0
                                ),
                                g { class: "legend__entry",
                                    rect { class: "dot--clean", x: "0", y: "0", width: "14", height: "14" }
                                    text { x: "-6", y: "11", text_anchor: "end", "No doping allegations" }
                                }
                                g { class: "legend__entry", transform: "translate(0, 22)",
                                    rect { class: "dot--doping", x: "0", y: "0", width: "14", height: "14" }
                                    text { x: "-6", y: "11", text_anchor: "end",
                                        "Riders with doping allegations"
                                    }
                                }
                            }
                        }
                        Tooltip { state: tooltip }
                    }

                    DataInformation {
                        payload_bytes: data::CYCLIST_FIXTURE.len(),
                        source_url: "{data::CYCLIST_ENDPOINT}",
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> Vec<CyclistRecord> {
        serde_json::from_str(data::CYCLIST_FIXTURE).expect("bundled cyclist fixture parses")
    }

    #[test]
    fn one_dot_per_finisher() {
        let records = fixture();
        let chart = layout(&records, FRAME);
        assert_eq!(chart.dots.len(), records.len());
        assert_eq!(chart.dots.len(), 35);
    }

    #[test]
    fn year_domain_is_padded_by_one() {
        let records = fixture();
        let chart = layout(&records, FRAME);
        let min_year = records.iter().map(|r| r.year).min().unwrap() as f64;
        let max_year = records.iter().map(|r| r.year).max().unwrap() as f64;
        assert_eq!(chart.x_scale.domain, (min_year - 1.0, max_year + 1.0));
    }

    #[test]
    fn fastest_time_sits_at_the_top() {
        let records = fixture();
        let chart = layout(&records, FRAME);
        let fastest = records.iter().map(|r| r.seconds).min().unwrap();
        let top_dot = chart
            .dots
            .iter()
            .find(|dot| dot.record.seconds == fastest)
            .unwrap();
        assert!(top_dot.cy.abs() < 1e-9);
    }

    #[test]
    fn dots_stay_inside_the_plot() {
        let chart = layout(&fixture(), FRAME);
        for dot in &chart.dots {
            assert!(dot.cx >= 0.0 && dot.cx <= FRAME.width);
            assert!(dot.cy >= 0.0 && dot.cy <= FRAME.height);
        }
    }

    #[test]
    fn relayout_is_idempotent() {
        let records = fixture();
        assert_eq!(layout(&records, FRAME), layout(&records, FRAME));
    }
}
