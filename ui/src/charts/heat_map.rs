//! Global land-surface temperature heat map.

use dioxus::prelude::*;
use time::{Date, Month};

use crate::charts::card::{ChartHeading, DataInformation, FetchErrorNotice, LoadingNotice};
use crate::charts::frame::{ChartFrame, ThresholdLegend, Tick, XAxis, YAxis, FRAME};
use crate::charts::tooltip::{Tooltip, TooltipState};
use crate::core::data::{self, MonthlyVariance, TemperatureData};
use crate::core::fetch::LoadState;
use crate::core::format;
use crate::core::palette;
use crate::core::scale::{ThresholdScale, TimeScale};

const LEGEND_WIDTH: f64 = 400.0;

#[derive(Debug, Clone, PartialEq)]
pub struct HeatMapLayout {
    pub x_scale: TimeScale,
    pub color_scale: ThresholdScale,
    pub cells: Vec<Cell>,
    pub temperature_domain: (f64, f64),
    pub year_range: (i32, i32),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: &'static str,
    pub temperature: f64,
    pub record: MonthlyVariance,
}

/// One cell per monthly record: years across, the twelve months as rows,
/// fill bucketed through a diverging threshold scale over the absolute
/// temperature (base + variance).
pub fn layout(dataset: &TemperatureData, frame: ChartFrame) -> HeatMapLayout {
    let min_year = dataset
        .monthly_variance
        .iter()
        .map(|record| record.year)
        .min()
        .unwrap_or(0);
    let max_year = dataset
        .monthly_variance
        .iter()
        .map(|record| record.year)
        .max()
        .unwrap_or(0);

    // The domain is extended one year past the last record so its cell
    // column still falls inside the plot.
    let x_scale = TimeScale::new(
        (january(min_year), january(max_year + 1)),
        (0.0, frame.width),
    );

    let year_count = (max_year - min_year + 1).max(1) as f64;
    let cell_width = frame.width / year_count;
    let cell_height = frame.height / 12.0;

    let temperatures: Vec<f64> = dataset
        .monthly_variance
        .iter()
        .map(|record| dataset.base_temperature + record.variance)
        .collect();
    let min_temperature = temperatures.iter().copied().fold(f64::INFINITY, f64::min);
    let max_temperature = temperatures
        .iter()
        .copied()
        .fold(f64::NEG_INFINITY, f64::max);
    let (min_temperature, max_temperature) = if temperatures.is_empty() {
        (0.0, 0.0)
    } else {
        (min_temperature, max_temperature)
    };

    // Nine interior breakpoints over ten diverging colors; the step runs on
    // elevenths of the span, which compresses the hottest band the way the
    // reference chart banded its ramp.
    let step = (max_temperature - min_temperature) / 11.0;
    let breakpoints: Vec<f64> = (1..=9)
        .map(|i| round1(min_temperature + f64::from(i) * step))
        .collect();
    let color_scale = ThresholdScale::new(breakpoints, palette::RD_BU_REVERSED_10.to_vec());

    let cells = dataset
        .monthly_variance
        .iter()
        .zip(temperatures)
        .map(|(record, temperature)| Cell {
            x: x_scale.scale(january(record.year)),
            y: f64::from(record.month.saturating_sub(1)) * cell_height,
            width: cell_width,
            height: cell_height,
            fill: color_scale.color(temperature),
            temperature,
            record: *record,
        })
        .collect::<Vec<Cell>>();

    tracing::debug!(cells = cells.len(), "laid out temperature cells");

    HeatMapLayout {
        x_scale,
        color_scale,
        cells,
        temperature_domain: (min_temperature, max_temperature),
        year_range: (min_year, max_year),
    }
}

fn january(year: i32) -> Date {
    Date::from_calendar_date(year, Month::January, 1).unwrap_or(Date::MIN)
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn legend_label(value: f64) -> String {
    format!("{value:.1}\u{2103}")
}

#[component]
pub fn HeatMap() -> Element {
    let resource = use_resource(|| async move { data::load_temperature().await });
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
        LoadState::Ready(dataset) => {
            let base_temperature = dataset.base_temperature;
            let chart = layout(&dataset, FRAME);
            let (first_year, last_year) = chart.year_range;

            let x_ticks: Vec<Tick> = chart
                .x_scale
                .year_ticks(10)
                .into_iter()
                .map(|tick| Tick::new(chart.x_scale.scale(tick), tick.year().to_string()))
                .collect();
            let cell_height = FRAME.height / 12.0;
            let y_ticks: Vec<Tick> = (1..=12u8)
                .map(|month| {
                    Tick::new(
                        (f64::from(month) - 0.5) * cell_height,
                        format::month_name(month),
                    )
                })
                .collect();

            rsx! {
                div { class: "chart-page chart-page--heat-map",
                    ChartHeading {
                        title: "Global Land-Surface Temperatures",
                        description: "({first_year} - {last_year}) Base temperature of: {base_temperature:.2}\u{2103}",
                    }

                    div { class: "chart-surface",
                        svg {
                            class: "chart-svg",
                            view_box: "{FRAME.view_box()}",
                            preserve_aspect_ratio: "xMinYMin meet",
                            g { class: "plot-area", transform: "{FRAME.plot_transform()}",
                                for cell in chart.cells.iter() {
                                    rect {
                                        key: "{cell.record.year}-{cell.record.month}",
                                        class: "cell",
                                        x: "{cell.x}",
                                        y: "{cell.y}",
                                        width: "{cell.width}",
                                        height: "{cell.height}",
                                        fill: cell.fill,
                                        onmousemove: {
                                            let record = cell.record;
                                            let temperature = cell.temperature;
                                            move |event: Event<MouseData>| {
                                                let point = event.page_coordinates();
                                                tooltip.write().show_at(
                                                    point.x,
                                                    point.y,
                                                    vec![
                                                        format!(
                                                            "{} - {} - {}",
                                                            record.year,
                                                            format::month_name(record.month),
                                                            format::format_celsius(temperature),
                                                        ),
                                                        format!(
                                                            "Variance of {}",
                                                            format::format_celsius(record.variance),
                                                        ),
                                                    ],
                                                );
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
                            ThresholdLegend {
                                scale: chart.color_scale.clone(),
                                axis_domain: chart.temperature_domain,
                                width: LEGEND_WIDTH,
                                swatch_height: 15.0,
                                extend_ends: true,
                                transform: format!(
                                    "translate({}, {})",
                                    FRAME.width / 3.0,
                                    FRAME.height + FRAME.margin * 2.0 - 20.0
                                ),
                                format: legend_label,
                            }
                        }
                        Tooltip { state: tooltip }
                    }

                    DataInformation {
                        payload_bytes: data::TEMPERATURE_FIXTURE.len(),
                        source_url: "http://berkeleyearth.org/data/",
                    }
                }
            }
        }
    }
}
