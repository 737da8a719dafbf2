//! United States GDP bar chart.

use dioxus::prelude::*;
use time::macros::date;
use time::Date;

use crate::charts::card::{ChartHeading, DataInformation, FetchErrorNotice, LoadingNotice};
use crate::charts::frame::{ChartFrame, Tick, XAxis, YAxis, FRAME};
use crate::charts::tooltip::{Tooltip, TooltipState};
use crate::core::data::{self, GdpSeries};
use crate::core::fetch::LoadState;
use crate::core::format;
use crate::core::scale::{LinearScale, TimeScale};

const GDP_SOURCE_URL: &str = "https://fred.stlouisfed.org/data/GDP.txt";

#[derive(Debug, Clone, PartialEq)]
pub struct BarLayout {
    pub x_scale: TimeScale,
    pub y_scale: LinearScale,
    pub bars: Vec<Bar>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub date: Date,
    pub value: f64,
}

/// One bar per observation: x from a time scale over the recorded dates,
/// y from a linear scale anchored at zero.
pub fn layout(series: &GdpSeries, frame: ChartFrame) -> BarLayout {
    const FALLBACK_DATE: Date = date!(1947 - 01 - 01);

    let min_date = series
        .data
        .iter()
        .map(|obs| obs.date)
        .min()
        .unwrap_or(FALLBACK_DATE);
    let max_date = series
        .data
        .iter()
        .map(|obs| obs.date)
        .max()
        .unwrap_or(FALLBACK_DATE);
    let max_value = series.data.iter().map(|obs| obs.value).fold(0.0, f64::max);

    let x_scale = TimeScale::new((min_date, max_date), (0.0, frame.width));
    let y_scale = LinearScale::new((0.0, max_value), (frame.height, 0.0));

    let bar_width = if series.data.is_empty() {
        0.0
    } else {
        (frame.width / series.data.len() as f64).max(1.0)
    };

    let bars = series
        .data
        .iter()
        .map(|obs| {
            let y = y_scale.scale(obs.value);
            Bar {
                x: x_scale.scale(obs.date),
                y,
                width: bar_width,
                height: frame.height - y,
                date: obs.date,
                value: obs.value,
            }
        })
        .collect::<Vec<Bar>>();

    tracing::debug!(bars = bars.len(), "laid out GDP bars");

    BarLayout {
        x_scale,
        y_scale,
        bars,
    }
}

#[component]
pub fn BarChart() -> Element {
    let resource = use_resource(|| async move { data::load_gdp().await });
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
        LoadState::Ready(series) => {
            let chart = layout(&series, FRAME);
            let x_ticks: Vec<Tick> = chart
                .x_scale
                .year_ticks(10)
                .into_iter()
                .map(|tick| Tick::new(chart.x_scale.scale(tick), tick.year().to_string()))
                .collect();
            let y_ticks: Vec<Tick> = chart
                .y_scale
                .ticks(10)
                .into_iter()
                .map(|value| Tick::new(chart.y_scale.scale(value), format!("{value}")))
                .collect();

            rsx! {
                div { class: "chart-page chart-page--bar",
                    ChartHeading { title: "United States GDP" }

                    div { class: "chart-surface",
                        svg {
                            class: "chart-svg",
                            view_box: "{FRAME.view_box()}",
                            preserve_aspect_ratio: "xMinYMin meet",
                            g { class: "plot-area", transform: "{FRAME.plot_transform()}",
                                for bar in chart.bars.iter() {
                                    rect {
                                        key: "{bar.date}",
                                        class: "bar",
                                        x: "{bar.x}",
                                        y: "{bar.y}",
                                        width: "{bar.width}",
                                        height: "{bar.height}",
                                        onmousemove: {
                                            let (bar_date, bar_value) = (bar.date, bar.value);
                                            move |event: Event<MouseData>| {
                                                let point = event.page_coordinates();
                                                tooltip.write().show_at(
                                                    point.x,
                                                    point.y,
                                                    vec![
                                                        format::format_quarter(bar_date),
                                                        format::format_billions(bar_value),
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
                        }
                        Tooltip { state: tooltip }
                    }

                    DataInformation {
                        payload_bytes: data::GDP_FIXTURE.len(),
                        source_url: "{GDP_SOURCE_URL}",
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> GdpSeries {
        serde_json::from_str(data::GDP_FIXTURE).expect("bundled GDP fixture parses")
    }

    #[test]
    fn one_bar_per_observation() {
        let series = fixture();
        let chart = layout(&series, FRAME);
        assert_eq!(chart.bars.len(), series.data.len());
        assert_eq!(chart.bars.len(), 68);
    }

    #[test]
    fn x_domain_spans_recorded_dates() {
        let series = fixture();
        let chart = layout(&series, FRAME);
        let (start, end) = chart.x_scale.domain();
        assert_eq!(start, series.data.first().unwrap().date);
        assert_eq!(end, series.data.last().unwrap().date);
    }

    #[test]
    fn y_domain_runs_from_zero_to_peak() {
        let series = fixture();
        let chart = layout(&series, FRAME);
        let peak = series.data.iter().map(|obs| obs.value).fold(0.0, f64::max);
        assert_eq!(chart.y_scale.domain, (0.0, peak));
    }

    #[test]
    fn bars_sit_on_the_baseline() {
        let chart = layout(&fixture(), FRAME);
        for bar in &chart.bars {
            assert!((bar.y + bar.height - FRAME.height).abs() < 1e-9);
            assert!(bar.height >= 0.0);
        }
    }

    #[test]
    fn relayout_is_idempotent() {
        let series = fixture();
        assert_eq!(layout(&series, FRAME), layout(&series, FRAME));
    }

    #[test]
    fn empty_series_produces_no_bars() {
        let series = GdpSeries {
            name: String::new(),
            source_name: String::new(),
            updated_at: String::new(),
            display_url: String::new(),
            data: Vec::new(),
        };
        assert!(layout(&series, FRAME).bars.is_empty());
    }
}
