//! Shared chart chrome: the plot frame, axis groups, and threshold legends.

use dioxus::prelude::*;

use crate::core::scale::{LinearScale, ThresholdScale};

/// Plot-area geometry shared by the rectangular charts. The margin holds the
/// axes and the legend strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartFrame {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
}

/// The 800×400 frame the bar, scatterplot, and heat-map charts draw in.
pub const FRAME: ChartFrame = ChartFrame {
    width: 800.0,
    height: 400.0,
    margin: 60.0,
};

impl ChartFrame {
    pub fn view_box(&self) -> String {
        format!(
            "0 0 {} {}",
            self.width + self.margin * 2.0,
            self.height + self.margin * 2.0
        )
    }

    /// Transform placing the plot area inside the margins.
    pub fn plot_transform(&self) -> String {
        format!("translate({}, {})", self.margin, self.margin)
    }
}

/// One axis tick: a pixel offset along the axis plus its label.
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub offset: f64,
    pub label: String,
}

impl Tick {
    pub fn new(offset: f64, label: impl Into<String>) -> Self {
        Self {
            offset,
            label: label.into(),
        }
    }
}

#[component]
pub fn XAxis(ticks: Vec<Tick>, length: f64, transform: String) -> Element {
    rsx! {
        g { class: "axis axis--x", transform: "{transform}",
            line { class: "axis__domain", x1: "0", y1: "0", x2: "{length}", y2: "0" }
            for tick in ticks.iter() {
                g {
                    key: "{tick.label}",
                    class: "axis__tick",
                    transform: "translate({tick.offset}, 0)",
                    line { x1: "0", y1: "0", x2: "0", y2: "6" }
                    text { y: "20", text_anchor: "middle", "{tick.label}" }
                }
            }
        }
    }
}

#[component]
pub fn YAxis(ticks: Vec<Tick>, length: f64, transform: String) -> Element {
    rsx! {
        g { class: "axis axis--y", transform: "{transform}",
            line { class: "axis__domain", x1: "0", y1: "0", x2: "0", y2: "{length}" }
            for tick in ticks.iter() {
                g {
                    key: "{tick.label}",
                    class: "axis__tick",
                    transform: "translate(0, {tick.offset})",
                    line { x1: "-6", y1: "0", x2: "0", y2: "0" }
                    text {
                        x: "-10",
                        dy: "0.32em",
                        text_anchor: "end",
                        "{tick.label}"
                    }
                }
            }
        }
    }
}

/// Color-ramp legend for a threshold scale: one swatch per bucket plus a
/// tick label at every breakpoint.
///
/// `extend_ends` stretches the open-ended first and last buckets to the
/// axis bounds; without it they render tick labels only, the way the
/// education legend leaves its extremes unbounded.
#[component]
pub fn ThresholdLegend(
    scale: ThresholdScale,
    axis_domain: (f64, f64),
    width: f64,
    swatch_height: f64,
    extend_ends: bool,
    transform: String,
    format: fn(f64) -> String,
) -> Element {
    let axis = LinearScale::new(axis_domain, (0.0, width));
    let tick_length = swatch_height + 3.0;
    let label_y = swatch_height + 16.0;

    let tick_marks: Vec<(f64, String)> = scale
        .breakpoints()
        .iter()
        .map(|breakpoint| (axis.scale(*breakpoint), format(*breakpoint)))
        .collect();

    let swatches: Vec<(f64, f64, &'static str)> = scale
        .colors()
        .iter()
        .enumerate()
        .filter_map(|(index, color)| {
            let (mut lower, mut upper) = scale.invert_extent(index);
            if extend_ends {
                lower = lower.or(Some(axis_domain.0));
                upper = upper.or(Some(axis_domain.1));
            }
            match (lower, upper) {
                (Some(lower), Some(upper)) => {
                    let x = axis.scale(lower);
                    Some((x, axis.scale(upper) - x, *color))
                }
                _ => None,
            }
        })
        .collect();

    rsx! {
        g { id: "legend", class: "legend", transform: "{transform}",
            for (x, swatch_width, color) in swatches.into_iter() {
                rect {
                    key: "{x}",
                    x: "{x}",
                    y: "0",
                    width: "{swatch_width}",
                    height: "{swatch_height}",
                    fill: color,
                }
            }
            for (offset, label) in tick_marks.into_iter() {
                g {
                    key: "{offset}",
                    class: "legend__tick",
                    transform: "translate({offset}, 0)",
                    line { x1: "0", y1: "0", x2: "0", y2: "{tick_length}" }
                    text { y: "{label_y}", text_anchor: "middle", "{label}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_view_box_includes_margins() {
        assert_eq!(FRAME.view_box(), "0 0 920 520");
    }

    #[test]
    fn plot_transform_offsets_by_margin() {
        assert_eq!(FRAME.plot_transform(), "translate(60, 60)");
    }
}
