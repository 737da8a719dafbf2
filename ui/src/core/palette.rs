//! Color schemes used by the chart fills and legends.
//!
//! These are the ColorBrewer ramps the charts were designed against: a
//! diverging red/blue ramp for temperature cells, a sequential oranges ramp
//! for the education choropleth, and a ten-hue categorical cycle for treemap
//! tiles.

/// Diverging blue→red ramp, cold to hot. Ten steps.
pub const RD_BU_REVERSED_10: [&str; 10] = [
    "#053061", "#2166ac", "#4393c3", "#92c5de", "#d1e5f0", "#fddbc7", "#f4a582", "#d6604d",
    "#b2182b", "#67001f",
];

/// Sequential oranges ramp, light to dark. Nine steps.
pub const ORANGES_9: [&str; 9] = [
    "#fff5eb", "#fee6ce", "#fdd0a2", "#fdae6b", "#fd8d3c", "#f16913", "#d94801", "#a63603",
    "#7f2704",
];

/// Categorical cycle for treemap categories.
pub const CATEGORICAL_10: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// Fill for a category at `index`, cycling once the palette is exhausted.
pub fn categorical(index: usize) -> &'static str {
    CATEGORICAL_10[index % CATEGORICAL_10.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categorical_cycles_past_the_palette_end() {
        assert_eq!(categorical(0), CATEGORICAL_10[0]);
        assert_eq!(categorical(10), CATEGORICAL_10[0]);
        assert_eq!(categorical(13), CATEGORICAL_10[3]);
    }

    #[test]
    fn ramps_are_well_formed_hex() {
        for color in RD_BU_REVERSED_10.iter().chain(&ORANGES_9).chain(&CATEGORICAL_10) {
            assert!(color.starts_with('#') && color.len() == 7, "{color}");
        }
    }
}
