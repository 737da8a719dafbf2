//! The five chart renderers plus the chrome they share.
//!
//! Every chart follows the same split: a pure `layout` function turning the
//! dataset into marks and scales (the unit-test surface), and a component
//! that binds those marks to SVG with hover-driven tooltips. Re-rendering
//! with an unchanged dataset re-emits the same keyed marks, so nothing is
//! ever duplicated in the DOM.

pub mod bar;
pub mod card;
pub mod choropleth;
pub mod frame;
pub mod heat_map;
pub mod scatterplot;
pub mod tooltip;
pub mod treemap;
