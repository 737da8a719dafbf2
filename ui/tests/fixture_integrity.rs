//! Bundled fixture integrity checks.
//!
//! Every chart ships a compiled-in JSON fixture as its offline data source.
//! A fixture that stops parsing, or whose record count drifts, would only
//! surface at runtime as a broken chart; this fails the build instead.
//!
//! If you regenerate a fixture, update the expected counts here alongside
//! any chart test that pins the same number.

use ui::core::data::{
    self, CyclistRecord, EducationRecord, GdpSeries, TemperatureData, TreeNode, TreemapDataset,
};
use ui::core::topo::{feature_paths, Topology};

#[test]
fn gdp_fixture_has_68_yearly_records() {
    let series: GdpSeries = serde_json::from_str(data::GDP_FIXTURE).expect("GDP fixture parses");
    assert_eq!(series.data.len(), 68);

    // Observations arrive oldest first, one per year.
    for window in series.data.windows(2) {
        assert_eq!(window[1].date.year(), window[0].date.year() + 1);
    }
}

#[test]
fn cyclist_fixture_has_35_finishers() {
    let records: Vec<CyclistRecord> =
        serde_json::from_str(data::CYCLIST_FIXTURE).expect("cyclist fixture parses");
    assert_eq!(records.len(), 35);
    assert!(records.iter().any(CyclistRecord::has_doping_allegation));
    assert!(records.iter().any(|r| !r.has_doping_allegation()));
}

#[test]
fn temperature_fixture_covers_every_month() {
    let dataset: TemperatureData =
        serde_json::from_str(data::TEMPERATURE_FIXTURE).expect("temperature fixture parses");
    assert!(dataset.base_temperature > 0.0);
    assert_eq!(dataset.monthly_variance.len(), 240);
    for record in &dataset.monthly_variance {
        assert!((1..=12).contains(&record.month));
    }
}

#[test]
fn county_fixture_decodes_into_counties_and_states() {
    let topology: Topology =
        serde_json::from_str(data::COUNTY_FIXTURE).expect("county fixture parses");
    let counties = feature_paths(&topology, "counties").expect("counties decode");
    let states = feature_paths(&topology, "states").expect("states decode");
    assert_eq!(counties.len(), 12);
    assert_eq!(states.len(), 3);
    for county in &counties {
        assert!(county.id.is_some());
    }
}

#[test]
fn education_fixture_leaves_one_county_unmatched() {
    let topology: Topology =
        serde_json::from_str(data::COUNTY_FIXTURE).expect("county fixture parses");
    let education: Vec<EducationRecord> =
        serde_json::from_str(data::EDUCATION_FIXTURE).expect("education fixture parses");
    let counties = feature_paths(&topology, "counties").expect("counties decode");

    // Eleven records for twelve counties: the unmatched one exercises the
    // default-to-zero path.
    assert_eq!(counties.len() - 1, education.len());

    let fips: Vec<u32> = education.iter().map(|record| record.fips).collect();
    let unmatched = counties
        .iter()
        .filter(|county| county.id.map(|id| !fips.contains(&id)).unwrap_or(true))
        .count();
    assert_eq!(unmatched, 1);
}

#[test]
fn treemap_fixtures_parse_with_positive_totals() {
    for dataset in TreemapDataset::ALL {
        let root: TreeNode =
            serde_json::from_str(dataset.fixture()).expect("treemap fixture parses");
        assert!(root.total() > 0.0, "{dataset:?}");
        assert!(root.leaf_count() >= 10, "{dataset:?}");
        assert!(!root.children.is_empty(), "{dataset:?}");
    }
}
