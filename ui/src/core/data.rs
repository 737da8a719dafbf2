//! Dataset shapes, remote endpoints, and bundled fixtures.
//!
//! One record shape per chart, deserialized straight from the freeCodeCamp
//! reference payloads. Each dataset has a remote endpoint constant and a
//! bundled fixture embedded at compile time; the shipped configuration reads
//! the fixtures (the `*_SOURCE` constants) while the remote path stays a
//! one-line switch.

use serde::{Deserialize, Deserializer};
use time::macros::format_description;
use time::Date;

use crate::core::fetch::{self, DataSource, FetchError};
use crate::core::topo::Topology;

// Remote endpoints of the original site.
pub const GDP_ENDPOINT: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/GDP-data.json";
pub const CYCLIST_ENDPOINT: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/cyclist-data.json";
pub const TEMPERATURE_ENDPOINT: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/global-temperature.json";
pub const COUNTY_ENDPOINT: &str =
    "https://cdn.freecodecamp.org/testable-projects-fcc/data/choropleth_map/counties.json";
pub const EDUCATION_ENDPOINT: &str =
    "https://cdn.freecodecamp.org/testable-projects-fcc/data/choropleth_map/for_user_education.json";
pub const VIDEO_GAME_ENDPOINT: &str =
    "https://cdn.freecodecamp.org/testable-projects-fcc/data/tree_map/video-game-sales-data.json";
pub const KICKSTARTER_ENDPOINT: &str =
    "https://cdn.freecodecamp.org/testable-projects-fcc/data/tree_map/kickstarter-funding-data.json";
pub const MOVIE_ENDPOINT: &str =
    "https://cdn.freecodecamp.org/testable-projects-fcc/data/tree_map/movie-data.json";

// Bundled fixtures.
pub const GDP_FIXTURE: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/us-gdp.json"));
pub const CYCLIST_FIXTURE: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/cyclist-data.json"));
pub const TEMPERATURE_FIXTURE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/fixtures/global-temperature.json"
));
pub const COUNTY_FIXTURE: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/us-counties.json"));
pub const EDUCATION_FIXTURE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/fixtures/us-education.json"
));
pub const VIDEO_GAME_FIXTURE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/fixtures/video-game-sales.json"
));
pub const KICKSTARTER_FIXTURE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/fixtures/kickstarter-pledges.json"
));
pub const MOVIE_FIXTURE: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/movie-sales.json"));

// Shipped sources. Swap a `Bundled` for `Remote(<endpoint>)` to go live.
pub const GDP_SOURCE: DataSource = DataSource::Bundled(GDP_FIXTURE);
pub const CYCLIST_SOURCE: DataSource = DataSource::Bundled(CYCLIST_FIXTURE);
pub const TEMPERATURE_SOURCE: DataSource = DataSource::Bundled(TEMPERATURE_FIXTURE);
pub const COUNTY_SOURCE: DataSource = DataSource::Bundled(COUNTY_FIXTURE);
pub const EDUCATION_SOURCE: DataSource = DataSource::Bundled(EDUCATION_FIXTURE);

/// US GDP time series with its source metadata.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GdpSeries {
    pub name: String,
    pub source_name: String,
    pub updated_at: String,
    pub display_url: String,
    pub data: Vec<GdpObservation>,
}

/// One `[date, value]` pair of the GDP payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GdpObservation {
    pub date: Date,
    pub value: f64,
}

impl<'de> Deserialize<'de> for GdpObservation {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let (raw_date, value): (String, f64) = Deserialize::deserialize(deserializer)?;
        let date = Date::parse(&raw_date, &format_description!("[year]-[month]-[day]"))
            .map_err(serde::de::Error::custom)?;
        Ok(Self { date, value })
    }
}

/// One Alpe d'Huez finisher of the doping scatterplot.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CyclistRecord {
    pub time: String,
    pub place: u32,
    pub seconds: u32,
    pub name: String,
    pub year: i32,
    pub nationality: String,
    pub doping: String,
    #[serde(rename = "URL")]
    pub url: String,
}

impl CyclistRecord {
    pub fn has_doping_allegation(&self) -> bool {
        !self.doping.trim().is_empty()
    }
}

/// Global land-surface temperature payload.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemperatureData {
    pub base_temperature: f64,
    pub monthly_variance: Vec<MonthlyVariance>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct MonthlyVariance {
    pub year: i32,
    /// 1-based calendar month.
    pub month: u8,
    pub variance: f64,
}

/// Per-county educational attainment record.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EducationRecord {
    pub fips: u32,
    pub state: String,
    pub area_name: String,
    #[serde(rename = "bachelorsOrHigher")]
    pub bachelors_or_higher: f64,
}

/// Hierarchical `{name, children}` node of the treemap payloads. Leaf values
/// arrive as strings in some of the reference datasets, so both encodings
/// are accepted.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TreeNode {
    pub name: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "numeric_or_string")]
    pub value: Option<f64>,
    #[serde(default)]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn leaf_value(&self) -> f64 {
        self.value.unwrap_or(0.0)
    }

    /// Value of this subtree: the leaf value, or the sum over children.
    pub fn total(&self) -> f64 {
        if self.children.is_empty() {
            self.leaf_value()
        } else {
            self.children.iter().map(TreeNode::total).sum()
        }
    }

    pub fn leaf_count(&self) -> usize {
        if self.children.is_empty() {
            1
        } else {
            self.children.iter().map(TreeNode::leaf_count).sum()
        }
    }
}

fn numeric_or_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        None => None,
        Some(Raw::Number(value)) => Some(value),
        Some(Raw::Text(text)) => text.trim().parse().ok(),
    })
}

/// The three sub-datasets behind the treemap view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TreemapDataset {
    #[default]
    VideoGames,
    Kickstarter,
    Movies,
}

impl TreemapDataset {
    pub const ALL: [TreemapDataset; 3] = [Self::VideoGames, Self::Kickstarter, Self::Movies];

    /// Lenient parse of the `treemap-data` query value; anything unknown
    /// falls back to the video-game dataset.
    pub fn from_param(param: &str) -> Self {
        match param {
            "kickstarter" => Self::Kickstarter,
            "movie" => Self::Movies,
            _ => Self::VideoGames,
        }
    }

    /// Pull the `treemap-data` selection out of a raw query string; a
    /// missing key behaves like an unknown value.
    pub fn from_query(query: &str) -> Self {
        query
            .trim_start_matches('?')
            .split('&')
            .find_map(|pair| pair.strip_prefix("treemap-data="))
            .map(Self::from_param)
            .unwrap_or_default()
    }

    pub fn param(&self) -> &'static str {
        match self {
            Self::VideoGames => "videogame",
            Self::Kickstarter => "kickstarter",
            Self::Movies => "movie",
        }
    }

    pub fn switch_label(&self) -> &'static str {
        match self {
            Self::VideoGames => "Video Game Data",
            Self::Kickstarter => "Kickstarter Data",
            Self::Movies => "Movie Data",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::VideoGames => "Video Game Sales",
            Self::Kickstarter => "Kickstarter Pledges",
            Self::Movies => "Movie Sales",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::VideoGames => "Top 100 most sold video games grouped by platform",
            Self::Kickstarter => "Top 100 most pledged kickstarter campaigns grouped by category",
            Self::Movies => "Top 100 highest grossing movies grouped by genre",
        }
    }

    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::VideoGames => VIDEO_GAME_ENDPOINT,
            Self::Kickstarter => KICKSTARTER_ENDPOINT,
            Self::Movies => MOVIE_ENDPOINT,
        }
    }

    pub fn fixture(&self) -> &'static str {
        match self {
            Self::VideoGames => VIDEO_GAME_FIXTURE,
            Self::Kickstarter => KICKSTARTER_FIXTURE,
            Self::Movies => MOVIE_FIXTURE,
        }
    }

    pub fn source(&self) -> DataSource {
        DataSource::Bundled(self.fixture())
    }
}

// Typed loaders, one per chart mount.

pub async fn load_gdp() -> Result<GdpSeries, FetchError> {
    fetch::load(GDP_SOURCE).await
}

pub async fn load_cyclists() -> Result<Vec<CyclistRecord>, FetchError> {
    fetch::load(CYCLIST_SOURCE).await
}

pub async fn load_temperature() -> Result<TemperatureData, FetchError> {
    fetch::load(TEMPERATURE_SOURCE).await
}

pub async fn load_counties() -> Result<Topology, FetchError> {
    fetch::load(COUNTY_SOURCE).await
}

pub async fn load_education() -> Result<Vec<EducationRecord>, FetchError> {
    fetch::load(EDUCATION_SOURCE).await
}

pub async fn load_treemap(dataset: TreemapDataset) -> Result<TreeNode, FetchError> {
    fetch::load(dataset.source()).await
}
