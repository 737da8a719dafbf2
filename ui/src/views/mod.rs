mod home;
pub use home::Home;

mod bar;
pub use bar::Bar;

mod scatterplot;
pub use scatterplot::Scatterplot;

mod heat_map;
pub use heat_map::Heat;

mod choropleth;
pub use choropleth::Choropleth;

mod treemap;
pub use treemap::Treemap;
