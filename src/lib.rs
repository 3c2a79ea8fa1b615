//! riemann_chart crate: a Riemann sum demonstration and a material test chart in GPUI

pub mod axis_renderer;
pub mod chart_view;
pub mod config;
pub mod curve;
pub mod data_types;
pub mod geometry;
pub mod material;
pub mod material_view;
pub mod painter;
pub mod plot_types;
pub mod rendering;
pub mod riemann;
pub mod scales;
pub mod scene;
pub mod selection;
pub mod theme;
pub mod ticks;
pub mod transform;
pub mod utils;

pub use chart_view::RiemannView;
pub use config::{CanvasConfig, ChartConfig, ParameterLimits};
pub use data_types::{RiemannParams, RiemannState};
pub use geometry::{compute_geometry, GeometryCache, RiemannGeometry};
pub use material::{MaterialChart, MaterialDataset, MaterialPoint};
pub use material_view::MaterialChartView;
pub use riemann::{build_rectangles, Rectangle, RiemannSum};
pub use scene::{DrawCommand, Scene};
pub use selection::Selection;
pub use theme::ChartTheme;
