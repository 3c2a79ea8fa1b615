pub mod axis;
pub mod data;
pub mod params;
pub mod plot_configs;
pub mod state;

pub use axis::*;
pub use data::*;
pub use params::*;
pub use plot_configs::*;
pub use state::*;
