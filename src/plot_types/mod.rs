// Plot types module

pub mod annotation;
pub mod line;

pub use annotation::{Annotation, AnnotationPlot};
pub use line::LinePlot;

use crate::scene::Scene;
use crate::transform::PlotTransform;

/// Trait for plot types that emit scene commands
pub trait PlotRenderer {
    fn render(&self, scene: &mut Scene, transform: &PlotTransform);
}
