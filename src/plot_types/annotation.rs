use super::PlotRenderer;
use crate::scene::{DrawCommand, Scene, StrokeStyle, TextAnchor};
use crate::transform::PlotTransform;
use gpui::Point;

#[derive(Clone, Debug, PartialEq)]
pub enum Annotation {
    /// Horizontal reference line across the plot area, label at its right end.
    HLine {
        y: f64,
        stroke: StrokeStyle,
        label: Option<String>,
    },
}

/// Annotation plot type (Layer of annotations)
pub struct AnnotationPlot {
    pub annotations: Vec<Annotation>,
}

impl AnnotationPlot {
    pub fn new(annotations: Vec<Annotation>) -> Self {
        Self { annotations }
    }
}

impl PlotRenderer for AnnotationPlot {
    fn render(&self, scene: &mut Scene, transform: &PlotTransform) {
        let area = transform.plot_area;
        let mut children = Vec::new();

        for annotation in &self.annotations {
            match annotation {
                Annotation::HLine { y, stroke, label } => {
                    let screen_y = transform.map_y(*y);
                    // Only draw if within the Y bounds
                    if screen_y < area.y - stroke.width as f64
                        || screen_y > area.bottom() + stroke.width as f64
                    {
                        continue;
                    }
                    children.push(DrawCommand::line(
                        Point::new(area.x, screen_y),
                        Point::new(area.right(), screen_y),
                        *stroke,
                    ));
                    if let Some(text) = label {
                        children.push(DrawCommand::text(
                            Point::new(area.right() - 4.0, screen_y - 10.0),
                            text.clone(),
                            TextAnchor::End,
                            stroke.color,
                            11.0,
                        ));
                    }
                }
            }
        }

        scene.push(DrawCommand::group("annotations", children));
    }
}
