//! Rectangle selection and inspection label placement.

use crate::config::ChartConfig;
use crate::riemann::Rectangle;
use crate::transform::PixelRect;

/// Which rectangle, if any, is being inspected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    index: Option<usize>,
}

impl Selection {
    pub fn none() -> Self {
        Self::default()
    }

    /// Selecting the selected index clears the selection; any other index replaces it.
    pub fn select(&mut self, index: usize) -> Option<usize> {
        self.index = if self.index == Some(index) {
            None
        } else {
            Some(index)
        };
        self.index
    }

    pub fn clear(&mut self) {
        self.index = None;
    }

    pub fn index(&self) -> Option<usize> {
        self.index
    }

    /// The selected rectangle. An index past the end reads as no selection.
    pub fn resolve<'a>(&self, rectangles: &'a [Rectangle]) -> Option<&'a Rectangle> {
        self.index.and_then(|i| rectangles.get(i))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelPlacement {
    Above,
    Below,
}

/// Where the width/height/area read-out of a rectangle goes.
#[derive(Clone, Debug, PartialEq)]
pub struct InspectionLabel {
    pub bounds: PixelRect,
    pub placement: LabelPlacement,
    pub lines: [String; 3],
}

/// Horizontal centre of the label: the rectangle centre clamped into
/// `[padding + margin, canvas_width - padding - margin]`.
pub fn label_center_x(rect: &Rectangle, config: &ChartConfig) -> f64 {
    let canvas = &config.canvas;
    let lo = canvas.padding + config.label_margin;
    let hi = canvas.width - canvas.padding - config.label_margin;
    let center = rect.pixel_x + rect.pixel_width / 2.0;
    if lo > hi {
        // Canvas too narrow for the label box.
        return canvas.width / 2.0;
    }
    center.clamp(lo, hi)
}

/// Rectangles whose vertical centre sits in the lower half of the canvas get the
/// label above them, the others below.
pub fn label_placement(rect: &Rectangle, config: &ChartConfig) -> LabelPlacement {
    let center_y = rect.pixel_y + rect.pixel_height / 2.0;
    if center_y > config.canvas.height / 2.0 {
        LabelPlacement::Above
    } else {
        LabelPlacement::Below
    }
}

pub fn label_position(rect: &Rectangle, config: &ChartConfig) -> InspectionLabel {
    let center_x = label_center_x(rect, config);
    let placement = label_placement(rect, config);
    let y = match placement {
        LabelPlacement::Above => rect.pixel_y - config.label_offset - config.label_height,
        LabelPlacement::Below => rect.pixel_y + rect.pixel_height + config.label_offset,
    };

    InspectionLabel {
        bounds: PixelRect::new(
            center_x - config.label_margin,
            y,
            2.0 * config.label_margin,
            config.label_height,
        ),
        placement,
        lines: [
            format!("Width: {:.4}", rect.domain_width),
            format!("Height: {:.4}", rect.domain_height),
            format!("Area: {:.4}", rect.area),
        ],
    }
}
