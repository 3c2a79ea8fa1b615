//! Transform helper for coordinate projection

use gpui::Point;

/// Axis selector for [`PlotTransform::map`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// Axis-aligned rectangle in pixel space, origin at the top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PixelRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PixelRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> Point<f64> {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Edges are inclusive on the top-left and exclusive on the bottom-right so
    /// that adjacent rectangles never both claim a shared edge.
    pub fn contains(&self, point: Point<f64>) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }
}

/// Maps domain values to pixels inside a plotting rectangle.
///
/// `pixel_x = area.x + (x - x_min) * x_scale`
/// `pixel_y = area.bottom() - (y - y_min) * y_scale`
///
/// The y axis is inverted (domain up is pixel down). Nothing is clamped: values
/// outside the domain simply land outside the plotting rectangle.
#[derive(Clone, Debug, PartialEq)]
pub struct PlotTransform {
    pub plot_area: PixelRect,
    pub x_domain: (f64, f64),
    pub y_domain: (f64, f64),
    pub x_scale: f64,
    pub y_scale: f64,
}

impl PlotTransform {
    pub fn new(plot_area: PixelRect, x_domain: (f64, f64), y_domain: (f64, f64)) -> Self {
        Self {
            plot_area,
            x_domain,
            y_domain,
            x_scale: Self::factor(plot_area.width, x_domain),
            y_scale: Self::factor(plot_area.height, y_domain),
        }
    }

    fn factor(pixels: f64, (min, max): (f64, f64)) -> f64 {
        let span = max - min;
        if span.abs() < f64::EPSILON {
            0.0
        } else {
            pixels / span
        }
    }

    pub fn map(&self, value: f64, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.map_x(value),
            Axis::Y => self.map_y(value),
        }
    }

    pub fn map_x(&self, x: f64) -> f64 {
        self.plot_area.x + (x - self.x_domain.0) * self.x_scale
    }

    pub fn map_y(&self, y: f64) -> f64 {
        self.plot_area.bottom() - (y - self.y_domain.0) * self.y_scale
    }

    pub fn data_to_screen(&self, point: Point<f64>) -> Point<f64> {
        Point::new(self.map_x(point.x), self.map_y(point.y))
    }

    pub fn invert_x(&self, pixel_x: f64) -> f64 {
        if self.x_scale == 0.0 {
            return self.x_domain.0;
        }
        self.x_domain.0 + (pixel_x - self.plot_area.x) / self.x_scale
    }

    pub fn invert_y(&self, pixel_y: f64) -> f64 {
        if self.y_scale == 0.0 {
            return self.y_domain.0;
        }
        self.y_domain.0 + (self.plot_area.bottom() - pixel_y) / self.y_scale
    }

    pub fn screen_to_data(&self, point: Point<f64>) -> Point<f64> {
        Point::new(self.invert_x(point.x), self.invert_y(point.y))
    }

    /// Length in pixels of a domain distance along `axis`.
    pub fn length(&self, distance: f64, axis: Axis) -> f64 {
        match axis {
            Axis::X => distance * self.x_scale,
            Axis::Y => distance * self.y_scale,
        }
    }
}
