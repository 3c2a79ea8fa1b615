use gpui::{point, px, Pixels, Point};

pub trait PixelsExt {
    fn as_f32(&self) -> f32;
}

impl PixelsExt for Pixels {
    fn as_f32(&self) -> f32 {
        f32::from(*self)
    }
}

/// Canvas pixel point (f64, canvas-local) to a window point.
pub fn to_window(origin: Point<Pixels>, p: Point<f64>) -> Point<Pixels> {
    origin + point(px(p.x as f32), px(p.y as f32))
}

/// Window point to canvas-local pixel coordinates.
pub fn to_canvas(origin: Point<Pixels>, p: Point<Pixels>) -> Point<f64> {
    Point::new(
        (p.x - origin.x).as_f32() as f64,
        (p.y - origin.y).as_f32() as f64,
    )
}
