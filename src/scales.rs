use crate::data_types::Tick;
use d3rs::scale::{LinearScale, Scale as D3Scale};

/// Linear scale backed by d3's `LinearScale`, used where "nice" tick values are
/// wanted rather than a fixed interval count.
#[derive(Clone)]
pub struct ChartScale {
    inner: LinearScale,
    domain: (f64, f64),
    range: (f64, f64),
}

impl ChartScale {
    pub fn new_linear(domain: (f64, f64), range: (f64, f64)) -> Self {
        let mut d_min = domain.0;
        let mut d_max = domain.1;
        if (d_max - d_min).abs() < f64::EPSILON {
            d_min -= 0.5;
            d_max += 0.5;
        }
        let inner = LinearScale::new()
            .domain(d_min, d_max)
            .range(range.0, range.1);
        Self {
            inner,
            domain: (d_min, d_max),
            range,
        }
    }

    pub fn map(&self, value: f64) -> f64 {
        let res = self.inner.scale(value);
        if res.is_nan() || res.is_infinite() {
            self.range.0
        } else {
            res
        }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn ticks(&self, count: usize) -> Vec<f64> {
        self.inner.ticks(count)
    }

    /// Smallest multiple of the tick step that covers the domain maximum.
    pub fn nice_max(&self, count: usize) -> f64 {
        let ticks = self.ticks(count);
        match ticks.as_slice() {
            [first, second, ..] => {
                let step = second - first;
                (self.domain.1 / step).ceil() * step
            }
            _ => self.domain.1,
        }
    }

    /// Ticks placed on a horizontal row at `pixel_y`.
    pub fn horizontal_ticks(&self, count: usize, pixel_y: f64) -> Vec<Tick> {
        self.ticks(count)
            .into_iter()
            .map(|value| Tick {
                value,
                pixel_x: self.map(value),
                pixel_y,
            })
            .collect()
    }

    /// Ticks placed on a vertical line at `pixel_x`.
    pub fn vertical_ticks(&self, count: usize, pixel_x: f64) -> Vec<Tick> {
        self.ticks(count)
            .into_iter()
            .map(|value| Tick {
                value,
                pixel_x,
                pixel_y: self.map(value),
            })
            .collect()
    }
}
