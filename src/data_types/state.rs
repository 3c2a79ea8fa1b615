use super::RiemannParams;
use crate::config::ParameterLimits;
use crate::selection::Selection;
use tracing::{debug, warn};

/// The whole mutable state of the Riemann demonstration: `(n, width, selected)`.
///
/// Transitions:
/// - `click(i)` toggles `i` (select, deselect, or move the selection)
/// - any change to `n` or `width` clears the selection
#[derive(Clone, Debug, PartialEq)]
pub struct RiemannState {
    params: RiemannParams,
    selection: Selection,
    limits: ParameterLimits,
}

impl Default for RiemannState {
    fn default() -> Self {
        Self::new(RiemannParams::default(), ParameterLimits::default())
    }
}

impl RiemannState {
    pub fn new(params: RiemannParams, limits: ParameterLimits) -> Self {
        let params = RiemannParams::clamped(params.n() as i64, params.width(), &limits);
        Self {
            params,
            selection: Selection::none(),
            limits,
        }
    }

    pub fn params(&self) -> RiemannParams {
        self.params
    }

    pub fn limits(&self) -> &ParameterLimits {
        &self.limits
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// The selected index, or `None` if it no longer refers to a rectangle.
    pub fn selected_index(&self) -> Option<usize> {
        self.selection.index().filter(|&i| i < self.params.n())
    }

    /// Applies new parameters, clamped into the limits. Returns whether anything changed.
    pub fn set_params(&mut self, n: i64, width: f64) -> bool {
        let next = RiemannParams::clamped(n, width, &self.limits);
        if next.key() == self.params.key() {
            return false;
        }
        debug!(
            n = next.n(),
            width = next.width(),
            "riemann parameters changed, clearing selection"
        );
        self.params = next;
        self.selection.clear();
        true
    }

    pub fn set_count(&mut self, n: i64) -> bool {
        self.set_params(n, self.params.width())
    }

    pub fn set_width(&mut self, width: f64) -> bool {
        self.set_params(self.params.n() as i64, width)
    }

    pub fn step_count(&mut self, delta: i64) -> bool {
        self.set_count(self.params.n() as i64 + delta)
    }

    pub fn step_width(&mut self, steps: i32) -> bool {
        self.set_width(self.params.width() + self.limits.width_step * steps as f64)
    }

    /// Toggles the selection of rectangle `index`. Indices past the current
    /// rectangle count are ignored.
    pub fn select(&mut self, index: usize) -> Option<usize> {
        if index >= self.params.n() {
            warn!(index, n = self.params.n(), "ignoring selection of missing rectangle");
            return self.selected_index();
        }
        let selected = self.selection.select(index);
        debug!(?selected, "selection toggled");
        selected
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }
}
