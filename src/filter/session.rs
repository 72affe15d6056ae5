//! Filter Session Module
//! Owns the demo image and decides when the median filter runs.

use crate::filter::grid::Grid;
use crate::filter::median::{Boundary, MedianFilter};
use log::debug;

/// Original image, the currently displayed image and the filter applied to it.
///
/// Passes are cumulative: each `apply` filters the current image, not the original.
/// `reset` is the only way back.
#[derive(Debug, Clone)]
pub struct FilterSession {
    original: Grid<u8>,
    current: Grid<u8>,
    filter: MedianFilter<u8>,
    passes: usize,
    last_changed: Option<usize>,
    /// Whether the next pass would leave `current` unchanged
    converged: bool,
}

impl FilterSession {
    pub fn new(original: Grid<u8>, filter: MedianFilter<u8>) -> Self {
        let mut session = Self {
            current: original.clone(),
            original,
            filter,
            passes: 0,
            last_changed: None,
            converged: false,
        };
        session.refresh_converged();
        session
    }

    /// Run one filter pass over the current image. Returns the number of changed cells.
    pub fn apply(&mut self) -> usize {
        let filtered = self.filter.apply(&self.current);
        let changed = filtered.diff_count(&self.current);

        self.current = filtered;
        self.passes += 1;
        self.last_changed = Some(changed);
        self.refresh_converged();

        debug!(
            "median pass {} ({:?}): {} cells changed",
            self.passes, self.filter.boundary, changed
        );
        changed
    }

    /// Restore the original image.
    pub fn reset(&mut self) {
        self.current = self.original.clone();
        self.passes = 0;
        self.last_changed = None;
        self.refresh_converged();
    }

    pub fn current(&self) -> &Grid<u8> {
        &self.current
    }

    pub fn original(&self) -> &Grid<u8> {
        &self.original
    }

    pub fn passes(&self) -> usize {
        self.passes
    }

    /// Cells changed by the most recent pass, if any pass ran since the last reset.
    pub fn last_changed(&self) -> Option<usize> {
        self.last_changed
    }

    pub fn boundary(&self) -> Boundary<u8> {
        self.filter.boundary
    }

    /// Takes effect on the next pass; the current image is left as is.
    pub fn set_boundary(&mut self, boundary: Boundary<u8>) {
        self.filter.boundary = boundary;
        self.refresh_converged();
    }

    /// Whether one more pass would leave the image unchanged.
    /// Updated whenever the image or the boundary changes, not per call.
    pub fn is_converged(&self) -> bool {
        self.converged
    }

    fn refresh_converged(&mut self) {
        self.converged = self.filter.apply(&self.current) == self.current;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::letter::{letter_o, DEFAULT_LETTER_SIZE};
    use crate::filter::median::apply_median_filter;

    fn session() -> FilterSession {
        FilterSession::new(
            letter_o(DEFAULT_LETTER_SIZE).unwrap(),
            MedianFilter::default(),
        )
    }

    #[test]
    fn test_apply_is_cumulative() {
        let mut s = session();
        let original = s.original().clone();
        let once = apply_median_filter(&original, Boundary::Constant(0));
        let twice = apply_median_filter(&once, Boundary::Constant(0));

        s.apply();
        assert_eq!(s.current(), &once);
        s.apply();
        assert_eq!(s.current(), &twice);
        assert_eq!(s.passes(), 2);
        assert_eq!(s.original(), &original);
    }

    #[test]
    fn test_reset_restores_original() {
        let mut s = session();
        s.apply();
        s.apply();
        s.reset();
        assert_eq!(s.current(), s.original());
        assert_eq!(s.passes(), 0);
        assert_eq!(s.last_changed(), None);
    }

    #[test]
    fn test_first_pass_rounds_letter_corners() {
        let mut s = session();
        let changed = s.apply();
        // Outer corners of the ring see only four ones in their window
        assert_eq!(s.current()[(2, 2)], 0);
        assert_eq!(s.current()[(13, 13)], 0);
        // Inner corners of the hole see five ones, so they fill in
        assert_eq!(s.current()[(6, 6)], 1);
        // Four outer and four inner corners
        assert_eq!(changed, 8);
        assert_eq!(s.last_changed(), Some(changed));
    }

    #[test]
    fn test_boundary_change_applies_to_next_pass() {
        let mut s = session();
        s.set_boundary(Boundary::Nearest);
        assert_eq!(s.current(), s.original());
        assert_eq!(s.boundary(), Boundary::Nearest);
        s.apply();
        assert_eq!(
            s.current(),
            &apply_median_filter(s.original(), Boundary::Nearest)
        );
    }

    #[test]
    fn test_letter_converges_after_one_pass() {
        let mut s = session();
        assert!(!s.is_converged());
        s.apply();
        assert!(s.is_converged());
        let before = s.current().clone();
        assert_eq!(s.apply(), 0);
        assert_eq!(s.current(), &before);
    }

    #[test]
    fn test_convergence_tracks_reset_and_boundary() {
        let mut s = session();
        s.apply();
        assert!(s.is_converged());

        s.reset();
        assert!(!s.is_converged());

        // Uniform image under clamp-to-edge is a fixed point, under zero padding it is not
        let mut flat = FilterSession::new(
            Grid::new(4, 4, 1u8).unwrap(),
            MedianFilter::new(Boundary::Nearest),
        );
        assert!(flat.is_converged());
        flat.set_boundary(Boundary::Constant(0));
        assert!(!flat.is_converged());
    }
}
