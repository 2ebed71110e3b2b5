//! Per-slot depth bias against z-fighting.

/// Running depth offset for the slots of one frame.
///
/// Each slot gets a bias one `step` below the previous one, so coplanar
/// attachments stack in draw order. A zero step disables separation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerOffsetTracker {
    base: f32,
    step: f32,
    current: f32,
}

impl LayerOffsetTracker {
    pub fn new(base: f32, step: f32) -> Self {
        Self {
            base,
            step,
            current: base,
        }
    }

    /// Start a new frame.
    pub fn reset(&mut self) {
        self.current = self.base;
    }

    /// Advance to the next slot and return its bias.
    pub fn next(&mut self) -> f32 {
        self.current -= self.step;
        self.current
    }

    /// Bias of the most recent slot.
    pub fn current(&self) -> f32 {
        self.current
    }
}

impl Default for LayerOffsetTracker {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nth_bias() {
        let mut layer = LayerOffsetTracker::new(1.0, 0.25);
        layer.reset();
        let biases: Vec<f32> = (0..4).map(|_| layer.next()).collect();
        assert_eq!(biases, vec![0.75, 0.5, 0.25, 0.0]);
        assert!(biases.windows(2).all(|pair| pair[1] < pair[0]));
    }

    #[test]
    fn test_reset_restarts_from_base() {
        let mut layer = LayerOffsetTracker::new(0.0, 0.5);
        layer.next();
        layer.next();
        layer.reset();
        assert_eq!(layer.current(), 0.0);
        assert_eq!(layer.next(), -0.5);
    }

    #[test]
    fn test_default_is_flat() {
        let mut layer = LayerOffsetTracker::default();
        layer.reset();
        assert!((0..8).all(|_| layer.next() == 0.0));
    }
}
