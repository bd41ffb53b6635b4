// ---------------------------------------------------------------------------
// Linear scale – domain to pixel mapping with constant padding
// ---------------------------------------------------------------------------

/// Constant padding reserved on each side of a plot area.
pub const AXIS_PADDING: f32 = 40.0;
/// Extra bottom margin reserved when tick labels render rotated.
pub const ROTATED_LABEL_MARGIN: f32 = 24.0;

/// Maps a numeric domain `[lo, hi]` onto a pixel span. The pixel span may be
/// reversed (vertical axes map `lo` to the bottom of the plot).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    pub lo: f64,
    pub hi: f64,
    pub px_start: f32,
    pub px_end: f32,
}

impl LinearScale {
    /// Degenerate domains are widened by one unit so the mapping stays
    /// finite.
    pub fn new(domain: [f64; 2], px_start: f32, px_end: f32) -> Self {
        let [lo, mut hi] = domain;
        if (hi - lo).abs() < f64::EPSILON {
            hi = lo + 1.0;
        }
        Self {
            lo,
            hi,
            px_start,
            px_end,
        }
    }

    /// Horizontal axis across `width` pixels, padded on both sides.
    pub fn x_axis(domain: [f64; 2], width: f32) -> Self {
        Self::new(domain, AXIS_PADDING, width - AXIS_PADDING)
    }

    /// Vertical axis down `height` pixels; `lo` maps to the bottom. When
    /// category labels rotate, the bottom edge moves up to make room.
    pub fn y_axis(domain: [f64; 2], height: f32, rotated_labels: bool) -> Self {
        let mut bottom = height - AXIS_PADDING;
        if rotated_labels {
            bottom -= ROTATED_LABEL_MARGIN;
        }
        Self::new(domain, bottom, AXIS_PADDING)
    }

    /// Map a domain value to pixels.
    pub fn to_px(&self, v: f64) -> f32 {
        let frac = ((v - self.lo) / (self.hi - self.lo)) as f32;
        self.px_start + frac * (self.px_end - self.px_start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_map_to_pixel_range() {
        let s = LinearScale::x_axis([0.0, 10.0], 500.0);
        assert_eq!(s.to_px(0.0), AXIS_PADDING);
        assert_eq!(s.to_px(10.0), 500.0 - AXIS_PADDING);
        assert_eq!(s.to_px(5.0), 250.0);
    }

    #[test]
    fn test_y_axis_is_inverted() {
        let s = LinearScale::y_axis([0.0, 1.0], 300.0, false);
        assert!(s.to_px(0.0) > s.to_px(1.0));
        assert_eq!(s.to_px(1.0), AXIS_PADDING);
    }

    #[test]
    fn test_rotated_labels_reserve_bottom_margin() {
        let plain = LinearScale::y_axis([0.0, 1.0], 300.0, false);
        let rotated = LinearScale::y_axis([0.0, 1.0], 300.0, true);
        assert_eq!(plain.to_px(0.0) - rotated.to_px(0.0), ROTATED_LABEL_MARGIN);
    }

    #[test]
    fn test_degenerate_domain_stays_finite() {
        let s = LinearScale::x_axis([3.0, 3.0], 200.0);
        assert!(s.to_px(3.0).is_finite());
    }
}
