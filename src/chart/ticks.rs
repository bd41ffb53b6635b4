// ---------------------------------------------------------------------------
// Tick counts and label orientation policy
// ---------------------------------------------------------------------------

/// Numeric axes always render this many intervals (one more tick).
pub const NUMERIC_TICK_INTERVALS: usize = 5;
/// Categorical/bin axes cap their interval count here.
pub const MAX_CATEGORY_INTERVALS: usize = 8;

/// Labels rotate once an axis gets crowded.
pub const ROTATION_COUNT_THRESHOLD: usize = 6;
/// Minimum horizontal room per label before rotation kicks in.
pub const MIN_LABEL_WIDTH_PX: f32 = 50.0;

/// Evenly spaced tick values over a numeric domain: 6 ticks, 5 intervals.
pub fn numeric_ticks(lo: f64, hi: f64) -> Vec<f64> {
    let step = (hi - lo) / NUMERIC_TICK_INTERVALS as f64;
    (0..=NUMERIC_TICK_INTERVALS)
        .map(|i| lo + step * i as f64)
        .collect()
}

/// Interval count for a categorical or binned axis.
pub fn category_intervals(category_count: usize) -> usize {
    category_count.min(MAX_CATEGORY_INTERVALS)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelOrientation {
    Horizontal,
    /// Rotated -45 degrees.
    Rotated45,
}

/// Rotate when there are more than six items or less than 50px per item.
pub fn label_orientation(item_count: usize, per_item_px: f32) -> LabelOrientation {
    if item_count > ROTATION_COUNT_THRESHOLD || per_item_px < MIN_LABEL_WIDTH_PX {
        LabelOrientation::Rotated45
    } else {
        LabelOrientation::Horizontal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_axis_has_six_ticks() {
        let ticks = numeric_ticks(0.0, 100.0);
        assert_eq!(ticks.len(), 6);
        assert_eq!(ticks[0], 0.0);
        assert_eq!(*ticks.last().unwrap(), 100.0);
        assert_eq!(ticks[1], 20.0);
    }

    #[test]
    fn test_category_interval_cap() {
        assert_eq!(category_intervals(3), 3);
        assert_eq!(category_intervals(8), 8);
        assert_eq!(category_intervals(30), 8);
    }

    #[test]
    fn test_rotation_by_count() {
        assert_eq!(label_orientation(6, 100.0), LabelOrientation::Horizontal);
        assert_eq!(label_orientation(7, 100.0), LabelOrientation::Rotated45);
    }

    #[test]
    fn test_rotation_by_width() {
        assert_eq!(label_orientation(3, 49.0), LabelOrientation::Rotated45);
        assert_eq!(label_orientation(3, 50.0), LabelOrientation::Horizontal);
    }
}
