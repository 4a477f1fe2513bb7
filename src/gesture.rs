/// Swipe recognition for touch navigation

/// Horizontal distance a touch must travel before it counts as a swipe.
/// Anything at or under this is treated as a tap or incidental motion.
const SWIPE_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Leftward motion: advance to the next article
    Next,
    /// Rightward motion: go back to the previous article
    Previous,
}

/// Classify a touch sequence from its start and end x coordinates.
/// Vertical motion is never consulted.
pub fn swipe_direction(start_x: f64, end_x: f64) -> Option<SwipeDirection> {
    let diff = start_x - end_x;

    if diff.abs() <= SWIPE_THRESHOLD {
        return None;
    }

    if diff > 0.0 {
        Some(SwipeDirection::Next)
    } else {
        Some(SwipeDirection::Previous)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swipe_left_is_next() {
        assert_eq!(swipe_direction(200.0, 100.0), Some(SwipeDirection::Next));
    }

    #[test]
    fn test_swipe_right_is_previous() {
        assert_eq!(
            swipe_direction(100.0, 200.0),
            Some(SwipeDirection::Previous)
        );
    }

    #[test]
    fn test_sub_threshold_is_ignored() {
        assert_eq!(swipe_direction(100.0, 60.0), None);
        assert_eq!(swipe_direction(60.0, 100.0), None);
    }

    #[test]
    fn test_exact_threshold_is_ignored() {
        assert_eq!(swipe_direction(150.0, 100.0), None);
        assert_eq!(swipe_direction(100.0, 150.0), None);
    }

    #[test]
    fn test_just_over_threshold_registers() {
        assert_eq!(swipe_direction(151.0, 100.0), Some(SwipeDirection::Next));
        assert_eq!(
            swipe_direction(100.0, 151.0),
            Some(SwipeDirection::Previous)
        );
    }

    #[test]
    fn test_no_motion_is_ignored() {
        assert_eq!(swipe_direction(120.0, 120.0), None);
    }
}
