/// Offset in pixels past which the scroll-to-top control appears.
pub const SCROLL_TOP_THRESHOLD: f64 = 300.0;

/// Snapshot of the window scroll position, taken on every scroll event.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub document_height: f64,
    pub viewport_height: f64,
}

impl ScrollMetrics {
    pub fn new(scroll_top: f64, document_height: f64, viewport_height: f64) -> Self {
        Self {
            scroll_top,
            document_height,
            viewport_height,
        }
    }

    /// Percentage of the scrollable range already scrolled, in `[0, 100]`.
    ///
    /// A page that fits in the viewport has nothing to scroll and reports 0.
    pub fn progress(&self) -> f64 {
        let range = self.document_height - self.viewport_height;
        if !range.is_finite() || range <= 0.0 {
            return 0.0;
        }
        let progress = self.scroll_top / range * 100.0;
        if progress.is_finite() {
            progress.clamp(0.0, 100.0)
        } else {
            0.0
        }
    }

    pub fn show_scroll_top(&self) -> bool {
        self.scroll_top > SCROLL_TOP_THRESHOLD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_top_threshold() {
        assert!(!ScrollMetrics::new(150.0, 3000.0, 800.0).show_scroll_top());
        assert!(!ScrollMetrics::new(300.0, 3000.0, 800.0).show_scroll_top());
        assert!(ScrollMetrics::new(301.0, 3000.0, 800.0).show_scroll_top());
    }

    #[test]
    fn test_progress() {
        let metrics = ScrollMetrics::new(550.0, 1900.0, 800.0);
        assert!((metrics.progress() - 50.0).abs() < f64::EPSILON);

        let bottom = ScrollMetrics::new(1100.0, 1900.0, 800.0);
        assert!((bottom.progress() - 100.0).abs() < f64::EPSILON);

        assert_eq!(ScrollMetrics::default().progress(), 0.0);
    }

    #[test]
    fn test_unscrollable_page() {
        let metrics = ScrollMetrics::new(0.0, 800.0, 800.0);
        assert_eq!(metrics.progress(), 0.0);

        // viewport taller than the document
        let metrics = ScrollMetrics::new(10.0, 600.0, 800.0);
        assert_eq!(metrics.progress(), 0.0);
    }

    #[test]
    fn test_progress_clamped() {
        // overscroll bounce on touch devices
        assert_eq!(ScrollMetrics::new(-40.0, 1900.0, 800.0).progress(), 0.0);
        assert_eq!(ScrollMetrics::new(1300.0, 1900.0, 800.0).progress(), 100.0);
        assert_eq!(ScrollMetrics::new(f64::NAN, 1900.0, 800.0).progress(), 0.0);
    }
}
