//! Reading-progress indicator math.

/// Layout measurements the progress indicator depends on.
///
/// Units are up to the implementor (pixels, terminal rows/columns) as long as they
/// are consistent.
pub trait ViewportMetrics {
    /// Distance scrolled from the top.
    fn scroll_offset(&self) -> f64;

    /// Full height of the scrollable content.
    fn scroll_height(&self) -> f64;

    /// Height of the visible part of the content.
    fn viewport_height(&self) -> f64;

    /// Current width of the header the indicator spans.
    fn header_width(&self) -> f64;
}

/// Scrolled fraction in [0, 1]. Zero when the content does not scroll.
pub fn progress_fraction(metrics: &impl ViewportMetrics) -> f64 {
    let scrollable = metrics.scroll_height() - metrics.viewport_height();
    if scrollable <= 0.0 {
        return 0.0;
    }
    (metrics.scroll_offset() / scrollable).clamp(0.0, 1.0)
}

/// Indicator width: `min_width` at the top, the header width at the bottom, linear between.
pub fn progress_width(metrics: &impl ViewportMetrics, min_width: f64) -> f64 {
    let max_width = metrics.header_width().max(min_width);
    min_width + progress_fraction(metrics) * (max_width - min_width)
}
