use crate::nav::Orientation;

/// Smallest thumb size, as a percentage of the track.
pub const MIN_THUMB_PERCENT: f32 = 10.0;

/// Scroll extent along one axis.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AxisMetrics {
    /// Current scroll offset.
    pub offset: f32,
    /// Total content extent.
    pub content: f32,
    /// Visible (client) extent.
    pub viewport: f32,
}

impl AxisMetrics {
    pub fn new(offset: f32, content: f32, viewport: f32) -> Self {
        Self {
            offset,
            content,
            viewport,
        }
    }

    /// Whether content extends past the viewport.
    pub fn has_overflow(&self) -> bool {
        self.content > self.viewport
    }

    /// Scrollable distance.
    pub fn max_offset(&self) -> f32 {
        (self.content - self.viewport).max(0.0)
    }

    /// Clamp an offset to the scrollable range.
    pub fn clamp(&self, offset: f32) -> f32 {
        offset.clamp(0.0, self.max_offset())
    }
}

/// Viewport measurements as reported by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f32,
    pub scroll_left: f32,
    pub scroll_height: f32,
    pub scroll_width: f32,
    pub client_height: f32,
    pub client_width: f32,
}

impl ScrollMetrics {
    pub fn axis(&self, orientation: Orientation) -> AxisMetrics {
        match orientation {
            Orientation::Vertical => {
                AxisMetrics::new(self.scroll_top, self.scroll_height, self.client_height)
            }
            Orientation::Horizontal => {
                AxisMetrics::new(self.scroll_left, self.scroll_width, self.client_width)
            }
        }
    }

    pub fn set_offset(&mut self, orientation: Orientation, offset: f32) {
        match orientation {
            Orientation::Vertical => self.scroll_top = offset,
            Orientation::Horizontal => self.scroll_left = offset,
        }
    }

    /// Replace only the extents, keeping offsets (resize notifications).
    pub fn with_extents_of(mut self, other: &ScrollMetrics) -> Self {
        self.scroll_height = other.scroll_height;
        self.scroll_width = other.scroll_width;
        self.client_height = other.client_height;
        self.client_width = other.client_width;
        self
    }
}

/// Scrollbar thumb size and position along its track.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ThumbGeometry {
    /// Thumb size as a percentage of the track.
    pub size_percent: f32,
    /// Thumb size in track units.
    pub size: f32,
    /// Thumb offset from the start of the track.
    pub offset: f32,
    /// Track length (the viewport extent).
    pub track: f32,
}

impl ThumbGeometry {
    /// Derive thumb geometry from the visible-to-total ratio.
    pub fn compute(axis: &AxisMetrics, min_percent: f32) -> Self {
        let ratio = if axis.content > 0.0 {
            axis.viewport / axis.content * 100.0
        } else {
            100.0
        };
        let size_percent = ratio.max(min_percent);
        let track = axis.viewport;
        let size = size_percent / 100.0 * track;
        let max_offset = axis.max_offset();
        let offset = if max_offset > 0.0 {
            axis.offset / max_offset * (track - size)
        } else {
            0.0
        };
        Self {
            size_percent,
            size,
            offset,
            track,
        }
    }

    /// Track distance the thumb can travel.
    pub fn travel(&self) -> f32 {
        (self.track - self.size).max(0.0)
    }
}

/// An in-progress thumb drag.
///
/// Stores where the pointer went down and the scroll offset at that moment;
/// every move is applied relative to those.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThumbDrag {
    pub orientation: Orientation,
    pub start_pointer: f32,
    pub start_offset: f32,
}

impl ThumbDrag {
    pub fn new(orientation: Orientation, start_pointer: f32, start_offset: f32) -> Self {
        Self {
            orientation,
            start_pointer,
            start_offset,
        }
    }

    /// Scroll offset for the current pointer position.
    ///
    /// The pointer delta is scaled by scrollable distance over thumb travel.
    pub fn offset_for(&self, pointer: f32, axis: &AxisMetrics, thumb: &ThumbGeometry) -> f32 {
        let travel = thumb.travel();
        if travel <= 0.0 {
            return self.start_offset;
        }
        let delta = pointer - self.start_pointer;
        let scale = axis.max_offset() / travel;
        axis.clamp(self.start_offset + delta * scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn test_thumb_geometry_ratio() {
        let axis = AxisMetrics::new(0.0, 400.0, 100.0);
        let thumb = ThumbGeometry::compute(&axis, MIN_THUMB_PERCENT);
        assert!(approx(thumb.size_percent, 25.0));
        assert!(approx(thumb.size, 25.0));
        assert!(approx(thumb.offset, 0.0));

        let bottom = AxisMetrics::new(300.0, 400.0, 100.0);
        let thumb = ThumbGeometry::compute(&bottom, MIN_THUMB_PERCENT);
        assert!(approx(thumb.offset, 75.0));
    }

    #[test]
    fn test_thumb_has_minimum_size() {
        let axis = AxisMetrics::new(0.0, 10_000.0, 100.0);
        let thumb = ThumbGeometry::compute(&axis, MIN_THUMB_PERCENT);
        assert!(approx(thumb.size_percent, 10.0));
        assert!(approx(thumb.size, 10.0));
    }

    #[test]
    fn test_no_overflow() {
        let axis = AxisMetrics::new(0.0, 80.0, 100.0);
        assert!(!axis.has_overflow());
        assert!(approx(axis.max_offset(), 0.0));
        let thumb = ThumbGeometry::compute(&axis, MIN_THUMB_PERCENT);
        assert!(approx(thumb.offset, 0.0));
    }

    #[test]
    fn test_drag_scales_pointer_delta() {
        // 400 content, 100 viewport: thumb 25, travel 75, scrollable 300.
        let axis = AxisMetrics::new(0.0, 400.0, 100.0);
        let thumb = ThumbGeometry::compute(&axis, MIN_THUMB_PERCENT);
        let drag = ThumbDrag::new(Orientation::Vertical, 10.0, 0.0);

        assert!(approx(drag.offset_for(35.0, &axis, &thumb), 100.0));
        assert!(approx(drag.offset_for(85.0, &axis, &thumb), 300.0));
        // Clamped at both ends.
        assert!(approx(drag.offset_for(500.0, &axis, &thumb), 300.0));
        assert!(approx(drag.offset_for(-50.0, &axis, &thumb), 0.0));
    }

    #[test]
    fn test_metrics_axis_selection() {
        let metrics = ScrollMetrics {
            scroll_top: 5.0,
            scroll_left: 7.0,
            scroll_height: 300.0,
            scroll_width: 90.0,
            client_height: 100.0,
            client_width: 100.0,
        };
        assert!(metrics.axis(Orientation::Vertical).has_overflow());
        assert!(!metrics.axis(Orientation::Horizontal).has_overflow());
        assert!(approx(metrics.axis(Orientation::Horizontal).offset, 7.0));
    }
}
