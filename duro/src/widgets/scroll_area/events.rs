//! Scroll, resize and thumb-drag handling for the ScrollArea widget.

use duro_core::{Orientation, ScrollMetrics, ThumbDrag};

use super::ScrollArea;
use crate::error::Result;

impl ScrollArea {
    /// The viewport scrolled. `metrics` are the viewport's measurements after
    /// the scroll.
    ///
    /// Fails with [`crate::Error::NoRuntime`] outside a tokio runtime; the
    /// measurements are recorded either way.
    pub fn on_scroll(&self, metrics: ScrollMetrics) -> Result<()> {
        let Ok(mut guard) = self.inner.write() else {
            return Ok(());
        };
        guard.metrics = metrics;
        self.mark_dirty();
        self.touch(&mut guard)
    }

    /// The viewport or its content was resized. Offsets are kept.
    pub fn on_resize(&self, metrics: ScrollMetrics) {
        if let Ok(mut guard) = self.inner.write() {
            guard.metrics = guard.metrics.with_extents_of(&metrics);
            log::trace!("[scroll_area] resize {:?}", guard.metrics);
            self.mark_dirty();
        }
    }

    /// Scroll to `offset` along `orientation`, clamped to the scrollable
    /// range. Returns the applied offset.
    pub fn scroll_to(&self, orientation: Orientation, offset: f32) -> Result<f32> {
        let Ok(mut guard) = self.inner.write() else {
            return Ok(offset);
        };
        let applied = guard.metrics.axis(orientation).clamp(offset);
        guard.metrics.set_offset(orientation, applied);
        self.mark_dirty();
        self.touch(&mut guard)?;
        Ok(applied)
    }

    // -------------------------------------------------------------------------
    // Thumb drag
    // -------------------------------------------------------------------------

    /// Pointer pressed on a thumb at track coordinate `pointer`.
    pub(super) fn begin_drag(&self, orientation: Orientation, pointer: f32) {
        if let Ok(mut guard) = self.inner.write() {
            let start_offset = guard.metrics.axis(orientation).offset;
            log::debug!(
                "[scroll_area] drag start {:?} pointer={} offset={}",
                orientation,
                pointer,
                start_offset
            );
            guard.drag = Some(ThumbDrag::new(orientation, pointer, start_offset));
        }
    }

    /// Pointer moved during a drag. Returns the new scroll offset, or `None`
    /// when no drag along `orientation` is in progress.
    pub(super) fn drag_to(&self, orientation: Orientation, pointer: f32) -> Result<Option<f32>> {
        let Ok(mut guard) = self.inner.write() else {
            return Ok(None);
        };
        let Some(drag) = guard.drag.filter(|drag| drag.orientation == orientation) else {
            return Ok(None);
        };
        let axis = guard.metrics.axis(orientation);
        let thumb = guard.thumb(orientation);
        let offset = drag.offset_for(pointer, &axis, &thumb);
        guard.metrics.set_offset(orientation, offset);
        self.mark_dirty();
        self.touch(&mut guard)?;
        Ok(Some(offset))
    }

    pub(super) fn end_drag(&self) {
        if let Ok(mut guard) = self.inner.write() {
            if guard.drag.take().is_some() {
                log::debug!("[scroll_area] drag end");
            }
        }
    }
}
