//! ScrollArea widget state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use duro_core::{AxisMetrics, Orientation, ScrollMetrics, ThumbDrag, ThumbGeometry};

use crate::config::ScrollAreaOptions;
use crate::error::Result;
use crate::id::WidgetId;
use crate::scope::Scope;
use crate::timer::DelayTimer;

#[derive(Debug)]
pub(super) struct ScrollAreaInner {
    pub metrics: ScrollMetrics,
    pub scrolling: bool,
    /// Quiescence timer clearing `scrolling`.
    pub timer: DelayTimer,
    pub drag: Option<ThumbDrag>,
    pub options: ScrollAreaOptions,
}

impl ScrollAreaInner {
    pub fn thumb(&self, orientation: Orientation) -> ThumbGeometry {
        ThumbGeometry::compute(
            &self.metrics.axis(orientation),
            self.options.min_thumb_percent,
        )
    }
}

/// A scrollable viewport with overlay scrollbars.
///
/// `ScrollArea` is a cheap-clone handle; clones share state.
#[derive(Debug, Clone)]
pub struct ScrollArea {
    id: WidgetId,
    pub(super) inner: Arc<RwLock<ScrollAreaInner>>,
    pub(super) dirty: Arc<AtomicBool>,
}

impl ScrollArea {
    pub fn new(options: ScrollAreaOptions) -> Self {
        Self {
            id: WidgetId::new("scroll-area"),
            inner: Arc::new(RwLock::new(ScrollAreaInner {
                metrics: ScrollMetrics::default(),
                scrolling: false,
                timer: DelayTimer::new(),
                drag: None,
                options,
            })),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    /// Child scope in which scroll area parts can mount.
    pub fn provide(&self, scope: &Scope) -> Scope {
        scope.provide(self.clone())
    }

    // -------------------------------------------------------------------------
    // Measurements
    // -------------------------------------------------------------------------

    pub fn metrics(&self) -> ScrollMetrics {
        self.inner
            .read()
            .map(|guard| guard.metrics)
            .unwrap_or_default()
    }

    pub fn axis(&self, orientation: Orientation) -> AxisMetrics {
        self.metrics().axis(orientation)
    }

    pub fn has_overflow(&self, orientation: Orientation) -> bool {
        self.axis(orientation).has_overflow()
    }

    pub fn thumb(&self, orientation: Orientation) -> ThumbGeometry {
        self.inner
            .read()
            .map(|guard| guard.thumb(orientation))
            .unwrap_or_default()
    }

    pub fn max_height(&self) -> Option<f32> {
        self.inner
            .read()
            .ok()
            .and_then(|guard| guard.options.max_height)
    }

    /// Whether a scroll happened within the quiescence window.
    pub fn is_scrolling(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.scrolling)
            .unwrap_or(false)
    }

    pub fn is_dragging(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.drag.is_some())
            .unwrap_or(false)
    }

    // -------------------------------------------------------------------------
    // Scroll activity
    // -------------------------------------------------------------------------

    /// Mark the area as scrolling and restart the quiescence window.
    pub(super) fn touch(&self, guard: &mut ScrollAreaInner) -> Result<()> {
        let weak = Arc::downgrade(&self.inner);
        let dirty = Arc::clone(&self.dirty);
        let quiescence = guard.options.quiescence;
        guard.timer.schedule(quiescence, move |token| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            let Ok(mut guard) = inner.write() else {
                return;
            };
            if !guard.timer.is_current(token) {
                return;
            }
            guard.timer.complete(token);
            guard.scrolling = false;
            log::trace!("[scroll_area] quiescent");
            dirty.store(true, Ordering::SeqCst);
        })?;
        guard.scrolling = true;
        Ok(())
    }

    /// Stop tracking scroll activity (unmount).
    pub fn unmount(&self) {
        if let Ok(mut guard) = self.inner.write() {
            guard.timer.cancel();
            guard.drag = None;
            guard.scrolling = false;
        }
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    pub(super) fn mark_dirty(&self) {
        self.dirty.store(true, Ordering::SeqCst);
    }
}

impl Default for ScrollArea {
    fn default() -> Self {
        Self::new(ScrollAreaOptions::default())
    }
}
