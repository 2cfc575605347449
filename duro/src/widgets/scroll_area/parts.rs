//! ScrollArea parts: viewport, content, scrollbar and thumb.

use duro_core::{Attrs, Orientation, ScrollMetrics, ThumbGeometry};

use super::ScrollArea;
use crate::error::Result;
use crate::scope::Scope;

const ROOT: &str = "ScrollArea.Root";

/// The scrolling element. Forwards the host's scroll and resize
/// notifications.
#[derive(Debug, Clone)]
pub struct ScrollAreaViewport {
    area: ScrollArea,
}

impl ScrollAreaViewport {
    pub fn mount(scope: &Scope) -> Result<Self> {
        let area = scope.require::<ScrollArea>("ScrollArea.Viewport", ROOT)?;
        Ok(Self { area })
    }

    pub fn on_scroll(&self, metrics: ScrollMetrics) -> Result<()> {
        self.area.on_scroll(metrics)
    }

    pub fn on_resize(&self, metrics: ScrollMetrics) {
        self.area.on_resize(metrics);
    }

    pub fn max_height(&self) -> Option<f32> {
        self.area.max_height()
    }

    pub fn attrs(&self) -> Attrs {
        Attrs::new()
            .set("id", self.area.id().part("viewport"))
            .set_opt("data-max-height", self.max_height().map(|h| h.to_string()))
    }
}

/// Wrapper around the scrolled content.
#[derive(Debug, Clone)]
pub struct ScrollAreaContent {
    area: ScrollArea,
}

impl ScrollAreaContent {
    pub fn mount(scope: &Scope) -> Result<Self> {
        let area = scope.require::<ScrollArea>("ScrollArea.Content", ROOT)?;
        Ok(Self { area })
    }

    pub fn attrs(&self) -> Attrs {
        Attrs::new().set("id", self.area.id().part("content"))
    }
}

/// Track of an overlay scrollbar.
#[derive(Debug, Clone)]
pub struct ScrollAreaScrollbar {
    area: ScrollArea,
    orientation: Orientation,
}

impl ScrollAreaScrollbar {
    pub fn mount(scope: &Scope, orientation: Orientation) -> Result<Self> {
        let area = scope.require::<ScrollArea>("ScrollArea.Scrollbar", ROOT)?;
        Ok(Self { area, orientation })
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Rendered only when the content overflows along this axis.
    pub fn is_rendered(&self) -> bool {
        self.area.has_overflow(self.orientation)
    }

    /// Shown while scrolling, faded out otherwise.
    pub fn is_visible(&self) -> bool {
        self.is_rendered() && self.area.is_scrolling()
    }

    pub fn attrs(&self) -> Attrs {
        Attrs::new()
            .set("data-orientation", self.orientation.as_str())
            .set("data-state", if self.is_visible() { "visible" } else { "hidden" })
    }
}

/// Draggable thumb of a scrollbar.
#[derive(Debug, Clone)]
pub struct ScrollAreaThumb {
    area: ScrollArea,
    orientation: Orientation,
}

impl ScrollAreaThumb {
    pub fn mount(scope: &Scope, orientation: Orientation) -> Result<Self> {
        let area = scope.require::<ScrollArea>("ScrollArea.Thumb", ROOT)?;
        Ok(Self { area, orientation })
    }

    pub fn geometry(&self) -> ThumbGeometry {
        self.area.thumb(self.orientation)
    }

    /// Pointer pressed on the thumb. `pointer` is the pointer coordinate
    /// along the scrollbar's axis.
    pub fn pointer_down(&self, pointer: f32) {
        self.area.begin_drag(self.orientation, pointer);
    }

    /// Pointer moved. Returns the scroll offset the host should apply to the
    /// viewport, if a drag is in progress.
    pub fn pointer_move(&self, pointer: f32) -> Result<Option<f32>> {
        self.area.drag_to(self.orientation, pointer)
    }

    pub fn pointer_up(&self) {
        self.area.end_drag();
    }

    pub fn attrs(&self) -> Attrs {
        let geometry = self.geometry();
        Attrs::new()
            .set("data-orientation", self.orientation.as_str())
            .set("data-size-percent", format!("{:.2}", geometry.size_percent))
            .set("data-offset", format!("{:.2}", geometry.offset))
    }
}
