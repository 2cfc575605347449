//! Tooltip state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use crate::config::{Placement, TooltipOptions};
use crate::error::Result;
use crate::id::WidgetId;
use crate::scope::Scope;
use crate::timer::DelayTimer;

#[derive(Debug)]
struct TooltipInner {
    open: bool,
    /// Show-delay timer.
    timer: DelayTimer,
    options: TooltipOptions,
}

/// A tooltip shown after hovering or focusing its trigger.
///
/// `Tooltip` is a cheap-clone handle; clones share state.
///
/// # Example
///
/// ```ignore
/// let tooltip = Tooltip::new(TooltipOptions::new("Save changes").delay_ms(800));
/// let scope = tooltip.provide(&Scope::new());
/// let trigger = TooltipTrigger::mount(&scope)?;
/// trigger.pointer_enter()?;
/// ```
#[derive(Debug, Clone)]
pub struct Tooltip {
    id: WidgetId,
    inner: Arc<RwLock<TooltipInner>>,
    dirty: Arc<AtomicBool>,
}

impl Tooltip {
    pub fn new(options: TooltipOptions) -> Self {
        Self {
            id: WidgetId::new("tooltip"),
            inner: Arc::new(RwLock::new(TooltipInner {
                open: false,
                timer: DelayTimer::new(),
                options,
            })),
            dirty: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn id(&self) -> WidgetId {
        self.id
    }

    /// Child scope in which tooltip parts can mount.
    pub fn provide(&self, scope: &Scope) -> Scope {
        scope.provide(self.clone())
    }

    pub fn popup_id(&self) -> String {
        self.id.part("popup")
    }

    pub fn is_open(&self) -> bool {
        self.inner
            .read()
            .map(|guard| guard.open)
            .unwrap_or(false)
    }

    pub fn content(&self) -> String {
        self.inner
            .read()
            .map(|guard| guard.options.content.clone())
            .unwrap_or_default()
    }

    pub fn placement(&self) -> Placement {
        self.inner
            .read()
            .map(|guard| guard.options.placement)
            .unwrap_or_default()
    }

    /// Show after the configured delay, superseding a pending show.
    ///
    /// A zero delay shows immediately. Non-zero delays need a tokio runtime.
    pub fn show(&self) -> Result<()> {
        let Ok(mut guard) = self.inner.write() else {
            return Ok(());
        };
        let delay = guard.options.delay;
        if delay.is_zero() {
            guard.timer.cancel();
            if !guard.open {
                log::debug!("[tooltip] {} show", self.id);
                guard.open = true;
                self.mark_dirty();
            }
            return Ok(());
        }

        let weak = Arc::downgrade(&self.inner);
        let dirty = Arc::clone(&self.dirty);
        let id = self.id;
        guard.timer.schedule(delay, move |token| {
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
            log::debug!("[tooltip] {} show after delay", id);
            guard.open = true;
            dirty.store(true, Ordering::SeqCst);
        })?;
        Ok(())
    }

    /// Hide immediately and cancel a pending show.
    pub fn hide(&self) {
        if let Ok(mut guard) = self.inner.write() {
            let cancelled = guard.timer.cancel();
            if guard.open || cancelled {
                log::debug!("[tooltip] {} hide cancelled_pending={}", self.id, cancelled);
                guard.open = false;
                self.mark_dirty();
            }
        }
    }

    /// Cancel a pending show and close (the tooltip is going away).
    pub fn unmount(&self) {
        self.hide();
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    fn mark_dirty(&self) {
        self.dirty.store(true, Ordering::SeqCst);
    }
}
