//! Tooltip parts: trigger and popup.

use duro_core::Attrs;

use super::Tooltip;
use crate::error::Result;
use crate::scope::Scope;

const ROOT: &str = "Tooltip.Root";

/// Element the tooltip describes.
#[derive(Debug, Clone)]
pub struct TooltipTrigger {
    tooltip: Tooltip,
}

impl TooltipTrigger {
    pub fn mount(scope: &Scope) -> Result<Self> {
        let tooltip = scope.require::<Tooltip>("Tooltip.Trigger", ROOT)?;
        Ok(Self { tooltip })
    }

    pub fn pointer_enter(&self) -> Result<()> {
        self.tooltip.show()
    }

    pub fn pointer_leave(&self) {
        self.tooltip.hide();
    }

    pub fn focus(&self) -> Result<()> {
        self.tooltip.show()
    }

    pub fn blur(&self) {
        self.tooltip.hide();
    }

    pub fn attrs(&self) -> Attrs {
        Attrs::new().set_opt(
            "aria-describedby",
            self.tooltip.is_open().then(|| self.tooltip.popup_id()),
        )
    }
}

/// The tooltip bubble. Rendered only while open.
#[derive(Debug, Clone)]
pub struct TooltipPopup {
    tooltip: Tooltip,
}

impl TooltipPopup {
    pub fn mount(scope: &Scope) -> Result<Self> {
        let tooltip = scope.require::<Tooltip>("Tooltip.Popup", ROOT)?;
        Ok(Self { tooltip })
    }

    pub fn is_rendered(&self) -> bool {
        self.tooltip.is_open()
    }

    pub fn text(&self) -> String {
        self.tooltip.content()
    }

    pub fn attrs(&self) -> Attrs {
        Attrs::new()
            .set("id", self.tooltip.popup_id())
            .set("role", "tooltip")
            .set("data-placement", self.tooltip.placement().as_str())
    }
}
