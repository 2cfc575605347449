//! Field widget - label, description and error wiring for a form control.
//!
//! Unlike the other compound widgets, Field parts mounted outside a
//! [`Field`] still work; they just carry no ids.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use duro_core::Attrs;

use crate::id::WidgetId;
use crate::scope::Scope;

/// Root of a form field.
#[derive(Debug, Clone)]
pub struct Field {
    id: WidgetId,
    invalid: Arc<AtomicBool>,
}

impl Field {
    pub fn new(invalid: bool) -> Self {
        Self {
            id: WidgetId::new("field"),
            invalid: Arc::new(AtomicBool::new(invalid)),
        }
    }

    pub fn provide(&self, scope: &Scope) -> Scope {
        scope.provide(self.clone())
    }

    pub fn control_id(&self) -> String {
        self.id.part("control")
    }

    pub fn description_id(&self) -> String {
        self.id.part("description")
    }

    pub fn error_id(&self) -> String {
        self.id.part("error")
    }

    pub fn is_invalid(&self) -> bool {
        self.invalid.load(Ordering::SeqCst)
    }

    pub fn set_invalid(&self, invalid: bool) {
        if self.invalid.swap(invalid, Ordering::SeqCst) != invalid {
            log::debug!("[field] {} invalid={}", self.id, invalid);
        }
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::new(false)
    }
}

/// Label pointing at the field's control.
#[derive(Debug, Clone)]
pub struct FieldLabel {
    field: Option<Field>,
}

impl FieldLabel {
    pub fn mount(scope: &Scope) -> Self {
        Self {
            field: scope.get::<Field>(),
        }
    }

    pub fn attrs(&self) -> Attrs {
        Attrs::new().set_opt("for", self.field.as_ref().map(Field::control_id))
    }
}

/// Help text describing the control.
#[derive(Debug, Clone)]
pub struct FieldDescription {
    field: Option<Field>,
}

impl FieldDescription {
    pub fn mount(scope: &Scope) -> Self {
        Self {
            field: scope.get::<Field>(),
        }
    }

    pub fn attrs(&self) -> Attrs {
        Attrs::new().set_opt("id", self.field.as_ref().map(Field::description_id))
    }
}

/// Validation message.
#[derive(Debug, Clone)]
pub struct FieldError {
    field: Option<Field>,
    message: Option<String>,
}

impl FieldError {
    pub fn mount(scope: &Scope, message: Option<String>) -> Self {
        Self {
            field: scope.get::<Field>(),
            message,
        }
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Rendered when the field is invalid or a message was given.
    pub fn is_rendered(&self) -> bool {
        self.message.is_some() || self.field.as_ref().is_some_and(Field::is_invalid)
    }

    pub fn attrs(&self) -> Attrs {
        Attrs::new()
            .set_opt("id", self.field.as_ref().map(Field::error_id))
            .set("role", "alert")
    }
}

/// The input element inside a field.
#[derive(Debug, Clone)]
pub struct FieldControl {
    field: Option<Field>,
    /// Error styling requested by the control itself.
    error_variant: bool,
}

impl FieldControl {
    pub fn mount(scope: &Scope) -> Self {
        Self {
            field: scope.get::<Field>(),
            error_variant: false,
        }
    }

    pub fn error_variant(mut self, error: bool) -> Self {
        self.error_variant = error;
        self
    }

    pub fn is_invalid(&self) -> bool {
        self.error_variant || self.field.as_ref().is_some_and(Field::is_invalid)
    }

    /// Description id, plus the error id while invalid.
    pub fn described_by(&self) -> Option<String> {
        self.field.as_ref().map(|field| {
            if field.is_invalid() {
                format!("{} {}", field.description_id(), field.error_id())
            } else {
                field.description_id()
            }
        })
    }

    pub fn attrs(&self) -> Attrs {
        Attrs::new()
            .set_opt("id", self.field.as_ref().map(Field::control_id))
            .set_opt("aria-describedby", self.described_by())
            .set_flag("aria-invalid", self.is_invalid())
    }
}
