//! SelectOption trait for values that can be offered by a Select widget.

/// Trait for values that can be offered as a Select option.
///
/// Provides the submitted value and the text shown for it. The text is what
/// the closed trigger displays once the option is selected.
///
/// # Example
///
/// ```ignore
/// struct Language {
///     code: &'static str,
///     name: &'static str,
/// }
///
/// impl SelectOption for Language {
///     fn select_value(&self) -> String {
///         self.code.to_string()
///     }
///
///     fn select_label(&self) -> String {
///         self.name.to_string()
///     }
/// }
/// ```
pub trait SelectOption {
    /// Value submitted when this option is selected.
    fn select_value(&self) -> String;

    /// Display text for this option.
    fn select_label(&self) -> String;
}

impl SelectOption for String {
    fn select_value(&self) -> String {
        self.clone()
    }

    fn select_label(&self) -> String {
        self.clone()
    }
}

impl SelectOption for &str {
    fn select_value(&self) -> String {
        (*self).to_string()
    }

    fn select_label(&self) -> String {
        (*self).to_string()
    }
}

// (value, label) pairs
impl<S1, S2> SelectOption for (S1, S2)
where
    S1: AsRef<str>,
    S2: AsRef<str>,
{
    fn select_value(&self) -> String {
        self.0.as_ref().to_string()
    }

    fn select_label(&self) -> String {
        self.1.as_ref().to_string()
    }
}
