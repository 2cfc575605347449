//! Accessibility attribute sets.
//!
//! Widgets describe the attributes their parts expose as an ordered list of
//! `(name, value)` pairs. Absent attributes are simply not in the list.

/// Ordered set of element attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attrs {
    entries: Vec<(&'static str, String)>,
}

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute, replacing an earlier value.
    pub fn set(mut self, name: &'static str, value: impl Into<String>) -> Self {
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
        self
    }

    /// Set an attribute only when a value is present.
    pub fn set_opt<V: Into<String>>(self, name: &'static str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.set(name, value),
            None => self,
        }
    }

    /// Boolean attribute rendered as `"true"`/`"false"`.
    pub fn set_bool(self, name: &'static str, value: bool) -> Self {
        self.set(name, if value { "true" } else { "false" })
    }

    /// Boolean attribute rendered as `"true"` only when set.
    pub fn set_flag(self, name: &'static str, value: bool) -> Self {
        if value {
            self.set(name, "true")
        } else {
            self
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.entries.iter().map(|(n, v)| (*n, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attrs_builder() {
        let attrs = Attrs::new()
            .set("role", "menu")
            .set_bool("aria-expanded", false)
            .set_opt("aria-controls", None::<String>)
            .set_flag("aria-disabled", false)
            .set("role", "listbox");

        assert_eq!(attrs.get("role"), Some("listbox"));
        assert_eq!(attrs.get("aria-expanded"), Some("false"));
        assert!(!attrs.contains("aria-controls"));
        assert!(!attrs.contains("aria-disabled"));
        assert_eq!(attrs.len(), 2);
    }
}
