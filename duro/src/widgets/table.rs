//! Table widget - a grid of rows and cells with table semantics.

use duro_core::Attrs;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::scope::Scope;

const ROOT: &str = "Table.Root";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TableVariant {
    #[default]
    Default,
    Striped,
    Bordered,
}

impl TableVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            TableVariant::Default => "default",
            TableVariant::Striped => "striped",
            TableVariant::Bordered => "bordered",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TableSize {
    Sm,
    #[default]
    Md,
}

impl TableSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            TableSize::Sm => "sm",
            TableSize::Md => "md",
        }
    }
}

/// Table root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Table {
    pub variant: TableVariant,
    pub size: TableSize,
    pub columns: usize,
}

impl Table {
    pub fn new(columns: usize) -> Self {
        Self {
            variant: TableVariant::default(),
            size: TableSize::default(),
            columns,
        }
    }

    pub fn variant(mut self, variant: TableVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: TableSize) -> Self {
        self.size = size;
        self
    }

    pub fn provide(&self, scope: &Scope) -> Scope {
        scope.provide(*self)
    }

    pub fn attrs(&self) -> Attrs {
        Attrs::new()
            .set("role", "table")
            .set("data-variant", self.variant.as_str())
            .set("data-columns", self.columns.to_string())
    }
}

/// Which row group a part sits in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Section {
    header: bool,
}

/// Header or body row group.
#[derive(Debug, Clone, Copy)]
pub struct TableSection {
    header: bool,
}

impl TableSection {
    pub fn header(scope: &Scope) -> Result<Self> {
        scope.require::<Table>("Table.Header", ROOT)?;
        Ok(Self { header: true })
    }

    pub fn body(scope: &Scope) -> Result<Self> {
        scope.require::<Table>("Table.Body", ROOT)?;
        Ok(Self { header: false })
    }

    pub fn is_header(&self) -> bool {
        self.header
    }

    pub fn provide(&self, scope: &Scope) -> Scope {
        scope.provide(Section {
            header: self.header,
        })
    }

    pub fn attrs(&self) -> Attrs {
        Attrs::new().set("role", "rowgroup")
    }
}

/// A row. `index` is its position within its row group.
#[derive(Debug, Clone, Copy)]
pub struct TableRow {
    table: Table,
    header: bool,
    index: usize,
}

impl TableRow {
    pub fn mount(scope: &Scope, index: usize) -> Result<Self> {
        let table = scope.require::<Table>("Table.Row", ROOT)?;
        let header = scope.get::<Section>().is_some_and(|section| section.header);
        Ok(Self {
            table,
            header,
            index,
        })
    }

    /// Every second body row of a striped table.
    pub fn is_striped(&self) -> bool {
        !self.header && self.table.variant == TableVariant::Striped && self.index % 2 == 1
    }

    pub fn attrs(&self) -> Attrs {
        Attrs::new()
            .set("role", "row")
            .set_flag("data-striped", self.is_striped())
    }
}

/// A cell: a column header inside the header group, a data cell otherwise.
#[derive(Debug, Clone, Copy)]
pub struct TableCell {
    table: Table,
    header: bool,
}

impl TableCell {
    pub fn mount(scope: &Scope) -> Result<Self> {
        let table = scope.require::<Table>("Table.Cell", ROOT)?;
        let header = scope.get::<Section>().is_some_and(|section| section.header);
        Ok(Self { table, header })
    }

    pub fn role(&self) -> &'static str {
        if self.header {
            "columnheader"
        } else {
            "cell"
        }
    }

    pub fn attrs(&self) -> Attrs {
        Attrs::new()
            .set("role", self.role())
            .set("data-size", self.table.size.as_str())
    }
}
