//! Compound widgets.
//!
//! Each widget is a root handle plus a set of parts. The root provides itself
//! through a [`Scope`](crate::scope::Scope); parts mount against that scope
//! and fail with a usage error when the root is missing.
//!
//! Roots are cheap-clone handles around shared state with a dirty flag the
//! host polls to know when to re-render. Item parts hold their registration
//! and unregister when dropped.

pub mod field;
pub mod menu;
pub mod scroll_area;
pub mod select;
pub mod side_nav;
pub mod table;
pub mod tabs;
pub mod tooltip;

pub use field::{Field, FieldControl, FieldDescription, FieldError, FieldLabel};
pub use menu::{Menu, MenuAction, MenuItem, MenuLinkItem, MenuPopup, MenuTrigger};
pub use scroll_area::{
    ScrollArea, ScrollAreaContent, ScrollAreaScrollbar, ScrollAreaThumb, ScrollAreaViewport,
};
pub use select::{
    Select, SelectIcon, SelectItem, SelectOption, SelectPopup, SelectTrigger, SelectValue,
};
pub use side_nav::{SideNav, SideNavGroup, SideNavItem};
pub use table::{Table, TableCell, TableRow, TableSection, TableSize, TableVariant};
pub use tabs::{Tab, TabList, TabPanel, Tabs};
pub use tooltip::{Tooltip, TooltipPopup, TooltipTrigger};
