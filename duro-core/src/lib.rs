pub mod a11y;
pub mod disclosure;
pub mod event;
pub mod highlight;
pub mod nav;
pub mod registry;
pub mod scroll;
pub mod value;

pub use a11y::Attrs;
pub use disclosure::{is_trigger_key, Disclosure, OpenState, PopupKey, Transition};
pub use event::{EventResult, Key, KeyCombo, Modifiers};
pub use highlight::RovingHighlight;
pub use nav::{
    ListboxNavigation, MenuNavigation, NavAction, NavigationPolicy, Orientation, TabNavigation,
};
pub use registry::{
    Disposer, ItemRank, ItemRecord, OrderEntry, OrderedItemRegistry, RegistrationToken,
};
pub use scroll::{AxisMetrics, ScrollMetrics, ThumbDrag, ThumbGeometry, MIN_THUMB_PERCENT};
pub use value::{ChangeCallback, ControllableValue, ValueChange};
