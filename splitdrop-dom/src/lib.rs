pub mod element;
pub mod event;
pub mod hit;
pub mod input;
pub mod layout;
pub mod terminal;
pub mod text;
pub mod types;

pub use element::{contains, find_element, path_to, walk, Element};
pub use event::{ClickTracker, MouseButton, PointerEvent, PointerKind};
pub use hit::{hit_test, hit_test_any};
pub use input::{kind_filter, Filter, InputBus, Listener, PointerSource, SubscriptionId};
pub use layout::{layout, measure, LayoutResult, Rect};
pub use terminal::Terminal;
pub use types::*;
