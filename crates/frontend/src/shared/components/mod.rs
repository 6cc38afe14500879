pub mod tabbed;

pub use tabbed::{tab_headers_changed, Tab, TabKey, TabbedComponent};
