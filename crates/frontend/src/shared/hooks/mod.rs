pub mod scroll_state;

pub use scroll_state::{use_subscribe_scroll_state, ContainerMeasurement, ScrollMetrics, ScrollState};
