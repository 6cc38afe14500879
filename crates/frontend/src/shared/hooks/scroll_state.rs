//! Scroll position tracking for a bounded scrollable container.
//!
//! `use_subscribe_scroll_state` hands out a node ref and a scroll handler to
//! attach to the container, and exposes whether the content overflows and how
//! far it has been scrolled (0-100).

use leptos::ev::Event;
use leptos::html::Div;
use leptos::prelude::*;

/// Progress value reported once the end of the content is visible
pub const SCROLL_COMPLETE: f64 = 100.0;

/// Pixel measurements of a scroll container
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub client_height: f64,
    pub scroll_height: f64,
}

impl ScrollMetrics {
    pub fn of(element: &web_sys::Element) -> Self {
        Self {
            scroll_top: element.scroll_top() as f64,
            client_height: element.client_height() as f64,
            scroll_height: element.scroll_height() as f64,
        }
    }

    /// Share of the content that has been scrolled into view, in percent.
    ///
    /// Zero while at the top. Snaps to `SCROLL_COMPLETE` when the distance left
    /// to the bottom is within `bottom_tolerance_px`, so fractional pixel
    /// offsets do not leave the value stuck at 99.9.
    pub fn progress(&self, bottom_tolerance_px: f64) -> f64 {
        if self.scroll_top <= 0.0 || self.scroll_height <= 0.0 {
            return 0.0;
        }
        let viewed = self.scroll_top + self.client_height;
        if self.scroll_height - viewed <= bottom_tolerance_px {
            return SCROLL_COMPLETE;
        }
        (viewed / self.scroll_height * 100.0).clamp(0.0, SCROLL_COMPLETE)
    }
}

/// Full measurement of a container, taken on mount and whenever its content changes
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerMeasurement {
    pub metrics: ScrollMetrics,
    pub offset_height: f64,
}

impl ContainerMeasurement {
    pub fn of(element: &web_sys::HtmlElement) -> Self {
        Self {
            metrics: ScrollMetrics::of(element),
            offset_height: element.offset_height() as f64,
        }
    }

    pub fn user_can_scroll(&self) -> bool {
        can_scroll(self.metrics.scroll_height, self.offset_height)
    }

    pub fn progress(&self, bottom_tolerance_px: f64) -> f64 {
        self.metrics.progress(bottom_tolerance_px)
    }
}

/// Content overflows its container
pub fn can_scroll(scroll_height: f64, offset_height: f64) -> bool {
    scroll_height > offset_height
}

pub fn is_scroll_complete(progress: f64) -> bool {
    progress >= SCROLL_COMPLETE
}

/// Reactive scroll state of one container
#[derive(Clone, Copy)]
pub struct ScrollState {
    pub user_can_scroll: ReadSignal<bool>,
    pub scroll_progress: ReadSignal<f64>,
    pub scroll_ref: NodeRef<Div>,
    pub scroll_handler: Callback<Event>,
}

/// Track the scroll position of the element bound to `scroll_ref`.
///
/// Overflow and progress are measured once the element is mounted and again
/// every time `content_revision` changes (e.g. the number of rows), since the
/// same container may be reused for different content. Progress is also
/// updated on every scroll event routed through `scroll_handler`.
pub fn use_subscribe_scroll_state(
    bottom_tolerance_px: f64,
    content_revision: Signal<usize>,
) -> ScrollState {
    let scroll_ref = NodeRef::<Div>::new();
    let (user_can_scroll, set_user_can_scroll) = signal(false);
    let (scroll_progress, set_scroll_progress) = signal(0.0_f64);

    Effect::new(move |_| {
        content_revision.track();
        if let Some(container) = scroll_ref.get() {
            let measurement = ContainerMeasurement::of(&container);
            let scrollable = measurement.user_can_scroll();
            log::debug!("scroll container measured, scrollable: {}", scrollable);
            set_user_can_scroll.set(scrollable);
            set_scroll_progress.set(measurement.progress(bottom_tolerance_px));
        }
    });

    let scroll_handler = Callback::new(move |_: Event| {
        if let Some(container) = scroll_ref.get_untracked() {
            let progress = ScrollMetrics::of(&container).progress(bottom_tolerance_px);
            // Skip no-op writes so subscribers do not re-run on every pixel at the ends
            if scroll_progress.get_untracked() != progress {
                set_scroll_progress.set(progress);
            }
        }
    });

    ScrollState {
        user_can_scroll,
        scroll_progress,
        scroll_ref,
        scroll_handler,
    }
}
