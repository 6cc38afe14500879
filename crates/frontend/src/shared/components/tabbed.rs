//! Generic tab container
//!
//! Renders a tab bar from an ordered list of tabs and shows the active tab's
//! content. Tab bodies are created once per key and hidden when inactive, so
//! switching tabs keeps their state (scroll position included).

use leptos::prelude::*;
use std::hash::Hash;
use thaw::{Badge, BadgeAppearance, BadgeColor, Button, ButtonAppearance, ButtonSize, Flex, FlexAlign, FlexGap};

/// Identifies a tab within a registry
pub trait TabKey: Copy + Eq + Hash + Send + Sync + 'static {
    fn as_str(&self) -> &'static str;
}

/// One entry of a tab registry
#[derive(Clone)]
pub struct Tab<K> {
    pub key: K,
    pub title: String,
    /// Body of the tab. It is mounted once per `key` and kept for as long as
    /// that key stays in the registry; a later entry with the same key but a
    /// different `content` does not replace the mounted body. Content that must
    /// follow changing data has to read it from signals.
    pub content: ViewFn,
    /// Shown as a badge next to the title when present
    pub count: Option<usize>,
}

impl<K: std::fmt::Debug> std::fmt::Debug for Tab<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tab")
            .field("key", &self.key)
            .field("title", &self.title)
            .field("count", &self.count)
            .finish_non_exhaustive()
    }
}

/// Identity of the mounted panel for a tab
pub fn panel_key<K: TabKey>(tab: &Tab<K>) -> K {
    tab.key
}

/// Tab bar differs between two registries: keys, titles, counts or order.
///
/// Usable as the comparison of a `Memo::new_with_compare` over a registry.
pub fn tab_headers_changed<K: TabKey>(old: Option<&Vec<Tab<K>>>, new: Option<&Vec<Tab<K>>>) -> bool {
    match (old, new) {
        (Some(old), Some(new)) => {
            old.len() != new.len()
                || old.iter().zip(new).any(|(a, b)| {
                    a.key != b.key || a.title != b.title || a.count != b.count
                })
        }
        (None, None) => false,
        _ => true,
    }
}

/// Tab that should be displayed: the selected one if it still exists, else the first
pub fn resolve_active<K: TabKey>(keys: &[K], selected: Option<K>) -> Option<K> {
    selected
        .filter(|key| keys.contains(key))
        .or_else(|| keys.first().copied())
}

#[component]
pub fn TabbedComponent<K>(tabs: Signal<Vec<Tab<K>>>) -> impl IntoView
where
    K: TabKey,
{
    let selected = RwSignal::new(None::<K>);
    let active = Memo::new(move |_| {
        let keys: Vec<K> = tabs.with(|tabs| tabs.iter().map(|tab| tab.key).collect());
        resolve_active(&keys, selected.get())
    });

    view! {
        <div class="tabbed">
            <Flex
                gap=FlexGap::Small
                align=FlexAlign::Center
                style="margin-bottom: var(--spacing-md); padding-bottom: var(--spacing-xs); border-bottom: 1px solid var(--color-border);"
            >
                {move || {
                    tabs.get()
                        .into_iter()
                        .map(|tab| {
                            let key = tab.key;
                            view! {
                                <Button
                                    appearance=Signal::derive(move || {
                                        if active.get() == Some(key) {
                                            ButtonAppearance::Primary
                                        } else {
                                            ButtonAppearance::Subtle
                                        }
                                    })
                                    size=ButtonSize::Small
                                    on_click=move |_| selected.set(Some(key))
                                >
                                    {tab.title}
                                    {tab.count.map(|count| view! {
                                        <span style="margin-left: 8px;">
                                            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                                                {count.to_string()}
                                            </Badge>
                                        </span>
                                    })}
                                </Button>
                            }
                        })
                        .collect_view()
                }}
            </Flex>

            <div class="tabbed__content">
                <For
                    each=move || tabs.get()
                    key=panel_key
                    children=move |tab| {
                        let key = tab.key;
                        view! {
                            <div
                                class=format!("tabbed__panel tabbed__panel--{}", key.as_str())
                                style=move || if active.get() == Some(key) { "" } else { "display: none;" }
                            >
                                {tab.content.run()}
                            </div>
                        }
                    }
                />
            </div>
        </div>
    }
}
