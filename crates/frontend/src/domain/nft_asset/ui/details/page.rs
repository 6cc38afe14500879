//! NFT asset details - traits panel wrapper

use super::model::TraitTabKey;
use super::tabs::TraitsContent;
use super::view_model::build_trait_tabs;
use crate::shared::components::{tab_headers_changed, Tab, TabbedComponent};
use contracts::domain::nft_asset::Asset;
use leptos::prelude::*;

/// Tab registry for the asset. Subscribers are notified only when the tab bar
/// changes; the tab body reads the asset signal itself.
fn memo_trait_tabs(asset: Signal<Asset>) -> Memo<Vec<Tab<TraitTabKey>>> {
    Memo::new_with_compare(
        move |_| {
            asset.with(|current| {
                log::debug!("Building trait tabs for {}", current.address);
                build_trait_tabs(
                    current,
                    ViewFn::from(move || view! { <TraitsContent asset=asset /> }),
                )
            })
        },
        tab_headers_changed::<TraitTabKey>,
    )
}

/// Traits panel of the asset details page: a single "Traits" tab with the
/// trait count as its badge.
#[component]
pub fn DataPageTraits(#[prop(into)] asset: Signal<Asset>) -> impl IntoView {
    let tabs = memo_trait_tabs(asset);

    view! { <TabbedComponent tabs=Signal::from(tabs) /> }
}
