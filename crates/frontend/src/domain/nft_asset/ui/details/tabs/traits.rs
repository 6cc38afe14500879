//! Traits Tab - scrollable table of the asset's traits

use super::super::model::TRAIT_COLUMNS;
use super::super::trait_row::TraitRow;
use super::super::view_model::{memo_trait_rows, ScrimVisibility, TraitRowModel};
use crate::shared::config::Config;
use crate::shared::hooks::{use_subscribe_scroll_state, ScrollState};
use contracts::domain::nft_asset::Asset;
use leptos::prelude::*;

/// Inline style of the fade-out overlay. The top one is the bottom gradient
/// mirrored vertically.
fn scrim_style(is_bottom: bool, height_px: u32) -> String {
    let placement = if is_bottom {
        "bottom: 0px;"
    } else {
        "top: 0px; transform: matrix(1, 0, 0, -1, 0, 0);"
    };
    format!(
        "position: absolute; height: {}px; left: 0px; right: 6px; {} \
         background: linear-gradient(180deg, transparent 0%, var(--color-bg-surface) 100%); \
         display: flex; pointer-events: none;",
        height_px, placement
    )
}

#[component]
pub fn TraitsContent(#[prop(into)] asset: Signal<Asset>) -> impl IntoView {
    let panel = use_context::<Config>().unwrap_or_default().traits_panel;

    // Rows depend on address and traits only, so scrolling never rebuilds them
    let rows = memo_trait_rows(asset);
    let row_count = Signal::derive(move || rows.with(Vec::len));

    let ScrollState {
        user_can_scroll,
        scroll_progress,
        scroll_ref,
        scroll_handler,
    } = use_subscribe_scroll_state(panel.bottom_tolerance_px, row_count);

    let scrims = Memo::new(move |_| {
        ScrimVisibility::from_scroll(user_can_scroll.get(), scroll_progress.get())
    });

    let top_scrim = scrim_style(false, panel.scrim_height_px);
    let bottom_scrim = scrim_style(true, panel.scrim_height_px);
    let scroll_style = format!(
        "overflow-y: auto; overflow-x: hidden; max-height: {}px; width: calc(100% + 6px);",
        panel.max_height_px
    );

    view! {
        <div class="traits" style="display: flex; flex-direction: column; width: 100%;">
            <div class="traits__header" style="display: flex; align-items: center; padding-right: 12px;">
                {TRAIT_COLUMNS
                    .iter()
                    .map(|column| {
                        view! {
                            <div style=format!(
                                "{} line-height: 20px; font-size: var(--font-size-sm); color: var(--color-text-secondary);",
                                column.cell_style(),
                            )>{column.label}</div>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="traits__rows" style="position: relative;">
                <Show when=move || scrims.get().top>
                    <div class="traits__scrim traits__scrim--top" style=top_scrim.clone()></div>
                </Show>

                <div
                    class="traits__scroll"
                    node_ref=scroll_ref
                    style=scroll_style
                    on:scroll=move |ev| scroll_handler.run(ev)
                >
                    <For
                        each=move || rows.get()
                        key=|row| row.key.clone()
                        children=move |row: TraitRowModel| {
                            view! {
                                <TraitRow
                                    collection_address=row.collection_address
                                    nft_trait=row.nft_trait
                                    total_supply=row.total_supply
                                />
                            }
                        }
                    />
                </div>

                <Show when=move || scrims.get().bottom>
                    <div class="traits__scrim traits__scrim--bottom" style=bottom_scrim.clone()></div>
                </Show>
            </div>
        </div>
    }
}
