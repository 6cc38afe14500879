//! One row of the traits table

use super::model::{RarityLevel, TRAIT_COLUMNS};
use super::view_model::{rarity, trait_filter_href};
use crate::shared::format::{format_count, format_eth, format_percent, format_trait_type, EMPTY_CELL};
use contracts::domain::nft_asset::Trait;
use leptos::prelude::*;
use thaw::{Badge, BadgeAppearance, BadgeColor};

fn rarity_color(level: RarityLevel) -> BadgeColor {
    match level {
        RarityLevel::Mythic => BadgeColor::Danger,
        RarityLevel::Legendary => BadgeColor::Warning,
        RarityLevel::Epic => BadgeColor::Important,
        RarityLevel::Rare => BadgeColor::Brand,
        RarityLevel::Uncommon => BadgeColor::Informative,
        RarityLevel::Common => BadgeColor::Subtle,
    }
}

/// Trait type/value, floor price, quantity and rarity of one trait.
///
/// The whole row links to the collection filtered by this trait.
#[component]
pub fn TraitRow(
    collection_address: String,
    nft_trait: Trait,
    total_supply: Option<u64>,
) -> impl IntoView {
    let [trait_col, floor_col, quantity_col, rarity_col] = TRAIT_COLUMNS;

    let href = trait_filter_href(&collection_address, &nft_trait);
    let floor_price = nft_trait
        .floor_price
        .map(format_eth)
        .unwrap_or_else(|| EMPTY_CELL.to_string());
    let quantity = nft_trait
        .trait_count
        .map(format_count)
        .unwrap_or_else(|| EMPTY_CELL.to_string());
    let rarity_cell = match rarity(nft_trait.trait_count, total_supply) {
        Some(r) => view! {
            <span style="display: flex; align-items: center; gap: var(--spacing-xs);">
                <span style="font-size: var(--font-size-xs); color: var(--color-text-secondary);">
                    {format_percent(r.fraction)}
                </span>
                <Badge appearance=BadgeAppearance::Tint color=rarity_color(r.level)>
                    {r.level.caption()}
                </Badge>
            </span>
        }
        .into_any(),
        None => view! { <span>{EMPTY_CELL}</span> }.into_any(),
    };

    view! {
        <a
            class="trait-row"
            href=href
            style="display: flex; align-items: center; padding: var(--spacing-sm) 12px var(--spacing-sm) 0; color: inherit; text-decoration: none; border-radius: var(--radius-sm);"
        >
            <div style=format!("{} flex-direction: column; min-width: 0;", trait_col.cell_style())>
                <span style="font-size: var(--font-size-xs); line-height: 16px; color: var(--color-text-secondary);">
                    {format_trait_type(&nft_trait.trait_type)}
                </span>
                <span style="line-height: 20px; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;">
                    {nft_trait.trait_value.clone()}
                </span>
            </div>
            <div style=floor_col.cell_style()>{floor_price}</div>
            <div style=quantity_col.cell_style()>{quantity}</div>
            <div style=rarity_col.cell_style()>{rarity_cell}</div>
        </a>
    }
}
