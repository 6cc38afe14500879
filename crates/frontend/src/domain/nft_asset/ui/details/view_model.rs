//! Derivations for the traits panel
//!
//! Everything here is a pure function of the asset or of the scroll state, so
//! the components only decide *when* to recompute.

use super::model::{Rarity, RarityLevel, TraitTabKey, COLLECTION_PATH};
use crate::shared::components::Tab;
use crate::shared::hooks::scroll_state::is_scroll_complete;
use contracts::domain::nft_asset::{Asset, Trait};
use leptos::prelude::*;
use serde::Serialize;

/// Inputs the trait row list depends on
#[derive(Debug, Clone, PartialEq)]
pub struct TraitRowDeps {
    pub address: String,
    pub traits: Option<Vec<Trait>>,
    pub total_supply: Option<u64>,
}

impl TraitRowDeps {
    pub fn of(asset: &Asset) -> Self {
        Self {
            address: asset.address.clone(),
            traits: asset.traits.clone(),
            total_supply: asset.total_supply(),
        }
    }
}

/// One row of the traits table
#[derive(Debug, Clone, PartialEq)]
pub struct TraitRowModel {
    /// `type:value`, identifies the row across re-renders
    pub key: String,
    pub collection_address: String,
    pub nft_trait: Trait,
    pub total_supply: Option<u64>,
}

pub fn trait_rows(deps: &TraitRowDeps) -> Vec<TraitRowModel> {
    deps.traits
        .iter()
        .flatten()
        .map(|nft_trait| TraitRowModel {
            key: nft_trait.key(),
            collection_address: deps.address.clone(),
            nft_trait: nft_trait.clone(),
            total_supply: deps.total_supply,
        })
        .collect()
}

/// Row list that is rebuilt only when the address, traits or supply change
pub fn memo_trait_rows(asset: Signal<Asset>) -> Memo<Vec<TraitRowModel>> {
    memo_trait_rows_with(asset, |deps| {
        log::debug!("Deriving trait rows for {}", deps.address);
        trait_rows(deps)
    })
}

fn memo_trait_rows_with(
    asset: Signal<Asset>,
    derive: impl Fn(&TraitRowDeps) -> Vec<TraitRowModel> + Send + Sync + 'static,
) -> Memo<Vec<TraitRowModel>> {
    let row_deps = Memo::new(move |_| asset.with(TraitRowDeps::of));
    Memo::new(move |_| row_deps.with(|deps| derive(deps)))
}

/// Which fade-out overlays to draw over the scrollable list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrimVisibility {
    pub top: bool,
    pub bottom: bool,
}

impl ScrimVisibility {
    /// Top fade once the list left its start, bottom fade while more content
    /// is below
    pub fn from_scroll(user_can_scroll: bool, scroll_progress: f64) -> Self {
        Self {
            top: scroll_progress > 0.0,
            bottom: user_can_scroll && !is_scroll_complete(scroll_progress),
        }
    }
}

/// Share of the collection carrying the trait, when both numbers are known
pub fn rarity(trait_count: Option<u64>, total_supply: Option<u64>) -> Option<Rarity> {
    let count = trait_count?;
    let supply = total_supply.filter(|supply| *supply > 0)?;
    let fraction = (count as f64 / supply as f64).min(1.0);
    Some(Rarity {
        fraction,
        level: RarityLevel::from_fraction(fraction),
    })
}

#[derive(Serialize)]
struct TraitFilterQuery {
    traits: Vec<String>,
}

/// Link to the collection page filtered by this trait
pub fn trait_filter_href(collection_address: &str, nft_trait: &Trait) -> String {
    let path = format!("{}/{}", COLLECTION_PATH, collection_address);
    let query = TraitFilterQuery {
        traits: vec![format!(
            "(\"{}\",\"{}\")",
            nft_trait.trait_type, nft_trait.trait_value
        )],
    };
    match serde_qs::to_string(&query) {
        Ok(qs) => format!("{}?{}", path, qs),
        Err(e) => {
            log::warn!("Failed to encode trait filter for {}: {}", nft_trait.key(), e);
            path
        }
    }
}

/// Tab registry shown under the asset, in display order
pub fn build_trait_tabs(asset: &Asset, content: ViewFn) -> Vec<Tab<TraitTabKey>> {
    vec![Tab {
        key: TraitTabKey::Traits,
        title: "Traits".to_string(),
        content,
        count: asset.trait_count(),
    }]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use contracts::domain::nft_asset::CollectionStats;

    fn asset(traits: Option<Vec<Trait>>) -> Asset {
        Asset {
            address: "0xabc".to_string(),
            token_id: "1".to_string(),
            name: None,
            traits,
            collection: None,
        }
    }

    #[test]
    fn test_one_trait_one_row() {
        let asset = asset(Some(vec![Trait::new("Background", "Blue")]));
        let rows = trait_rows(&TraitRowDeps::of(&asset));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].key, "Background:Blue");
        assert_eq!(rows[0].collection_address, "0xabc");
    }

    #[test]
    fn test_rows_keep_order_and_keys() {
        let traits = vec![
            Trait::new("Eyes", "Laser"),
            Trait::new("Background", "Blue"),
            Trait::new("Hat", "None"),
        ];
        let rows = trait_rows(&TraitRowDeps::of(&asset(Some(traits))));
        let keys: Vec<&str> = rows.iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["Eyes:Laser", "Background:Blue", "Hat:None"]);
    }

    #[test]
    fn test_empty_and_absent_traits_render_no_rows() {
        assert!(trait_rows(&TraitRowDeps::of(&asset(Some(vec![])))).is_empty());
        assert!(trait_rows(&TraitRowDeps::of(&asset(None))).is_empty());
    }

    #[test]
    fn test_rows_carry_total_supply() {
        let mut asset = asset(Some(vec![Trait::new("Eyes", "Laser")]));
        asset.collection = Some(CollectionStats {
            total_supply: Some(10_000),
            floor_price: None,
        });
        let rows = trait_rows(&TraitRowDeps::of(&asset));
        assert_eq!(rows[0].total_supply, Some(10_000));
    }

    #[test]
    fn test_top_scrim_follows_progress() {
        assert!(!ScrimVisibility::from_scroll(true, 0.0).top);
        assert!(ScrimVisibility::from_scroll(true, 0.5).top);
        assert!(ScrimVisibility::from_scroll(true, 100.0).top);
    }

    #[test]
    fn test_no_bottom_scrim_without_overflow() {
        for progress in [0.0, 50.0, 100.0] {
            assert!(!ScrimVisibility::from_scroll(false, progress).bottom);
        }
    }

    #[test]
    fn test_bottom_scrim_until_end() {
        assert!(ScrimVisibility::from_scroll(true, 0.0).bottom);
        assert!(ScrimVisibility::from_scroll(true, 99.9).bottom);
        assert!(!ScrimVisibility::from_scroll(true, 100.0).bottom);
    }

    #[test]
    fn test_unscrollable_list_has_no_scrims() {
        assert_eq!(ScrimVisibility::from_scroll(false, 0.0), ScrimVisibility::default());
    }

    #[test]
    fn test_rarity() {
        let r = rarity(Some(150), Some(10_000)).unwrap();
        assert!((r.fraction - 0.015).abs() < 1e-12);
        assert_eq!(r.level, RarityLevel::Legendary);

        assert_eq!(rarity(None, Some(10_000)), None);
        assert_eq!(rarity(Some(10), None), None);
        assert_eq!(rarity(Some(10), Some(0)), None);
        assert_eq!(rarity(Some(20), Some(10)).unwrap().fraction, 1.0);
    }

    #[test]
    fn test_trait_filter_href() {
        assert_eq!(
            trait_filter_href("0xabc", &Trait::new("Background", "Blue")),
            "/nfts/collection/0xabc?traits[0]=%28%22Background%22%2C%22Blue%22%29"
        );
    }

    #[test]
    fn test_trait_filter_href_escapes_value() {
        assert_eq!(
            trait_filter_href("0xabc", &Trait::new("Clothes", "Tweed Suit & #1")),
            "/nfts/collection/0xabc?traits[0]=%28%22Clothes%22%2C%22Tweed+Suit+%26+%231%22%29"
        );
    }

    #[test]
    fn test_trait_tabs_count() {
        let tabs = build_trait_tabs(
            &asset(Some(vec![Trait::new("Background", "Blue")])),
            ViewFn::from(|| ()),
        );
        assert_eq!(tabs.len(), 1);
        assert_eq!(tabs[0].key, TraitTabKey::Traits);
        assert_eq!(tabs[0].title, "Traits");
        assert_eq!(tabs[0].count, Some(1));

        let empty = build_trait_tabs(&asset(Some(vec![])), ViewFn::from(|| ()));
        assert_eq!(empty[0].count, Some(0));

        let absent = build_trait_tabs(&asset(None), ViewFn::from(|| ()));
        assert_eq!(absent[0].count, None);
    }

    #[test]
    fn test_rows_not_rederived_for_unrelated_changes() {
        let owner = Owner::new();
        owner.with(|| {
            let derivations = Arc::new(AtomicUsize::new(0));
            let asset = RwSignal::new(asset(Some(vec![Trait::new("Background", "Blue")])));
            let scroll_progress = RwSignal::new(0.0_f64);

            let counter = Arc::clone(&derivations);
            let rows = memo_trait_rows_with(asset.into(), move |deps| {
                counter.fetch_add(1, Ordering::SeqCst);
                trait_rows(deps)
            });

            assert_eq!(rows.get_untracked().len(), 1);
            assert_eq!(derivations.load(Ordering::SeqCst), 1);

            asset.update(|a| a.name = Some("Ape #1".to_string()));
            scroll_progress.set(55.0);
            assert_eq!(rows.get_untracked().len(), 1);
            assert_eq!(derivations.load(Ordering::SeqCst), 1);

            asset.update(|a| {
                a.traits = Some(vec![
                    Trait::new("Background", "Blue"),
                    Trait::new("Eyes", "Laser"),
                ])
            });
            let keys: Vec<String> = rows.get_untracked().into_iter().map(|r| r.key).collect();
            assert_eq!(keys, vec!["Background:Blue", "Eyes:Laser"]);
            assert_eq!(derivations.load(Ordering::SeqCst), 2);
        });
    }
}
