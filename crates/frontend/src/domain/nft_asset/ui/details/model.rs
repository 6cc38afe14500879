//! NFT asset details - Model Layer
//!
//! Constants and small value types shared by the traits panel.

use crate::shared::components::TabKey;

/// Id of the `<script type="application/json">` block carrying the asset
pub const ASSET_ELEMENT_ID: &str = "nft-asset";

/// Collection page the trait rows link to
pub const COLLECTION_PATH: &str = "/nfts/collection";

/// Keys of the tabs shown under the asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraitTabKey {
    Traits,
}

impl TabKey for TraitTabKey {
    fn as_str(&self) -> &'static str {
        match self {
            TraitTabKey::Traits => "traits",
        }
    }
}

/// Column of the traits table; header and rows share the layout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TraitColumn {
    pub label: &'static str,
    pub flex: f32,
    pub align_end: bool,
}

pub const TRAIT_COLUMNS: [TraitColumn; 4] = [
    TraitColumn {
        label: "Trait",
        flex: 3.0,
        align_end: false,
    },
    TraitColumn {
        label: "Floor price",
        flex: 2.0,
        align_end: false,
    },
    TraitColumn {
        label: "Quantity",
        flex: 1.0,
        align_end: false,
    },
    TraitColumn {
        label: "Rarity",
        flex: 1.5,
        align_end: true,
    },
];

impl TraitColumn {
    /// Inline flex style for a cell in this column
    pub fn cell_style(&self) -> String {
        let justify = if self.align_end { "flex-end" } else { "flex-start" };
        format!("display: flex; flex: {}; justify-content: {};", self.flex, justify)
    }
}

/// How rare a trait is within its collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RarityLevel {
    Mythic,
    Legendary,
    Epic,
    Rare,
    Uncommon,
    Common,
}

impl RarityLevel {
    /// Upper bound (inclusive) of the share of the collection for each level,
    /// rarest first
    const THRESHOLDS: [(RarityLevel, f64); 5] = [
        (RarityLevel::Mythic, 0.01),
        (RarityLevel::Legendary, 0.02),
        (RarityLevel::Epic, 0.03),
        (RarityLevel::Rare, 0.1),
        (RarityLevel::Uncommon, 0.2),
    ];

    pub fn from_fraction(fraction: f64) -> Self {
        Self::THRESHOLDS
            .iter()
            .find(|(_, limit)| fraction <= *limit)
            .map(|(level, _)| *level)
            .unwrap_or(RarityLevel::Common)
    }

    pub fn caption(&self) -> &'static str {
        match self {
            RarityLevel::Mythic => "Mythic",
            RarityLevel::Legendary => "Legendary",
            RarityLevel::Epic => "Epic",
            RarityLevel::Rare => "Rare",
            RarityLevel::Uncommon => "Uncommon",
            RarityLevel::Common => "Common",
        }
    }
}

/// Rarity of one trait: the share of the collection carrying it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rarity {
    pub fraction: f64,
    pub level: RarityLevel,
}
