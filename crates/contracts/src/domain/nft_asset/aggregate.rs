//! NFT asset as handed to the details page by its host.
//!
//! The asset is read-only for the frontend: it is parsed once from the JSON
//! embedded in the page and then passed down by reference.

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// A single token of a collection together with its attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    /// Contract address of the collection the token belongs to
    pub address: String,
    #[serde(default)]
    pub token_id: String,
    #[serde(default)]
    pub name: Option<String>,
    /// Ordered attributes. `None` means the source did not report traits at all,
    /// which is not the same as an empty list.
    #[serde(default)]
    pub traits: Option<Vec<Trait>>,
    #[serde(default)]
    pub collection: Option<CollectionStats>,
}

/// Attribute of an asset, e.g. `Background: Blue`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trait {
    pub trait_type: String,
    pub trait_value: String,
    /// Number of tokens in the collection carrying the same type/value pair
    #[serde(default)]
    pub trait_count: Option<u64>,
    /// Cheapest listing with this trait, in ETH
    #[serde(default)]
    pub floor_price: Option<f64>,
}

/// Collection-level numbers needed to put a trait in context
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectionStats {
    #[serde(default)]
    pub total_supply: Option<u64>,
    #[serde(default)]
    pub floor_price: Option<f64>,
}

impl Asset {
    /// Parse an asset from its JSON representation
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Failed to parse NFT asset JSON")
    }

    /// Traits as a slice; absent traits read as empty
    pub fn traits_slice(&self) -> &[Trait] {
        self.traits.as_deref().unwrap_or_default()
    }

    /// Number of traits, `None` when the source reported none at all
    pub fn trait_count(&self) -> Option<usize> {
        self.traits.as_ref().map(Vec::len)
    }

    pub fn total_supply(&self) -> Option<u64> {
        self.collection.as_ref().and_then(|c| c.total_supply)
    }
}

impl Trait {
    pub fn new(trait_type: impl Into<String>, trait_value: impl Into<String>) -> Self {
        Self {
            trait_type: trait_type.into(),
            trait_value: trait_value.into(),
            trait_count: None,
            floor_price: None,
        }
    }

    /// Rendering key, `type:value`
    pub fn key(&self) -> String {
        format!("{}:{}", self.trait_type, self.trait_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_asset_with_traits() {
        let json = r#"{
            "address": "0xabc",
            "token_id": "42",
            "traits": [
                {"trait_type": "Background", "trait_value": "Blue", "trait_count": 120, "floor_price": 0.5}
            ],
            "collection": {"total_supply": 10000}
        }"#;
        let asset = Asset::from_json(json).unwrap();
        assert_eq!(asset.address, "0xabc");
        assert_eq!(asset.trait_count(), Some(1));
        assert_eq!(asset.traits_slice()[0].key(), "Background:Blue");
        assert_eq!(asset.traits_slice()[0].trait_count, Some(120));
        assert_eq!(asset.total_supply(), Some(10000));
    }

    #[test]
    fn test_absent_traits_differ_from_empty() {
        let absent = Asset::from_json(r#"{"address": "0xabc"}"#).unwrap();
        assert_eq!(absent.trait_count(), None);
        assert!(absent.traits_slice().is_empty());

        let empty = Asset::from_json(r#"{"address": "0xabc", "traits": []}"#).unwrap();
        assert_eq!(empty.trait_count(), Some(0));
        assert!(empty.traits_slice().is_empty());
    }

    #[test]
    fn test_invalid_json_is_error() {
        let err = Asset::from_json("{not json").unwrap_err();
        assert!(err.to_string().contains("NFT asset"));
    }

    #[test]
    fn test_trait_key() {
        assert_eq!(Trait::new("Eyes", "Laser").key(), "Eyes:Laser");
        assert_eq!(Trait::new("", "").key(), ":");
    }
}
