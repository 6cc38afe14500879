pub mod aggregate;

pub use aggregate::{Asset, CollectionStats, Trait};
