//! NFT asset details: traits panel
//!
//! Structure:
//! - model.rs: constants, tab keys, column layout, rarity levels
//! - view_model.rs: derivations from the asset and scroll state
//! - page.rs: `DataPageTraits`, the tab wrapper
//! - tabs/: tab bodies (`TraitsContent`)
//! - trait_row.rs: one row of the traits table

mod model;
mod page;
mod tabs;
mod trait_row;
mod view_model;

pub use model::ASSET_ELEMENT_ID;
pub use page::DataPageTraits;
pub use tabs::TraitsContent;
pub use trait_row::TraitRow;
