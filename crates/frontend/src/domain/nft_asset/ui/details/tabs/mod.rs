//! Tab bodies of the asset details panel

pub mod traits;

pub use traits::TraitsContent;
