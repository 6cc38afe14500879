pub mod nft_asset;
