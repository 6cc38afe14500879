use crate::domain::nft_asset::ui::details::{DataPageTraits, ASSET_ELEMENT_ID};
use crate::shared::config::Config;
use crate::shared::dom::embedded_text;
use contracts::domain::nft_asset::Asset;
use leptos::prelude::*;

/// Asset handed over by the host page
fn load_embedded_asset() -> Result<Asset, String> {
    let json = embedded_text(ASSET_ELEMENT_ID)
        .ok_or_else(|| format!("Element #{} not found", ASSET_ELEMENT_ID))?;
    Asset::from_json(&json).map_err(|e| format!("{:#}", e))
}

#[component]
pub fn App(config: Config) -> impl IntoView {
    provide_context(config);

    match load_embedded_asset() {
        Ok(asset) => {
            log::info!(
                "Loaded asset {} #{} with {:?} traits",
                asset.address,
                asset.token_id,
                asset.trait_count()
            );
            view! {
                <div class="page page--detail">
                    <div class="page__content">
                        <DataPageTraits asset=Signal::stored(asset) />
                    </div>
                </div>
            }
            .into_any()
        }
        Err(err) => {
            log::error!("Failed to load asset: {}", err);
            view! {
                <div style="padding: var(--spacing-lg); background: var(--color-error-50); border: 1px solid var(--color-error-100); border-radius: var(--radius-sm); color: var(--color-error); margin: var(--spacing-lg);">
                    <strong>"Error: "</strong>{err}
                </div>
            }
            .into_any()
        }
    }
}
