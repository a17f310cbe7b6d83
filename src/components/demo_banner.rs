//! Demo Mode Banner

use leptos::prelude::*;
use learnhub_content::SourceMode;

use crate::store::{use_app_store, AppStateStoreFields};

/// Shown while the fixture source is serving sample data
#[component]
pub fn DemoBanner() -> impl IntoView {
    let store = use_app_store();
    let is_demo = move || store.mode().get() == SourceMode::Demo;

    view! {
        <Show when=is_demo>
            <div class="demo-banner">
                "Demo mode: showing sample curriculum. Set LEARNHUB_BACKEND_URL and "
                "LEARNHUB_BACKEND_ANON_KEY at build time to browse live content."
            </div>
        </Show>
    }
}
