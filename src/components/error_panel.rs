//! Error Panel
//!
//! Generic load failure with a manual retry.

use leptos::prelude::*;
use learnhub_content::LoadFailure;

/// # Arguments
/// * `title` - Heading, e.g. "Error Loading Subjects"
/// * `failure` - The page's load failure (renders the generic message)
/// * `on_retry` - Re-enters loading with the identical request
#[component]
pub fn ErrorPanel(
    #[prop(into)] title: String,
    failure: LoadFailure,
    on_retry: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="error-panel" role="alert">
            <h3>{title}</h3>
            <p>{failure.to_string()}</p>
            <button class="retry-btn" on:click=move |_| on_retry.run(())>
                "Try Again"
            </button>
        </div>
    }
}
