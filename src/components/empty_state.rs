use leptos::prelude::*;

/// Placeholder for a page whose child list is empty
#[component]
pub fn EmptyState(#[prop(into)] title: String, #[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="empty-state">
            <h3>{title}</h3>
            <p>{message}</p>
        </div>
    }
}
