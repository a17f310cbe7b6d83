use leptos::prelude::*;

/// Skeleton placeholders shown while a page loads
#[component]
pub fn LoadingSkeleton(#[prop(default = 3)] cards: usize) -> impl IntoView {
    view! {
        <div class="page skeleton" aria-busy="true">
            <div class="skeleton-header">
                <div class="skeleton-line crumb"></div>
                <div class="skeleton-line title"></div>
                <div class="skeleton-line subtitle"></div>
            </div>
            <div class="card-grid">
                {(0..cards)
                    .map(|_| {
                        view! {
                            <div class="card skeleton-card">
                                <div class="skeleton-icon"></div>
                                <div class="skeleton-line"></div>
                                <div class="skeleton-line"></div>
                                <div class="skeleton-meta">
                                    <div class="skeleton-line short"></div>
                                    <div class="skeleton-line short"></div>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
