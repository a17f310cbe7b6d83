//! LearnHub Frontend App
//!
//! Picks the content source once, then shows the page for the current hash
//! route. Sibling navigation (grade 1 → grade 2) keeps the same page mounted
//! and only swaps its id, so in-flight loads are superseded, not raced.

use leptos::ev;
use leptos::prelude::*;
use learnhub_content::{BackendConfig, ContentLoader};
use log::info;
use reactive_stores::Store;

use crate::components::{
    DemoBanner, GradeCataloguePage, GradeSubjectsPage, SubjectTopicsPage, TopicVideosPage,
};
use crate::context::AppContext;
use crate::route::{self, Page};
use crate::store::{AppState, AppStateStoreFields};

/// Backend settings baked in at build time
fn backend_config() -> BackendConfig {
    BackendConfig::from_values(
        option_env!("LEARNHUB_BACKEND_URL"),
        option_env!("LEARNHUB_BACKEND_ANON_KEY"),
    )
}

#[component]
pub fn App() -> impl IntoView {
    let loader = ContentLoader::from_config(&backend_config());
    let store = Store::new(AppState::new(route::current(), loader.mode()));

    // Provide context to all children
    provide_context(store);
    provide_context(AppContext::new(loader));

    let _hashchange = window_event_listener(ev::hashchange, move |_| {
        let next = route::current();
        info!("[APP] navigate to {:?}", next);
        store.route().set(next);
    });

    let page = Memo::new(move |_| store.route().get().page());
    let grade_id = Memo::new(move |_| store.route().get().grade_id());
    let subject_id = Memo::new(move |_| store.route().get().subject_id());
    let topic_id = Memo::new(move |_| store.route().get().topic_id());

    view! {
        <div class="app-layout">
            <DemoBanner />

            <main class="main-content">
                {move || match page.get() {
                    Page::Catalogue => view! { <GradeCataloguePage /> }.into_any(),
                    Page::Subjects => view! { <GradeSubjectsPage grade_id=grade_id /> }.into_any(),
                    Page::Topics => view! { <SubjectTopicsPage subject_id=subject_id /> }.into_any(),
                    Page::Videos => view! { <TopicVideosPage topic_id=topic_id /> }.into_any(),
                }}
            </main>
        </div>
    }
}
