//! Page Loading
//!
//! Binds a `PageState` to a signal. Each change of the page's id, and each
//! retry, starts a full reload with a fresh request token; a response whose
//! token has been superseded is dropped instead of overwriting newer data.

use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;
use learnhub_content::{ContentLoader, LoadFailure, LoadState, PageState, RequestToken};
use log::debug;

use crate::context::use_app_context;

/// Handle to one page's load state
pub struct PageLoad<T: Send + Sync + 'static> {
    page: RwSignal<PageState<T>>,
    retry: Callback<()>,
}

impl<T: Send + Sync + 'static> Clone for PageLoad<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for PageLoad<T> {}

impl<T: Clone + Send + Sync + 'static> PageLoad<T> {
    /// Current state (tracked)
    pub fn state(&self) -> LoadState<T> {
        self.page.with(|page| page.state().clone())
    }

    /// Re-enter loading from the error state
    pub fn retry(&self) -> Callback<()> {
        self.retry
    }
}

/// Load a page keyed by `key`; `None` means the page is not showing
pub fn use_page_load<T, F, Fut>(key: Signal<Option<String>>, fetch: F) -> PageLoad<T>
where
    T: Clone + Send + Sync + 'static,
    F: Fn(ContentLoader, String) -> Fut + Copy + Send + Sync + 'static,
    Fut: Future<Output = Result<T, LoadFailure>> + 'static,
{
    let ctx = use_app_context();
    let page = RwSignal::new(PageState::<T>::new());

    let start = move |id: String, token: RequestToken| {
        let loader = ctx.loader();
        spawn_local(async move {
            let result = fetch(loader, id.clone()).await;
            let applied = page
                .try_maybe_update(|page| {
                    let applied = page.complete(token, result);
                    (applied, applied)
                })
                .unwrap_or(false);
            if !applied {
                debug!("[PAGE] dropped stale response for {:?}", id);
            }
        });
    };

    Effect::new(move |_| {
        if let Some(id) = key.get() {
            if let Some(token) = page.try_update(|page| page.begin()) {
                start(id, token);
            }
        }
    });

    let retry = Callback::new(move |_: ()| {
        let Some(id) = key.get_untracked() else {
            return;
        };
        if let Some(Some(token)) = page.try_update(|page| page.retry()) {
            start(id, token);
        }
    });

    PageLoad { page, retry }
}
