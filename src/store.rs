//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use learnhub_content::SourceMode;
use reactive_stores::Store;

use crate::route::Route;

/// App-wide state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// Page being shown; follows the location hash
    pub route: Route,
    /// Whether content comes from the backend or the demo fixtures
    pub mode: SourceMode,
}

impl AppState {
    pub fn new(route: Route, mode: SourceMode) -> Self {
        Self { route, mode }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}
