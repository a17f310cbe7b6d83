//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;
use learnhub_content::ContentLoader;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Loader over whichever source was selected at startup
    loader: StoredValue<ContentLoader>,
}

impl AppContext {
    pub fn new(loader: ContentLoader) -> Self {
        Self {
            loader: StoredValue::new(loader),
        }
    }

    /// Cheap clone of the shared loader
    pub fn loader(&self) -> ContentLoader {
        self.loader.get_value()
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
