//! Content Sources
//!
//! Data-access abstraction over the content hierarchy, with two
//! interchangeable implementations:
//! - `RestSource`: the hosted relational backend (PostgREST over HTTP)
//! - `FixtureSource`: a fixed offline dataset for demo mode
//!
//! `select_source` picks one once at startup; pages never know which.

mod traits;
mod query;
mod rest;
mod fixture;

use std::sync::Arc;

use log::info;

use crate::config::BackendConfig;

pub use traits::{ContentSource, SourceMode};
pub use query::TableQuery;
pub use rest::RestSource;
pub use fixture::FixtureSource;

/// Choose the source for this session
pub fn select_source(config: &BackendConfig) -> Arc<dyn ContentSource> {
    match config.credentials() {
        Some((url, anon_key)) => {
            info!("content backend configured at {}", url);
            Arc::new(RestSource::new(url, anon_key))
        }
        None => {
            info!("content backend not configured; serving demo fixtures");
            Arc::new(FixtureSource::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_fixture_when_unconfigured() {
        let source = select_source(&BackendConfig::unconfigured());
        assert_eq!(source.mode(), SourceMode::Demo);
    }

    #[test]
    fn test_select_rest_when_configured() {
        let source = select_source(&BackendConfig::new("https://db.example", "key"));
        assert_eq!(source.mode(), SourceMode::Live);
    }
}
