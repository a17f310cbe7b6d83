//! Page Load State
//!
//! One browsing page moves through `Idle → Loading → {Ready | Error}`.
//! `PageState` is the explicit container for that machine. Every load it
//! starts carries a `RequestToken`; only the latest token may settle the
//! page, so a slow response for an old id cannot overwrite a newer one.

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

/// Which level of the hierarchy a page lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContentKind {
    Grades,
    Subjects,
    Topics,
    Videos,
}

impl fmt::Display for ContentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ContentKind::Grades => "grades",
            ContentKind::Subjects => "subjects",
            ContentKind::Topics => "topics",
            ContentKind::Videos => "videos",
        };
        f.write_str(label)
    }
}

/// User-facing load failure.
///
/// Deliberately generic: network, permission and missing-row failures all
/// read the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("Failed to load {kind}. Please try again.")]
pub struct LoadFailure {
    pub kind: ContentKind,
}

impl LoadFailure {
    pub fn new(kind: ContentKind) -> Self {
        Self { kind }
    }
}

/// Identifies one load invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

/// Observable state of a page
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(LoadFailure),
}

impl<T> LoadState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            LoadState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&LoadFailure> {
        match self {
            LoadState::Error(failure) => Some(failure),
            _ => None,
        }
    }
}

/// State container for one page
#[derive(Debug, Clone)]
pub struct PageState<T> {
    state: LoadState<T>,
    /// Last token issued; tokens start at 1
    issued: u64,
}

impl<T> Default for PageState<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PageState<T> {
    pub fn new() -> Self {
        Self {
            state: LoadState::Idle,
            issued: 0,
        }
    }

    pub fn state(&self) -> &LoadState<T> {
        &self.state
    }

    /// Start a full reload; any earlier in-flight request becomes stale
    pub fn begin(&mut self) -> RequestToken {
        self.issued += 1;
        self.state = LoadState::Loading;
        RequestToken(self.issued)
    }

    /// Re-enter `Loading` from `Error`. Returns `None` in any other state.
    pub fn retry(&mut self) -> Option<RequestToken> {
        match self.state {
            LoadState::Error(_) => Some(self.begin()),
            _ => None,
        }
    }

    /// Whether `token` is the latest issued and still awaiting its result
    pub fn is_current(&self, token: RequestToken) -> bool {
        token.0 == self.issued && self.state.is_loading()
    }

    /// Settle the page with a response.
    ///
    /// Returns `false` (and leaves the state untouched) when the response
    /// belongs to a superseded request.
    pub fn complete(&mut self, token: RequestToken, result: Result<T, LoadFailure>) -> bool {
        if !self.is_current(token) {
            debug!(
                "discarding stale response (token {}, latest {})",
                token.0, self.issued
            );
            return false;
        }

        self.state = match result {
            Ok(data) => LoadState::Ready(data),
            Err(failure) => LoadState::Error(failure),
        };
        true
    }
}
