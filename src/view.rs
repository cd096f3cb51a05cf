//! View-side state for the recipe screens.
//!
//! Each screen owns one [`FetchState`] and moves it through
//! `Idle -> Pending -> Succeeded | Failed` for every request it issues.
//!
//! ## Overlapping requests
//!
//! A new request may start while an earlier one is still pending. Nothing is
//! de-duplicated or cancelled: both run to completion and each writes its
//! outcome when it resolves, so the state ends up holding whichever response
//! arrived **last**, not the one issued last. A slow first search can
//! therefore overwrite the results of a faster second one.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::client::{FetchError, RecipeDetail, RecipeId, RecipeSource, RecipeSummary};

/// Lifecycle of one screen's data.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FetchState<T> {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// A request is in flight.
    Pending,
    Succeeded(T),
    Failed(FetchError),
}

impl<T> FetchState<T> {
    pub fn is_pending(&self) -> bool {
        matches!(self, FetchState::Pending)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            FetchState::Succeeded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&FetchError> {
        match self {
            FetchState::Failed(error) => Some(error),
            _ => None,
        }
    }
}

impl<T> From<Result<T, FetchError>> for FetchState<T> {
    fn from(result: Result<T, FetchError>) -> Self {
        match result {
            Ok(value) => FetchState::Succeeded(value),
            Err(error) => FetchState::Failed(error),
        }
    }
}

/// State behind the recipe search screen.
pub struct SearchView<S> {
    source: Arc<S>,
    state: Arc<Mutex<FetchState<Vec<RecipeSummary>>>>,
}

impl<S> Clone for SearchView<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            state: Arc::clone(&self.state),
        }
    }
}

impl<S: RecipeSource> SearchView<S> {
    /// Query the screen searches for when first opened.
    pub const INITIAL_QUERY: &'static str = "Chicken";

    pub fn new(source: Arc<S>) -> Self {
        Self {
            source,
            state: Arc::new(Mutex::new(FetchState::Idle)),
        }
    }

    pub async fn state(&self) -> FetchState<Vec<RecipeSummary>> {
        self.state.lock().await.clone()
    }

    pub async fn open(&self) {
        self.submit(Self::INITIAL_QUERY).await;
    }

    /// Runs a search and records its outcome.
    ///
    /// A blank query clears the list without contacting the source. Calls may
    /// overlap; see the module docs for how their results interleave.
    pub async fn submit(&self, query: &str) {
        if query.trim().is_empty() {
            *self.state.lock().await = FetchState::Succeeded(Vec::new());
            return;
        }

        *self.state.lock().await = FetchState::Pending;
        let result = self.source.search_recipes(query).await;
        if let Err(e) = &result {
            tracing::warn!("{} failed for {:?}: {}", e.operation(), query, e);
        }
        *self.state.lock().await = result.into();
    }

    /// Text shown when a search succeeded with no matches.
    pub fn empty_message(query: &str) -> String {
        format!("No recipes found for \"{}\".", query)
    }
}

/// State behind the recipe details screen.
///
/// `Succeeded(None)` means the lookup worked but no recipe has that id.
pub struct DetailsView<S> {
    source: Arc<S>,
    state: Arc<Mutex<FetchState<Option<RecipeDetail>>>>,
}

impl<S> Clone for DetailsView<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            state: Arc::clone(&self.state),
        }
    }
}

impl<S: RecipeSource> DetailsView<S> {
    pub const NOT_FOUND_MESSAGE: &'static str = "Recipe details not found.";

    pub fn new(source: Arc<S>) -> Self {
        Self {
            source,
            state: Arc::new(Mutex::new(FetchState::Idle)),
        }
    }

    pub async fn state(&self) -> FetchState<Option<RecipeDetail>> {
        self.state.lock().await.clone()
    }

    pub async fn load(&self, id: impl Into<RecipeId>) {
        let id = id.into();
        *self.state.lock().await = FetchState::Pending;
        let result = self.source.get_recipe_details(id).await;
        if let Err(e) = &result {
            tracing::warn!("{} failed for {:?}: {}", e.operation(), e.subject(), e);
        }
        *self.state.lock().await = result.into();
    }
}
