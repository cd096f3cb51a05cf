use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::client::{
    error::FetchError,
    types::*,
};

/// Public MealDB endpoint, API key `1` (the shared test key).
pub const DEFAULT_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

/// Environment variable overriding [`DEFAULT_BASE_URL`].
pub const BASE_URL_ENV: &str = "MEALDB_BASE_URL";

/// # MealDB Client
///
/// Read-only client for the three MealDB endpoints the application uses.
///
/// Every call is a single unauthenticated GET. There is no retry, no cache and
/// no timeout beyond the transport default; a failed attempt is reported once
/// as a [`FetchError`]. The client holds no mutable state, so it can be shared
/// freely and called concurrently.
#[derive(Debug, Clone)]
pub struct MealDbClient {
    base_url: String,
    client: Client,
}

impl Default for MealDbClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL.to_string())
    }
}

impl MealDbClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// Builds a client for `MEALDB_BASE_URL`, or the public endpoint when unset.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> reqwest::Result<T> {
        tracing::debug!("Making request to: {}", url);

        let response = self.client.get(url).send().await?;
        tracing::debug!("Response status: {}", response.status());

        response.error_for_status()?.json().await
    }

    pub async fn list_categories(&self) -> Result<Vec<Category>, FetchError> {
        let url = format!("{}/categories.php", self.base_url);

        let response: CategoriesResponse = self.get_json(&url).await.map_err(|e| {
            tracing::error!("Error fetching categories: {}", e);
            FetchError::list_categories()
        })?;

        let categories = response.categories.unwrap_or_default();
        tracing::debug!("Retrieved {} categories", categories.len());
        Ok(categories)
    }

    /// Looks up one recipe by id.
    ///
    /// `Ok(None)` means MealDB knows no recipe with that id; it is not an error.
    pub async fn get_recipe_details(
        &self,
        id: impl Into<RecipeId>,
    ) -> Result<Option<RecipeDetail>, FetchError> {
        let id = id.into();
        if id.is_blank() {
            tracing::debug!("Skipping lookup for blank recipe id");
            return Ok(None);
        }

        let id = id.to_string();
        let url = format!(
            "{}/lookup.php?i={}",
            self.base_url,
            urlencoding::encode(&id)
        );

        let response: LookupResponse = self.get_json(&url).await.map_err(|e| {
            tracing::error!("Error fetching details for recipe {}: {}", id, e);
            FetchError::recipe_details(id.as_str())
        })?;

        let Some(first) = response.meals.and_then(|meals| meals.into_iter().next()) else {
            tracing::debug!("No recipe found for id {}", id);
            return Ok(None);
        };

        let meal: Meal = serde_json::from_value(first).map_err(|e| {
            tracing::error!("Error decoding recipe {}: {}", id, e);
            FetchError::recipe_details(id.as_str())
        })?;
        Ok(Some(RecipeDetail::from(meal)))
    }

    /// Searches recipes by name. The query is sent as given, only URL-encoded.
    pub async fn search_recipes(&self, query: &str) -> Result<Vec<RecipeSummary>, FetchError> {
        let url = format!(
            "{}/search.php?s={}",
            self.base_url,
            urlencoding::encode(query)
        );

        let response: MealsResponse = self.get_json(&url).await.map_err(|e| {
            tracing::error!("Error searching recipes for query {:?}: {}", query, e);
            FetchError::search_recipes(query)
        })?;

        let recipes: Vec<RecipeSummary> = response
            .meals
            .unwrap_or_default()
            .into_iter()
            .map(RecipeSummary::from)
            .collect();

        tracing::debug!("Search for {:?} returned {} recipes", query, recipes.len());
        Ok(recipes)
    }
}
