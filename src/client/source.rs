//! The async seam between views and the recipe backend.

use async_trait::async_trait;

use crate::client::{
    client::MealDbClient,
    error::FetchError,
    types::{Category, RecipeDetail, RecipeId, RecipeSummary},
};

/// Anything that can answer the three recipe queries.
///
/// [`MealDbClient`] is the production implementation; views are generic over
/// this trait so tests can drive them with scripted responses.
#[async_trait]
pub trait RecipeSource: Send + Sync {
    async fn list_categories(&self) -> Result<Vec<Category>, FetchError>;

    async fn get_recipe_details(&self, id: RecipeId) -> Result<Option<RecipeDetail>, FetchError>;

    async fn search_recipes(&self, query: &str) -> Result<Vec<RecipeSummary>, FetchError>;
}

#[async_trait]
impl RecipeSource for MealDbClient {
    async fn list_categories(&self) -> Result<Vec<Category>, FetchError> {
        MealDbClient::list_categories(self).await
    }

    async fn get_recipe_details(&self, id: RecipeId) -> Result<Option<RecipeDetail>, FetchError> {
        MealDbClient::get_recipe_details(self, id).await
    }

    async fn search_recipes(&self, query: &str) -> Result<Vec<RecipeSummary>, FetchError> {
        MealDbClient::search_recipes(self, query).await
    }
}
