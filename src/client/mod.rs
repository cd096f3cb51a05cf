//! # MealDB HTTP Client
//!
//! This module provides a read-only HTTP client for the public MealDB recipe
//! API: listing categories, looking up a recipe by id and searching recipes by
//! name.
//!
//! ## Modules
//!
//! - [`client`] - The HTTP client and its three operations
//! - [`error`] - [`FetchError`], the single failure kind of the client
//! - [`source`] - The [`RecipeSource`] trait views are written against
//! - [`types`] - Response records and the normalized recipe types
//!
//! ## Quick Start
//!
//! ```no_run
//! use mcp_mealdb::client::MealDbClient;
//!
//! # async fn example() -> Result<(), mcp_mealdb::client::FetchError> {
//! let client = MealDbClient::default();
//!
//! let recipes = client.search_recipes("Arrabiata").await?;
//! println!("Found {} recipes", recipes.len());
//!
//! if let Some(recipe) = client.get_recipe_details("52771").await? {
//!     for ingredient in &recipe.ingredients {
//!         println!("{} {}", ingredient.measure, ingredient.name);
//!     }
//! }
//! # Ok(())
//! # }
//! ```

#[allow(clippy::module_inception)]
pub mod client;
pub mod error;
pub mod source;
pub mod types;

pub use client::{MealDbClient, BASE_URL_ENV, DEFAULT_BASE_URL};
pub use error::{FetchError, Operation};
pub use source::RecipeSource;
pub use types::*;
