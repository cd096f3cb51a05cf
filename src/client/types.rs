//! Type definitions for the MealDB API.
//!
//! This module contains the records decoded from MealDB responses and the
//! normalized shapes handed to callers.
//!
//! ## Key Types
//!
//! - [`Category`] - One entry of the category listing
//! - [`Meal`] - The raw meal record as MealDB returns it, indexed ingredient fields included
//! - [`RecipeSummary`] - The subset of a meal shown in a result list
//! - [`RecipeDetail`] - A full recipe with its ordered [`Ingredient`] list
//! - [`RecipeId`] - A lookup identifier given either as text or as a number
//!
//! ## API Compatibility
//!
//! MealDB does not return ingredients as a list. Every meal carries twenty
//! fixed field pairs, `strIngredient1..20` and `strMeasure1..20`, most of them
//! empty or `null`. [`Meal::ingredients`] folds those pairs into a list.

use std::collections::HashMap;
use std::fmt;

use rmcp::schemars;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Number of indexed ingredient/measure field pairs in a MealDB meal record.
///
/// Names and measures are passed through as MealDB sends them; whitespace only
/// matters for deciding whether a name is blank.
pub const MAX_INGREDIENTS: usize = 20;

const INGREDIENT_KEY_PREFIX: &str = "strIngredient";
const MEASURE_KEY_PREFIX: &str = "strMeasure";

/// Envelope of `categories.php`.
#[derive(Debug, Deserialize)]
pub(crate) struct CategoriesResponse {
    #[serde(default)]
    pub categories: Option<Vec<Category>>,
}

/// Envelope of `search.php`.
#[derive(Debug, Deserialize)]
pub(crate) struct MealsResponse {
    #[serde(default)]
    pub meals: Option<Vec<Meal>>,
}

/// Envelope of `lookup.php`. Only the first meal is used, so the rest are
/// left undecoded.
#[derive(Debug, Deserialize)]
pub(crate) struct LookupResponse {
    #[serde(default)]
    pub meals: Option<Vec<Value>>,
}

/// A recipe category.
///
/// Only the name is guaranteed by the listing; the other fields are kept when
/// MealDB sends them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(rename(deserialize = "idCategory"), default)]
    pub id: Option<String>,
    #[serde(rename(deserialize = "strCategory"))]
    pub name: String,
    #[serde(rename(deserialize = "strCategoryThumb"), default)]
    pub thumbnail_url: Option<String>,
    #[serde(rename(deserialize = "strCategoryDescription"), default)]
    pub description: Option<String>,
}

/// A meal record exactly as MealDB returns it.
///
/// Fields MealDB leaves `null` decode to `None`. Keys without a named field
/// here, the indexed `strIngredientN` / `strMeasureN` pairs among them, are
/// kept in `fields`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Meal {
    #[serde(rename = "idMeal")]
    pub id: String,
    #[serde(rename = "strMeal")]
    pub title: String,
    #[serde(rename = "strCategory", default)]
    pub category: Option<String>,
    #[serde(rename = "strArea", default)]
    pub area: Option<String>,
    #[serde(rename = "strMealThumb", default)]
    pub thumbnail_url: Option<String>,
    #[serde(rename = "strInstructions", default)]
    pub instructions: Option<String>,
    #[serde(rename = "strYoutube", default)]
    pub video_url: Option<String>,
    #[serde(rename = "strTags", default)]
    pub tags: Option<String>,
    #[serde(rename = "strSource", default)]
    pub source_url: Option<String>,
    #[serde(flatten)]
    pub fields: HashMap<String, Value>,
}

impl Meal {
    /// Collects the indexed ingredient pairs in index order.
    ///
    /// A pair is kept only when its ingredient name is a non-blank string. A
    /// missing measure becomes an empty string.
    pub fn ingredients(&self) -> Vec<Ingredient> {
        (1..=MAX_INGREDIENTS)
            .filter_map(|index| {
                let name = self.indexed_text(INGREDIENT_KEY_PREFIX, index)?;
                if name.trim().is_empty() {
                    return None;
                }
                let measure = self
                    .indexed_text(MEASURE_KEY_PREFIX, index)
                    .unwrap_or_default();
                Some(Ingredient {
                    name: name.to_string(),
                    measure: measure.to_string(),
                })
            })
            .collect()
    }

    fn indexed_text(&self, prefix: &str, index: usize) -> Option<&str> {
        self.fields
            .get(&format!("{}{}", prefix, index))
            .and_then(Value::as_str)
    }

    pub fn summary(&self) -> RecipeSummary {
        RecipeSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            thumbnail_url: self.thumbnail_url.clone().unwrap_or_default(),
        }
    }
}

/// Minimal recipe record for list views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSummary {
    pub id: String,
    pub title: String,
    pub thumbnail_url: String,
}

impl From<Meal> for RecipeSummary {
    fn from(meal: Meal) -> Self {
        meal.summary()
    }
}

/// One line of a recipe's ingredient list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    /// Free-text quantity such as `"1 tsp"`; empty when MealDB gives none.
    pub measure: String,
}

/// A complete recipe ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeDetail {
    pub id: String,
    pub title: String,
    pub category: String,
    pub area: String,
    pub thumbnail_url: String,
    pub instructions: String,
    pub video_url: Option<String>,
    /// Ordered by the upstream field index; the order is the display order.
    pub ingredients: Vec<Ingredient>,
    pub tags: Vec<String>,
    pub source_url: Option<String>,
}

impl From<Meal> for RecipeDetail {
    fn from(meal: Meal) -> Self {
        let ingredients = meal.ingredients();
        let tags = meal
            .tags
            .as_deref()
            .map(|tags| {
                tags.split(',')
                    .map(str::trim)
                    .filter(|tag| !tag.is_empty())
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        Self {
            id: meal.id,
            title: meal.title,
            category: meal.category.unwrap_or_default(),
            area: meal.area.unwrap_or_default(),
            thumbnail_url: meal.thumbnail_url.unwrap_or_default(),
            instructions: meal.instructions.unwrap_or_default(),
            video_url: non_blank(meal.video_url),
            ingredients,
            tags,
            source_url: non_blank(meal.source_url),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Identifier passed to the lookup endpoint.
///
/// MealDB ids are numeric strings (`"52772"`); callers may hold them either
/// way, so both forms deserialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(untagged)]
pub enum RecipeId {
    Number(u64),
    Text(String),
}

impl RecipeId {
    pub fn is_blank(&self) -> bool {
        match self {
            RecipeId::Number(_) => false,
            RecipeId::Text(text) => text.trim().is_empty(),
        }
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecipeId::Number(n) => write!(f, "{}", n),
            RecipeId::Text(text) => f.write_str(text),
        }
    }
}

impl From<&str> for RecipeId {
    fn from(value: &str) -> Self {
        RecipeId::Text(value.to_string())
    }
}

impl From<String> for RecipeId {
    fn from(value: String) -> Self {
        RecipeId::Text(value)
    }
}

impl From<u64> for RecipeId {
    fn from(value: u64) -> Self {
        RecipeId::Number(value)
    }
}
