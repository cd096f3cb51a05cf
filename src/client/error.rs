//! Error type returned by every MealDB client operation.

use std::fmt;

use thiserror::Error;

/// The client operation a [`FetchError`] originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    ListCategories,
    RecipeDetails,
    SearchRecipes,
}

impl Operation {
    /// User-facing message shown when this operation fails.
    pub fn message(self) -> &'static str {
        match self {
            Operation::ListCategories => "Could not load recipe categories.",
            Operation::RecipeDetails => "Could not load recipe details.",
            Operation::SearchRecipes => "Error searching recipes. Please try again.",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::ListCategories => "list_categories",
            Operation::RecipeDetails => "get_recipe_details",
            Operation::SearchRecipes => "search_recipes",
        };
        f.write_str(name)
    }
}

/// # Fetch Error
///
/// The single failure kind of the MealDB client. Network errors, non-2xx
/// responses and undecodable bodies all collapse into it; the underlying
/// cause is logged where it is caught and is not carried here.
///
/// `Display` yields the fixed, user-facing message of the failed operation,
/// suitable for showing verbatim in an alert or banner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", .operation.message())]
pub struct FetchError {
    operation: Operation,
    subject: Option<String>,
}

impl FetchError {
    pub fn list_categories() -> Self {
        Self {
            operation: Operation::ListCategories,
            subject: None,
        }
    }

    pub fn recipe_details(id: impl Into<String>) -> Self {
        Self {
            operation: Operation::RecipeDetails,
            subject: Some(id.into()),
        }
    }

    pub fn search_recipes(query: impl Into<String>) -> Self {
        Self {
            operation: Operation::SearchRecipes,
            subject: Some(query.into()),
        }
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// The recipe identifier or search query the failed call was made with.
    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    pub fn message(&self) -> &'static str {
        self.operation.message()
    }
}
