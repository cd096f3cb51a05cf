#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use mcp_mealdb::client::{
    Category, FetchError, MealDbClient, RecipeDetail, RecipeId, RecipeSource, RecipeSummary,
};
use serde_json::{json, Value};

/// Base URL nothing listens on; requests fail with a connection error.
pub const UNREACHABLE_BASE_URL: &str = "http://127.0.0.1:1";

pub struct MockApi {
    pub server: mockito::ServerGuard,
    pub client: MealDbClient,
}

impl MockApi {
    pub async fn start() -> Self {
        let server = mockito::Server::new_async().await;
        let client = MealDbClient::new(server.url());
        Self { server, client }
    }

    /// Mocks `GET {path}?{param}={value}` answering 200 with the given JSON body.
    pub async fn mock_json(
        &mut self,
        path: &str,
        param: Option<(&str, &str)>,
        body: &Value,
    ) -> mockito::Mock {
        self.mock_raw(path, param, 200, &body.to_string()).await
    }

    pub async fn mock_raw(
        &mut self,
        path: &str,
        param: Option<(&str, &str)>,
        status: usize,
        body: &str,
    ) -> mockito::Mock {
        let query = match param {
            Some((name, value)) => mockito::Matcher::UrlEncoded(name.into(), value.into()),
            None => mockito::Matcher::Any,
        };
        self.server
            .mock("GET", path)
            .match_query(query)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }
}

pub fn category_json(id: &str, name: &str) -> Value {
    json!({
        "idCategory": id,
        "strCategory": name,
        "strCategoryThumb": format!("https://www.themealdb.com/images/category/{}.png", name.to_lowercase()),
        "strCategoryDescription": format!("{} dishes", name)
    })
}

/// A meal record shaped like MealDB's, with all twenty ingredient slots present.
pub fn meal_json(id: &str, title: &str, ingredients: &[(&str, &str)]) -> Value {
    let mut meal = json!({
        "idMeal": id,
        "strMeal": title,
        "strDrinkAlternate": null,
        "strCategory": "Vegetarian",
        "strArea": "Italian",
        "strInstructions": "Bring a large pot of water to a boil.",
        "strMealThumb": format!("https://www.themealdb.com/images/media/meals/{}.jpg", id),
        "strTags": "Pasta,Curry",
        "strYoutube": "https://www.youtube.com/watch?v=1IszT_guI08",
        "strSource": null,
        "strImageSource": null,
        "strCreativeCommonsConfirmed": null,
        "dateModified": null
    });

    let fields = meal.as_object_mut().expect("meal fixture is an object");
    for index in 1..=20 {
        let (name, measure) = ingredients
            .get(index - 1)
            .map(|(n, m)| (json!(n), json!(m)))
            .unwrap_or((json!(""), json!(" ")));
        fields.insert(format!("strIngredient{}", index), name);
        fields.insert(format!("strMeasure{}", index), measure);
    }
    meal
}

pub fn summary(id: &str, title: &str) -> RecipeSummary {
    RecipeSummary {
        id: id.to_string(),
        title: title.to_string(),
        thumbnail_url: format!("https://www.themealdb.com/images/media/meals/{}.jpg", id),
    }
}

pub fn init_test_logging() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

struct ScriptedSearch {
    delay: Duration,
    result: Result<Vec<RecipeSummary>, FetchError>,
}

/// A [`RecipeSource`] answering from a script, with per-query response delays.
#[derive(Default)]
pub struct ScriptedSource {
    searches: HashMap<String, ScriptedSearch>,
    details: HashMap<String, Result<Option<RecipeDetail>, FetchError>>,
    issued: Mutex<Vec<String>>,
    completed: Mutex<Vec<String>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(
        mut self,
        query: &str,
        delay: Duration,
        result: Result<Vec<RecipeSummary>, FetchError>,
    ) -> Self {
        self.searches
            .insert(query.to_string(), ScriptedSearch { delay, result });
        self
    }

    pub fn with_details(mut self, id: &str, result: Result<Option<RecipeDetail>, FetchError>) -> Self {
        self.details.insert(id.to_string(), result);
        self
    }

    /// Calls in the order they were issued.
    pub fn issued(&self) -> Vec<String> {
        self.issued.lock().unwrap().clone()
    }

    /// Calls in the order their responses resolved.
    pub fn completed(&self) -> Vec<String> {
        self.completed.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecipeSource for ScriptedSource {
    async fn list_categories(&self) -> Result<Vec<Category>, FetchError> {
        self.issued.lock().unwrap().push("categories".to_string());
        Ok(Vec::new())
    }

    async fn get_recipe_details(&self, id: RecipeId) -> Result<Option<RecipeDetail>, FetchError> {
        let id = id.to_string();
        self.issued.lock().unwrap().push(id.clone());
        let result = self.details.get(&id).cloned().unwrap_or(Ok(None));
        self.completed.lock().unwrap().push(id);
        result
    }

    async fn search_recipes(&self, query: &str) -> Result<Vec<RecipeSummary>, FetchError> {
        self.issued.lock().unwrap().push(query.to_string());
        let (delay, result) = match self.searches.get(query) {
            Some(search) => (search.delay, search.result.clone()),
            None => (Duration::ZERO, Ok(Vec::new())),
        };
        tokio::time::sleep(delay).await;
        self.completed.lock().unwrap().push(query.to_string());
        result
    }
}
