use std::future::Future;
use std::sync::Arc;

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler,
    handler::server::{router::tool::ToolRouter, tool::Parameters},
    model::*,
    schemars,
    service::RequestContext,
    tool, tool_handler, tool_router,
};
use serde_json::json;

use crate::client::{FetchError, MealDbClient, RecipeId};
use crate::view::{DetailsView, SearchView};

// Parameter structs for tools
#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct SearchRecipesParams {
    #[serde(default)]
    pub query: String,
}

#[derive(Debug, serde::Deserialize, schemars::JsonSchema)]
pub struct GetRecipeDetailsParams {
    pub id: RecipeId,
}

fn pretty(value: &serde_json::Value) -> Result<String, McpError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Failed to encode tool result: {}", e), None))
}

fn fetch_error_result(error: &FetchError) -> CallToolResult {
    let error = json!({
        "error": error.to_string(),
        "success": false
    });
    CallToolResult::error(vec![Content::text(error.to_string())])
}

#[derive(Clone)]
pub struct MealDbMcpServer {
    client: Arc<MealDbClient>,
    tool_router: ToolRouter<MealDbMcpServer>,
}

#[tool_router]
impl MealDbMcpServer {
    pub fn new(base_url: String) -> Self {
        Self::with_client(MealDbClient::new(base_url))
    }

    pub fn with_client(client: MealDbClient) -> Self {
        Self {
            client: Arc::new(client),
            tool_router: Self::tool_router(),
        }
    }

    pub fn client(&self) -> &MealDbClient {
        &self.client
    }

    /// Fetches the category listing once to confirm MealDB is reachable.
    pub async fn check_api_access(&self) -> Result<usize, anyhow::Error> {
        tracing::debug!("Testing API access by fetching categories...");
        let categories = self.client.list_categories().await.map_err(|e| {
            tracing::error!("API access test failed: {}", e);
            anyhow::anyhow!("{} ({})", e, self.client.base_url())
        })?;
        tracing::info!("API access test successful - found {} categories", categories.len());
        Ok(categories.len())
    }

    #[tool(description = "List all recipe categories")]
    async fn list_categories(&self) -> Result<CallToolResult, McpError> {
        match self.client.list_categories().await {
            Ok(categories) => {
                let result = json!({
                    "count": categories.len(),
                    "categories": categories
                });
                Ok(CallToolResult::success(vec![Content::text(pretty(&result)?)]))
            }
            Err(e) => Ok(fetch_error_result(&e)),
        }
    }

    #[tool(description = "Search recipes by name")]
    async fn search_recipes(
        &self,
        Parameters(params): Parameters<SearchRecipesParams>,
    ) -> Result<CallToolResult, McpError> {
        let view = SearchView::new(Arc::clone(&self.client));
        view.submit(&params.query).await;

        let state = view.state().await;
        if let Some(error) = state.error() {
            return Ok(fetch_error_result(error));
        }

        let recipes = state.value().cloned().unwrap_or_default();
        let mut result = json!({
            "query": params.query,
            "count": recipes.len(),
            "recipes": recipes
        });
        if recipes.is_empty() && !params.query.trim().is_empty() {
            result["message"] = json!(SearchView::<MealDbClient>::empty_message(&params.query));
        }

        Ok(CallToolResult::success(vec![Content::text(pretty(&result)?)]))
    }

    #[tool(description = "Get full recipe details including ingredients, instructions and video link")]
    async fn get_recipe_details(
        &self,
        Parameters(params): Parameters<GetRecipeDetailsParams>,
    ) -> Result<CallToolResult, McpError> {
        let view = DetailsView::new(Arc::clone(&self.client));
        view.load(params.id).await;

        let state = view.state().await;
        if let Some(error) = state.error() {
            return Ok(fetch_error_result(error));
        }

        let result = match state.value().cloned().flatten() {
            Some(recipe) => json!({
                "found": true,
                "recipe": recipe
            }),
            None => json!({
                "found": false,
                "message": DetailsView::<MealDbClient>::NOT_FOUND_MESSAGE
            }),
        };

        Ok(CallToolResult::success(vec![Content::text(pretty(&result)?)]))
    }
}

#[tool_handler]
impl ServerHandler for MealDbMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .build(),
            server_info: Implementation::from_build_env(),
            instructions: Some("This server provides read-only access to TheMealDB recipe database. Available tools: list recipe categories, search recipes by name, and get full recipe details (ingredients, measures, instructions, category, area and video link).".to_string()),
        }
    }

    async fn initialize(
        &self,
        _request: InitializeRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<InitializeResult, McpError> {
        Ok(self.get_info())
    }
}
