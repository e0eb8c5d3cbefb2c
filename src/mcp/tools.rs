//! Tool registry for MCP tools.
//!
//! Every handler resolves to a well-formed tool response, success or error:
//! client failures, validation failures and a missing credential are all
//! reported as `isError: true` responses rather than propagated, so the
//! transport never sees a fault from a tool call.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Deserialize;
use serde_json::{json, Value};

use crate::client::TuningSearchClient;
use crate::config::{Config, API_KEY_ENV};
use crate::format;
use crate::models::{Language, SafeSearch, SearchRequest, TimeRange};

/// An MCP tool that can be called by the client
#[derive(Clone)]
pub struct Tool {
    /// Tool name (e.g., "search")
    pub name: String,

    /// Human-readable description
    pub description: String,

    /// JSON Schema for input parameters
    pub input_schema: serde_json::Value,

    /// Handler function to execute the tool
    pub handler: Arc<dyn ToolHandler>,
}

impl std::fmt::Debug for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tool")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("input_schema", &self.input_schema)
            .finish()
    }
}

/// Handler for executing a tool
#[async_trait::async_trait]
pub trait ToolHandler: Send + Sync + std::fmt::Debug {
    /// Execute the tool with the given arguments
    async fn execute(&self, args: Value) -> Result<Value, String>;
}

/// Build a successful tool response carrying a text content block.
pub fn text_response(text: impl Into<String>) -> Value {
    json!({
        "content": [{"type": "text", "text": text.into()}],
        "isError": false
    })
}

/// Build an error-flagged tool response carrying a text content block.
pub fn error_response(text: impl Into<String>) -> Value {
    json!({
        "content": [{"type": "text", "text": text.into()}],
        "isError": true
    })
}

/// Registry for all MCP tools
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    tools: HashMap<String, Tool>,
}

impl ToolRegistry {
    /// Create a registry with the `search` and `quota` tools wired to the
    /// given configuration.
    pub fn from_config(config: &Config) -> Self {
        let mut registry = Self {
            tools: HashMap::new(),
        };

        let client = Arc::new(TuningSearchClient::from_config(config));
        let api_key = config.api_key.clone();

        registry.register(Tool {
            name: "search".to_string(),
            description: "Search the web with TuningSearch. Returns result titles, \
                          snippets and links as plain text, plus suggested follow-up \
                          queries when available."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "query": {
                        "type": "string",
                        "description": "Search query string"
                    },
                    "language": {
                        "type": "string",
                        "description": "Result language",
                        "enum": ["en", "zh", "ja", "ko", "fr", "de", "es", "ru", "pt"]
                    },
                    "page": {
                        "type": "integer",
                        "description": "Result page, starting at 1",
                        "minimum": 1
                    },
                    "safe": {
                        "type": "integer",
                        "description": "Safe-search level: 0 off, 1 moderate, 2 strict",
                        "enum": [0, 1, 2]
                    },
                    "time_range": {
                        "type": "string",
                        "description": "Only return results from this time window",
                        "enum": ["day", "week", "month", "year"]
                    }
                },
                "required": ["query"]
            }),
            handler: Arc::new(SearchToolHandler {
                client: client.clone(),
                api_key: api_key.clone(),
            }),
        });

        registry.register(Tool {
            name: "quota".to_string(),
            description: "Show the TuningSearch account quota: plan, used and \
                          remaining queries, usage percentage and QPS limit."
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {}
            }),
            handler: Arc::new(QuotaToolHandler { client, api_key }),
        });

        registry
    }

    /// Register a tool
    pub fn register(&mut self, tool: Tool) {
        self.tools.insert(tool.name.clone(), tool);
    }

    /// Get all tools
    pub fn all(&self) -> Vec<&Tool> {
        self.tools.values().collect()
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<&Tool> {
        self.tools.get(name)
    }

    /// Execute a tool by name
    pub async fn execute(&self, name: &str, args: Value) -> Result<Value, String> {
        let tool = self
            .get(name)
            .ok_or_else(|| format!("Tool '{}' not found", name))?;

        tool.handler.execute(args).await
    }
}

/// Typed view of the `search` tool arguments.
#[derive(Debug, Deserialize)]
struct SearchToolParams {
    query: String,
    language: Option<Language>,
    page: Option<u32>,
    safe: Option<u8>,
    time_range: Option<TimeRange>,
}

impl SearchToolParams {
    /// Turn loosely-typed tool arguments into a validated request.
    fn into_request(self) -> Result<SearchRequest, crate::models::ValidationError> {
        let mut request = SearchRequest::new(self.query);
        request.language = self.language;
        request.page = self.page;
        request.safe = self.safe.map(SafeSearch::from_level).transpose()?;
        request.time_range = self.time_range;
        request.validate()?;
        Ok(request)
    }
}

fn missing_key_response() -> Value {
    error_response(format!(
        "{} environment variable is not set. Set it to your TuningSearch API key \
         to enable this tool.",
        API_KEY_ENV
    ))
}

/// Handler for the `search` tool
#[derive(Debug)]
pub struct SearchToolHandler {
    pub client: Arc<TuningSearchClient>,
    pub api_key: Option<String>,
}

#[async_trait::async_trait]
impl ToolHandler for SearchToolHandler {
    async fn execute(&self, args: Value) -> Result<Value, String> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Ok(missing_key_response());
        };

        let params: SearchToolParams = match serde_json::from_value(args) {
            Ok(params) => params,
            Err(e) => return Ok(error_response(format!("Invalid search arguments: {}", e))),
        };

        let request = match params.into_request() {
            Ok(request) => request,
            Err(e) => return Ok(error_response(e.to_string())),
        };

        match self.client.search(&request, api_key).await {
            Ok(data) => Ok(text_response(format::format_search_results(&data))),
            Err(e) => {
                tracing::error!("search tool call failed: {}", e);
                Ok(error_response(e.to_string()))
            }
        }
    }
}

/// Handler for the `quota` tool
#[derive(Debug)]
pub struct QuotaToolHandler {
    pub client: Arc<TuningSearchClient>,
    pub api_key: Option<String>,
}

#[async_trait::async_trait]
impl ToolHandler for QuotaToolHandler {
    async fn execute(&self, _args: Value) -> Result<Value, String> {
        let Some(api_key) = self.api_key.as_deref() else {
            return Ok(missing_key_response());
        };

        match self.client.quota(api_key).await {
            Ok(info) => Ok(text_response(format::format_quota(&info))),
            Err(e) => {
                tracing::error!("quota tool call failed: {}", e);
                Ok(error_response(e.to_string()))
            }
        }
    }
}
