//! MCP server implementation using pmcp (Pragmatic AI's rust-mcp-sdk).
//!
//! Adapts the tool and prompt registries onto pmcp's handler traits and runs
//! the JSON-RPC loop over stdio.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use pmcp::types::{GetPromptResult, MessageContent, PromptMessage, Role};
use pmcp::{Error, RequestHandlerExtra, Server, ServerCapabilities, ToolHandler, ToolInfo};
use serde_json::Value;

use crate::config::Config;
use crate::mcp::prompts::PromptRegistry;
use crate::mcp::tools::ToolRegistry;

/// The MCP server for TuningSearch
///
/// Exposes the `search` and `quota` tools plus the two guidance prompts over
/// a stdio transport.
#[derive(Debug, Clone)]
pub struct McpServer {
    tools: ToolRegistry,
    prompts: PromptRegistry,
}

impl McpServer {
    /// Create a new MCP server from the application configuration
    pub fn new(config: &Config) -> Self {
        Self {
            tools: ToolRegistry::from_config(config),
            prompts: PromptRegistry::new(),
        }
    }

    /// Get the tool registry
    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    /// Get the prompt registry
    pub fn prompts(&self) -> &PromptRegistry {
        &self.prompts
    }

    /// Build the pmcp server with all tool and prompt handlers attached
    pub fn build(&self) -> Result<Server, Error> {
        let mut builder = Server::builder()
            .name("tuningsearch-mcp")
            .version(env!("CARGO_PKG_VERSION"))
            .capabilities(ServerCapabilities::default());

        for tool in self.tools.all() {
            let tool_handler = ToolWrapper {
                name: tool.name.clone(),
                description: Some(tool.description.clone()),
                input_schema: tool.input_schema.clone(),
                handler: tool.handler.clone(),
            };
            builder = builder.tool(tool_handler.name.clone(), tool_handler);
        }

        for prompt in self.prompts.all() {
            let prompt_handler = PromptWrapper {
                description: prompt.description.to_string(),
                render: prompt.render,
            };
            builder = builder.prompt(prompt.name.to_string(), prompt_handler);
        }

        builder.build()
    }

    /// Run the server in stdio mode (for Claude Desktop and other MCP clients)
    pub async fn run(&self) -> Result<(), Error> {
        tracing::info!("Starting MCP server in stdio mode");

        let server = self.build()?;

        tracing::info!("MCP server initialized");

        server.run_stdio().await
    }
}

/// Wrapper for adapting our Tool to pmcp's ToolHandler
#[derive(Clone)]
struct ToolWrapper {
    name: String,
    description: Option<String>,
    input_schema: Value,
    handler: Arc<dyn crate::mcp::tools::ToolHandler>,
}

#[async_trait]
impl ToolHandler for ToolWrapper {
    async fn handle(&self, args: Value, _extra: RequestHandlerExtra) -> Result<Value, Error> {
        self.handler
            .execute(args)
            .await
            .map_err(|e| Error::internal(&e))
    }

    fn metadata(&self) -> Option<ToolInfo> {
        Some(ToolInfo::new(
            self.name.clone(),
            self.description.clone(),
            self.input_schema.clone(),
        ))
    }
}

/// Wrapper for adapting our PromptTemplate to pmcp's PromptHandler
#[derive(Clone)]
struct PromptWrapper {
    description: String,
    render: fn() -> String,
}

#[async_trait]
impl pmcp::PromptHandler for PromptWrapper {
    async fn handle(
        &self,
        _args: HashMap<String, String>,
        _extra: RequestHandlerExtra,
    ) -> Result<GetPromptResult, Error> {
        Ok(GetPromptResult::new(
            vec![PromptMessage {
                role: Role::User,
                content: MessageContent::Text {
                    text: (self.render)(),
                },
            }],
            Some(self.description.clone()),
        ))
    }
}
