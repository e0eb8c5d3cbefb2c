//! Prompt registry for the static guidance templates.
//!
//! Both prompts are parameterless; the message text is fixed apart from the
//! current date, which is computed once per invocation.

use std::collections::HashMap;

use chrono::Local;

/// Name of the search guidance prompt.
pub const SEARCH_WEB: &str = "search-web";

/// Name of the result-analysis guidance prompt.
pub const ANALYZE_SEARCH_RESULTS: &str = "analyze-search-results";

/// A named, parameterless prompt template
#[derive(Clone)]
pub struct PromptTemplate {
    /// Prompt name as exposed to the MCP host
    pub name: &'static str,

    /// Human-readable description
    pub description: &'static str,

    /// Render the instructional message
    pub render: fn() -> String,
}

impl std::fmt::Debug for PromptTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PromptTemplate")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish()
    }
}

/// Registry for all MCP prompts
#[derive(Debug, Clone)]
pub struct PromptRegistry {
    prompts: HashMap<&'static str, PromptTemplate>,
}

impl PromptRegistry {
    /// Create a registry with both guidance prompts
    pub fn new() -> Self {
        let mut registry = Self {
            prompts: HashMap::new(),
        };

        registry.register(PromptTemplate {
            name: SEARCH_WEB,
            description: "Guidance for searching the web with the search tool",
            render: render_search_web,
        });

        registry.register(PromptTemplate {
            name: ANALYZE_SEARCH_RESULTS,
            description: "Guidance for analyzing and citing web search results",
            render: render_analyze_search_results,
        });

        registry
    }

    /// Register a prompt template
    pub fn register(&mut self, prompt: PromptTemplate) {
        self.prompts.insert(prompt.name, prompt);
    }

    /// Get all prompt templates
    pub fn all(&self) -> Vec<&PromptTemplate> {
        self.prompts.values().collect()
    }

    /// Get a prompt template by name
    pub fn get(&self, name: &str) -> Option<&PromptTemplate> {
        self.prompts.get(name)
    }

    /// Render a prompt by name
    pub fn render(&self, name: &str) -> Option<String> {
        self.get(name).map(|prompt| (prompt.render)())
    }
}

impl Default for PromptRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn render_search_web() -> String {
    format!(
        "You can search the web with the `search` tool. Today's date is {}.\n\
         \n\
         Usage notes:\n\
         - Pass a focused query in `query`; quote phrases that must match exactly.\n\
         - Set `time_range` (day, week, month, year) when the user asks about \
         recent events.\n\
         - Set `language` when the user wants results in a specific language.\n\
         - Request further pages with `page` only when the first page is not \
         enough.\n\
         - Check remaining capacity with the `quota` tool if searches start \
         failing.",
        today()
    )
}

fn render_analyze_search_results() -> String {
    format!(
        "You are analyzing web search results returned by the `search` tool. \
         Today's date is {}.\n\
         \n\
         For each claim you make:\n\
         - Cite the supporting result by its title and link.\n\
         - Prefer recent results when dates matter, and say when a source may be \
         outdated.\n\
         - Note disagreements between sources instead of silently picking one.\n\
         - Use the suggested queries line, when present, to refine follow-up \
         searches.",
        today()
    )
}

fn today() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}
