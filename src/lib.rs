//! # TuningSearch MCP
//!
//! A Model Context Protocol (MCP) server exposing the TuningSearch web-search
//! API as callable tools and guidance prompts for LLM hosts.
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`models`]: Core data structures (SearchRequest, QuotaInfo, etc.)
//! - [`client`]: Authenticated HTTP client for the TuningSearch REST API
//! - [`format`]: Plain-text rendering of API responses
//! - [`mcp`]: MCP tool/prompt registries and server
//! - [`config`]: Configuration management

pub mod client;
pub mod config;
pub mod format;
pub mod mcp;
pub mod models;

// Re-export commonly used types
pub use client::{ClientError, TuningSearchClient};
pub use config::Config;
pub use models::{QuotaInfo, SearchData, SearchRequest};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
