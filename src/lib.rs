//! # MealDB MCP Library
//!
//! This library provides a client for TheMealDB, a public recipe database, and
//! exposes it through the Model Context Protocol (MCP). It consists of three
//! components:
//!
//! ## Client Module
//!
//! The [`client`] module provides a read-only HTTP client for the MealDB API:
//! listing categories, searching recipes by name and looking up one recipe
//! with its ingredient list.
//!
//! ## View Module
//!
//! The [`view`] module holds the per-screen request state
//! (`Idle`, `Pending`, `Succeeded`, `Failed`) that a UI drives through the
//! client.
//!
//! ## Server Module
//!
//! The [`server`] module implements an MCP server that exposes the client
//! operations as tools AI assistants can call.
//!
//! ## Quick Start
//!
//! ```no_run
//! use mcp_mealdb::{MealDbClient, MealDbMcpServer};
//!
//! // Use the client directly
//! let client = MealDbClient::default();
//!
//! // Or create an MCP server
//! let server = MealDbMcpServer::new("https://www.themealdb.com/api/json/v1/1".to_string());
//! ```

pub mod client;
pub mod server;
pub mod view;

pub use client::{FetchError, MealDbClient};
pub use server::MealDbMcpServer;
