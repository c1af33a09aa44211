//! # CloudWatch Logs MCP Server
//!
//! Exposes Amazon CloudWatch Logs as Model Context Protocol tools:
//! - Log groups, log streams and log events (create, describe, delete, put, get, filter)
//! - Logs Insights queries (start, stop, results, describe)
//! - Read-only mode that hides and refuses every mutating tool
//! - Uniform error translation with selectable propagation (`respond` / `raise`)
//!
//! ## Architecture
//!
//! ```text
//!   stdin ─→ mcp::server ─→ mcp::router ─→ tools::Dispatcher
//!                                              │ lookup + validate
//!                                              ▼
//!                                     operations::call::<O>
//!                                              │ validate → send → validate
//!                                              ▼
//!                                       logs::LogsClient ─→ CloudWatch Logs
//! ```
//!
//! Request and response contracts live in [`schema`] as typed serde structs
//! plus static shape descriptors checked by [`validation`].

// Enforce strict safety at compile time
#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

pub mod logs;
pub mod mcp;
pub mod operations;
pub mod schema;
pub mod tools;
pub mod types;
pub mod validation;

// Internal utilities
pub mod observability;

pub use types::{Config, Error, Result};
