//! Tool infrastructure: registry, read-only gating, dispatch.

pub mod access;
pub mod catalog;
pub mod dispatch;

pub use access::{AccessMode, ToolListing, ToolSet};
pub use catalog::{lookup, registry, OperationType, ToolDefinition, ToolName};
pub use dispatch::{Dispatcher, ToolContent, ToolResponse};
