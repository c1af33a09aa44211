//! Read-only gating of the tool registry.
//!
//! The filter runs once at startup and produces two immutable views: the
//! advertised tool list and the callable map. In read-only mode WRITE tools
//! appear in neither, so they are indistinguishable from unknown names.

use super::catalog::{registry, ToolDefinition};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

/// Global access switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccessMode {
    ReadOnly,
    #[default]
    ReadWrite,
}

impl AccessMode {
    pub fn from_read_only(read_only: bool) -> Self {
        if read_only {
            AccessMode::ReadOnly
        } else {
            AccessMode::ReadWrite
        }
    }

    /// Check if a tool may be listed and called in this mode.
    pub fn allows(self, tool: &ToolDefinition) -> bool {
        match self {
            AccessMode::ReadWrite => true,
            AccessMode::ReadOnly => !tool.is_write(),
        }
    }
}

/// One entry of the `tools/list` result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolListing {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Value,
}

/// Mode-filtered views over the registry.
#[derive(Debug)]
pub struct ToolSet {
    mode: AccessMode,
    listing: Vec<ToolListing>,
    callable: HashMap<&'static str, &'static ToolDefinition>,
}

impl ToolSet {
    pub fn new(mode: AccessMode) -> Self {
        let allowed: Vec<&'static ToolDefinition> =
            registry().iter().filter(|tool| mode.allows(tool)).collect();

        let listing = allowed
            .iter()
            .map(|tool| ToolListing {
                name: tool.name.as_str(),
                description: tool.description,
                input_schema: tool.input_schema.clone(),
            })
            .collect();
        let callable = allowed
            .into_iter()
            .map(|tool| (tool.name.as_str(), tool))
            .collect();

        Self {
            mode,
            listing,
            callable,
        }
    }

    pub fn mode(&self) -> AccessMode {
        self.mode
    }

    /// Advertised tools, in registry order.
    pub fn listing(&self) -> &[ToolListing] {
        &self.listing
    }

    /// Callable tool by wire name.
    pub fn get(&self, name: &str) -> Option<&'static ToolDefinition> {
        self.callable.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.listing.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listing.is_empty()
    }
}
