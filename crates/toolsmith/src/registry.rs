//! Tool registry for managing registered tools

use crate::tool::{BoundTool, FnTool};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use toolsmith_core::SessionContext;
use tracing::debug;

/// Registry for registered tools
///
/// Stores one shared [`FnTool`] per name. Registration is last write wins;
/// enforcing uniqueness beyond that is the caller's concern.
pub struct ToolRegistry {
    tools: RwLock<HashMap<String, Arc<FnTool>>>,
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self {
            tools: RwLock::new(HashMap::new()),
        }
    }
}

impl ToolRegistry {
    /// Create a new tool registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool
    pub fn register(&self, tool: Arc<FnTool>) {
        debug!(tool_name = %tool.name(), kind = %tool.kind(), "Tool registered");
        let mut tools = self.tools.write().unwrap();
        tools.insert(tool.name().to_string(), tool);
    }

    /// Get a tool by name
    pub fn get(&self, name: &str) -> Option<Arc<FnTool>> {
        let tools = self.tools.read().unwrap();
        tools.get(name).cloned()
    }

    /// List all registered tools
    pub fn list_tools(&self) -> Vec<Arc<FnTool>> {
        let tools = self.tools.read().unwrap();
        tools.values().cloned().collect()
    }

    /// Registered tool names, sorted
    pub fn names(&self) -> Vec<String> {
        let tools = self.tools.read().unwrap();
        let mut names: Vec<String> = tools.keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Prompt-facing description lines, sorted by name
    ///
    /// One line per tool, ready to embed in the system prompt.
    pub fn descriptions(&self) -> Vec<String> {
        let tools = self.tools.read().unwrap();
        let mut lines: Vec<String> = tools
            .values()
            .map(|tool| tool.description().to_string())
            .collect();
        lines.sort_unstable();
        lines
    }

    /// Bind every registered tool to one session context
    ///
    /// Session setup in one call: the returned bindings all share `ctx`.
    pub fn bind_all(&self, ctx: Arc<SessionContext>) -> Vec<BoundTool> {
        let tools = self.tools.read().unwrap();
        tools
            .values()
            .map(|tool| Arc::clone(tool).bind(Arc::clone(&ctx)))
            .collect()
    }

    /// Get the number of registered tools
    pub fn len(&self) -> usize {
        let tools = self.tools.read().unwrap();
        tools.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        let tools = self.tools.read().unwrap();
        tools.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ToolBuilder;

    fn sample(name: &str, docstring: &str) -> Arc<FnTool> {
        Arc::new(
            ToolBuilder::new(name)
                .docstring(docstring)
                .sync_fn(|input, _ctx| Ok(input))
                .build()
                .unwrap(),
        )
    }

    #[test]
    fn register_and_get() {
        let registry = ToolRegistry::new();
        assert!(registry.is_empty());

        registry.register(sample("lookup", "Looks things up."));
        assert_eq!(registry.len(), 1);
        assert!(registry.get("lookup").is_some());
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn duplicate_names_replace() {
        let registry = ToolRegistry::new();
        registry.register(sample("lookup", "First version."));
        registry.register(sample("lookup", "Second version."));

        assert_eq!(registry.len(), 1);
        let tool = registry.get("lookup").unwrap();
        assert!(tool.description().contains("Second version."));
    }

    #[test]
    fn names_and_descriptions_are_sorted() {
        let registry = ToolRegistry::new();
        registry.register(sample("zeta", "Does z."));
        registry.register(sample("alpha", "Does a."));

        assert_eq!(registry.names(), vec!["alpha", "zeta"]);
        assert_eq!(
            registry.descriptions(),
            vec![
                "alpha(input: String): Does a.",
                "zeta(input: String): Does z.",
            ]
        );
    }

    #[test]
    fn list_tools_returns_all() {
        let registry = ToolRegistry::new();
        registry.register(sample("a", "Does a."));
        registry.register(sample("b", "Does b."));
        assert_eq!(registry.list_tools().len(), 2);
    }

    #[tokio::test]
    async fn bind_all_produces_invocable_bindings() {
        let registry = ToolRegistry::new();
        registry.register(sample("echo", "Echoes the input."));
        registry.register(sample("shout", "Echoes the input, loudly."));

        let ctx = Arc::new(SessionContext::current().unwrap());
        let bound = registry.bind_all(ctx);
        assert_eq!(bound.len(), 2);
        for tool in &bound {
            assert_eq!(tool.invoke("x").await.unwrap(), "x");
        }
    }
}
