//! Basic usage example for toolsmith
//!
//! This example demonstrates:
//! - Registering sync and async tools with the #[tool] attribute
//! - Listing prompt-ready tool descriptions
//! - Binding every tool to a session context
//! - Invoking tools and hitting the blocking guard
//!
//! Run with: cargo run --example basic_usage

use std::sync::Arc;
use toolsmith::{tool, SessionContext, ToolRegistry};

/// Looks up q.
#[tool]
fn lookup(q: String, _ctx: Arc<SessionContext>) -> toolsmith::Result<String> {
    Ok(format!("result:{q}"))
}

/// Searches the web and returns the best hit.
#[tool("search", return_direct = true, examples("search(\"rust atomics\")"))]
async fn web_search(query: String, ctx: Arc<SessionContext>) -> toolsmith::Result<String> {
    let session = ctx.session_id().unwrap_or_else(|| "anonymous".to_string());
    Ok(format!("best hit for '{query}' (session {session})"))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    let config = toolsmith_utils::Config::default();
    toolsmith_utils::init_tracing_with(&config.log_filter);

    println!("=== Toolsmith Basic Usage Example ===\n");

    // 1. Register tools
    println!("1. Registering tools...");
    let registry = ToolRegistry::new();
    registry.register(Arc::new(lookup_tool()?));
    registry.register(Arc::new(web_search_tool()?));
    println!("   ✓ {} tool(s) registered\n", registry.len());

    // 2. List prompt-ready descriptions
    println!("2. Tool descriptions for the system prompt:");
    for line in registry.descriptions() {
        println!("   - {line}");
    }
    println!();

    // 3. Bind every tool to a session
    println!("3. Binding tools to a session...");
    let ctx = Arc::new(SessionContext::current()?.with_session_id("session-42"));
    let bound = registry.bind_all(Arc::clone(&ctx));
    println!("   ✓ {} binding(s) created\n", bound.len());

    // 4. Invoke the sync tool
    println!("4. Invoking lookup...");
    let lookup = bound
        .iter()
        .find(|t| t.name() == "lookup")
        .ok_or("lookup not bound")?;
    let output = lookup.invoke("rust").await?;
    println!("   ✓ {output}\n");

    // 5. Invoke the async tool
    println!("5. Invoking search...");
    let search = bound
        .iter()
        .find(|t| t.name() == "search")
        .ok_or("search not bound")?;
    let output = search.invoke("rust atomics").await?;
    println!("   ✓ {output}");
    println!("   return_direct: {}\n", search.return_direct());

    // 6. The blocking guard refuses async tools
    println!("6. Calling blocking_invoke on the async tool...");
    match search.blocking_invoke("rust atomics") {
        Ok(_) => println!("   ✗ unexpectedly succeeded"),
        Err(e) => println!("   ✓ refused as expected: {e}"),
    }
    println!();

    println!("=== Example completed successfully ===");
    Ok(())
}
