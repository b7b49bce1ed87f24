//! Tests for the `#[tool]` attribute forms
//!
//! Covers the bare form, the named form, and the keyword-only form, plus the
//! metadata each one produces.

use std::sync::Arc;
use toolsmith::{tool, Result, SessionContext, ToolKind};

/// Looks up q.
#[tool]
fn lookup(q: String, _ctx: Arc<SessionContext>) -> Result<String> {
    Ok(format!("result:{q}"))
}

/// Searches the web and returns the best hit.
#[tool("search", return_direct = true, examples("search(\"weather\")"))]
async fn web_search(query: String, _ctx: Arc<SessionContext>) -> Result<String> {
    Ok(format!("hits for {query}"))
}

/// Converts currency amounts.
///
/// Rates are refreshed daily.
#[tool(return_direct = true)]
async fn convert(amount: String, _ctx: Arc<SessionContext>) -> Result<String> {
    Ok(amount)
}

/// Tells the current time.
#[tool(examples("clock(\"\")"))]
fn clock(_input: String, _ctx: Arc<SessionContext>) -> Result<String> {
    Ok("12:00".to_string())
}

#[test]
fn bare_form_uses_the_function_name() {
    let tool = lookup_tool().unwrap();
    assert_eq!(tool.name(), "lookup");
    assert_eq!(tool.kind(), ToolKind::Sync);
    assert!(!tool.return_direct());
    assert!(tool.examples().is_empty());
}

#[test]
fn named_form_uses_the_literal() {
    let tool = web_search_tool().unwrap();
    assert_eq!(tool.name(), "search");
    assert_eq!(tool.kind(), ToolKind::Async);
    assert!(tool.return_direct());
    assert_eq!(tool.examples(), ["search(\"weather\")"]);
}

#[test]
fn keyword_form_keeps_the_function_name() {
    let tool = convert_tool().unwrap();
    assert_eq!(tool.name(), "convert");
    assert!(tool.return_direct());

    let tool = clock_tool().unwrap();
    assert_eq!(tool.name(), "clock");
    assert!(!tool.return_direct());
    assert_eq!(tool.examples(), ["clock(\"\")"]);
}

#[test]
fn description_carries_signature_and_docstring() {
    let tool = lookup_tool().unwrap();
    assert!(tool.description().starts_with("lookup(q: String): Looks up q."));
    assert_eq!(tool.docstring(), "Looks up q.");
}

#[test]
fn description_never_mentions_the_context_parameter() {
    for tool in [
        lookup_tool().unwrap(),
        web_search_tool().unwrap(),
        clock_tool().unwrap(),
    ] {
        assert!(!tool.description().contains("SessionContext"));
        assert!(!tool.description().contains("ctx"));
    }
}

#[test]
fn multi_line_docstring_is_preserved() {
    let tool = convert_tool().unwrap();
    assert!(
        tool.description()
            .starts_with("convert(amount: String): Converts currency amounts.")
    );
    assert!(tool.docstring().contains("Rates are refreshed daily."));
}

#[test]
fn annotated_function_stays_callable() {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let ctx = Arc::new(SessionContext::new(rt.handle().clone()));
    assert_eq!(lookup("x".to_string(), ctx).unwrap(), "result:x");
}
