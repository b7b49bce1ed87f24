//! Attribute macro for the toolsmith tool framework.
//!
//! This crate provides the `#[tool]` attribute that turns a documented
//! function into an agent tool. For each annotated function `foo` it
//! generates a `foo_tool()` constructor returning the built tool, while the
//! function itself stays callable as ordinary Rust.
//!
//! # Usage
//!
//! ```ignore
//! use std::sync::Arc;
//! use toolsmith::{tool, Result, SessionContext};
//!
//! /// Looks up q.
//! #[tool]
//! fn lookup(q: String, ctx: Arc<SessionContext>) -> Result<String> {
//!     Ok(format!("result:{q}"))
//! }
//!
//! let tool = lookup_tool()?;
//! ```

use proc_macro::TokenStream;
use syn::{ItemFn, parse_macro_input};

mod codegen;
mod parse;

/// Register a function as an agent tool.
///
/// The annotated function must take exactly two parameters, the input
/// string and the shared session context, and it must carry a doc comment;
/// the doc comment becomes the tool's docstring and is embedded in the
/// prompt-facing description. Whether the function is `async` decides the
/// tool's dispatch mode once, at expansion time. Async bodies must produce
/// `Send` futures.
///
/// # Attributes
///
/// Three call shapes are accepted:
///
/// - `#[tool]` - the tool is named after the function itself
/// - `#[tool("name")]` - the string literal becomes the tool name; may be
///   combined with the keyword arguments below
/// - `#[tool(return_direct = true)]`, `#[tool(examples("..."))]` -
///   keyword-only form, the tool keeps the function's name
///
/// Any other argument combination is rejected at compile time.
///
/// # Examples
///
/// ```ignore
/// use std::sync::Arc;
/// use toolsmith::{tool, Result, SessionContext};
///
/// /// Searches the web and returns the best hit.
/// #[tool("search", return_direct = true, examples("search(\"rust atomics\")"))]
/// async fn web_search(query: String, ctx: Arc<SessionContext>) -> Result<String> {
///     Ok(format!("hits for {query}"))
/// }
///
/// let tool = web_search_tool()?;
/// assert_eq!(tool.name(), "search");
/// assert!(tool.return_direct());
/// ```
#[proc_macro_attribute]
pub fn tool(args: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(args as parse::ToolArgs);
    let item = parse_macro_input!(item as ItemFn);

    match codegen::expand(&args, &item) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}
