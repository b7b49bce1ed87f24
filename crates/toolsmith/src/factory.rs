//! Runtime tool construction
//!
//! [`ToolBuilder`] is the registration-time entry point behind the `#[tool]`
//! attribute, and a public API in its own right for embedders that build
//! tools from closures. Validation is fail-fast: a tool with no docstring
//! or no callable never comes into existence.

use crate::describe;
use crate::tool::{FnTool, ToolFn};
use std::future::Future;
use std::sync::Arc;
use toolsmith_core::{Error, Result, SessionContext};
use tracing::debug;

/// Builder for [`FnTool`]
///
/// # Example
///
/// ```
/// use toolsmith::ToolBuilder;
///
/// let tool = ToolBuilder::new("shout")
///     .docstring("Upper-cases the input.")
///     .sync_fn(|input, _ctx| Ok(input.to_uppercase()))
///     .build()?;
///
/// assert_eq!(tool.name(), "shout");
/// assert_eq!(tool.description(), "shout(input: String): Upper-cases the input.");
/// # Ok::<(), toolsmith::Error>(())
/// ```
pub struct ToolBuilder {
    name: String,
    docstring: Option<String>,
    signature: Option<String>,
    examples: Vec<String>,
    return_direct: bool,
    func: Option<ToolFn>,
}

impl ToolBuilder {
    /// Create a builder for a tool with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            docstring: None,
            signature: None,
            examples: Vec::new(),
            return_direct: false,
            func: None,
        }
    }

    /// Set the docstring describing what the tool does (required)
    pub fn docstring(mut self, docstring: impl Into<String>) -> Self {
        self.docstring = Some(docstring.into());
        self
    }

    /// Set the declared parameter list as text
    ///
    /// Defaults to `(input: String)`, the shape every tool function has
    /// once the context parameter is removed. The context parameter may be
    /// included here; it is stripped when the description is composed.
    pub fn signature(mut self, signature: impl Into<String>) -> Self {
        self.signature = Some(signature.into());
        self
    }

    /// Add one sample invocation for prompting
    pub fn example(mut self, example: impl Into<String>) -> Self {
        self.examples.push(example.into());
        self
    }

    /// Add sample invocations for prompting
    pub fn examples<I, S>(mut self, examples: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.examples.extend(examples.into_iter().map(Into::into));
        self
    }

    /// Mark the tool's output as final, to be shown to the user verbatim
    pub fn return_direct(mut self, return_direct: bool) -> Self {
        self.return_direct = return_direct;
        self
    }

    /// Set a synchronous body; it is offloaded when invoked from async code
    pub fn sync_fn<F>(mut self, func: F) -> Self
    where
        F: Fn(String, Arc<SessionContext>) -> Result<String> + Send + Sync + 'static,
    {
        self.func = Some(ToolFn::from_sync(func));
        self
    }

    /// Set an asynchronous body; its future is awaited in place
    pub fn async_fn<F, Fut>(mut self, func: F) -> Self
    where
        F: Fn(String, Arc<SessionContext>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<String>> + Send + 'static,
    {
        self.func = Some(ToolFn::from_async(func));
        self
    }

    /// Set a pre-built callable
    pub fn tool_fn(mut self, func: ToolFn) -> Self {
        self.func = Some(func);
        self
    }

    /// Build the tool
    ///
    /// # Errors
    ///
    /// Returns [`Error::Configuration`] when the name is blank, the
    /// docstring is missing or blank, or no callable was supplied.
    pub fn build(self) -> Result<FnTool> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(Error::Configuration(
                "tool name must not be empty".to_string(),
            ));
        }

        let docstring = self
            .docstring
            .as_deref()
            .map(str::trim)
            .filter(|doc| !doc.is_empty())
            .ok_or_else(|| {
                Error::Configuration(format!(
                    "tool '{name}' has no docstring; document what the tool does"
                ))
            })?
            .to_string();

        let func = self.func.ok_or_else(|| {
            Error::Configuration(format!(
                "tool '{name}' has no callable; supply sync_fn or async_fn"
            ))
        })?;

        let signature = self
            .signature
            .unwrap_or_else(|| "(input: String)".to_string());
        let description =
            describe::compose(&name, &describe::strip_context_param(&signature), &docstring);

        debug!(
            tool_name = %name,
            kind = %func.kind(),
            return_direct = self.return_direct,
            "Tool built"
        );

        Ok(FnTool::new(
            name,
            description,
            docstring,
            self.examples,
            self.return_direct,
            func,
        ))
    }
}
