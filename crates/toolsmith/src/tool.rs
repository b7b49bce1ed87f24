//! Tool wrapper and dual-mode dispatch
//!
//! [`FnTool`] holds a registered function together with its prompt metadata;
//! [`BoundTool`] pairs a shared tool with one session's context and carries
//! the two dispatch paths. Whether the underlying function blocks is fixed
//! in the [`ToolFn`] variant when the tool is built, so dispatch is a plain
//! `match` rather than a runtime probe.

use async_trait::async_trait;
use futures::FutureExt;
use futures::future::BoxFuture;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Instant;
use toolsmith_core::{Error, Invocable, Result, SessionContext};
use tracing::{debug, warn};

/// Synchronous tool function, shared behind `Arc` so it can be offloaded
pub type SyncToolFn = dyn Fn(String, Arc<SessionContext>) -> Result<String> + Send + Sync;

/// Asynchronous tool function returning a boxed future
pub type AsyncToolFn =
    dyn Fn(String, Arc<SessionContext>) -> BoxFuture<'static, Result<String>> + Send + Sync;

/// Dispatch capability of a tool, fixed when the tool is built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    /// The body runs to completion on the thread that calls it
    Sync,
    /// The body suspends cooperatively and must be awaited
    Async,
}

impl ToolKind {
    /// Lowercase label used in logs
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Sync => "sync",
            Self::Async => "async",
        }
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The registered callable, tagged by dispatch mode
pub enum ToolFn {
    /// Called directly from blocking code, offloaded from async code
    Sync(Arc<SyncToolFn>),
    /// Awaited in place; never available to blocking callers
    Async(Arc<AsyncToolFn>),
}

impl ToolFn {
    /// Wrap a synchronous function
    pub fn from_sync<F>(func: F) -> Self
    where
        F: Fn(String, Arc<SessionContext>) -> Result<String> + Send + Sync + 'static,
    {
        Self::Sync(Arc::new(func))
    }

    /// Wrap an asynchronous function
    ///
    /// The returned future must be `Send` so invocations can move across
    /// scheduler threads.
    pub fn from_async<F, Fut>(func: F) -> Self
    where
        F: Fn(String, Arc<SessionContext>) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<String>> + Send + 'static,
    {
        Self::Async(Arc::new(move |input, ctx| func(input, ctx).boxed()))
    }

    /// The dispatch mode this callable was built with
    pub fn kind(&self) -> ToolKind {
        match self {
            Self::Sync(_) => ToolKind::Sync,
            Self::Async(_) => ToolKind::Async,
        }
    }
}

impl fmt::Debug for ToolFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sync(_) => f.write_str("ToolFn::Sync"),
            Self::Async(_) => f.write_str("ToolFn::Async"),
        }
    }
}

/// A registered tool: prompt metadata plus the tagged callable
///
/// One `FnTool` exists per registered function. It is immutable and shared
/// as `Arc<FnTool>`; sessions obtain an invocable view through
/// [`FnTool::bind`].
pub struct FnTool {
    name: String,
    description: String,
    docstring: String,
    examples: Vec<String>,
    return_direct: bool,
    func: ToolFn,
}

impl FnTool {
    pub(crate) fn new(
        name: String,
        description: String,
        docstring: String,
        examples: Vec<String>,
        return_direct: bool,
        func: ToolFn,
    ) -> Self {
        Self {
            name,
            description,
            docstring,
            examples,
            return_direct,
            func,
        }
    }

    /// Get the tool's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the prompt-facing description line
    ///
    /// Combines the name, the declared signature with the context parameter
    /// stripped, and the docstring.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Get the docstring the tool was registered with
    pub fn docstring(&self) -> &str {
        &self.docstring
    }

    /// Sample invocations for prompting
    pub fn examples(&self) -> &[String] {
        &self.examples
    }

    /// Whether the tool's output goes straight to the end user
    pub fn return_direct(&self) -> bool {
        self.return_direct
    }

    /// The dispatch mode fixed at construction
    pub fn kind(&self) -> ToolKind {
        self.func.kind()
    }

    /// Bind this tool to a session context
    ///
    /// Binding is per session: the returned [`BoundTool`] uses `ctx` for
    /// every invocation, and further `bind` calls yield independent
    /// bindings without disturbing existing ones.
    pub fn bind(self: Arc<Self>, ctx: Arc<SessionContext>) -> BoundTool {
        debug!(tool_name = %self.name, "Tool bound to session context");
        BoundTool { tool: self, ctx }
    }
}

impl fmt::Debug for FnTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnTool")
            .field("name", &self.name)
            .field("kind", &self.kind())
            .field("return_direct", &self.return_direct)
            .field("docstring", &self.docstring)
            .finish_non_exhaustive()
    }
}

/// A tool bound to one session's context
///
/// The binding holds two `Arc`s and is cheap to clone, so one session can
/// share it across concurrent tasks. Both dispatch paths pass the bound
/// context to the tool body as its second argument.
#[derive(Clone)]
pub struct BoundTool {
    tool: Arc<FnTool>,
    ctx: Arc<SessionContext>,
}

impl BoundTool {
    /// Get the tool's name
    pub fn name(&self) -> &str {
        self.tool.name()
    }

    /// Get the prompt-facing description line
    pub fn description(&self) -> &str {
        self.tool.description()
    }

    /// Get the docstring the tool was registered with
    pub fn docstring(&self) -> &str {
        self.tool.docstring()
    }

    /// Sample invocations for prompting
    pub fn examples(&self) -> &[String] {
        self.tool.examples()
    }

    /// Whether the tool's output goes straight to the end user
    pub fn return_direct(&self) -> bool {
        self.tool.return_direct()
    }

    /// The dispatch mode fixed at construction
    pub fn kind(&self) -> ToolKind {
        self.tool.kind()
    }

    /// The session context this binding was created with
    pub fn context(&self) -> &Arc<SessionContext> {
        &self.ctx
    }

    /// Invoke the tool from a thread that may block
    ///
    /// A sync body runs to completion on the calling thread. An async body
    /// is refused with [`Error::UnsupportedOperation`] without being
    /// executed: a thread without an event loop cannot drive the future,
    /// and entering a hidden runtime here could deadlock a caller that is
    /// already inside one.
    pub fn blocking_invoke(&self, input: impl Into<String>) -> Result<String> {
        let input = input.into();
        match &self.tool.func {
            ToolFn::Sync(func) => {
                debug!(
                    tool_name = %self.tool.name,
                    kind = %ToolKind::Sync,
                    "Invoking tool on the calling thread"
                );
                let started = Instant::now();
                let result = func(input, Arc::clone(&self.ctx));
                log_outcome(&self.tool.name, started, &result);
                result
            }
            ToolFn::Async(_) => {
                warn!(
                    tool_name = %self.tool.name,
                    "Blocking invocation refused for async tool"
                );
                Err(Error::UnsupportedOperation(format!(
                    "tool '{}' is async; call invoke from an async context instead",
                    self.tool.name
                )))
            }
        }
    }

    /// Invoke the tool from async code
    ///
    /// An async body is awaited in place. A sync body is never run inline:
    /// it is submitted to the worker pool owned by the bound context and
    /// awaited, so a slow tool cannot stall the shared scheduler. Errors
    /// from the tool body propagate unmodified; a panic on the worker is
    /// resumed on the awaiting task.
    pub async fn invoke(&self, input: impl Into<String>) -> Result<String> {
        let input = input.into();
        let started = Instant::now();
        let result = match &self.tool.func {
            ToolFn::Async(func) => {
                debug!(
                    tool_name = %self.tool.name,
                    kind = %ToolKind::Async,
                    "Awaiting tool future"
                );
                func(input, Arc::clone(&self.ctx)).await
            }
            ToolFn::Sync(func) => {
                debug!(
                    tool_name = %self.tool.name,
                    kind = %ToolKind::Sync,
                    "Offloading tool to the worker pool"
                );
                let func = Arc::clone(func);
                let ctx = Arc::clone(&self.ctx);
                let joined = self
                    .ctx
                    .workers()
                    .spawn_blocking(move || func(input, ctx))
                    .await;
                match joined {
                    Ok(result) => result,
                    Err(join_err) => {
                        if join_err.is_panic() {
                            std::panic::resume_unwind(join_err.into_panic());
                        }
                        Err(Error::Cancelled(join_err.to_string()))
                    }
                }
            }
        };
        log_outcome(&self.tool.name, started, &result);
        result
    }
}

impl fmt::Debug for BoundTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundTool")
            .field("tool", &self.tool)
            .field("session_id", &self.ctx.session_id())
            .finish()
    }
}

#[async_trait]
impl Invocable for BoundTool {
    async fn invoke(&self, input: String) -> Result<String> {
        Self::invoke(self, input).await
    }

    fn name(&self) -> &str {
        self.tool.name()
    }

    fn description(&self) -> &str {
        self.tool.description()
    }
}

/// Shared post-dispatch logging for both invocation paths
fn log_outcome(name: &str, started: Instant, result: &Result<String>) {
    let duration_ms = started.elapsed().as_millis() as u64;
    match result {
        Ok(output) => {
            debug!(
                tool_name = %name,
                duration_ms = duration_ms,
                output_length = output.len(),
                "Tool invocation succeeded"
            );
        }
        Err(e) => {
            warn!(
                tool_name = %name,
                duration_ms = duration_ms,
                error = %e,
                "Tool invocation failed"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ToolBuilder;

    fn echo_tool() -> FnTool {
        ToolBuilder::new("echo")
            .docstring("Echoes the input.")
            .sync_fn(|input, _ctx| Ok(input))
            .build()
            .unwrap()
    }

    #[test]
    fn tool_kind_labels() {
        assert_eq!(ToolKind::Sync.to_string(), "sync");
        assert_eq!(ToolKind::Async.to_string(), "async");
    }

    #[test]
    fn fn_tool_debug_shows_metadata() {
        let tool = echo_tool();
        let debugged = format!("{tool:?}");
        assert!(debugged.contains("echo"));
        assert!(debugged.contains("Sync"));
    }

    #[test]
    fn blocking_invoke_runs_sync_tool_inline() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let ctx = Arc::new(SessionContext::new(rt.handle().clone()));
        let bound = Arc::new(echo_tool()).bind(ctx);
        assert_eq!(bound.blocking_invoke("hello").unwrap(), "hello");
    }

    #[tokio::test]
    async fn bound_tool_exposes_tool_metadata() {
        let ctx = Arc::new(SessionContext::current().unwrap());
        let bound = Arc::new(echo_tool()).bind(ctx);
        assert_eq!(bound.name(), "echo");
        assert_eq!(bound.kind(), ToolKind::Sync);
        assert!(!bound.return_direct());
        assert!(
            bound
                .description()
                .starts_with("echo(input: String): Echoes the input.")
        );
        assert!(bound.context().session_id().is_none());
    }

    #[tokio::test]
    async fn invocable_trait_object_dispatch() {
        let ctx = Arc::new(SessionContext::current().unwrap());
        let bound: Arc<dyn Invocable> = Arc::new(Arc::new(echo_tool()).bind(ctx));
        assert_eq!(bound.invoke("x".to_string()).await.unwrap(), "x");
    }
}
