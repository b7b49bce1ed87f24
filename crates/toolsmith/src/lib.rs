//! Function-to-tool adaptation for LLM agents
//!
//! This crate turns ordinary documented Rust functions into tools an agent
//! can list, describe, and invoke:
//!
//! - [`macro@tool`] attribute for registering sync and async functions as tools
//! - [`ToolBuilder`] for building tools by hand when the attribute is too rigid
//! - [`FnTool`] metadata shared across sessions, [`BoundTool`] bound to one
//! - [`ToolRegistry`] for name lookup and prompt-ready description lines
//! - [`SessionContext`] carrying per-session state into every invocation
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use toolsmith::{tool, Result, SessionContext};
//!
//! /// Echoes the input back.
//! #[tool]
//! fn echo(input: String, _ctx: Arc<SessionContext>) -> Result<String> {
//!     Ok(input)
//! }
//!
//! # tokio_test::block_on(async {
//! let ctx = Arc::new(SessionContext::current()?);
//! let echo = Arc::new(echo_tool()?).bind(ctx);
//! assert_eq!(echo.invoke("hi").await?, "hi");
//! # Ok::<(), toolsmith::Error>(())
//! # })
//! # .unwrap();
//! ```

pub mod describe;
pub mod factory;
pub mod registry;
pub mod tool;

pub use factory::ToolBuilder;
pub use registry::ToolRegistry;
pub use tool::{AsyncToolFn, BoundTool, FnTool, SyncToolFn, ToolFn, ToolKind};

pub use toolsmith_core::{Error, Invocable, Result, SessionContext};
pub use toolsmith_macros::tool;
