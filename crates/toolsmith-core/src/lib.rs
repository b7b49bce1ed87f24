//! Core abstractions for the toolsmith workspace
//!
//! This crate defines the fundamental types shared by the toolsmith tool
//! framework: the session context injected into tool calls, the invocation
//! trait consumed by orchestrators, and the workspace error type.

pub mod context;
pub mod error;
pub mod invocable;

pub use context::SessionContext;
pub use error::{Error, Result};
pub use invocable::Invocable;
