//! Session context injected into tool invocations
//!
//! The `SessionContext` struct carries per-session state into every tool
//! call: a handle to the runtime whose blocking pool runs synchronous tools,
//! and a key-value store for session data shared between tools.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::RwLock;
use tokio::runtime::Handle;
use tracing::debug;

/// Well-known context keys for common session fields
pub mod keys {
    /// Language preference (e.g., "en", "zh")
    pub const LANGUAGE: &str = "language";
    /// User ID for personalization
    pub const USER_ID: &str = "user_id";
    /// Session ID for tracking
    pub const SESSION_ID: &str = "session_id";
}

/// Context passed to tools during invocation
///
/// A context is created once per session by the orchestrator, shared as
/// `Arc<SessionContext>`, and bound to tools before they are invoked. It
/// supports both untyped JSON values and typed accessors for common fields.
/// All accessors take `&self`; locking is internal, so tool bodies never
/// hold a lock across an await point.
///
/// # Example
///
/// ```
/// use toolsmith_core::SessionContext;
///
/// let rt = tokio::runtime::Runtime::new()?;
/// let ctx = SessionContext::new(rt.handle().clone())
///     .with_language("en")
///     .with_session_id("session-123");
///
/// assert_eq!(ctx.language().as_deref(), Some("en"));
/// assert_eq!(ctx.session_id().as_deref(), Some("session-123"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct SessionContext {
    /// Handle to the runtime whose blocking pool executes sync tools
    workers: Handle,
    /// Key-value storage for session data
    data: RwLock<HashMap<String, serde_json::Value>>,
}

impl SessionContext {
    /// Create a context that offloads blocking work to the given runtime
    pub fn new(workers: Handle) -> Self {
        Self {
            workers,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Create a context backed by the runtime of the calling task
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoRuntime`](crate::Error::NoRuntime) when called
    /// from a thread that is not running inside a Tokio runtime.
    pub fn current() -> crate::Result<Self> {
        let workers =
            Handle::try_current().map_err(|e| crate::Error::NoRuntime(e.to_string()))?;
        debug!("Session context created on the current runtime");
        Ok(Self::new(workers))
    }

    /// Handle to the worker pool used for offloading blocking tools
    pub fn workers(&self) -> &Handle {
        &self.workers
    }

    // =========== Builder Methods ===========

    /// Set the language preference
    pub fn with_language(self, lang: impl Into<String>) -> Self {
        self.set_language(lang);
        self
    }

    /// Set the session ID
    pub fn with_session_id(self, session_id: impl Into<String>) -> Self {
        self.insert(keys::SESSION_ID, serde_json::json!(session_id.into()));
        self
    }

    /// Set the user ID
    pub fn with_user_id(self, user_id: impl Into<String>) -> Self {
        self.insert(keys::USER_ID, serde_json::json!(user_id.into()));
        self
    }

    // =========== Common Accessors ===========

    /// Get the language preference
    pub fn language(&self) -> Option<String> {
        self.get(keys::LANGUAGE)
            .and_then(|v| v.as_str().map(String::from))
    }

    /// Set the language preference
    pub fn set_language(&self, lang: impl Into<String>) {
        self.insert(keys::LANGUAGE, serde_json::json!(lang.into()));
    }

    /// Get the session ID
    pub fn session_id(&self) -> Option<String> {
        self.get(keys::SESSION_ID)
            .and_then(|v| v.as_str().map(String::from))
    }

    /// Get the user ID
    pub fn user_id(&self) -> Option<String> {
        self.get(keys::USER_ID)
            .and_then(|v| v.as_str().map(String::from))
    }

    // =========== Generic Key-Value Operations ===========

    /// Insert a value into the context
    pub fn insert(&self, key: impl Into<String>, value: serde_json::Value) {
        self.data.write().unwrap().insert(key.into(), value);
    }

    /// Get a value from the context
    pub fn get(&self, key: &str) -> Option<serde_json::Value> {
        self.data.read().unwrap().get(key).cloned()
    }

    /// Insert a typed value into the context
    ///
    /// Serializes the value to JSON before storing.
    pub fn insert_typed<T: Serialize>(
        &self,
        key: impl Into<String>,
        value: &T,
    ) -> crate::Result<()> {
        let json_value = serde_json::to_value(value).map_err(|e| {
            crate::Error::Generic(format!("Failed to serialize context value: {e}"))
        })?;
        self.data.write().unwrap().insert(key.into(), json_value);
        Ok(())
    }

    /// Get a typed value from the context
    ///
    /// Deserializes the JSON value into the specified type.
    pub fn get_typed<T: for<'de> Deserialize<'de>>(&self, key: &str) -> crate::Result<Option<T>> {
        match self.get(key) {
            None => Ok(None),
            Some(value) => {
                let typed = serde_json::from_value(value).map_err(|e| {
                    crate::Error::Generic(format!("Failed to deserialize context value: {e}"))
                })?;
                Ok(Some(typed))
            }
        }
    }

    /// Check if a key exists in the context
    pub fn contains_key(&self, key: &str) -> bool {
        self.data.read().unwrap().contains_key(key)
    }

    /// Remove a value from the context
    pub fn remove(&self, key: &str) -> Option<serde_json::Value> {
        self.data.write().unwrap().remove(key)
    }

    /// Clear all values from the context
    pub fn clear(&self) {
        self.data.write().unwrap().clear();
    }

    /// Get the number of entries in the context
    pub fn len(&self) -> usize {
        self.data.read().unwrap().len()
    }

    /// Check if the context is empty
    pub fn is_empty(&self) -> bool {
        self.data.read().unwrap().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct TestData {
        value: i32,
        text: String,
    }

    // The runtime must outlive the context, so tests hold both.
    fn test_context() -> (tokio::runtime::Runtime, SessionContext) {
        let rt = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        let ctx = SessionContext::new(rt.handle().clone());
        (rt, ctx)
    }

    #[test]
    fn test_basic_operations() {
        let (_rt, ctx) = test_context();
        assert!(ctx.is_empty());

        ctx.insert("key", serde_json::json!("value"));
        assert_eq!(ctx.len(), 1);
        assert!(ctx.contains_key("key"));
        assert_eq!(ctx.get("key"), Some(serde_json::json!("value")));

        ctx.remove("key");
        assert!(ctx.is_empty());
    }

    #[test]
    fn test_typed_insert_get() {
        let (_rt, ctx) = test_context();
        let data = TestData {
            value: 42,
            text: "hello".to_string(),
        };

        ctx.insert_typed("test", &data).unwrap();

        let retrieved: TestData = ctx.get_typed("test").unwrap().unwrap();
        assert_eq!(retrieved, data);
    }

    #[test]
    fn test_language() {
        let (_rt, ctx) = test_context();
        let ctx = ctx.with_language("en");
        assert_eq!(ctx.language().as_deref(), Some("en"));

        ctx.set_language("zh");
        assert_eq!(ctx.language().as_deref(), Some("zh"));
    }

    #[test]
    fn test_builder_chain() {
        let (_rt, ctx) = test_context();
        let ctx = ctx
            .with_language("en")
            .with_session_id("sess-123")
            .with_user_id("user-456");

        assert_eq!(ctx.language().as_deref(), Some("en"));
        assert_eq!(ctx.session_id().as_deref(), Some("sess-123"));
        assert_eq!(ctx.user_id().as_deref(), Some("user-456"));
    }

    #[test]
    fn test_get_typed_missing_key() {
        let (_rt, ctx) = test_context();
        let result: crate::Result<Option<TestData>> = ctx.get_typed("missing");
        assert!(result.unwrap().is_none());
    }

    #[test]
    fn test_clear() {
        let (_rt, ctx) = test_context();
        ctx.insert("key1", serde_json::json!(1));
        ctx.insert("key2", serde_json::json!(2));
        assert_eq!(ctx.len(), 2);

        ctx.clear();
        assert!(ctx.is_empty());
    }

    #[tokio::test]
    async fn test_current_inside_runtime() {
        let ctx = SessionContext::current().unwrap();
        let joined = ctx.workers().spawn_blocking(|| 2 + 2).await.unwrap();
        assert_eq!(joined, 4);
    }

    #[test]
    fn test_current_outside_runtime() {
        let err = SessionContext::current().unwrap_err();
        assert!(matches!(err, crate::Error::NoRuntime(_)));
    }
}
