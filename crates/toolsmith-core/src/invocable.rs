//! Invocable trait definition

use crate::Result;
use async_trait::async_trait;

/// Trait for tools that an agent loop can invoke
///
/// Orchestrators consume tools through this trait so they never depend on
/// how a tool was produced or whether its body blocks. Implementations are
/// expected to hide their dispatch strategy behind `invoke`: a blocking body
/// must be offloaded rather than run on the caller's scheduler thread.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Invocable: Send + Sync {
    /// Invoke the tool with the given input
    ///
    /// # Arguments
    ///
    /// * `input` - Tool input as produced by the language model
    ///
    /// # Returns
    ///
    /// Tool output as a string, or the error the tool body reported
    async fn invoke(&self, input: String) -> Result<String>;

    /// Get the tool's name
    ///
    /// Must be unique within a registry
    fn name(&self) -> &str;

    /// Get the tool's description
    ///
    /// This description helps the LLM understand when to use this tool
    fn description(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn mock_invocable_dispatches_through_trait_object() {
        let mut mock = MockInvocable::new();
        mock.expect_name().return_const("mock".to_string());
        mock.expect_invoke()
            .withf(|input| input == "ping")
            .returning(|_| Ok("pong".to_string()));

        let tool: Arc<dyn Invocable> = Arc::new(mock);
        assert_eq!(tool.name(), "mock");
        assert_eq!(tool.invoke("ping".to_string()).await.unwrap(), "pong");
    }
}
