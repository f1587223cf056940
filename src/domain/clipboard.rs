use anyhow::Result;
use async_trait::async_trait;

/// Sink for "copy this command" requests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClipboardWriter: Send + Sync {
    async fn copy(&self, text: &str) -> Result<()>;
}
