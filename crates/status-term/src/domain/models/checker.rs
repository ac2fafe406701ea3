use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait Checker: Send + Sync {
    fn target(&self) -> String;

    /// Performs a single request against the target and returns its status
    /// code. Any status is a success; only transport failures are errors.
    async fn check(&self) -> Result<u16>;
}

pub type CheckerBox = Box<dyn Checker>;
