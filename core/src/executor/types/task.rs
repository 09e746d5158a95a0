use std::future::Future;

use async_trait::async_trait;

/// One unit of remote work.
///
/// A task performs one remote call, or a short chain of dependent calls,
/// and reports only whether it succeeded. Timing is taken by the pool.
/// Tasks are consumed on execution so each one captures its own inputs.
#[async_trait]
pub trait Task: Send + 'static {
    async fn execute(self: Box<Self>) -> anyhow::Result<()>;
}

pub type BoxTask = Box<dyn Task>;

#[async_trait]
impl<F, Fut> Task for F
where
    F: FnOnce() -> Fut + Send + 'static,
    Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
{
    async fn execute(self: Box<Self>) -> anyhow::Result<()> {
        (*self)().await
    }
}
