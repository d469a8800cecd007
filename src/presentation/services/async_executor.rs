use crate::domain::errors::FilterError;
use std::future::Future;
use std::sync::Arc;

/// Blocks the UI thread on catalog futures; fetches inside still run concurrently.
pub struct AsyncExecutor {
    runtime: Arc<tokio::runtime::Runtime>,
}

impl AsyncExecutor {
    pub fn new() -> Result<Self, FilterError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .thread_name("filter-catalogs")
            .build()?;
        Ok(Self {
            runtime: Arc::new(runtime),
        })
    }

    pub fn execute<F, T>(&self, future: F) -> T
    where
        F: Future<Output = T>,
    {
        self.runtime.block_on(future)
    }
}

impl Clone for AsyncExecutor {
    fn clone(&self) -> Self {
        Self {
            runtime: Arc::clone(&self.runtime),
        }
    }
}
