use std::time::Instant;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckService,
    store::ports::DocumentStore,
};

impl<S> HealthCheckService for Service<S>
where
    S: DocumentStore,
{
    async fn health(&self) -> Result<u64, CoreError> {
        let started = Instant::now();
        self.store.ping().await?;

        Ok(started.elapsed().as_millis() as u64)
    }
}
