use crate::domain::common::entities::app_errors::CoreError;

pub trait HealthCheckService: Send + Sync {
    /// Round-trip time of a store ping, in milliseconds.
    fn health(&self) -> impl Future<Output = Result<u64, CoreError>> + Send;
}
