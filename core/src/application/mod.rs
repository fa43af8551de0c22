use tracing::info;

use crate::{
    domain::common::{EruditeConfig, services::Service},
    infrastructure::db::StoreBackend,
};

pub type EruditeService = Service<StoreBackend>;

pub async fn create_service(config: EruditeConfig) -> anyhow::Result<EruditeService> {
    let store = StoreBackend::connect(&config.database).await?;
    info!(database = %config.database.name, "document store ready");

    Ok(Service::new(store))
}
