use bson::Document;
use tracing::info;

use crate::domain::{
    common::{DatabaseBackend, DatabaseConfig, entities::app_errors::CoreError},
    query::{DocumentId, Filter},
    store::{
        ports::DocumentStore,
        value_objects::{Collection, FindQuery},
    },
};

pub mod filters;
pub mod memory;
pub mod mongo;

use memory::InMemoryDocumentStore;
use mongo::MongoDocumentStore;

/// The document store selected at startup.
#[derive(Debug, Clone)]
pub enum StoreBackend {
    Mongo(MongoDocumentStore),
    Memory(InMemoryDocumentStore),
}

impl StoreBackend {
    pub async fn connect(config: &DatabaseConfig) -> anyhow::Result<Self> {
        match config.backend {
            DatabaseBackend::Mongo => {
                let store = MongoDocumentStore::connect(&config.url, &config.name).await?;
                Ok(StoreBackend::Mongo(store))
            }
            DatabaseBackend::Memory => {
                info!("Using the in-memory document store");
                Ok(StoreBackend::Memory(InMemoryDocumentStore::new()))
            }
        }
    }
}

impl DocumentStore for StoreBackend {
    async fn find(&self, collection: Collection, query: FindQuery) -> Result<Vec<Document>, CoreError> {
        match self {
            StoreBackend::Mongo(store) => store.find(collection, query).await,
            StoreBackend::Memory(store) => store.find(collection, query).await,
        }
    }

    async fn find_one(&self, collection: Collection, filter: Filter) -> Result<Option<Document>, CoreError> {
        match self {
            StoreBackend::Mongo(store) => store.find_one(collection, filter).await,
            StoreBackend::Memory(store) => store.find_one(collection, filter).await,
        }
    }

    async fn insert_one(&self, collection: Collection, document: Document) -> Result<(), CoreError> {
        match self {
            StoreBackend::Mongo(store) => store.insert_one(collection, document).await,
            StoreBackend::Memory(store) => store.insert_one(collection, document).await,
        }
    }

    async fn update_fields(
        &self,
        collection: Collection,
        id: DocumentId,
        fields: Document,
    ) -> Result<bool, CoreError> {
        match self {
            StoreBackend::Mongo(store) => store.update_fields(collection, id, fields).await,
            StoreBackend::Memory(store) => store.update_fields(collection, id, fields).await,
        }
    }

    async fn replace_one(
        &self,
        collection: Collection,
        id: DocumentId,
        document: Document,
    ) -> Result<bool, CoreError> {
        match self {
            StoreBackend::Mongo(store) => store.replace_one(collection, id, document).await,
            StoreBackend::Memory(store) => store.replace_one(collection, id, document).await,
        }
    }

    async fn delete_one(&self, collection: Collection, id: DocumentId) -> Result<bool, CoreError> {
        match self {
            StoreBackend::Mongo(store) => store.delete_one(collection, id).await,
            StoreBackend::Memory(store) => store.delete_one(collection, id).await,
        }
    }

    async fn ping(&self) -> Result<(), CoreError> {
        match self {
            StoreBackend::Mongo(store) => store.ping().await,
            StoreBackend::Memory(store) => store.ping().await,
        }
    }
}
