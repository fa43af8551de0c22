use bson::{Document, doc};
use futures::TryStreamExt;
use mongodb::{
    Client, Database, IndexModel,
    options::{ClientOptions, FindOptions},
};
use tracing::{error, info};

use super::filters::{filter_document, sort_document};
use crate::domain::{
    common::entities::app_errors::CoreError,
    query::{DocumentId, Filter},
    store::{
        ports::DocumentStore,
        value_objects::{Collection, FindQuery},
    },
};

#[derive(Debug, Clone)]
pub struct MongoDocumentStore {
    db: Database,
}

impl MongoDocumentStore {
    /// Connects, checks the server answers and makes sure the lookup indexes
    /// exist.
    pub async fn connect(url: &str, database_name: &str) -> anyhow::Result<Self> {
        let options = ClientOptions::parse(url).await?;
        let client = Client::with_options(options)?;
        let db = client.database(database_name);

        db.run_command(doc! { "ping": 1 }, None).await?;
        info!("Connected to MongoDB database {}", database_name);

        let store = Self { db };
        store.ensure_indexes().await?;

        Ok(store)
    }

    fn collection(&self, collection: Collection) -> mongodb::Collection<Document> {
        self.db.collection(collection.as_str())
    }

    async fn ensure_indexes(&self) -> anyhow::Result<()> {
        let indexes = [
            (Collection::Equipment, vec![doc! { "name": 1 }, doc! { "room_id": 1 }]),
            (Collection::Rooms, vec![doc! { "name": 1 }]),
            (Collection::Disciplines, vec![doc! { "course_code": 1 }]),
            (
                Collection::Lessons,
                vec![doc! { "ruz_lesson_oid": 1 }, doc! { "start_time": 1 }],
            ),
            (
                Collection::Records,
                vec![
                    doc! { "start_time": -1 },
                    doc! { "url": 1 },
                    doc! { "room_name": 1, "camera_ip": 1 },
                ],
            ),
        ];

        for (collection, keys) in indexes {
            let models: Vec<IndexModel> = keys
                .into_iter()
                .map(|keys| IndexModel::builder().keys(keys).build())
                .collect();
            self.collection(collection).create_indexes(models, None).await?;
        }

        Ok(())
    }
}

fn store_error(action: &str, collection: Collection, e: mongodb::error::Error) -> CoreError {
    error!("Failed to {} in {}: {}", action, collection, e);
    CoreError::Store(e.to_string())
}

fn id_filter(id: DocumentId) -> Document {
    doc! { "_id": id.object_id() }
}

impl DocumentStore for MongoDocumentStore {
    async fn find(&self, collection: Collection, query: FindQuery) -> Result<Vec<Document>, CoreError> {
        let options = FindOptions::builder()
            .sort(sort_document(&query.sort))
            .skip(query.skip)
            .limit(query.limit)
            .build();

        let cursor = self
            .collection(collection)
            .find(filter_document(&query.filter), options)
            .await
            .map_err(|e| store_error("find documents", collection, e))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| store_error("read cursor", collection, e))
    }

    async fn find_one(&self, collection: Collection, filter: Filter) -> Result<Option<Document>, CoreError> {
        self.collection(collection)
            .find_one(filter_document(&filter), None)
            .await
            .map_err(|e| store_error("find document", collection, e))
    }

    async fn insert_one(&self, collection: Collection, document: Document) -> Result<(), CoreError> {
        self.collection(collection)
            .insert_one(document, None)
            .await
            .map_err(|e| store_error("insert document", collection, e))?;

        Ok(())
    }

    async fn update_fields(
        &self,
        collection: Collection,
        id: DocumentId,
        fields: Document,
    ) -> Result<bool, CoreError> {
        let result = self
            .collection(collection)
            .update_one(id_filter(id), doc! { "$set": fields }, None)
            .await
            .map_err(|e| store_error("update document", collection, e))?;

        Ok(result.matched_count > 0)
    }

    async fn replace_one(
        &self,
        collection: Collection,
        id: DocumentId,
        document: Document,
    ) -> Result<bool, CoreError> {
        let result = self
            .collection(collection)
            .replace_one(id_filter(id), document, None)
            .await
            .map_err(|e| store_error("replace document", collection, e))?;

        Ok(result.matched_count > 0)
    }

    async fn delete_one(&self, collection: Collection, id: DocumentId) -> Result<bool, CoreError> {
        let result = self
            .collection(collection)
            .delete_one(id_filter(id), None)
            .await
            .map_err(|e| store_error("delete document", collection, e))?;

        Ok(result.deleted_count > 0)
    }

    async fn ping(&self) -> Result<(), CoreError> {
        self.db
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                error!("MongoDB ping failed: {}", e);
                CoreError::Store(e.to_string())
            })?;

        Ok(())
    }
}
