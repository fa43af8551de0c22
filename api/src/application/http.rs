pub mod discipline;
pub mod equipment;
pub mod health;
pub mod lesson;
pub mod query_extractor;
pub mod query_params;
pub mod record;
pub mod room;
pub mod server;
