pub mod common;
pub mod discipline;
pub mod equipment;
pub mod health;
pub mod lesson;
pub mod query;
pub mod record;
pub mod room;
pub mod store;
