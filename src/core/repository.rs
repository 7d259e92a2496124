use async_trait::async_trait;
use core::option::Option;
use serde::{Deserialize, Serialize};
use crate::core::bookstore::BookStoreResult;

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // create an entity
    async fn create(&self, entity: &Entity) -> BookStoreResult<usize>;

    // overwrite an entity in place, NotFound if no entity exists for its id
    async fn update(&self, entity: &Entity) -> BookStoreResult<usize>;

    // get an entity by id, None if no entity exists for it
    async fn get(&self, id: &str) -> BookStoreResult<Option<Entity>>;

    // delete an entity by id, NotFound if no entity exists for it
    async fn delete(&self, id: &str) -> BookStoreResult<usize>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub enum RepositoryStore {
    DynamoDB,
    LocalDynamoDB,
    InMemory,
}
