use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::core::library::LibraryResult;
use crate::gateway::GatewayPublisherVia;

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // create an entity
    async fn create(&self, entity: &Entity) -> LibraryResult<usize>;

    // updates an entity in place, keeping its position in the sequence
    async fn update(&self, entity: &Entity) -> LibraryResult<usize>;

    // get an entity
    async fn get(&self, id: &str) -> LibraryResult<Entity>;

    // delete an entity
    async fn delete(&self, id: &str) -> LibraryResult<usize>;

    // all entities in insertion order
    async fn find_all(&self) -> LibraryResult<Vec<Entity>>;
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Copy)]
pub(crate) enum RepositoryStore {
    // process-wide store shared by every service built for the shell
    Memory,
    // fresh store per factory call, used by tests
    Ephemeral,
}

impl RepositoryStore {
    pub fn gateway_publisher(&self) -> GatewayPublisherVia  {
        match self {
            RepositoryStore::Memory => {GatewayPublisherVia::Logs},
            RepositoryStore::Ephemeral => {GatewayPublisherVia::Logs},
        }
    }
}
