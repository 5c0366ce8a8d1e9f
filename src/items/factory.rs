use crate::core::repository::RepositoryStore;
use crate::items::repository::ItemRepository;
use crate::items::repository::mem_item_repository::MemItemRepository;

pub(crate) async fn create_item_repository(store: RepositoryStore) -> Box<dyn ItemRepository> {
    match store {
        RepositoryStore::Memory => {
            Box::new(MemItemRepository::shared())
        }
        RepositoryStore::Ephemeral => {
            Box::new(MemItemRepository::ephemeral())
        }
    }
}
