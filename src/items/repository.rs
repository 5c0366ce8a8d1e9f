pub mod mem_item_repository;

use async_trait::async_trait;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;
use crate::items::domain::model::ItemEntity;

#[async_trait]
pub(crate) trait ItemRepository: Repository<ItemEntity> {
    // every item whose title contains the keyword, in insertion order
    async fn find_by_keyword(&self, keyword: &str) -> LibraryResult<Vec<ItemEntity>>;
}
