use std::sync::{Arc, Mutex, MutexGuard};
use async_trait::async_trait;
use lazy_static::lazy_static;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;
use crate::items::domain::Item;
use crate::items::domain::model::ItemEntity;
use crate::items::repository::ItemRepository;

lazy_static! {
    // catalog state for the whole process; lives until the shell exits
    static ref SHARED_ITEMS: Arc<Mutex<Vec<ItemEntity>>> = Arc::new(Mutex::new(vec![]));
}

// MemItemRepository keeps items in an insertion-ordered in-memory sequence.
#[derive(Debug)]
pub struct MemItemRepository {
    items: Arc<Mutex<Vec<ItemEntity>>>,
}

impl MemItemRepository {
    pub(crate) fn shared() -> Self {
        Self {
            items: SHARED_ITEMS.clone(),
        }
    }

    pub(crate) fn ephemeral() -> Self {
        Self {
            items: Arc::new(Mutex::new(vec![])),
        }
    }

    fn lock(&self) -> LibraryResult<MutexGuard<Vec<ItemEntity>>> {
        self.items.lock().map_err(|err| LibraryError::runtime(
            format!("items store poisoned {:?}", err).as_str(), None))
    }
}

#[async_trait]
impl Repository<ItemEntity> for MemItemRepository {
    async fn create(&self, entity: &ItemEntity) -> LibraryResult<usize> {
        let mut items = self.lock()?;
        items.push(entity.clone());
        Ok(1)
    }

    async fn update(&self, entity: &ItemEntity) -> LibraryResult<usize> {
        let mut items = self.lock()?;
        match items.iter().position(|item| item.item_id == entity.item_id) {
            Some(ndx) => {
                items[ndx] = entity.clone();
                Ok(1)
            }
            None => Err(LibraryError::not_found(
                format!("item with id {} not found", entity.item_id).as_str())),
        }
    }

    async fn get(&self, id: &str) -> LibraryResult<ItemEntity> {
        let items = self.lock()?;
        items.iter().find(|item| item.item_id == id).cloned()
            .ok_or_else(|| LibraryError::not_found(
                format!("item with id {} not found", id).as_str()))
    }

    async fn delete(&self, id: &str) -> LibraryResult<usize> {
        let mut items = self.lock()?;
        match items.iter().position(|item| item.item_id == id) {
            Some(ndx) => {
                items.remove(ndx);
                Ok(1)
            }
            None => Err(LibraryError::not_found(
                format!("item with id {} not found", id).as_str())),
        }
    }

    async fn find_all(&self) -> LibraryResult<Vec<ItemEntity>> {
        let items = self.lock()?;
        Ok(items.clone())
    }
}

#[async_trait]
impl ItemRepository for MemItemRepository {
    async fn find_by_keyword(&self, keyword: &str) -> LibraryResult<Vec<ItemEntity>> {
        let items = self.lock()?;
        Ok(items.iter().filter(|item| item.matches(keyword)).cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use crate::core::repository::Repository;
    use crate::items::domain::model::ItemEntity;
    use crate::items::repository::ItemRepository;
    use crate::items::repository::mem_item_repository::MemItemRepository;

    #[tokio::test]
    async fn test_should_preserve_insertion_order() {
        let repo = MemItemRepository::ephemeral();
        let first = ItemEntity::print("first", "author", "genre", 2001);
        let second = ItemEntity::print("second", "author", "genre", 2002);
        let _ = repo.create(&first).await.expect("should create item");
        let _ = repo.create(&second).await.expect("should create item");

        let all = repo.find_all().await.expect("should list items");
        assert_eq!(vec![first, second], all);
    }

    #[tokio::test]
    async fn test_should_update_in_place() {
        let repo = MemItemRepository::ephemeral();
        let first = ItemEntity::print("first", "author", "genre", 2001);
        let mut second = ItemEntity::print("second", "author", "genre", 2002);
        let _ = repo.create(&first).await.expect("should create item");
        let _ = repo.create(&second).await.expect("should create item");

        assert!(second.borrow());
        let _ = repo.update(&second).await.expect("should update item");

        let all = repo.find_all().await.expect("should list items");
        assert_eq!(vec![first, second], all);
    }

    #[tokio::test]
    async fn test_should_fail_update_for_unknown_item() {
        let repo = MemItemRepository::ephemeral();
        let item = ItemEntity::print("first", "author", "genre", 2001);
        assert!(repo.update(&item).await.is_err());
    }

    #[tokio::test]
    async fn test_should_delete_single_item() {
        let repo = MemItemRepository::ephemeral();
        let first = ItemEntity::print("same title", "author", "genre", 2001);
        let second = ItemEntity::print("same title", "author", "genre", 2002);
        let _ = repo.create(&first).await.expect("should create item");
        let _ = repo.create(&second).await.expect("should create item");

        let _ = repo.delete(first.item_id.as_str()).await.expect("should delete item");

        let all = repo.find_all().await.expect("should list items");
        assert_eq!(vec![second], all);
    }

    #[tokio::test]
    async fn test_should_find_by_keyword() {
        let repo = MemItemRepository::ephemeral();
        let faith = ItemEntity::print("The Power of Faith", "John Maxwell", "Spiritual", 2019);
        let ai = ItemEntity::electronic("AI for Beginners", "Sam Tech", "Technology", 2023, 2.5);
        let _ = repo.create(&faith).await.expect("should create item");
        let _ = repo.create(&ai).await.expect("should create item");

        let matched = repo.find_by_keyword("beginners").await.expect("should search items");
        assert_eq!(vec![ai.clone()], matched);

        // "faith" contains "ai", so both titles match this keyword
        let both = repo.find_by_keyword("ai").await.expect("should search items");
        assert_eq!(vec![faith, ai], both);

        let unmatched = repo.find_by_keyword("zz").await.expect("should search items");
        assert!(unmatched.is_empty());
    }
}
