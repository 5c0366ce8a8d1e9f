use async_trait::async_trait;
use crate::catalog::domain::CatalogService;
use crate::core::domain::{Configuration, Identifiable};
use crate::core::events::DomainEvent;
use crate::core::library::{LibraryError, LibraryResult};
use crate::gateway::events::EventPublisher;
use crate::items::domain::model::{ItemEntity, ItemKind};
use crate::items::dto::ItemDto;
use crate::items::repository::ItemRepository;

pub(crate) struct CatalogServiceImpl {
    item_repository: Box<dyn ItemRepository>,
    events_publisher: Box<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(_config: &Configuration, item_repository: Box<dyn ItemRepository>,
                      events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            item_repository,
            events_publisher,
        }
    }

    async fn find_first(&self, keyword: &str) -> LibraryResult<ItemEntity> {
        let matched = self.item_repository.find_by_keyword(keyword).await?;
        let mut iter = matched.into_iter();
        if let Some(first) = iter.next() {
            Ok(first)
        } else {
            Err(LibraryError::not_found(format!("no item matching {} found",
                                                keyword).as_str()))
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_item(&self, item: &ItemDto) -> LibraryResult<ItemDto> {
        let _ = self.item_repository.create(&ItemEntity::from(item)).await.map(|_| ())?;
        let _ = self.events_publisher.publish(&DomainEvent::added(
            "items", item.item_id.as_str(), item)?).await?;
        Ok(item.clone())
    }

    async fn list_items(&self) -> LibraryResult<Vec<ItemDto>> {
        let res = self.item_repository.find_all().await?;
        Ok(res.iter().map(ItemDto::from).collect())
    }

    async fn search_items(&self, keyword: &str) -> LibraryResult<Vec<ItemDto>> {
        let res = self.item_repository.find_by_keyword(keyword).await?;
        if res.is_empty() {
            return Err(LibraryError::not_found(format!("no item matching {} found",
                                                       keyword).as_str()));
        }
        Ok(res.iter().map(ItemDto::from).collect())
    }

    async fn delete_item(&self, keyword: &str) -> LibraryResult<ItemDto> {
        let first = self.find_first(keyword).await?;
        let _ = self.item_repository.delete(first.id().as_str()).await.map(|_| ())?;
        let item = ItemDto::from(&first);
        let _ = self.events_publisher.publish(&DomainEvent::deleted(
            "items", item.item_id.as_str(), &item)?).await?;
        Ok(item)
    }

    async fn borrow_item(&self, keyword: &str) -> LibraryResult<ItemDto> {
        let mut first = self.find_first(keyword).await?;
        if !first.borrow() {
            return Err(LibraryError::invalid_state(format!("item {} is already borrowed",
                                                           first.id()).as_str()));
        }
        let _ = self.item_repository.update(&first).await.map(|_| ())?;
        let item = ItemDto::from(&first);
        let _ = self.events_publisher.publish(&DomainEvent::updated(
            "items", item.item_id.as_str(), &item)?).await?;
        Ok(item)
    }

    async fn return_item(&self, keyword: &str) -> LibraryResult<ItemDto> {
        let mut first = self.find_first(keyword).await?;
        if !first.return_item() {
            return Err(LibraryError::invalid_state(format!("item {} is not borrowed",
                                                           first.id()).as_str()));
        }
        let _ = self.item_repository.update(&first).await.map(|_| ())?;
        let item = ItemDto::from(&first);
        let _ = self.events_publisher.publish(&DomainEvent::updated(
            "items", item.item_id.as_str(), &item)?).await?;
        Ok(item)
    }
}

impl From<&ItemEntity> for ItemDto {
    fn from(other: &ItemEntity) -> Self {
        Self {
            item_id: other.item_id.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            genre: other.genre.to_string(),
            publication_year: other.publication_year,
            file_size_mb: match other.kind {
                ItemKind::Print => None,
                ItemKind::Electronic { file_size_mb } => Some(file_size_mb),
            },
            status: other.status,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}

impl From<&ItemDto> for ItemEntity {
    fn from(other: &ItemDto) -> Self {
        Self {
            item_id: other.item_id.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            genre: other.genre.to_string(),
            publication_year: other.publication_year,
            kind: match other.file_size_mb {
                None => ItemKind::Print,
                Some(file_size_mb) => ItemKind::Electronic { file_size_mb },
            },
            status: other.status,
            created_at: other.created_at,
            updated_at: other.updated_at,
        }
    }
}
