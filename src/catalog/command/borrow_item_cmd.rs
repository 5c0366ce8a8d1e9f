use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::items::dto::ItemDto;

pub(crate) struct BorrowItemCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl BorrowItemCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct BorrowItemCommandRequest {
    pub(crate) keyword: String,
}

impl BorrowItemCommandRequest {
    pub fn new(keyword: &str) -> Self {
        Self {
            keyword: keyword.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct BorrowItemCommandResponse {
    pub item: ItemDto,
}

impl BorrowItemCommandResponse {
    pub fn new(item: ItemDto) -> Self {
        Self {
            item,
        }
    }
}

#[async_trait]
impl Command<BorrowItemCommandRequest, BorrowItemCommandResponse> for BorrowItemCommand {
    async fn execute(&self, req: BorrowItemCommandRequest) -> Result<BorrowItemCommandResponse, CommandError> {
        self.catalog_service.borrow_item(req.keyword.as_str()).await
            .map_err(CommandError::from).map(BorrowItemCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;
    use crate::catalog::command::add_item_cmd::{AddItemCommand, AddItemCommandRequest};
    use crate::catalog::command::borrow_item_cmd::{BorrowItemCommand, BorrowItemCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::library::ItemStatus;
    use crate::core::repository::RepositoryStore;

    #[tokio::test]
    async fn test_should_run_borrow_item_once() {
        let config = Configuration::new("test");
        let title = format!("borrowed book {}", Uuid::new_v4());

        let svc = factory::create_catalog_service(&config, RepositoryStore::Memory).await;
        let _ = AddItemCommand::new(svc)
            .execute(AddItemCommandRequest::print(title.as_str(), "author", "genre", 2019))
            .await.expect("should add item");

        let svc = factory::create_catalog_service(&config, RepositoryStore::Memory).await;
        let res = BorrowItemCommand::new(svc).execute(BorrowItemCommandRequest::new(title.as_str()))
            .await.expect("should borrow item");
        assert_eq!(ItemStatus::Borrowed, res.item.status);

        let svc = factory::create_catalog_service(&config, RepositoryStore::Memory).await;
        let again = BorrowItemCommand::new(svc).execute(BorrowItemCommandRequest::new(title.as_str())).await;
        assert!(matches!(again, Err(CommandError::InvalidState { message: _ })));
    }

    #[tokio::test]
    async fn test_should_fail_borrow_without_matches() {
        let config = Configuration::new("test");
        let svc = factory::create_catalog_service(&config, RepositoryStore::Memory).await;

        let res = BorrowItemCommand::new(svc)
            .execute(BorrowItemCommandRequest::new(format!("missing {}", Uuid::new_v4()).as_str()))
            .await;
        assert!(matches!(res, Err(CommandError::NotFound { message: _ })));
    }
}
