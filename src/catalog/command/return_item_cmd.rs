use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::items::dto::ItemDto;

pub(crate) struct ReturnItemCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl ReturnItemCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReturnItemCommandRequest {
    pub(crate) keyword: String,
}

impl ReturnItemCommandRequest {
    pub fn new(keyword: &str) -> Self {
        Self {
            keyword: keyword.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ReturnItemCommandResponse {
    pub item: ItemDto,
}

impl ReturnItemCommandResponse {
    pub fn new(item: ItemDto) -> Self {
        Self {
            item,
        }
    }
}

#[async_trait]
impl Command<ReturnItemCommandRequest, ReturnItemCommandResponse> for ReturnItemCommand {
    async fn execute(&self, req: ReturnItemCommandRequest) -> Result<ReturnItemCommandResponse, CommandError> {
        self.catalog_service.return_item(req.keyword.as_str()).await
            .map_err(CommandError::from).map(ReturnItemCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;
    use crate::catalog::command::add_item_cmd::{AddItemCommand, AddItemCommandRequest};
    use crate::catalog::command::borrow_item_cmd::{BorrowItemCommand, BorrowItemCommandRequest};
    use crate::catalog::command::return_item_cmd::{ReturnItemCommand, ReturnItemCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::library::ItemStatus;
    use crate::core::repository::RepositoryStore;

    #[tokio::test]
    async fn test_should_run_return_item_after_borrow() {
        let config = Configuration::new("test");
        let title = format!("returned book {}", Uuid::new_v4());

        let svc = factory::create_catalog_service(&config, RepositoryStore::Memory).await;
        let _ = AddItemCommand::new(svc)
            .execute(AddItemCommandRequest::print(title.as_str(), "author", "genre", 2019))
            .await.expect("should add item");

        let svc = factory::create_catalog_service(&config, RepositoryStore::Memory).await;
        let early = ReturnItemCommand::new(svc).execute(ReturnItemCommandRequest::new(title.as_str())).await;
        assert!(matches!(early, Err(CommandError::InvalidState { message: _ })));

        let svc = factory::create_catalog_service(&config, RepositoryStore::Memory).await;
        let _ = BorrowItemCommand::new(svc).execute(BorrowItemCommandRequest::new(title.as_str()))
            .await.expect("should borrow item");

        let svc = factory::create_catalog_service(&config, RepositoryStore::Memory).await;
        let res = ReturnItemCommand::new(svc).execute(ReturnItemCommandRequest::new(title.as_str()))
            .await.expect("should return item");
        assert_eq!(ItemStatus::Available, res.item.status);
    }

    #[tokio::test]
    async fn test_should_fail_return_without_matches() {
        let config = Configuration::new("test");
        let svc = factory::create_catalog_service(&config, RepositoryStore::Memory).await;

        let res = ReturnItemCommand::new(svc)
            .execute(ReturnItemCommandRequest::new(format!("missing {}", Uuid::new_v4()).as_str()))
            .await;
        assert!(matches!(res, Err(CommandError::NotFound { message: _ })));
    }
}
