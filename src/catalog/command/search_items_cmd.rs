use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::items::dto::ItemDto;

pub(crate) struct SearchItemsCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl SearchItemsCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchItemsCommandRequest {
    pub(crate) keyword: String,
}

impl SearchItemsCommandRequest {
    pub fn new(keyword: &str) -> Self {
        Self {
            keyword: keyword.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct SearchItemsCommandResponse {
    pub items: Vec<ItemDto>,
}

impl SearchItemsCommandResponse {
    pub fn new(items: Vec<ItemDto>) -> Self {
        Self {
            items,
        }
    }
}

#[async_trait]
impl Command<SearchItemsCommandRequest, SearchItemsCommandResponse> for SearchItemsCommand {
    async fn execute(&self, req: SearchItemsCommandRequest) -> Result<SearchItemsCommandResponse, CommandError> {
        self.catalog_service.search_items(req.keyword.as_str()).await
            .map_err(CommandError::from).map(SearchItemsCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;
    use crate::catalog::command::add_item_cmd::{AddItemCommand, AddItemCommandRequest};
    use crate::catalog::command::search_items_cmd::{SearchItemsCommand, SearchItemsCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::{Command, CommandError};
    use crate::core::domain::Configuration;
    use crate::core::repository::RepositoryStore;

    #[tokio::test]
    async fn test_should_run_search_items() {
        let config = Configuration::new("test");
        let title = format!("searched book {}", Uuid::new_v4());

        let svc = factory::create_catalog_service(&config, RepositoryStore::Memory).await;
        let _ = AddItemCommand::new(svc)
            .execute(AddItemCommandRequest::electronic(title.as_str(), "author", "genre", 2023, 2.5))
            .await.expect("should add item");

        let svc = factory::create_catalog_service(&config, RepositoryStore::Memory).await;
        let res = SearchItemsCommand::new(svc)
            .execute(SearchItemsCommandRequest::new(title.to_uppercase().as_str()))
            .await.expect("should search items");
        assert_eq!(1, res.items.len());
        assert_eq!(title, res.items[0].title);
    }

    #[tokio::test]
    async fn test_should_fail_search_without_matches() {
        let config = Configuration::new("test");
        let svc = factory::create_catalog_service(&config, RepositoryStore::Memory).await;

        let res = SearchItemsCommand::new(svc)
            .execute(SearchItemsCommandRequest::new(format!("missing {}", Uuid::new_v4()).as_str()))
            .await;
        assert!(matches!(res, Err(CommandError::NotFound { message: _ })));
    }
}
