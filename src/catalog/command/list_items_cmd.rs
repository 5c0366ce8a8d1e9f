use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::items::dto::ItemDto;

pub(crate) struct ListItemsCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl ListItemsCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ListItemsCommandRequest {
}

impl ListItemsCommandRequest {
    pub fn new() -> Self {
        Self {
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct ListItemsCommandResponse {
    pub items: Vec<ItemDto>,
}

impl ListItemsCommandResponse {
    pub fn new(items: Vec<ItemDto>) -> Self {
        Self {
            items,
        }
    }
}

#[async_trait]
impl Command<ListItemsCommandRequest, ListItemsCommandResponse> for ListItemsCommand {
    async fn execute(&self, _req: ListItemsCommandRequest) -> Result<ListItemsCommandResponse, CommandError> {
        self.catalog_service.list_items().await.map_err(CommandError::from).map(ListItemsCommandResponse::new)
    }
}
