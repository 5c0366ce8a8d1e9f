use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::items::dto::ItemDto;

pub(crate) struct DeleteItemCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl DeleteItemCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct DeleteItemCommandRequest {
    pub(crate) keyword: String,
}

impl DeleteItemCommandRequest {
    pub fn new(keyword: &str) -> Self {
        Self {
            keyword: keyword.to_string(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct DeleteItemCommandResponse {
    pub item: ItemDto,
}

impl DeleteItemCommandResponse {
    pub fn new(item: ItemDto) -> Self {
        Self {
            item,
        }
    }
}

#[async_trait]
impl Command<DeleteItemCommandRequest, DeleteItemCommandResponse> for DeleteItemCommand {
    async fn execute(&self, req: DeleteItemCommandRequest) -> Result<DeleteItemCommandResponse, CommandError> {
        self.catalog_service.delete_item(req.keyword.as_str()).await
            .map_err(CommandError::from).map(DeleteItemCommandResponse::new)
    }
}
