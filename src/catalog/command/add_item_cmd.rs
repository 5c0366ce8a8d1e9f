use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};
use crate::items::dto::ItemDto;

pub(crate) struct AddItemCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl AddItemCommand {
    pub(crate) fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddItemCommandRequest {
    pub(crate) title: String,
    pub(crate) author: String,
    pub(crate) genre: String,
    pub(crate) publication_year: i32,
    // present only for electronic items
    pub(crate) file_size_mb: Option<f64>,
}

impl AddItemCommandRequest {
    pub fn print(title: &str, author: &str, genre: &str, publication_year: i32) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            genre: genre.to_string(),
            publication_year,
            file_size_mb: None,
        }
    }

    pub fn electronic(title: &str, author: &str, genre: &str, publication_year: i32,
                      file_size_mb: f64) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            genre: genre.to_string(),
            publication_year,
            file_size_mb: Some(file_size_mb),
        }
    }

    pub fn build_item(&self) -> ItemDto {
        match self.file_size_mb {
            Some(size) => ItemDto::electronic(self.title.as_str(), self.author.as_str(),
                                              self.genre.as_str(), self.publication_year, size),
            None => ItemDto::print(self.title.as_str(), self.author.as_str(),
                                   self.genre.as_str(), self.publication_year),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct AddItemCommandResponse {
    pub item: ItemDto,
}

impl AddItemCommandResponse {
    pub fn new(item: ItemDto) -> Self {
        Self {
            item,
        }
    }
}

#[async_trait]
impl Command<AddItemCommandRequest, AddItemCommandResponse> for AddItemCommand {
    async fn execute(&self, req: AddItemCommandRequest) -> Result<AddItemCommandResponse, CommandError> {
        let item = req.build_item();
        self.catalog_service.add_item(&item).await.map_err(CommandError::from).map(|_| AddItemCommandResponse::new(item))
    }
}
