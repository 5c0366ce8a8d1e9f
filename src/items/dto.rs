use chrono::NaiveDateTime;
use uuid::Uuid;
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::library::ItemStatus;
use crate::items::domain::Item;
use crate::utils::date;
use crate::utils::date::serializer;

// ItemDto is a data transfer object for the Catalog service; the electronic
// variant is flagged by a present file size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct ItemDto {
    pub item_id: String,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub publication_year: i32,
    pub file_size_mb: Option<f64>,
    pub status: ItemStatus,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl ItemDto {
    pub fn print(title: &str, author: &str, genre: &str, publication_year: i32) -> ItemDto {
        Self::build(title, author, genre, publication_year, None)
    }

    pub fn electronic(title: &str, author: &str, genre: &str, publication_year: i32,
                      file_size_mb: f64) -> ItemDto {
        Self::build(title, author, genre, publication_year, Some(file_size_mb))
    }

    fn build(title: &str, author: &str, genre: &str, publication_year: i32,
             file_size_mb: Option<f64>) -> ItemDto {
        ItemDto {
            item_id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            author: author.to_string(),
            genre: genre.to_string(),
            publication_year,
            file_size_mb,
            status: ItemStatus::Available,
            created_at: date::now(),
            updated_at: date::now(),
        }
    }
}

impl Identifiable for ItemDto {
    fn id(&self) -> String {
        self.item_id.to_string()
    }
}

impl Item for ItemDto {
    fn title(&self) -> String {
        self.title.to_string()
    }

    fn author(&self) -> String {
        self.author.to_string()
    }

    fn genre(&self) -> String {
        self.genre.to_string()
    }

    fn publication_year(&self) -> i32 {
        self.publication_year
    }

    fn status(&self) -> ItemStatus {
        self.status
    }

    fn file_size_mb(&self) -> Option<f64> {
        self.file_size_mb
    }
}
