use chrono::NaiveDateTime;
use uuid::Uuid;
use serde::{Deserialize, Serialize};
use crate::core::domain::Identifiable;
use crate::core::library::ItemStatus;
use crate::items::domain::Item;
use crate::utils::date;
use crate::utils::date::serializer;

// ItemKind distinguishes the print and electronic variants of a holding
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) enum ItemKind {
    Print,
    Electronic {
        file_size_mb: f64,
    },
}

// ItemEntity abstracts a single holding in the catalog. Duplicate titles are
// permitted, so every copy carries its own identifier. All fields except
// status are fixed at construction; status only changes through borrow and
// return_item.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub(crate) struct ItemEntity {
    pub item_id: String,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub publication_year: i32,
    pub kind: ItemKind,
    pub status: ItemStatus,
    #[serde(with = "serializer")]
    pub created_at: NaiveDateTime,
    #[serde(with = "serializer")]
    pub updated_at: NaiveDateTime,
}

impl ItemEntity {
    pub fn print(title: &str, author: &str, genre: &str, publication_year: i32) -> Self {
        Self::build(title, author, genre, publication_year, ItemKind::Print)
    }

    pub fn electronic(title: &str, author: &str, genre: &str, publication_year: i32,
                      file_size_mb: f64) -> Self {
        Self::build(title, author, genre, publication_year,
                    ItemKind::Electronic { file_size_mb })
    }

    fn build(title: &str, author: &str, genre: &str, publication_year: i32,
             kind: ItemKind) -> Self {
        Self {
            item_id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            author: author.to_string(),
            genre: genre.to_string(),
            publication_year,
            kind,
            status: ItemStatus::Available,
            created_at: date::now(),
            updated_at: date::now(),
        }
    }

    // flips Available to Borrowed; a no-op reporting false when already borrowed
    pub fn borrow(&mut self) -> bool {
        if self.status == ItemStatus::Available {
            self.status = ItemStatus::Borrowed;
            self.updated_at = date::now();
            true
        } else {
            false
        }
    }

    // flips Borrowed back to Available; a no-op reporting false when not borrowed
    pub fn return_item(&mut self) -> bool {
        if self.status == ItemStatus::Borrowed {
            self.status = ItemStatus::Available;
            self.updated_at = date::now();
            true
        } else {
            false
        }
    }
}

impl Identifiable for ItemEntity {
    fn id(&self) -> String {
        self.item_id.to_string()
    }
}

impl Item for ItemEntity {
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
        match self.kind {
            ItemKind::Print => None,
            ItemKind::Electronic { file_size_mb } => Some(file_size_mb),
        }
    }
}
