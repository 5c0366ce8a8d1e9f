pub mod service;

use async_trait::async_trait;
use crate::core::library::LibraryResult;
use crate::items::dto::ItemDto;

#[async_trait]
pub(crate) trait CatalogService: Sync + Send {
    // appends to the end of the catalog; no dedup and no field validation
    async fn add_item(&self, item: &ItemDto) -> LibraryResult<ItemDto>;

    // every item in insertion order; an empty catalog is an empty Ok
    async fn list_items(&self) -> LibraryResult<Vec<ItemDto>>;

    // keyword matches in insertion order; zero matches is a NotFound error,
    // distinct from an empty catalog listing
    async fn search_items(&self, keyword: &str) -> LibraryResult<Vec<ItemDto>>;

    // removes the first keyword match only, even when several titles match
    async fn delete_item(&self, keyword: &str) -> LibraryResult<ItemDto>;

    // borrows the first keyword match; InvalidState when already borrowed
    async fn borrow_item(&self, keyword: &str) -> LibraryResult<ItemDto>;

    // returns the first keyword match; InvalidState when not borrowed
    async fn return_item(&self, keyword: &str) -> LibraryResult<ItemDto>;
}
