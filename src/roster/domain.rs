pub mod service;

use async_trait::async_trait;
use crate::core::library::LibraryResult;
use crate::members::dto::MemberDto;

#[async_trait]
pub(crate) trait RosterService: Sync + Send {
    // assigns the next sequential member id and appends; names need not be unique
    async fn register_member(&self, name: &str) -> LibraryResult<MemberDto>;

    // every member in registration order
    async fn list_members(&self) -> LibraryResult<Vec<MemberDto>>;
}
