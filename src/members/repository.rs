pub mod mem_member_repository;

use async_trait::async_trait;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;
use crate::members::domain::model::MemberEntity;

#[async_trait]
pub(crate) trait MemberRepository: Repository<MemberEntity> {
    // hands out the next sequential member id, starting at 1; ids are never
    // reused even though no delete operation exists for members
    async fn next_member_id(&self) -> LibraryResult<i64>;
}
