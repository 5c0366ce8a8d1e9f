use crate::core::repository::RepositoryStore;
use crate::members::repository::MemberRepository;
use crate::members::repository::mem_member_repository::MemMemberRepository;

pub(crate) async fn create_member_repository(store: RepositoryStore) -> Box<dyn MemberRepository> {
    match store {
        RepositoryStore::Memory => {
            Box::new(MemMemberRepository::shared())
        }
        RepositoryStore::Ephemeral => {
            Box::new(MemMemberRepository::ephemeral())
        }
    }
}
