use std::sync::{Arc, Mutex, MutexGuard};
use std::sync::atomic::{AtomicI64, Ordering};
use async_trait::async_trait;
use lazy_static::lazy_static;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;
use crate::members::domain::model::MemberEntity;
use crate::members::repository::MemberRepository;

lazy_static! {
    static ref SHARED_MEMBERS: Arc<Mutex<Vec<MemberEntity>>> = Arc::new(Mutex::new(vec![]));
    static ref SHARED_NEXT_ID: Arc<AtomicI64> = Arc::new(AtomicI64::new(1));
}

// MemMemberRepository keeps members in an insertion-ordered in-memory
// sequence and owns the auto-increment counter next to it.
#[derive(Debug)]
pub struct MemMemberRepository {
    members: Arc<Mutex<Vec<MemberEntity>>>,
    next_id: Arc<AtomicI64>,
}

impl MemMemberRepository {
    pub(crate) fn shared() -> Self {
        Self {
            members: SHARED_MEMBERS.clone(),
            next_id: SHARED_NEXT_ID.clone(),
        }
    }

    pub(crate) fn ephemeral() -> Self {
        Self {
            members: Arc::new(Mutex::new(vec![])),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }

    fn lock(&self) -> LibraryResult<MutexGuard<Vec<MemberEntity>>> {
        self.members.lock().map_err(|err| LibraryError::runtime(
            format!("members store poisoned {:?}", err).as_str(), None))
    }
}

#[async_trait]
impl Repository<MemberEntity> for MemMemberRepository {
    async fn create(&self, entity: &MemberEntity) -> LibraryResult<usize> {
        let mut members = self.lock()?;
        members.push(entity.clone());
        Ok(1)
    }

    async fn update(&self, entity: &MemberEntity) -> LibraryResult<usize> {
        let mut members = self.lock()?;
        match members.iter().position(|member| member.member_id == entity.member_id) {
            Some(ndx) => {
                members[ndx] = entity.clone();
                Ok(1)
            }
            None => Err(LibraryError::not_found(
                format!("member with id {} not found", entity.member_id).as_str())),
        }
    }

    async fn get(&self, id: &str) -> LibraryResult<MemberEntity> {
        let members = self.lock()?;
        members.iter().find(|member| member.id() == id).cloned()
            .ok_or_else(|| LibraryError::not_found(
                format!("member with id {} not found", id).as_str()))
    }

    async fn delete(&self, id: &str) -> LibraryResult<usize> {
        let mut members = self.lock()?;
        match members.iter().position(|member| member.id() == id) {
            Some(ndx) => {
                members.remove(ndx);
                Ok(1)
            }
            None => Err(LibraryError::not_found(
                format!("member with id {} not found", id).as_str())),
        }
    }

    async fn find_all(&self) -> LibraryResult<Vec<MemberEntity>> {
        let members = self.lock()?;
        Ok(members.clone())
    }
}

#[async_trait]
impl MemberRepository for MemMemberRepository {
    async fn next_member_id(&self) -> LibraryResult<i64> {
        Ok(self.next_id.fetch_add(1, Ordering::SeqCst))
    }
}
